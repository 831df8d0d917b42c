use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::talks::queries_port::QueryError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct TitleQueryParams {
    pub title: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<TitleQueryParams>,
) -> impl IntoResponse {
    let title = params.title.unwrap_or_default();
    match state.talks.search_by_title(&title).await {
        Ok(talks) => Json(talks).into_response(),
        Err(err) => {
            let status = match err {
                QueryError::MissingTitleQuery => StatusCode::BAD_REQUEST,
                _ => StatusCode::NOT_FOUND,
            };
            (
                status,
                Json(serde_json::json!({ "message": err.to_string() })),
            )
                .into_response()
        }
    }
}
