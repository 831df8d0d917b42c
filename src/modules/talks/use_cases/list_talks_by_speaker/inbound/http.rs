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
pub struct SpeakerQueryParams {
    pub name: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<SpeakerQueryParams>,
) -> impl IntoResponse {
    let name = params.name.unwrap_or_default();
    match state.talks.list_by_speaker(&name).await {
        Ok(talks) => Json(talks).into_response(),
        Err(err) => {
            let status = match err {
                QueryError::MissingSpeakerQuery => StatusCode::BAD_REQUEST,
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
