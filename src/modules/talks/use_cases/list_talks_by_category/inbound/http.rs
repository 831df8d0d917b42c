use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(category_name): Path<String>,
) -> impl IntoResponse {
    match state.talks.list_by_category(&category_name).await {
        Ok(talks) => Json(talks).into_response(),
        Err(err) => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "message": err.to_string() })),
        )
            .into_response(),
    }
}
