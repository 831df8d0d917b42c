use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(talk_id): Path<String>,
) -> impl IntoResponse {
    match state.talks.get_by_id(&talk_id).await {
        Ok(talk) => Json(talk).into_response(),
        Err(err) => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "message": err.to_string() })),
        )
            .into_response(),
    }
}
