use std::path::Path;

use axum::{Json, Router, routing::get};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::modules::talks::use_cases::get_talk_by_id::inbound::http as get_talk_by_id_http;
use crate::modules::talks::use_cases::list_categories::inbound::http as list_categories_http;
use crate::modules::talks::use_cases::list_speakers::inbound::http as list_speakers_http;
use crate::modules::talks::use_cases::list_talks::inbound::http as list_talks_http;
use crate::modules::talks::use_cases::list_talks_by_category::inbound::http as list_talks_by_category_http;
use crate::modules::talks::use_cases::list_talks_by_speaker::inbound::http as list_talks_by_speaker_http;
use crate::modules::talks::use_cases::search_talks_by_title::inbound::http as search_talks_by_title_http;
use crate::shell::state::AppState;

pub fn router(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .route("/api/", get(api_root))
        .route("/api/talks", get(list_talks_http::handle))
        .route("/api/talks/id/{talk_id}", get(get_talk_by_id_http::handle))
        .route(
            "/api/talks/category/{category_name}",
            get(list_talks_by_category_http::handle),
        )
        .route("/api/talks/speaker", get(list_talks_by_speaker_http::handle))
        .route("/api/talks/search", get(search_talks_by_title_http::handle))
        .route("/api/categories", get(list_categories_http::handle))
        .route("/api/speakers", get(list_speakers_http::handle))
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn api_root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Welcome to the Talks and Speakers API!",
        "resources": {
            "all_talks": "/api/talks",
            "talk_by_id": "/api/talks/id/{talk_id}",
            "talks_by_category": "/api/talks/category/{category_name}",
            "talks_by_speaker": "/api/talks/speaker?name={speaker_name_query}",
            "search_talks_by_title": "/api/talks/search?title={title_query}",
            "all_categories": "/api/categories",
            "all_speakers": "/api/speakers"
        },
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
