use std::path::Path;
use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use crate::modules::talks::adapters::outbound::catalog_in_memory::InMemoryTalkCatalog;
use crate::modules::talks::core::catalog;
use crate::modules::talks::core::model::Talk;
use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::talks::TalkBuilder;

fn two_talk_catalog() -> Vec<Talk> {
    vec![
        TalkBuilder::new()
            .id("1")
            .title("Intro to Rust")
            .categories(vec!["Systems".into()])
            .speaker("Ada", "Lovelace")
            .build(),
        TalkBuilder::new()
            .id("2")
            .title("Intro to Go")
            .categories(vec!["Systems".into(), "Web".into()])
            .speaker("Ada", "Byron")
            .build(),
    ]
}

fn app(talks: Vec<Talk>) -> Router {
    let state = AppState {
        talks: Arc::new(InMemoryTalkCatalog::new(talks)),
    };
    router(state, Path::new("static"))
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn serves_the_api_directory_with_version() {
    let (status, json) = get_json(app(two_talk_catalog()), "/api/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Welcome to the Talks and Speakers API!");
    assert_eq!(json["resources"]["all_talks"], "/api/talks");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn lists_every_talk_in_load_order() {
    let (status, json) = get_json(app(two_talk_catalog()), "/api/talks").await;
    assert_eq!(status, StatusCode::OK);
    let talks = json.as_array().unwrap();
    assert_eq!(talks.len(), 2);
    assert_eq!(talks[0]["id"], "1");
    assert_eq!(talks[1]["id"], "2");
    assert_eq!(talks[0]["speakers"][0]["firstName"], "Ada");
}

#[tokio::test]
async fn filters_by_category_case_insensitively() {
    let (status, json) = get_json(app(two_talk_catalog()), "/api/talks/category/systems").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json.as_array().unwrap().len(), 2);

    let (status, json) = get_json(app(two_talk_catalog()), "/api/talks/category/web").await;
    assert_eq!(status, StatusCode::OK);
    let talks = json.as_array().unwrap();
    assert_eq!(talks.len(), 1);
    assert_eq!(talks[0]["id"], "2");
}

#[tokio::test]
async fn finds_talks_by_shared_speaker_first_name() {
    let (status, json) = get_json(app(two_talk_catalog()), "/api/talks/speaker?name=ada").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn searches_titles_by_substring() {
    let (status, json) = get_json(app(two_talk_catalog()), "/api/talks/search?title=go").await;
    assert_eq!(status, StatusCode::OK);
    let talks = json.as_array().unwrap();
    assert_eq!(talks.len(), 1);
    assert_eq!(talks[0]["id"], "2");
}

#[tokio::test]
async fn signals_not_found_for_an_unknown_id() {
    let (status, json) = get_json(app(two_talk_catalog()), "/api/talks/id/3").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "Talk with ID '3' not found.");
}

#[tokio::test]
async fn lists_aggregates_sorted() {
    let (status, json) = get_json(app(two_talk_catalog()), "/api/categories").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, serde_json::json!(["Systems", "Web"]));

    let (status, json) = get_json(app(two_talk_catalog()), "/api/speakers").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        serde_json::json!([
            {"firstName": "Ada", "lastName": "Byron"},
            {"firstName": "Ada", "lastName": "Lovelace"},
        ])
    );
}

#[tokio::test]
async fn rejects_missing_query_parameters() {
    let (status, _) = get_json(app(two_talk_catalog()), "/api/talks/speaker").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = get_json(app(two_talk_catalog()), "/api/talks/search?title=").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn keeps_serving_empty_results_after_a_failed_load() {
    // A missing document degrades to an empty catalog instead of aborting.
    let talks = catalog::load(Path::new("data/does-not-exist.json"));
    assert!(talks.is_empty());

    let (status, json) = get_json(app(talks.clone()), "/api/talks").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, serde_json::json!([]));

    let (status, _) = get_json(app(talks.clone()), "/api/talks/category/Systems").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, json) = get_json(app(talks), "/api/speakers").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, serde_json::json!([]));
}

#[tokio::test]
async fn serves_the_static_index_page() {
    let response = app(two_talk_catalog())
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("<!doctype html>") || html.contains("<!DOCTYPE html>"));
}
