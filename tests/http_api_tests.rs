//! End-to-end tests for the HTTP API.
//!
//! Each test builds a fresh repository and drives the full router with
//! `tower::ServiceExt::oneshot`, so requests pass through the real
//! middleware stack and error mapping.

#![cfg(feature = "http-server")]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use tvshows_rust::db::repository::ShowRepository;
use tvshows_rust::db::LocalRepository;
use tvshows_rust::http::{create_router, AppState};

fn test_state() -> AppState {
    AppState::new(Arc::new(LocalRepository::new()) as Arc<dyn ShowRepository>)
}

fn app(state: &AppState) -> Router {
    create_router(state.clone(), "public")
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn request_with_json(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

fn request_without_body(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

#[tokio::test]
async fn test_root_greeting() {
    let state = test_state();
    let response = app(&state).oneshot(get("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response).await, b"Hello, World!");
}

#[tokio::test]
async fn test_list_loads_eight_shows() {
    let state = test_state();
    let response = app(&state).oneshot(get("/tv-shows")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let shows = body_json(response).await;
    assert_eq!(shows.as_array().unwrap().len(), 8);
}

#[tokio::test]
async fn test_get_show_by_id() {
    let state = test_state();
    let response = app(&state).oneshot(get("/tv-shows/1")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({
            "id": "1",
            "title": "Black Mirror",
            "poster": "/img/black-mirror.jpg",
            "release": "2011-12-04T00:00:00Z",
            "genres": ["drama", "sci-fi", "thriller"]
        })
    );
}

#[tokio::test]
async fn test_get_unknown_show_is_404_with_empty_body() {
    let state = test_state();
    let response = app(&state).oneshot(get("/tv-shows/999")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_bytes(response).await.is_empty());
}

#[tokio::test]
async fn test_filter_shows_by_genres() {
    let state = test_state();
    let response = app(&state)
        .oneshot(get("/tv-shows?genres=sci-fi,horror"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let shows = body_json(response).await;
    let titles: Vec<&str> = shows
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["title"].as_str().unwrap())
        .collect();
    assert_eq!(
        titles,
        vec![
            "Black Mirror",
            "Stranger Things",
            "The Walking Dead",
            "Westworld"
        ]
    );
}

#[tokio::test]
async fn test_filter_with_unknown_genre_returns_empty_array() {
    let state = test_state();
    let response = app(&state)
        .oneshot(get("/tv-shows?genres=telenovela"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn test_create_show() {
    let state = test_state();
    let payload = json!({
        "title": "Silicon Valley",
        "release": "2014-04-06T00:00:00Z",
        "genres": ["comedy"]
    });

    let response = app(&state)
        .oneshot(request_with_json("POST", "/tv-shows", &payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let created = body_json(response).await;
    assert!(!created["id"].as_str().unwrap().is_empty());
    assert_eq!(created["title"], json!("Silicon Valley"));
    assert_eq!(created["release"], json!("2014-04-06T00:00:00Z"));
    assert_eq!(created["genres"], json!(["comedy"]));

    // appended to the end of the collection
    let listed = body_json(app(&state).oneshot(get("/tv-shows")).await.unwrap()).await;
    let listed = listed.as_array().unwrap();
    assert_eq!(listed.len(), 9);
    assert_eq!(listed[8], created);
}

#[tokio::test]
async fn test_create_with_empty_body_is_400() {
    let state = test_state();
    let response = app(&state)
        .oneshot(request_with_json("POST", "/tv-shows", &json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_bytes(response).await.is_empty());

    let listed = body_json(app(&state).oneshot(get("/tv-shows")).await.unwrap()).await;
    assert_eq!(listed.as_array().unwrap().len(), 8);
}

#[tokio::test]
async fn test_update_show_round_trips_extra_fields() {
    let state = test_state();
    let abstract_text =
        "An anthology series exploring a twisted, high-tech world where humanity's \
         greatest innovations and darkest instincts collide.";
    let payload = json!({
        "id": "1",
        "title": "Black Mirror",
        "poster": "/img/black-mirror.jpg",
        "release": "2011-12-04T00:00:00Z",
        "genres": ["drama", "sci-fi", "thriller"],
        "abstract": abstract_text
    });

    let response = app(&state)
        .oneshot(request_with_json("PUT", "/tv-shows/1", &payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(response).await.is_empty());

    let stored = body_json(app(&state).oneshot(get("/tv-shows/1")).await.unwrap()).await;
    assert_eq!(stored["abstract"], json!(abstract_text));
}

#[tokio::test]
async fn test_update_unknown_show_is_404() {
    let state = test_state();
    let response = app(&state)
        .oneshot(request_with_json("PUT", "/tv-shows/999", &json!({"title": "x"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_with_empty_body_is_400() {
    let state = test_state();
    let response = app(&state)
        .oneshot(request_with_json("PUT", "/tv-shows/1", &json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // record unchanged
    let stored = body_json(app(&state).oneshot(get("/tv-shows/1")).await.unwrap()).await;
    assert_eq!(stored["title"], json!("Black Mirror"));
}

#[tokio::test]
async fn test_delete_show() {
    let state = test_state();
    let response = app(&state)
        .oneshot(request_without_body("DELETE", "/tv-shows/1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let listed = body_json(app(&state).oneshot(get("/tv-shows")).await.unwrap()).await;
    assert_eq!(listed.as_array().unwrap().len(), 7);

    let gone = app(&state).oneshot(get("/tv-shows/1")).await.unwrap();
    assert_eq!(gone.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_unknown_show_is_404() {
    let state = test_state();
    let response = app(&state)
        .oneshot(request_without_body("DELETE", "/tv-shows/999"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let listed = body_json(app(&state).oneshot(get("/tv-shows")).await.unwrap()).await;
    assert_eq!(listed.as_array().unwrap().len(), 8);
}

#[tokio::test]
async fn test_seed_endpoint_discards_mutations() {
    let state = test_state();

    let deleted = app(&state)
        .oneshot(request_without_body("DELETE", "/tv-shows/1"))
        .await
        .unwrap();
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

    let seeded = app(&state)
        .oneshot(request_without_body("POST", "/db/seed"))
        .await
        .unwrap();
    assert_eq!(seeded.status(), StatusCode::NO_CONTENT);

    let listed = body_json(app(&state).oneshot(get("/tv-shows")).await.unwrap()).await;
    assert_eq!(listed.as_array().unwrap().len(), 8);
}

#[tokio::test]
async fn test_created_show_is_retrievable_by_its_new_id() {
    let state = test_state();
    let created = body_json(
        app(&state)
            .oneshot(request_with_json(
                "POST",
                "/tv-shows",
                &json!({"title": "Silicon Valley", "genres": ["comedy"]}),
            ))
            .await
            .unwrap(),
    )
    .await;

    let id = created["id"].as_str().unwrap();
    let fetched = body_json(
        app(&state)
            .oneshot(get(&format!("/tv-shows/{}", id)))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(fetched, created);
}
