#![allow(dead_code)]
use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, Response},
    Router,
};
use people_backend::{
    config::Config,
    models::person::Person,
    repositories::{InMemoryPersonRepository, PersonRepository},
    routes,
    state::AppState,
};
use serde::de::DeserializeOwned;

pub const BASE_URL: &str = "/api/people";

pub fn test_config() -> Config {
    Config {
        api_docs_enabled: false,
        ..Config::default()
    }
}

pub async fn seeded_repository(people: Vec<Person>) -> Arc<InMemoryPersonRepository> {
    Arc::new(
        InMemoryPersonRepository::with_people(people)
            .await
            .expect("seed people"),
    )
}

pub fn test_app(people: Arc<dyn PersonRepository>) -> Router {
    routes::app(AppState::new(people, test_config()))
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("build GET request")
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .expect("build DELETE request")
}

pub fn post_json(uri: &str, payload: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .expect("build POST request")
}

pub async fn body_bytes(response: Response<Body>) -> axum::body::Bytes {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body")
}

pub async fn body_json<T: DeserializeOwned>(response: Response<Body>) -> T {
    serde_json::from_slice(&body_bytes(response).await).expect("json body")
}
