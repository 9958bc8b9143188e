//! Health checks, API docs and request logging

mod common;

use std::io;
use std::sync::{Arc, Mutex};

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::{app_with, send, test_config, InMemoryFilms};

#[tokio::test]
async fn test_health_reports_service() {
    let app = app_with(InMemoryFilms::new());

    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "film-api");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_readiness_follows_store() {
    let repo = InMemoryFilms::new();
    let app = app_with(repo.clone());

    let (status, body) = send(&app, Method::GET, "/ready", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ready"], true);
    assert_eq!(body["dependencies"]["database"]["healthy"], true);

    repo.set_offline(true);
    let (status, body) = send(&app, Method::GET, "/ready", None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["ready"], false);
    assert_eq!(body["dependencies"]["database"]["message"], "Connection failed");
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let app = app_with(InMemoryFilms::new());

    let (status, doc) = send(&app, Method::GET, "/api-docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"]["/api/peliculas"]["get"].is_object());
    assert!(doc["paths"]["/api/peliculas"]["post"].is_object());
    assert!(doc["paths"]["/api/peliculas/{id}"]["put"].is_object());
    assert!(doc["paths"]["/api/peliculas/{id}"]["delete"].is_object());
}

#[tokio::test]
async fn test_docs_can_be_disabled() {
    let mut config = test_config();
    config.api.docs_enabled = false;
    let app = film_api::routes::app(film_api::state::AppState::new(config, InMemoryFilms::new()));

    let (status, _) = send(&app, Method::GET, "/api-docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[tokio::test]
async fn test_requests_and_errors_are_logged() {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .json()
        .with_writer(move || writer.clone())
        .with_max_level(tracing::Level::INFO)
        .finish();
    let _default = tracing::subscriber::set_default(subscriber);

    let app = app_with(InMemoryFilms::new());
    let (status, _) = send(
        &app,
        Method::POST,
        "/api/peliculas",
        Some(json!({"title": "Matrix", "description": "Sci-fi", "rental_rate": 4.99})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = send(&app, Method::GET, "/api/peliculas/42", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let output = logs.contents();
    assert!(output.contains("Created film"));
    assert!(output.contains("\"title\":\"Matrix\""));
    assert!(output.contains("API error: Film not found"));
    assert!(output.contains("\"level\":\"WARN\""));
}

#[tokio::test]
async fn test_store_failure_logs_detail() {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();
    let _default = tracing::subscriber::set_default(subscriber);

    let app = app_with(InMemoryFilms::offline());
    let (status, body) = send(&app, Method::GET, "/api/peliculas/1", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "An internal error occurred");

    let output = logs.contents();
    assert!(output.contains("ERROR"));
    assert!(output.contains("does not exist"));
}
