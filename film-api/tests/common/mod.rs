//! Shared fixtures for the router tests

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use film_api::prelude::*;
use film_api::models::NewFilm;
use film_api::repository::RepositoryOperation;

#[derive(Debug, Default)]
struct Store {
    next_id: i32,
    films: BTreeMap<i32, Film>,
}

/// In-memory film store with the same contract as the PostgreSQL one
#[derive(Debug, Clone, Default)]
pub struct InMemoryFilms {
    store: Arc<Mutex<Store>>,
    offline: Arc<AtomicBool>,
    pool_exhausted: Arc<AtomicBool>,
}

impl InMemoryFilms {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that fails every call the way a broken database would
    pub fn offline() -> Self {
        let repo = Self::default();
        repo.set_offline(true);
        repo
    }

    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// Every call times out waiting for a pooled connection
    pub fn set_pool_exhausted(&self, exhausted: bool) {
        self.pool_exhausted.store(exhausted, Ordering::SeqCst);
    }

    pub fn seed(&self, title: &str, description: &str, rental_rate: f64) -> Film {
        let mut store = self.store.lock().unwrap();
        store.next_id += 1;
        let film = Film {
            id: store.next_id,
            title: title.to_string(),
            description: description.to_string(),
            rental_rate,
        };
        store.films.insert(film.id, film.clone());
        film
    }

    pub fn len(&self) -> usize {
        self.store.lock().unwrap().films.len()
    }

    pub fn get(&self, id: i32) -> Option<Film> {
        self.store.lock().unwrap().films.get(&id).cloned()
    }

    fn check(&self, operation: RepositoryOperation) -> RepositoryResult<()> {
        if self.pool_exhausted.load(Ordering::SeqCst) {
            return Err(RepositoryError::from_sqlx(
                operation,
                sqlx::Error::PoolTimedOut,
            ));
        }
        if self.offline.load(Ordering::SeqCst) {
            return Err(RepositoryError::database_error(
                operation,
                "relation \"film\" does not exist",
            ));
        }
        Ok(())
    }
}

impl Repository<FilmId, Film, NewFilm, UpdateFilm> for InMemoryFilms {
    async fn find_by_id(&self, id: &FilmId) -> RepositoryResult<Option<Film>> {
        self.check(RepositoryOperation::FindById)?;
        Ok(self.get(id.get()))
    }

    async fn find_all(&self, limit: Option<i64>) -> RepositoryResult<Vec<Film>> {
        self.check(RepositoryOperation::FindAll)?;
        let store = self.store.lock().unwrap();
        let all = store.films.values().cloned();
        Ok(match limit {
            Some(n) => all.take(n as usize).collect(),
            None => all.collect(),
        })
    }

    async fn create(&self, data: NewFilm) -> RepositoryResult<Film> {
        self.check(RepositoryOperation::Create)?;
        Ok(self.seed(&data.title, &data.description, data.rental_rate))
    }

    async fn update(&self, id: &FilmId, data: UpdateFilm) -> RepositoryResult<Option<Film>> {
        self.check(RepositoryOperation::Update)?;
        let mut store = self.store.lock().unwrap();
        Ok(store.films.get_mut(&id.get()).map(|film| {
            *film = data.apply_to(film);
            film.clone()
        }))
    }

    async fn delete(&self, id: &FilmId) -> RepositoryResult<Option<Film>> {
        self.check(RepositoryOperation::Delete)?;
        Ok(self.store.lock().unwrap().films.remove(&id.get()))
    }

    async fn ping(&self) -> RepositoryResult<()> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(RepositoryError::connection_failed(
                RepositoryOperation::Ping,
                "connection refused",
            ));
        }
        Ok(())
    }
}

pub fn test_config() -> Config {
    let mut config = Config::default();
    config.logging.file_enabled = false;
    config
}

pub fn app_with(repo: InMemoryFilms) -> Router {
    routes::app(AppState::new(test_config(), repo))
}

/// Send one request and decode the JSON response body (`Value::Null` when empty)
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    send_request(app, request).await
}

pub async fn send_request(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}
