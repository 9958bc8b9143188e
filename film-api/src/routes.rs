//! Router assembly

use axum::{routing::get, Router};

use crate::{
    handlers::{create_film, delete_film, get_film, list_films, update_film},
    health::{health, readiness},
    openapi,
    repository::FilmRepository,
    state::AppState,
};

/// Film routes, relative to the API base path
pub fn film_routes<R: FilmRepository>() -> Router<AppState<R>> {
    Router::new()
        .route("/peliculas", get(list_films::<R>).post(create_film::<R>))
        .route(
            "/peliculas/{id}",
            get(get_film::<R>)
                .put(update_film::<R>)
                .delete(delete_film::<R>),
        )
}

/// Full application router
///
/// Film routes are nested under `api.base_path`; health checks sit at the root.
/// Swagger UI is merged when `api.docs_enabled` is set.
pub fn app<R: FilmRepository>(state: AppState<R>) -> Router {
    let base_path = state.config().api.normalized_base_path();
    let docs_enabled = state.config().api.docs_enabled;

    let api = if base_path.is_empty() {
        film_routes::<R>()
    } else {
        Router::new().nest(&base_path, film_routes::<R>())
    };

    let router = Router::new()
        .route("/health", get(health::<R>))
        .route("/ready", get(readiness::<R>))
        .merge(api)
        .with_state(state);

    if docs_enabled {
        router.merge(openapi::swagger_router(openapi::api_doc(&base_path)))
    } else {
        router
    }
}
