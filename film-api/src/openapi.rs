//! OpenAPI documentation
//!
//! The document is generated from the `#[utoipa::path]` annotations on the
//! handlers. Film paths are declared relative to the router nest point and
//! prefixed with the configured base path when the document is built.
//!
//! ```rust
//! use film_api::openapi::api_doc;
//!
//! let doc = api_doc("/api");
//! assert!(doc.paths.paths.contains_key("/api/peliculas"));
//! assert!(doc.paths.paths.contains_key("/health"));
//! ```

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers::{self, ApiErrorResponse};
use crate::health::{self, DependencyStatus, HealthResponse, ReadinessResponse};
use crate::models::{CreateFilm, DeleteResponse, Film, UpdateFilm};

/// Where the generated document is served
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

/// Where Swagger UI is mounted
pub const SWAGGER_UI_PATH: &str = "/api-docs";

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::films::list_films,
        handlers::films::get_film,
        handlers::films::create_film,
        handlers::films::update_film,
        handlers::films::delete_film,
    ),
    components(schemas(Film, CreateFilm, UpdateFilm, DeleteResponse, ApiErrorResponse)),
    tags((name = "peliculas", description = "Film catalogue"))
)]
struct FilmApiDoc;

#[derive(OpenApi)]
#[openapi(
    paths(health::health, health::readiness),
    components(schemas(HealthResponse, ReadinessResponse, DependencyStatus)),
    tags((name = "health", description = "Liveness and readiness checks"))
)]
struct HealthApiDoc;

/// Builder for the service's OpenAPI document
pub struct OpenApiBuilder {
    openapi: utoipa::openapi::OpenApi,
}

impl OpenApiBuilder {
    /// Create a new OpenAPI builder from an existing OpenApi instance
    pub fn new(openapi: utoipa::openapi::OpenApi) -> Self {
        Self { openapi }
    }

    /// Set the API title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.openapi.info.title = title.into();
        self
    }

    /// Set the API version
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.openapi.info.version = version.into();
        self
    }

    /// Set the API description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.openapi.info.description = Some(description.into());
        self
    }

    /// Mount another document's paths under `prefix`
    pub fn nest(mut self, prefix: &str, other: utoipa::openapi::OpenApi) -> Self {
        self.openapi = if prefix.is_empty() {
            self.openapi.merge_from(other)
        } else {
            self.openapi.nest(prefix, other)
        };
        self
    }

    /// Build the OpenAPI specification
    pub fn build(self) -> utoipa::openapi::OpenApi {
        self.openapi
    }
}

/// Complete document with film routes under `base_path`
///
/// `base_path` is expected in normalized form (see
/// [`ApiConfig::normalized_base_path`](crate::config::ApiConfig::normalized_base_path)).
pub fn api_doc(base_path: &str) -> utoipa::openapi::OpenApi {
    OpenApiBuilder::new(HealthApiDoc::openapi())
        .nest(base_path, FilmApiDoc::openapi())
        .title("Film API")
        .version(env!("CARGO_PKG_VERSION"))
        .description("CRUD API for the film catalogue")
        .build()
}

/// Router serving Swagger UI and the raw document
pub fn swagger_router(openapi: utoipa::openapi::OpenApi) -> Router {
    SwaggerUi::new(SWAGGER_UI_PATH)
        .url(OPENAPI_JSON_PATH, openapi)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_film_paths_follow_base_path() {
        let doc = api_doc("/v1");
        assert!(doc.paths.paths.contains_key("/v1/peliculas"));
        assert!(doc.paths.paths.contains_key("/v1/peliculas/{id}"));
        assert!(!doc.paths.paths.contains_key("/api/peliculas"));
    }

    #[test]
    fn test_empty_base_path_mounts_at_root() {
        let doc = api_doc("");
        assert!(doc.paths.paths.contains_key("/peliculas"));
        assert!(doc.paths.paths.contains_key("/ready"));
    }

    #[test]
    fn test_document_info_and_schemas() {
        let doc = api_doc("/api");
        assert_eq!(doc.info.title, "Film API");
        assert_eq!(doc.info.version, env!("CARGO_PKG_VERSION"));

        let schemas = &doc.components.as_ref().unwrap().schemas;
        assert!(schemas.contains_key("Film"));
        assert!(schemas.contains_key("ApiErrorResponse"));
    }

    #[test]
    fn test_document_serializes() {
        let json = api_doc("/api").to_json().unwrap();
        assert!(json.contains("/api/peliculas/{id}"));
    }
}
