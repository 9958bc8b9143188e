//! # film-api
//!
//! CRUD HTTP API for a single `film` resource stored in PostgreSQL.
//!
//! ## Features
//!
//! - **REST surface**: list, get, create, update and delete films under `/api/peliculas`
//! - **Parameterized SQL**: every statement goes through `sqlx` binds
//! - **Atomic partial updates**: a single conditional `UPDATE ... RETURNING`
//! - **Observability**: structured JSON logs to stdout and a log file, request IDs
//! - **API docs**: OpenAPI document and Swagger UI generated from the handlers
//! - **Health checks**: liveness and readiness checks
//!
//! ## Example
//!
//! ```rust,no_run
//! use film_api::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = Config::load()?;
//!     let guard = init_tracing(&config)?;
//!
//!     let pool = database::create_pool(&config.database).await?;
//!     let state = AppState::new(config.clone(), PgFilmRepository::new(pool));
//!
//!     Server::new(config).serve(routes::app(state)).await?;
//!
//!     shutdown_tracing(guard);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod health;
pub mod middleware;
pub mod models;
pub mod observability;
pub mod openapi;
pub mod repository;
pub mod routes;
pub mod server;
pub mod state;

/// Commonly used types for wiring the service together
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::database;
    pub use crate::error::{Error, Result};
    pub use crate::handlers::{ApiError, ApiErrorKind, ApiOperation};
    pub use crate::models::{CreateFilm, Film, FilmId, UpdateFilm};
    pub use crate::observability::{init_tracing, shutdown_tracing, TracingGuard};
    pub use crate::repository::{PgFilmRepository, Repository, RepositoryError, RepositoryResult};
    pub use crate::routes;
    pub use crate::server::Server;
    pub use crate::state::AppState;
}
