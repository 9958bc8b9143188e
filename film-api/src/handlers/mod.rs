//! HTTP handlers for the `/peliculas` resource
//!
//! Handlers are generic over [`FilmRepository`](crate::repository::FilmRepository)
//! so the same router can run against PostgreSQL or an in-memory store.
//!
//! | Method | Path | Handler |
//! |---|---|---|
//! | GET | `/peliculas?filter=N` | [`list_films`] |
//! | GET | `/peliculas/{id}` | [`get_film`] |
//! | POST | `/peliculas` | [`create_film`] |
//! | PUT | `/peliculas/{id}` | [`update_film`] |
//! | DELETE | `/peliculas/{id}` | [`delete_film`] |

mod error;
pub mod films;
mod query;

pub use error::{ApiError, ApiErrorKind, ApiErrorResponse, ApiOperation};
pub use films::{create_film, delete_film, get_film, list_films, update_film};
pub use query::ListQuery;
