//! Data store gateway
//!
//! [`Repository`] is the seam between the HTTP handlers and the store.
//! [`PgFilmRepository`] implements it against PostgreSQL with `sqlx`.
//!
//! # Example
//!
//! ```rust,ignore
//! use film_api::repository::{PgFilmRepository, Repository};
//!
//! let repo = PgFilmRepository::new(pool);
//! let first_ten = repo.find_all(Some(10)).await?;
//! ```

mod error;
mod postgres;
mod traits;

pub use error::{RepositoryError, RepositoryErrorKind, RepositoryOperation};
pub use postgres::PgFilmRepository;
pub use traits::{Repository, RepositoryResult};

use crate::models::{Film, FilmId, NewFilm, UpdateFilm};

/// Any repository that can serve the film endpoints
pub trait FilmRepository: Repository<FilmId, Film, NewFilm, UpdateFilm> + Clone + 'static {}

impl<T> FilmRepository for T where T: Repository<FilmId, Film, NewFilm, UpdateFilm> + Clone + 'static {}
