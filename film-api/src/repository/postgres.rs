//! PostgreSQL film repository
//!
//! All statements are parameterized; user input never reaches the SQL text.

use sqlx::PgPool;

use super::error::{RepositoryError, RepositoryOperation};
use super::traits::{Repository, RepositoryResult};
use crate::models::{Film, FilmId, NewFilm, UpdateFilm};

const FILM_COLUMNS: &str =
    "film_id AS id, title, COALESCE(description, '') AS description, rental_rate::float8 AS rental_rate";

/// Film repository backed by the `film` table
#[derive(Debug, Clone)]
pub struct PgFilmRepository {
    pool: PgPool,
}

impl PgFilmRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn film_error(operation: RepositoryOperation, err: sqlx::Error) -> RepositoryError {
    RepositoryError::from_sqlx(operation, err)
}

impl Repository<FilmId, Film, NewFilm, UpdateFilm> for PgFilmRepository {
    async fn find_by_id(&self, id: &FilmId) -> RepositoryResult<Option<Film>> {
        let sql = format!("SELECT {FILM_COLUMNS} FROM film WHERE film_id = $1");
        sqlx::query_as::<_, Film>(&sql)
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                film_error(RepositoryOperation::FindById, e).with_entity("Film", id.to_string())
            })
    }

    async fn find_all(&self, limit: Option<i64>) -> RepositoryResult<Vec<Film>> {
        // LIMIT NULL is LIMIT ALL in PostgreSQL
        let sql = format!("SELECT {FILM_COLUMNS} FROM film ORDER BY film_id LIMIT $1");
        sqlx::query_as::<_, Film>(&sql)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| film_error(RepositoryOperation::FindAll, e))
    }

    async fn create(&self, data: NewFilm) -> RepositoryResult<Film> {
        let sql = format!(
            "INSERT INTO film (title, description, rental_rate) \
             VALUES ($1, $2, $3::numeric) \
             RETURNING {FILM_COLUMNS}"
        );
        sqlx::query_as::<_, Film>(&sql)
            .bind(data.title)
            .bind(data.description)
            .bind(data.rental_rate)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| film_error(RepositoryOperation::Create, e))
    }

    async fn update(&self, id: &FilmId, data: UpdateFilm) -> RepositoryResult<Option<Film>> {
        let sql = format!(
            "UPDATE film SET \
                 title = COALESCE($2, title), \
                 description = COALESCE($3, description), \
                 rental_rate = COALESCE($4::numeric, rental_rate) \
             WHERE film_id = $1 \
             RETURNING {FILM_COLUMNS}"
        );
        sqlx::query_as::<_, Film>(&sql)
            .bind(id.get())
            .bind(data.title)
            .bind(data.description)
            .bind(data.rental_rate)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                film_error(RepositoryOperation::Update, e).with_entity("Film", id.to_string())
            })
    }

    async fn delete(&self, id: &FilmId) -> RepositoryResult<Option<Film>> {
        let sql = format!("DELETE FROM film WHERE film_id = $1 RETURNING {FILM_COLUMNS}");
        sqlx::query_as::<_, Film>(&sql)
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                film_error(RepositoryOperation::Delete, e).with_entity("Film", id.to_string())
            })
    }

    async fn ping(&self) -> RepositoryResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(|e| film_error(RepositoryOperation::Ping, e))
    }
}
