//! Film resource handlers
//!
//! Each handler translates one HTTP request into a single repository call and
//! shapes the JSON response. Failures become [`ApiError`]s, which set the
//! status code and log the error.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};

use super::error::{ApiError, ApiErrorResponse, ApiOperation};
use super::query::ListQuery;
use crate::models::{CreateFilm, DeleteResponse, Film, FilmId, UpdateFilm};
use crate::repository::FilmRepository;
use crate::state::AppState;

const ENTITY: &str = "Film";

fn parse_id(
    path: Result<Path<String>, PathRejection>,
    operation: ApiOperation,
) -> Result<FilmId, ApiError> {
    let Path(raw) = path.map_err(|rejection| {
        ApiError::bad_request(operation, "Film id must be an integer")
            .with_detail(rejection.body_text())
    })?;
    raw.parse::<FilmId>()
        .map_err(|msg| ApiError::bad_request(operation, msg))
}

fn parse_body<T>(
    payload: Result<Json<T>, JsonRejection>,
    operation: ApiOperation,
) -> Result<T, ApiError> {
    payload.map(|Json(body)| body).map_err(|rejection| {
        ApiError::bad_request(
            operation,
            format!(
                "Request body must be a JSON object: {}",
                rejection.body_text()
            ),
        )
    })
}

/// List films
#[utoipa::path(
    get,
    path = "/peliculas",
    tag = "peliculas",
    params(ListQuery),
    responses(
        (status = 200, description = "Films in id order", body = [Film]),
        (status = 500, description = "Store failure", body = ApiErrorResponse)
    )
)]
pub async fn list_films<R: FilmRepository>(
    State(state): State<AppState<R>>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<Vec<Film>>, ApiError> {
    // An unreadable query string carries no usable filter
    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => {
            tracing::debug!(reason = %rejection.body_text(), "Ignoring unreadable query string");
            ListQuery::default()
        }
    };
    let limit = query.limit();
    let films = state.films().find_all(limit).await?;

    tracing::info!(limit = ?limit, count = films.len(), "Listed films");
    Ok(Json(films))
}

/// Get a film by id
#[utoipa::path(
    get,
    path = "/peliculas/{id}",
    tag = "peliculas",
    params(("id" = i32, Path, description = "Film id")),
    responses(
        (status = 200, description = "The film", body = Film),
        (status = 400, description = "Id is not an integer", body = ApiErrorResponse),
        (status = 404, description = "Film not found", body = ApiErrorResponse),
        (status = 500, description = "Store failure", body = ApiErrorResponse)
    )
)]
pub async fn get_film<R: FilmRepository>(
    State(state): State<AppState<R>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Film>, ApiError> {
    let id = parse_id(path, ApiOperation::Get)?;

    let film = state
        .films()
        .find_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::not_found(ApiOperation::Get, ENTITY, id.to_string()))?;

    tracing::info!(film_id = %id, "Fetched film");
    Ok(Json(film))
}

/// Create a film
#[utoipa::path(
    post,
    path = "/peliculas",
    tag = "peliculas",
    request_body = CreateFilm,
    responses(
        (status = 201, description = "Film created", body = Film),
        (status = 400, description = "Missing or invalid fields", body = ApiErrorResponse),
        (status = 500, description = "Store failure", body = ApiErrorResponse)
    )
)]
pub async fn create_film<R: FilmRepository>(
    State(state): State<AppState<R>>,
    payload: Result<Json<CreateFilm>, JsonRejection>,
) -> Result<(StatusCode, Json<Film>), ApiError> {
    let request = parse_body(payload, ApiOperation::Create)?;

    let new_film = request
        .validate()
        .map_err(|msg| ApiError::validation_failed(ApiOperation::Create, msg))?;

    let film = state.films().create(new_film).await?;

    tracing::info!(film_id = film.id, title = %film.title, "Created film");
    Ok((StatusCode::CREATED, Json(film)))
}

/// Update a film
///
/// Fields left out of the body keep their stored value.
#[utoipa::path(
    put,
    path = "/peliculas/{id}",
    tag = "peliculas",
    params(("id" = i32, Path, description = "Film id")),
    request_body = UpdateFilm,
    responses(
        (status = 200, description = "Updated film", body = Film),
        (status = 400, description = "Invalid id or field value", body = ApiErrorResponse),
        (status = 404, description = "Film not found", body = ApiErrorResponse),
        (status = 500, description = "Store failure", body = ApiErrorResponse)
    )
)]
pub async fn update_film<R: FilmRepository>(
    State(state): State<AppState<R>>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<UpdateFilm>, JsonRejection>,
) -> Result<Json<Film>, ApiError> {
    let id = parse_id(path, ApiOperation::Update)?;
    let changes = parse_body(payload, ApiOperation::Update)?
        .validate()
        .map_err(|msg| ApiError::validation_failed(ApiOperation::Update, msg))?;

    let film = state
        .films()
        .update(&id, changes)
        .await?
        .ok_or_else(|| ApiError::not_found(ApiOperation::Update, ENTITY, id.to_string()))?;

    tracing::info!(film_id = %id, "Updated film");
    Ok(Json(film))
}

/// Delete a film
#[utoipa::path(
    delete,
    path = "/peliculas/{id}",
    tag = "peliculas",
    params(("id" = i32, Path, description = "Film id")),
    responses(
        (status = 200, description = "Film deleted", body = DeleteResponse),
        (status = 400, description = "Id is not an integer", body = ApiErrorResponse),
        (status = 404, description = "Film not found", body = ApiErrorResponse),
        (status = 500, description = "Store failure", body = ApiErrorResponse)
    )
)]
pub async fn delete_film<R: FilmRepository>(
    State(state): State<AppState<R>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let id = parse_id(path, ApiOperation::Delete)?;

    let deleted = state
        .films()
        .delete(&id)
        .await?
        .ok_or_else(|| ApiError::not_found(ApiOperation::Delete, ENTITY, id.to_string()))?;

    tracing::info!(film_id = %id, title = %deleted.title, "Deleted film");
    Ok(Json(DeleteResponse {
        message: "Film deleted successfully".to_string(),
    }))
}
