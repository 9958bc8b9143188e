//! Film data models and request validation

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Largest rate the `numeric(4,2)` column accepts
pub const MAX_RENTAL_RATE: f64 = 99.99;

/// Film identifier (`film.film_id`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilmId(pub i32);

impl FilmId {
    pub fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for FilmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for FilmId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i32>()
            .map(FilmId)
            .map_err(|_| format!("Film id must be an integer, got '{}'", s))
    }
}

/// Film row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Film {
    /// Store-generated identifier
    #[schema(example = 1001)]
    pub id: i32,
    #[schema(example = "Matrix")]
    pub title: String,
    #[schema(example = "Sci-fi")]
    pub description: String,
    #[schema(example = 4.99)]
    pub rental_rate: f64,
}

impl Film {
    pub fn film_id(&self) -> FilmId {
        FilmId(self.id)
    }
}

/// Create film request
///
/// Every field is optional at the wire level so that absent fields can be
/// reported as a validation error instead of a deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateFilm {
    #[schema(example = "Matrix")]
    pub title: Option<String>,
    #[schema(example = "Sci-fi")]
    pub description: Option<String>,
    #[schema(example = 4.99)]
    pub rental_rate: Option<f64>,
}

/// Validated film ready to be inserted
#[derive(Debug, Clone, PartialEq)]
pub struct NewFilm {
    pub title: String,
    pub description: String,
    pub rental_rate: f64,
}

impl CreateFilm {
    /// Presence checks plus per-field rules
    ///
    /// A zero `rental_rate` is a valid value, not a missing one.
    pub fn validate(self) -> Result<NewFilm, String> {
        match (self.title, self.description, self.rental_rate) {
            (Some(title), Some(description), Some(rental_rate)) => Ok(NewFilm {
                title: validate_text("title", title)?,
                description: validate_text("description", description)?,
                rental_rate: validate_rental_rate(rental_rate)?,
            }),
            (title, description, rental_rate) => {
                let missing: Vec<&str> = [
                    ("title", title.is_none()),
                    ("description", description.is_none()),
                    ("rental_rate", rental_rate.is_none()),
                ]
                .into_iter()
                .filter_map(|(field, absent)| absent.then_some(field))
                .collect();
                Err(format!(
                    "Missing required fields to create the film: {}",
                    missing.join(", ")
                ))
            }
        }
    }
}

/// Update film request
///
/// Absent (or `null`) fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateFilm {
    #[schema(example = "The Matrix")]
    pub title: Option<String>,
    pub description: Option<String>,
    #[schema(example = 2.99)]
    pub rental_rate: Option<f64>,
}

impl UpdateFilm {
    /// Apply the create rules to every field that is present
    pub fn validate(self) -> Result<UpdateFilm, String> {
        Ok(UpdateFilm {
            title: self.title.map(|t| validate_text("title", t)).transpose()?,
            description: self
                .description
                .map(|d| validate_text("description", d))
                .transpose()?,
            rental_rate: self.rental_rate.map(validate_rental_rate).transpose()?,
        })
    }

    /// Merge onto an existing film, keeping fields the request leaves out
    pub fn apply_to(&self, film: &Film) -> Film {
        Film {
            id: film.id,
            title: self.title.clone().unwrap_or_else(|| film.title.clone()),
            description: self
                .description
                .clone()
                .unwrap_or_else(|| film.description.clone()),
            rental_rate: self.rental_rate.unwrap_or(film.rental_rate),
        }
    }
}

/// Confirmation returned by the delete endpoint
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeleteResponse {
    #[schema(example = "Film deleted successfully")]
    pub message: String,
}

fn validate_text(field: &str, value: String) -> Result<String, String> {
    if value.trim().is_empty() {
        return Err(format!("Field '{}' must not be empty", field));
    }
    Ok(value)
}

fn validate_rental_rate(rate: f64) -> Result<f64, String> {
    if !rate.is_finite() || rate < 0.0 {
        return Err("Field 'rental_rate' must be a non-negative number".to_string());
    }
    if rate > MAX_RENTAL_RATE {
        return Err(format!(
            "Field 'rental_rate' must not exceed {}",
            MAX_RENTAL_RATE
        ));
    }
    Ok(rate)
}
