//! Query parameters for the list endpoint
//!
//! # Example
//!
//! ```rust
//! use film_api::handlers::ListQuery;
//!
//! assert_eq!(ListQuery::with_filter("5").limit(), Some(5));
//! assert_eq!(ListQuery::with_filter("abc").limit(), None);
//! assert_eq!(ListQuery::default().limit(), None);
//! ```

use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

/// `GET /peliculas` query string
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Maximum number of films to return. Ignored unless it is a non-negative integer.
    #[param(value_type = Option<i64>, minimum = 0, example = 10)]
    pub filter: Option<String>,
}

impl ListQuery {
    pub fn with_filter(filter: impl Into<String>) -> Self {
        Self {
            filter: Some(filter.into()),
        }
    }

    /// Row limit to apply, if any
    ///
    /// Absent, non-numeric and negative values all mean "no limit".
    #[must_use]
    pub fn limit(&self) -> Option<i64> {
        self.filter
            .as_deref()
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .filter(|n| *n >= 0)
    }
}
