//! Application state shared across handlers

use std::sync::Arc;

use crate::config::Config;

/// Application state shared across handlers
///
/// `R` is the film repository. Production uses
/// [`PgFilmRepository`](crate::repository::PgFilmRepository); its pool is
/// reference counted, so cloning the state per request is cheap.
#[derive(Clone)]
pub struct AppState<R> {
    config: Arc<Config>,
    films: R,
}

impl<R> AppState<R> {
    pub fn new(config: Config, films: R) -> Self {
        Self {
            config: Arc::new(config),
            films,
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the film repository
    pub fn films(&self) -> &R {
        &self.films
    }
}
