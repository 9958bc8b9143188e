//! Repository error types
//!
//! Structured errors for data store operations, carrying the operation that
//! failed, the failure category and the entity involved.
//!
//! # Example
//!
//! ```rust
//! use film_api::repository::{RepositoryError, RepositoryErrorKind};
//!
//! use film_api::repository::RepositoryOperation;
//!
//! let error = RepositoryError::from_sqlx(RepositoryOperation::FindAll, sqlx::Error::PoolTimedOut)
//!     .with_entity("Film", "42");
//! assert!(matches!(error.kind, RepositoryErrorKind::ConnectionFailed));
//! assert_eq!(error.entity_id, Some("42".to_string()));
//! ```

use std::fmt;

use crate::error::{DatabaseError, DatabaseErrorKind};

/// Operation being performed when the repository error occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepositoryOperation {
    /// Finding a single entity by ID
    FindById,
    /// Listing entities
    FindAll,
    /// Creating a new entity
    Create,
    /// Updating an existing entity
    Update,
    /// Deleting an entity
    Delete,
    /// Checking store availability
    Ping,
}

impl fmt::Display for RepositoryOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FindById => write!(f, "find_by_id"),
            Self::FindAll => write!(f, "find_all"),
            Self::Create => write!(f, "create"),
            Self::Update => write!(f, "update"),
            Self::Delete => write!(f, "delete"),
            Self::Ping => write!(f, "ping"),
        }
    }
}

/// Category of repository error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepositoryErrorKind {
    /// Entity was not found
    NotFound,
    /// Database constraint violation
    ConstraintViolation,
    /// Failed to connect to database or acquire a connection
    ConnectionFailed,
    /// Underlying database error
    DatabaseError,
    /// Row could not be decoded into the entity
    SerializationError,
}

impl fmt::Display for RepositoryErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "not_found"),
            Self::ConstraintViolation => write!(f, "constraint_violation"),
            Self::ConnectionFailed => write!(f, "connection_failed"),
            Self::DatabaseError => write!(f, "database_error"),
            Self::SerializationError => write!(f, "serialization_error"),
        }
    }
}

/// Structured repository error with operation context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryError {
    /// The operation being performed when the error occurred
    pub operation: RepositoryOperation,
    /// The category of error
    pub kind: RepositoryErrorKind,
    /// Human-readable error message (may contain store internals)
    pub message: String,
    /// The type of entity involved (e.g., "Film")
    pub entity_type: Option<String>,
    /// The ID of the entity involved
    pub entity_id: Option<String>,
}

impl RepositoryError {
    /// Create a new repository error
    pub fn new(
        operation: RepositoryOperation,
        kind: RepositoryErrorKind,
        message: impl Into<String>,
    ) -> Self {
        Self {
            operation,
            kind,
            message: message.into(),
            entity_type: None,
            entity_id: None,
        }
    }

    pub fn connection_failed(operation: RepositoryOperation, message: impl Into<String>) -> Self {
        Self::new(operation, RepositoryErrorKind::ConnectionFailed, message)
    }

    pub fn database_error(operation: RepositoryOperation, message: impl Into<String>) -> Self {
        Self::new(operation, RepositoryErrorKind::DatabaseError, message)
    }

    /// Classify a `sqlx` failure for the given operation
    pub fn from_sqlx(operation: RepositoryOperation, err: sqlx::Error) -> Self {
        let db_err = DatabaseError::from(err);
        let kind = match db_err.kind {
            DatabaseErrorKind::NotFound => RepositoryErrorKind::NotFound,
            DatabaseErrorKind::ConstraintViolation => RepositoryErrorKind::ConstraintViolation,
            DatabaseErrorKind::ConnectionFailed | DatabaseErrorKind::PoolExhausted => {
                RepositoryErrorKind::ConnectionFailed
            }
            DatabaseErrorKind::TypeConversion => RepositoryErrorKind::SerializationError,
            DatabaseErrorKind::QueryFailed
            | DatabaseErrorKind::Configuration
            | DatabaseErrorKind::Other => RepositoryErrorKind::DatabaseError,
        };
        Self::new(operation, kind, db_err.message)
    }

    /// Attach entity context
    #[must_use]
    pub fn with_entity(
        mut self,
        entity_type: impl Into<String>,
        entity_id: impl Into<String>,
    ) -> Self {
        self.entity_type = Some(entity_type.into());
        self.entity_id = Some(entity_id.into());
        self
    }
}

impl fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Repository {} error during {}: {}",
            self.kind, self.operation, self.message
        )?;
        if let (Some(ref entity_type), Some(ref entity_id)) = (&self.entity_type, &self.entity_id) {
            write!(f, " [{}: {}]", entity_type, entity_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for RepositoryError {}
