//! Repository error types
//!
//! A `RepositoryError` is a storage fault: the collaborator failed to answer.
//! Absence of a row is not an error; repositories report it as `None`.
//!
//! # Example
//!
//! ```rust
//! use nzwalks_service::repository::{RepositoryError, RepositoryErrorKind, RepositoryOperation};
//!
//! let error = RepositoryError::connection_failed("Database connection refused")
//!     .with_operation(RepositoryOperation::Create)
//!     .with_entity_type("Region");
//! assert!(error.is_retriable());
//! assert_eq!(error.kind, RepositoryErrorKind::ConnectionFailed);
//! ```

use std::fmt;

/// Operation being performed when the repository error occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepositoryOperation {
    /// Scanning every entity
    FindAll,
    /// Finding a single entity by ID
    FindById,
    /// Checking if an entity exists
    Exists,
    /// Creating a new entity
    Create,
    /// Updating an existing entity
    Update,
    /// Deleting an entity (hard delete)
    Delete,
    /// Readiness probe against the store
    Ping,
}

impl fmt::Display for RepositoryOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FindAll => write!(f, "find_all"),
            Self::FindById => write!(f, "find_by_id"),
            Self::Exists => write!(f, "exists"),
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
    /// Database constraint violation (unique, foreign key, check)
    ConstraintViolation,
    /// Failed to connect to database or pool unavailable
    ConnectionFailed,
    /// Operation timed out
    Timeout,
    /// Underlying database error
    DatabaseError,
    /// Row could not be decoded into a model
    SerializationError,
    /// Other unclassified error
    Other,
}

impl fmt::Display for RepositoryErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConstraintViolation => write!(f, "constraint_violation"),
            Self::ConnectionFailed => write!(f, "connection_failed"),
            Self::Timeout => write!(f, "timeout"),
            Self::DatabaseError => write!(f, "database_error"),
            Self::SerializationError => write!(f, "serialization_error"),
            Self::Other => write!(f, "other"),
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
    /// Human-readable error message
    pub message: String,
    /// The type of entity involved (e.g., "Region", "Walk")
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

    /// Create a connection failed error
    pub fn connection_failed(message: impl Into<String>) -> Self {
        Self::new(
            RepositoryOperation::Ping,
            RepositoryErrorKind::ConnectionFailed,
            message,
        )
    }

    /// Create a database error
    pub fn database_error(operation: RepositoryOperation, message: impl Into<String>) -> Self {
        Self::new(operation, RepositoryErrorKind::DatabaseError, message)
    }

    /// Classify a sqlx error raised while performing `operation`
    pub fn from_sqlx(operation: RepositoryOperation, err: sqlx::Error) -> Self {
        use sqlx::Error as E;
        let kind = match &err {
            E::PoolTimedOut => RepositoryErrorKind::Timeout,
            E::PoolClosed | E::Io(_) | E::Tls(_) | E::WorkerCrashed => {
                RepositoryErrorKind::ConnectionFailed
            }
            E::Database(db)
                if db.is_unique_violation()
                    || db.is_foreign_key_violation()
                    || db.is_check_violation() =>
            {
                RepositoryErrorKind::ConstraintViolation
            }
            E::ColumnDecode { .. } | E::Decode(_) | E::ColumnNotFound(_) | E::TypeNotFound { .. } => {
                RepositoryErrorKind::SerializationError
            }
            E::Database(_) | E::Protocol(_) | E::RowNotFound => RepositoryErrorKind::DatabaseError,
            _ => RepositoryErrorKind::Other,
        };
        Self::new(operation, kind, err.to_string())
    }

    /// Add the entity type to an existing error
    #[must_use]
    pub fn with_entity_type(mut self, entity_type: impl Into<String>) -> Self {
        self.entity_type = Some(entity_type.into());
        self
    }

    /// Add the entity id to an existing error
    #[must_use]
    pub fn with_entity_id(mut self, entity_id: impl ToString) -> Self {
        self.entity_id = Some(entity_id.to_string());
        self
    }

    /// Set the operation that caused the error
    #[must_use]
    pub fn with_operation(mut self, operation: RepositoryOperation) -> Self {
        self.operation = operation;
        self
    }

    /// Check if this error is retriable (transient errors that may succeed on retry)
    pub fn is_retriable(&self) -> bool {
        matches!(
            self.kind,
            RepositoryErrorKind::ConnectionFailed | RepositoryErrorKind::Timeout
        )
    }
}

impl fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Repository {} error during {}: {}",
            self.kind, self.operation, self.message
        )?;
        match (&self.entity_type, &self.entity_id) {
            (Some(entity_type), Some(entity_id)) => write!(f, " [{}: {}]", entity_type, entity_id)?,
            (Some(entity_type), None) => write!(f, " [{}]", entity_type)?,
            _ => {}
        }
        Ok(())
    }
}

impl std::error::Error for RepositoryError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_entity() {
        let error = RepositoryError::database_error(RepositoryOperation::Update, "deadlock")
            .with_entity_type("Walk")
            .with_entity_id("w-1");
        let display = error.to_string();
        assert!(display.contains("database_error"));
        assert!(display.contains("update"));
        assert!(display.contains("[Walk: w-1]"));
    }

    #[test]
    fn test_display_without_entity() {
        let error = RepositoryError::connection_failed("refused");
        assert!(!error.to_string().contains('['));
    }

    #[test]
    fn test_pool_errors_are_retriable() {
        let timed_out = RepositoryError::from_sqlx(RepositoryOperation::FindAll, sqlx::Error::PoolTimedOut);
        assert_eq!(timed_out.kind, RepositoryErrorKind::Timeout);
        assert!(timed_out.is_retriable());

        let closed = RepositoryError::from_sqlx(RepositoryOperation::Create, sqlx::Error::PoolClosed);
        assert_eq!(closed.kind, RepositoryErrorKind::ConnectionFailed);
        assert_eq!(closed.operation, RepositoryOperation::Create);
    }

    #[test]
    fn test_decode_errors_are_serialization_errors() {
        let error = RepositoryError::from_sqlx(
            RepositoryOperation::FindById,
            sqlx::Error::ColumnNotFound("population".to_string()),
        );
        assert_eq!(error.kind, RepositoryErrorKind::SerializationError);
        assert!(!error.is_retriable());
    }

    #[test]
    fn test_protocol_errors_are_database_errors() {
        let error = RepositoryError::from_sqlx(
            RepositoryOperation::Delete,
            sqlx::Error::Protocol("unexpected message".to_string()),
        );
        assert_eq!(error.kind, RepositoryErrorKind::DatabaseError);
    }
}
