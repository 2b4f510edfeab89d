//! API error types for handler operations
//!
//! Every failure leaving the request pipeline is an [`ApiError`], rendered as a
//! JSON body with the status code of its [`ApiErrorKind`].
//!
//! # Example
//!
//! ```rust
//! use nzwalks_service::handlers::{ApiError, ApiErrorKind, ApiOperation};
//!
//! let error = ApiError::not_found(ApiOperation::Delete, "Walk", "0192d5e4-7c1a-7000-8000-000000000000");
//! assert!(matches!(error.kind, ApiErrorKind::NotFound));
//! assert_eq!(error.message, "Walk not found");
//! ```

use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::repository::{RepositoryError, RepositoryErrorKind, RepositoryOperation};
use crate::validation::FieldErrors;

/// Operation being performed when the API error occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiOperation {
    /// Listing entities
    List,
    /// Getting a single entity by ID
    Get,
    /// Creating a new entity
    Create,
    /// Updating an existing entity
    Update,
    /// Deleting an entity (hard delete)
    Delete,
}

impl fmt::Display for ApiOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List => write!(f, "list"),
            Self::Get => write!(f, "get"),
            Self::Create => write!(f, "create"),
            Self::Update => write!(f, "update"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// Category of API error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiErrorKind {
    /// Entity was not found
    NotFound,
    /// Request validation failed
    ValidationFailed,
    /// Storage rejected the write on a constraint
    Conflict,
    /// Internal server error
    InternalError,
    /// Service temporarily unavailable
    ServiceUnavailable,
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "not_found"),
            Self::ValidationFailed => write!(f, "validation_failed"),
            Self::Conflict => write!(f, "conflict"),
            Self::InternalError => write!(f, "internal_error"),
            Self::ServiceUnavailable => write!(f, "service_unavailable"),
        }
    }
}

impl ApiErrorKind {
    /// Get the HTTP status code for this error kind
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::ValidationFailed => StatusCode::BAD_REQUEST,
            Self::Conflict => StatusCode::CONFLICT,
            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
            Self::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Get the error code string for this error kind
    #[must_use]
    pub fn error_code(&self) -> String {
        format!("{}", self).to_uppercase()
    }

    /// Whether the fault lies with the server rather than the request
    pub const fn is_server_error(&self) -> bool {
        matches!(self, Self::InternalError | Self::ServiceUnavailable)
    }
}

/// Structured API error with operation context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// The operation being performed when the error occurred
    pub operation: ApiOperation,
    /// The category of error
    pub kind: ApiErrorKind,
    /// Human-readable error message
    pub message: String,
    /// The type of entity involved (e.g., "Region", "Walk")
    pub entity_type: Option<String>,
    /// The ID of the entity involved
    pub entity_id: Option<String>,
    /// Per-field messages of a failed validation
    pub field_errors: Option<FieldErrors>,
    /// Storage-level detail, written to the log but never to the response
    cause: Option<String>,
}

impl ApiError {
    /// Create a new API error
    pub fn new(operation: ApiOperation, kind: ApiErrorKind, message: impl Into<String>) -> Self {
        Self {
            operation,
            kind,
            message: message.into(),
            entity_type: None,
            entity_id: None,
            field_errors: None,
            cause: None,
        }
    }

    /// No entity of this type has the given id
    pub fn not_found(
        operation: ApiOperation,
        entity_type: impl Into<String>,
        entity_id: impl ToString,
    ) -> Self {
        let entity_type = entity_type.into();
        Self::new(
            operation,
            ApiErrorKind::NotFound,
            format!("{entity_type} not found"),
        )
        .with_entity(entity_type, entity_id)
    }

    /// The request was rejected by the validator
    ///
    /// # Example
    ///
    /// ```rust
    /// use nzwalks_service::handlers::{ApiError, ApiOperation};
    /// use nzwalks_service::validation::FieldErrors;
    ///
    /// let mut errors = FieldErrors::new();
    /// errors.add("Code", "Code cannot be Null or Empty.");
    /// let error = ApiError::validation_failed(ApiOperation::Create, "Region", errors);
    /// assert_eq!(error.kind.status_code().as_u16(), 400);
    /// ```
    pub fn validation_failed(
        operation: ApiOperation,
        entity_type: impl Into<String>,
        errors: FieldErrors,
    ) -> Self {
        let mut error = Self::new(
            operation,
            ApiErrorKind::ValidationFailed,
            "One or more validation errors occurred.",
        );
        error.entity_type = Some(entity_type.into());
        error.field_errors = Some(errors);
        error
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ApiOperation::Get, ApiErrorKind::InternalError, message)
    }

    /// Add entity context to an existing error
    #[must_use]
    pub fn with_entity(mut self, entity_type: impl Into<String>, entity_id: impl ToString) -> Self {
        self.entity_type = Some(entity_type.into());
        self.entity_id = Some(entity_id.to_string());
        self
    }

    /// Set the operation that caused the error
    #[must_use]
    pub fn with_operation(mut self, operation: ApiOperation) -> Self {
        self.operation = operation;
        self
    }

    /// Check if this error is retriable (transient errors that may succeed on retry)
    pub fn is_retriable(&self) -> bool {
        matches!(self.kind, ApiErrorKind::ServiceUnavailable)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "API {} error during {}: {}",
            self.kind, self.operation, self.message
        )?;
        if let (Some(entity_type), Some(entity_id)) = (&self.entity_type, &self.entity_id) {
            write!(f, " [{}: {}]", entity_type, entity_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

/// Response body for API errors
#[derive(Debug, Serialize, Deserialize)]
struct ApiErrorResponse {
    error: String,
    code: String,
    status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    operation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    entity_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    entity_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<FieldErrors>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.kind.status_code();
        let code = self.kind.error_code();

        if self.kind.is_server_error() {
            tracing::error!(
                operation = %self.operation,
                kind = %self.kind,
                entity_type = ?self.entity_type,
                entity_id = ?self.entity_id,
                cause = ?self.cause,
                retriable = self.is_retriable(),
                "API error: {}", self.message
            );
        } else {
            tracing::debug!(
                operation = %self.operation,
                kind = %self.kind,
                entity_type = ?self.entity_type,
                entity_id = ?self.entity_id,
                cause = ?self.cause,
                "API error: {}", self.message
            );
        }

        let response = ApiErrorResponse {
            error: self.message,
            code,
            status: status.as_u16(),
            operation: Some(self.operation.to_string()),
            entity_type: self.entity_type,
            entity_id: self.entity_id,
            errors: self.field_errors,
        };

        (status, Json(response)).into_response()
    }
}

/// Convert RepositoryOperation to ApiOperation
fn repository_operation_to_api_operation(op: RepositoryOperation) -> ApiOperation {
    match op {
        RepositoryOperation::FindById | RepositoryOperation::Ping => ApiOperation::Get,
        RepositoryOperation::FindAll => ApiOperation::List,
        // Reference lookups only happen while validating a write
        RepositoryOperation::Exists => ApiOperation::Create,
        RepositoryOperation::Create => ApiOperation::Create,
        RepositoryOperation::Update => ApiOperation::Update,
        RepositoryOperation::Delete => ApiOperation::Delete,
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        let operation = repository_operation_to_api_operation(err.operation);

        let kind = match err.kind {
            RepositoryErrorKind::ConstraintViolation => ApiErrorKind::Conflict,
            RepositoryErrorKind::ConnectionFailed | RepositoryErrorKind::Timeout => {
                ApiErrorKind::ServiceUnavailable
            }
            RepositoryErrorKind::DatabaseError
            | RepositoryErrorKind::SerializationError
            | RepositoryErrorKind::Other => ApiErrorKind::InternalError,
        };

        // Internal details stay in the log
        let message = match kind {
            ApiErrorKind::ServiceUnavailable => "Service temporarily unavailable".to_string(),
            ApiErrorKind::Conflict => "The request conflicts with stored data".to_string(),
            _ => "An internal error occurred".to_string(),
        };

        Self {
            operation,
            kind,
            message,
            entity_type: err.entity_type,
            entity_id: err.entity_id,
            field_errors: None,
            cause: Some(format!("{} storage fault: {}", err.kind, err.message)),
        }
    }
}
