//! Unified error handling
//!
//! Every error kind maps to a stable machine-readable code and an HTTP
//! status. All kinds except [`AppError::Store`] and [`AppError::Internal`]
//! are caller-input problems and are never retried.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::db::store::StoreError;

/// Application error taxonomy.
#[derive(Debug, Error)]
pub enum AppError {
    /// Required field(s) absent on a create payload.
    #[error("{0}")]
    MissingField(String),

    /// A value violates a range or format rule.
    #[error("{0}")]
    InvalidField(String),

    /// Department name uniqueness violation.
    #[error("The value of the {0} field must be unique")]
    DuplicateName(String),

    /// An identity was supplied on a create payload.
    #[error("A new {0} must be posted without the id field")]
    EntityAlreadyIdentified(String),

    /// Identity missing or non-positive on an update payload.
    #[error("To edit the {0} you need to write its id. The id can not be 0")]
    InvalidIdentity(String),

    /// Referenced entity absent, or an empty result set.
    #[error("{0}")]
    NotFound(String),

    /// Attempt to change the date of birth after creation.
    #[error("You can not edit the date of birth")]
    ImmutableField,

    /// Salary changed while the employee has no department.
    #[error("You can not edit the salary field because the department field is null")]
    IllegalStateTransition,

    /// Store failure, distinct from the caller-input taxonomy.
    #[error("Store error: {0}")]
    Store(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn missing_fields(fields: &[&str]) -> Self {
        Self::MissingField(format!(
            "You missed the required field(s): {}",
            fields.join(", ")
        ))
    }

    pub fn invalid_field(message: impl Into<String>) -> Self {
        Self::InvalidField(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn not_found_by_id(entity: &str, id: i64) -> Self {
        Self::NotFound(format!("No {entity} with ID = {id} was found"))
    }

    /// A list or search endpoint came back empty. Surfaces as 404, never
    /// as an empty success payload.
    pub fn empty_result() -> Self {
        Self::NotFound("No matching records were found".to_string())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Stable machine-readable code for the error kind.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingField(_) => "missing_field",
            Self::InvalidField(_) => "invalid_field",
            Self::DuplicateName(_) => "duplicate_name",
            Self::EntityAlreadyIdentified(_) => "entity_already_identified",
            Self::InvalidIdentity(_) => "invalid_identity",
            Self::NotFound(_) => "not_found",
            Self::ImmutableField => "immutable_field",
            Self::IllegalStateTransition => "illegal_state_transition",
            Self::Store(_) => "store_error",
            Self::Internal(_) => "internal_error",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingField(_)
            | Self::InvalidField(_)
            | Self::EntityAlreadyIdentified(_)
            | Self::InvalidIdentity(_) => StatusCode::BAD_REQUEST,
            Self::DuplicateName(_) => StatusCode::CONFLICT,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::ImmutableField | Self::IllegalStateTransition => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            Self::Store(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            // Internal details are logged, not exposed to the caller
            AppError::Store(msg) | AppError::Internal(msg) => {
                tracing::error!(error = %msg, "internal error");
                "An internal error occurred".to_string()
            }
            other => other.to_string(),
        };

        let body = ErrorResponse {
            error: self.code().to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::Store(err.to_string())
    }
}

/// Result type for application logic and handlers.
pub type AppResult<T> = Result<T, AppError>;

/// Plain success message body, used by delete and update-report endpoints.
#[derive(Debug, Serialize)]
pub struct Message {
    pub message: String,
}

pub fn message(text: impl Into<String>) -> Json<Message> {
    Json(Message {
        message: text.into(),
    })
}
