//! Shared error type across userbench crates.

use thiserror::Error;

use crate::validate::ValidationFailure;

/// Message returned for store faults.
pub const INTERNAL_SERVER_ERROR: &str = "Internal server error";
/// Message returned by the top-level catch-all.
pub const SOMETHING_WENT_WRONG: &str = "Something went wrong!";

/// Coarse classification used by the error mapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// Expected outcome of bad client input or a missing resource.
    Domain,
    /// Request did not match any route/method.
    Routing,
    /// Anything the caller must not see the details of.
    Internal,
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, UserBenchError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum UserBenchError {
    #[error("validation failed: {0}")]
    Validation(ValidationFailure),
    #[error("invalid user id: {0:?}")]
    InvalidUserId(String),
    #[error("user {0} not found")]
    UserNotFound(i64),
    #[error("route not found")]
    RouteNotFound,
    #[error("method not allowed")]
    MethodNotAllowed,
    /// Backend fault raised by the user store.
    #[error("store: {0}")]
    Store(String),
    /// Failure nobody anticipated (malformed body, panic, serialization).
    #[error("unexpected: {0}")]
    Unexpected(String),
    #[error("config: {0}")]
    Config(String),
}

impl UserBenchError {
    /// HTTP status code for the client response.
    pub fn status_code(&self) -> u16 {
        match self {
            UserBenchError::Validation(_) | UserBenchError::InvalidUserId(_) => 400,
            UserBenchError::UserNotFound(_) | UserBenchError::RouteNotFound => 404,
            UserBenchError::MethodNotAllowed => 405,
            UserBenchError::Store(_) | UserBenchError::Unexpected(_) | UserBenchError::Config(_) => 500,
        }
    }

    /// Safe message for the `error` field. Internal details never appear here.
    pub fn client_message(&self) -> &'static str {
        match self {
            UserBenchError::Validation(failure) => failure.reason(),
            UserBenchError::InvalidUserId(_) => "Invalid user ID",
            UserBenchError::UserNotFound(_) => "User not found",
            UserBenchError::RouteNotFound => "Route not found",
            UserBenchError::MethodNotAllowed => "Method not allowed",
            UserBenchError::Store(_) | UserBenchError::Config(_) => INTERNAL_SERVER_ERROR,
            UserBenchError::Unexpected(_) => SOMETHING_WENT_WRONG,
        }
    }

    pub fn class(&self) -> ErrorClass {
        match self {
            UserBenchError::Validation(_)
            | UserBenchError::InvalidUserId(_)
            | UserBenchError::UserNotFound(_) => ErrorClass::Domain,
            UserBenchError::RouteNotFound | UserBenchError::MethodNotAllowed => ErrorClass::Routing,
            UserBenchError::Store(_) | UserBenchError::Unexpected(_) | UserBenchError::Config(_) => {
                ErrorClass::Internal
            }
        }
    }
}

impl From<ValidationFailure> for UserBenchError {
    fn from(failure: ValidationFailure) -> Self {
        UserBenchError::Validation(failure)
    }
}
