//! Error types for the planner library.

use thiserror::Error;

/// Comprehensive error type for all planner operations.
///
/// Policy violations (prerequisites, credit limits) are deliberately *not*
/// represented here: the validation engine reports those as discriminated
/// results so they can be surfaced and bypassed. Only local input errors and
/// transport failures travel through this channel.
#[derive(Error, Debug)]
pub enum PlannerError {
    /// HTTP transport errors (connection, timeout, body decoding)
    #[error("HTTP error: {message}")]
    Http {
        message: String,
        #[source]
        source: reqwest::Error,
    },
    /// The remote API answered with a non-success status
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },
    /// Semester not found in the saved plan
    #[error("Semester {number} not found")]
    SemesterNotFound { number: u32 },
    /// A completed semester was saved with an ungraded course.
    /// This blocks unconditionally and cannot be overridden.
    #[error("Course '{course_code}' has no grade; completed semesters require a grade for every course")]
    MissingGrade { course_code: String },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating HTTP transport errors with optional context.
pub struct HttpErrorBuilder {
    message: String,
}

impl HttpErrorBuilder {
    /// Create a new HTTP error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: reqwest::Error) -> PlannerError {
        PlannerError::Http {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> PlannerError {
        PlannerError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl PlannerError {
    /// Creates a builder for HTTP transport errors.
    pub fn http(message: impl Into<String>) -> HttpErrorBuilder {
        HttpErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates an API error from a response status and message body.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        PlannerError::Api {
            status,
            message: message.into(),
        }
    }

    /// True when the error is a transport or API failure the user can retry.
    pub fn is_retryable(&self) -> bool {
        matches!(self, PlannerError::Http { .. } | PlannerError::Api { .. })
    }
}

/// Specialized extension trait for transport-related Results.
pub trait HttpResultExt<T> {
    /// Map reqwest errors with a message.
    fn http_context(self, message: &str) -> Result<T>;
}

impl<T> HttpResultExt<T> for std::result::Result<T, reqwest::Error> {
    fn http_context(self, message: &str) -> Result<T> {
        self.map_err(|e| PlannerError::http(message).with_source(e))
    }
}

/// Result type alias for planner operations
pub type Result<T> = std::result::Result<T, PlannerError>;
