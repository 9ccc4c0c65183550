//! Reports Error Types
//!
//! This module provides estimate-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Reports-specific result type alias
pub type ReportsResult<T> = Result<T, ReportsError>;

/// Reports-specific error variants
///
/// "No matching reports" is not an error; the estimate is simply absent.
#[derive(Debug, Error)]
pub enum ReportsError {
    /// Query failed validation
    #[error("Invalid estimate query: {0}")]
    InvalidQuery(String),

    /// Report store failed or timed out
    #[error("Report store unavailable: {0}")]
    PersistenceUnavailable(String),
}

impl ReportsError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ReportsError::InvalidQuery(_) => ErrorKind::BadRequest,
            ReportsError::PersistenceUnavailable(_) => ErrorKind::ServiceUnavailable,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        let err = AppError::new(self.kind(), self.to_string());
        match self {
            ReportsError::PersistenceUnavailable(_) => err.with_action("Please try again later"),
            ReportsError::InvalidQuery(_) => err,
        }
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            ReportsError::PersistenceUnavailable(msg) => {
                tracing::warn!(message = %msg, "Report store unavailable");
            }
            ReportsError::InvalidQuery(msg) => {
                tracing::debug!(message = %msg, "Rejected estimate query");
            }
        }
    }
}

impl From<ReportsError> for AppError {
    fn from(err: ReportsError) -> Self {
        err.log();
        err.to_app_error()
    }
}
