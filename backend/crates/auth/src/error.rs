//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::password::CredentialError;
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// An identity with this email is already registered
    #[error("Email already in use")]
    IdentityAlreadyExists,

    /// No identity for the given email or id
    #[error("Identity not found")]
    IdentityNotFound,

    /// Password does not match the stored credential
    #[error("Invalid credential")]
    InvalidCredential,

    /// Stored credential is not `salt.digestHex` (data corruption)
    #[error("Stored credential is malformed")]
    MalformedCredential,

    /// More than one identity shares an email (data corruption)
    #[error("Found {count} identities sharing one email")]
    InvariantViolation { email: String, count: usize },

    /// Persistence collaborator failed or timed out
    #[error("Identity store unavailable: {0}")]
    PersistenceUnavailable(String),

    /// Email failed format validation
    #[error("Invalid email: {0}")]
    InvalidEmail(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::IdentityAlreadyExists => ErrorKind::Conflict,
            AuthError::IdentityNotFound => ErrorKind::NotFound,
            AuthError::InvalidCredential => ErrorKind::Unauthorized,
            AuthError::InvalidEmail(_) => ErrorKind::BadRequest,
            AuthError::PersistenceUnavailable(_) => ErrorKind::ServiceUnavailable,
            AuthError::MalformedCredential
            | AuthError::InvariantViolation { .. }
            | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// True for failures that indicate corrupted data rather than bad input
    pub fn is_defect(&self) -> bool {
        matches!(
            self,
            AuthError::MalformedCredential | AuthError::InvariantViolation { .. }
        )
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        let err = AppError::new(self.kind(), self.to_string());
        match self {
            AuthError::IdentityAlreadyExists => err.with_action("Sign in instead"),
            AuthError::PersistenceUnavailable(_) => err.with_action("Please try again later"),
            _ => err,
        }
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            AuthError::InvariantViolation { count, .. } => {
                tracing::error!(count, "Identity invariant violated");
            }
            AuthError::MalformedCredential => {
                tracing::error!("Malformed stored credential");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::PersistenceUnavailable(msg) => {
                tracing::warn!(message = %msg, "Identity store unavailable");
            }
            AuthError::InvalidCredential => {
                tracing::warn!("Invalid sign in attempt");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        err.log();
        err.to_app_error()
    }
}

impl From<CredentialError> for AuthError {
    fn from(err: CredentialError) -> Self {
        match err {
            CredentialError::Malformed => AuthError::MalformedCredential,
            CredentialError::HashingFailed(msg) => AuthError::Internal(msg),
        }
    }
}
