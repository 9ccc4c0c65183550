//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Identity entity, value objects, repository traits
//! - `application/` - Use cases, identity registry, configuration
//! - `infra/` - PostgreSQL and in-memory repositories
//! - `presentation/` - Request/response DTOs
//!
//! ## Features
//! - Sign up / sign in with email + password
//! - Password change for an authenticated identity
//! - Current-identity resolution for a caller-held session
//!
//! ## Security Model
//! - Passwords stored as salted scrypt digests (`salt.digestHex`)
//! - Constant-time digest comparison
//! - Hashing runs on the blocking pool, store calls are deadline-bound

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::service::AuthService;
pub use error::{AuthError, AuthResult};
pub use infra::{memory::InMemoryIdentityRepository, postgres::PgIdentityRepository};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}
