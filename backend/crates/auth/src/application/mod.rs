//! Application Layer
//!
//! Use cases and application services.

pub mod change_password;
pub mod config;
mod credentials;
pub mod current_identity;
pub mod registry;
pub mod service;
pub mod sign_in;
pub mod sign_up;

// Re-exports
pub use change_password::{ChangePasswordInput, ChangePasswordUseCase};
pub use config::AuthConfig;
pub use current_identity::{AuthStatus, CurrentIdentityUseCase};
pub use registry::IdentityRegistry;
pub use service::AuthService;
pub use sign_in::{SignInInput, SignInUseCase};
pub use sign_up::{SignUpInput, SignUpUseCase};
