//! Value Object Module

pub mod credential;
pub mod email;

pub use kernel::id::IdentityId;
