//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::identity::Identity;
use crate::domain::value_object::{IdentityId, credential::UserCredential, email::Email};
use crate::error::AuthResult;

/// Identity repository trait
///
/// Implementations must enforce email uniqueness on `create` and report a
/// violation as `AuthError::IdentityAlreadyExists`. Any other storage failure
/// is `AuthError::PersistenceUnavailable`.
#[trait_variant::make(IdentityRepository: Send)]
pub trait LocalIdentityRepository {
    /// Find every identity registered with `email` (exact match)
    ///
    /// Returns all matches so that callers can detect duplicates.
    async fn find_by_email(&self, email: &str) -> AuthResult<Vec<Identity>>;

    /// Find identity by ID
    async fn find_by_id(&self, id: &IdentityId) -> AuthResult<Option<Identity>>;

    /// Persist a new identity and return it with its assigned ID
    async fn create(&self, email: &Email, credential: &UserCredential) -> AuthResult<Identity>;

    /// Persist the credential of an existing identity
    async fn save(&self, identity: &Identity) -> AuthResult<Identity>;
}
