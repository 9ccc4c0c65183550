//! Identity Entity
//!
//! A registered email + credential pair; the unit of authentication.

use crate::domain::value_object::{IdentityId, credential::UserCredential, email::Email};

/// Identity entity
///
/// Deliberately not `Serialize`: the credential must never leave the system.
/// Use `presentation::dto::IdentityResponse` to shape it for callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Assigned by the persistence layer at creation
    pub id: IdentityId,
    /// Unique, stored exactly as registered
    pub email: Email,
    /// Encoded `salt.digestHex`
    pub credential: UserCredential,
}

impl Identity {
    pub fn new(id: IdentityId, email: Email, credential: UserCredential) -> Self {
        Self {
            id,
            email,
            credential,
        }
    }

    /// Replace the stored credential (the only mutable field)
    pub fn replace_credential(&mut self, credential: UserCredential) {
        self.credential = credential;
    }
}
