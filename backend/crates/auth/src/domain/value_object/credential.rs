//! User Credential Value Object
//!
//! The stored `salt.digestHex` string. Opaque to the domain: parsing and
//! verification are delegated to `platform::password`.

use platform::password::EncodedCredential;
use std::fmt;

/// Stored credential (safe to persist, never to serialize)
#[derive(Clone, PartialEq, Eq)]
pub struct UserCredential(String);

impl UserCredential {
    /// Create from database value (not validated; verification reports
    /// malformed values)
    pub fn from_db(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_db(self) -> String {
        self.0
    }
}

impl From<EncodedCredential> for UserCredential {
    fn from(encoded: EncodedCredential) -> Self {
        Self(encoded.into_string())
    }
}

impl fmt::Debug for UserCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("UserCredential").field(&"[HASH]").finish()
    }
}
