//! Credential Hashing and Verification
//!
//! Passwords are stored as `salt.digestHex`:
//! - `salt` is [`SALT_LEN`] bytes from the OS CSPRNG, lower-hex encoded
//! - `digestHex` is the lower-hex scrypt output ([`DIGEST_LEN`] bytes) over
//!   the password and the salt *string* bytes
//!
//! The default scrypt cost (`log_n = 14, r = 8, p = 1`) matches credentials
//! already stored by the previous backend, so they keep verifying.
//!
//! ## Security Features
//! - Memory-hard key derivation (scrypt)
//! - Zeroization of clear text passwords
//! - Constant-time digest comparison

use std::fmt;

use scrypt::Params;
use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::crypto::{constant_time_eq, is_hex, random_hex};

/// Random salt length in bytes (hex encoded to twice as many characters)
pub const SALT_LEN: usize = 8;

/// Derived digest length in bytes
pub const DIGEST_LEN: usize = 32;

/// Separator between salt and digest in the encoded form
pub const SEPARATOR: char = '.';

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CredentialError {
    /// Stored credential is not `salt.digestHex` with two non-empty hex parts
    #[error("Malformed credential: expected `salt.digestHex`")]
    Malformed,

    /// Key derivation rejected its parameters
    #[error("Credential hashing failed: {0}")]
    HashingFailed(String),
}

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// Clear text password with automatic memory zeroization
///
/// No policy is applied here: any string can be hashed and verified.
/// Not `Clone`, and `Debug` output is redacted.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl From<String> for ClearTextPassword {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl From<&str> for ClearTextPassword {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Encoded Credential (Safe to store)
// ============================================================================

/// Parsed `salt.digestHex` credential
///
/// Parsing accepts exactly one separator with a non-empty hex string on each
/// side; the digest must also decode to whole bytes.
#[derive(Clone, PartialEq, Eq)]
pub struct EncodedCredential {
    encoded: String,
    salt_end: usize,
    digest: Vec<u8>,
}

impl EncodedCredential {
    /// Parse a stored credential
    pub fn parse(encoded: &str) -> Result<Self, CredentialError> {
        let mut parts = encoded.split(SEPARATOR);
        let (Some(salt), Some(digest_hex), None) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(CredentialError::Malformed);
        };

        if !is_hex(salt) || !is_hex(digest_hex) {
            return Err(CredentialError::Malformed);
        }

        let digest = hex::decode(digest_hex).map_err(|_| CredentialError::Malformed)?;

        Ok(Self {
            encoded: encoded.to_string(),
            salt_end: salt.len(),
            digest,
        })
    }

    fn from_parts(salt: String, digest: Vec<u8>) -> Self {
        let salt_end = salt.len();
        let encoded = format!("{}{}{}", salt, SEPARATOR, hex::encode(&digest));
        Self {
            encoded,
            salt_end,
            digest,
        }
    }

    /// The hex salt string (the exact bytes fed to the key derivation)
    pub fn salt(&self) -> &str {
        &self.encoded[..self.salt_end]
    }

    /// Decoded digest bytes
    pub fn digest(&self) -> &[u8] {
        &self.digest
    }

    /// The `salt.digestHex` string for storage
    pub fn as_str(&self) -> &str {
        &self.encoded
    }

    pub fn into_string(self) -> String {
        self.encoded
    }
}

impl fmt::Debug for EncodedCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncodedCredential")
            .field("salt", &self.salt())
            .field("digest", &"[HASH]")
            .finish()
    }
}

// ============================================================================
// Hasher
// ============================================================================

/// scrypt cost parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HasherConfig {
    /// log2 of the CPU/memory cost `N`
    pub log_n: u8,
    /// Block size
    pub r: u32,
    /// Parallelism
    pub p: u32,
}

impl Default for HasherConfig {
    fn default() -> Self {
        Self {
            log_n: 14,
            r: 8,
            p: 1,
        }
    }
}

/// Derives and verifies salted credentials
///
/// Cheap to clone; holds only the cost parameters.
#[derive(Debug, Clone, Default)]
pub struct CredentialHasher {
    config: HasherConfig,
}

impl CredentialHasher {
    pub fn new(config: HasherConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &HasherConfig {
        &self.config
    }

    /// Hash a password with a fresh random salt
    pub fn hash(&self, password: &ClearTextPassword) -> Result<EncodedCredential, CredentialError> {
        self.hash_with_salt(password, random_hex(SALT_LEN))
    }

    /// Verify a password against a stored `salt.digestHex` credential
    ///
    /// ## Returns
    /// - `Ok(true)` if the password matches
    /// - `Ok(false)` if it does not
    /// - `Err(CredentialError::Malformed)` if `encoded` has the wrong shape
    pub fn verify(
        &self,
        password: &ClearTextPassword,
        encoded: &str,
    ) -> Result<bool, CredentialError> {
        let stored = EncodedCredential::parse(encoded)?;
        let derived = self.derive(password.as_bytes(), stored.salt())?;

        Ok(constant_time_eq(&derived, stored.digest()))
    }

    fn hash_with_salt(
        &self,
        password: &ClearTextPassword,
        salt: String,
    ) -> Result<EncodedCredential, CredentialError> {
        let digest = self.derive(password.as_bytes(), &salt)?;
        Ok(EncodedCredential::from_parts(salt, digest))
    }

    fn derive(&self, password: &[u8], salt: &str) -> Result<Vec<u8>, CredentialError> {
        let params = Params::new(self.config.log_n, self.config.r, self.config.p, DIGEST_LEN)
            .map_err(|e| CredentialError::HashingFailed(e.to_string()))?;

        let mut output = vec![0u8; DIGEST_LEN];
        scrypt::scrypt(password, salt.as_bytes(), &params, &mut output)
            .map_err(|e| CredentialError::HashingFailed(e.to_string()))?;

        Ok(output)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Reference vector: scrypt(N=16384, r=8, p=1, dkLen=32)
    const KNOWN_SALT: &str = "0123456789abcdef";
    const KNOWN_DIGEST: &str = "6213c49d9371c49315a1958061b19d4c834a67a8d6c3f63b67c7a15bb91bedd4";

    fn hasher() -> CredentialHasher {
        CredentialHasher::default()
    }

    #[test]
    fn test_hash_and_verify() {
        let password = ClearTextPassword::new("mypassword");
        let encoded = hasher().hash(&password).unwrap();

        assert!(hasher().verify(&password, encoded.as_str()).unwrap());

        let wrong = ClearTextPassword::new("mypassword1");
        assert!(!hasher().verify(&wrong, encoded.as_str()).unwrap());
    }

    #[test]
    fn test_encoded_shape() {
        let encoded = hasher().hash(&"dovlas123".into()).unwrap();
        let (salt, digest) = encoded.as_str().split_once(SEPARATOR).unwrap();

        assert_eq!(salt.len(), SALT_LEN * 2);
        assert_eq!(digest.len(), DIGEST_LEN * 2);
        assert!(is_hex(salt) && is_hex(digest));
        assert_ne!(encoded.as_str(), "dovlas123");
    }

    #[test]
    fn test_same_password_different_salts() {
        let password = ClearTextPassword::new("SamePassword");
        let first = hasher().hash(&password).unwrap();
        let second = hasher().hash(&password).unwrap();

        assert_ne!(first.salt(), second.salt());
        assert_ne!(first.as_str(), second.as_str());
        assert!(hasher().verify(&password, first.as_str()).unwrap());
        assert!(hasher().verify(&password, second.as_str()).unwrap());
    }

    #[test]
    fn test_known_vector() {
        let stored = format!("{}.{}", KNOWN_SALT, KNOWN_DIGEST);

        assert!(hasher().verify(&"mypassword".into(), &stored).unwrap());
        assert!(!hasher().verify(&"mypassword ".into(), &stored).unwrap());

        let rebuilt = hasher()
            .hash_with_salt(&"mypassword".into(), KNOWN_SALT.to_string())
            .unwrap();
        assert_eq!(rebuilt.as_str(), stored);
    }

    #[test]
    fn test_uppercase_digest_still_verifies() {
        let stored = format!("{}.{}", KNOWN_SALT, KNOWN_DIGEST.to_uppercase());
        assert!(hasher().verify(&"mypassword".into(), &stored).unwrap());
    }

    #[test]
    fn test_truncated_digest_does_not_verify() {
        let stored = format!("{}.{}", KNOWN_SALT, &KNOWN_DIGEST[..32]);
        assert!(!hasher().verify(&"mypassword".into(), &stored).unwrap());
    }

    #[test]
    fn test_malformed_credentials() {
        let password = ClearTextPassword::new("anything");
        for encoded in [
            "",
            "abcdef",
            ".abcdef",
            "abcdef.",
            ".",
            "ab.cd.ef",
            "ab..cd",
            "zz.abcd",
            "abcd.xyz0",
            "abcd.abc",
            "ab cd.abcd",
        ] {
            assert_eq!(
                hasher().verify(&password, encoded),
                Err(CredentialError::Malformed),
                "expected malformed: {encoded:?}"
            );
        }
    }

    #[test]
    fn test_parse_exposes_parts() {
        let stored = format!("{}.{}", KNOWN_SALT, KNOWN_DIGEST);
        let parsed = EncodedCredential::parse(&stored).unwrap();

        assert_eq!(parsed.salt(), KNOWN_SALT);
        assert_eq!(parsed.digest().len(), DIGEST_LEN);
        assert_eq!(parsed.as_str(), stored);
    }

    #[test]
    fn test_invalid_params_fail_hashing() {
        let hasher = CredentialHasher::new(HasherConfig {
            log_n: 64,
            r: 8,
            p: 1,
        });
        let result = hasher.hash(&"password".into());
        assert!(matches!(result, Err(CredentialError::HashingFailed(_))));
    }

    #[test]
    fn test_debug_redaction() {
        let password = ClearTextPassword::new("secret-value");
        let debug_output = format!("{:?}", password);
        assert!(debug_output.contains("REDACTED"));
        assert!(!debug_output.contains("secret-value"));

        let stored = format!("{}.{}", KNOWN_SALT, KNOWN_DIGEST);
        let parsed = EncodedCredential::parse(&stored).unwrap();
        let debug_output = format!("{:?}", parsed);
        assert!(debug_output.contains("[HASH]"));
        assert!(!debug_output.contains(KNOWN_DIGEST));
    }
}
