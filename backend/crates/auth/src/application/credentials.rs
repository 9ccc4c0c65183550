//! Off-executor credential hashing
//!
//! scrypt is deliberately slow; both directions run on the blocking pool.

use platform::password::{ClearTextPassword, CredentialHasher};

use crate::domain::entity::identity::Identity;
use crate::domain::value_object::credential::UserCredential;
use crate::error::{AuthError, AuthResult};

pub(crate) async fn hash_password(
    hasher: &CredentialHasher,
    password: ClearTextPassword,
) -> AuthResult<UserCredential> {
    let hasher = hasher.clone();
    let encoded = tokio::task::spawn_blocking(move || hasher.hash(&password))
        .await
        .map_err(|e| AuthError::Internal(format!("Hashing task failed: {}", e)))??;

    Ok(UserCredential::from(encoded))
}

/// `Ok(false)` on mismatch, `MalformedCredential` if the stored value is
/// not `salt.digestHex`
pub(crate) async fn verify_password(
    hasher: &CredentialHasher,
    password: ClearTextPassword,
    credential: &UserCredential,
) -> AuthResult<bool> {
    let hasher = hasher.clone();
    let stored = credential.as_str().to_string();
    let matched = tokio::task::spawn_blocking(move || hasher.verify(&password, &stored))
        .await
        .map_err(|e| AuthError::Internal(format!("Verification task failed: {}", e)))??;

    Ok(matched)
}

/// Check `password` against the identity's stored credential
///
/// Mismatch is `InvalidCredential`; a corrupt stored value is
/// `MalformedCredential` and is logged as a defect.
pub(crate) async fn authenticate(
    hasher: &CredentialHasher,
    password: ClearTextPassword,
    identity: &Identity,
) -> AuthResult<()> {
    match verify_password(hasher, password, &identity.credential).await {
        Ok(true) => Ok(()),
        Ok(false) => {
            tracing::warn!(identity_id = %identity.id, "Credential mismatch");
            Err(AuthError::InvalidCredential)
        }
        Err(AuthError::MalformedCredential) => {
            tracing::error!(identity_id = %identity.id, "Stored credential is malformed");
            Err(AuthError::MalformedCredential)
        }
        Err(e) => Err(e),
    }
}
