//! Change Password Use Case
//!
//! Replaces the credential of an authenticated identity.

use std::sync::Arc;

use platform::password::{ClearTextPassword, CredentialHasher};

use crate::application::config::AuthConfig;
use crate::application::credentials::{authenticate, hash_password};
use crate::application::registry::IdentityRegistry;
use crate::domain::entity::identity::Identity;
use crate::domain::repository::IdentityRepository;
use crate::domain::value_object::IdentityId;
use crate::error::{AuthError, AuthResult};

/// Change password input
pub struct ChangePasswordInput {
    pub current_password: String,
    pub new_password: String,
}

/// Change password use case
pub struct ChangePasswordUseCase<R>
where
    R: IdentityRepository,
{
    registry: IdentityRegistry<R>,
    hasher: CredentialHasher,
}

impl<R> ChangePasswordUseCase<R>
where
    R: IdentityRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self {
            registry: IdentityRegistry::new(repo, config.persistence_timeout),
            hasher: config.credential_hasher(),
        }
    }

    pub async fn execute(
        &self,
        identity_id: &IdentityId,
        input: ChangePasswordInput,
    ) -> AuthResult<Identity> {
        let current = ClearTextPassword::from(input.current_password);
        let new_password = ClearTextPassword::from(input.new_password);

        let mut identity = self
            .registry
            .find_by_id(identity_id)
            .await?
            .ok_or(AuthError::IdentityNotFound)?;

        authenticate(&self.hasher, current, &identity).await?;

        let credential = hash_password(&self.hasher, new_password).await?;
        identity.replace_credential(credential);

        let identity = self.registry.save(&identity).await?;

        tracing::info!(identity_id = %identity.id, "Credential changed");

        Ok(identity)
    }
}
