//! Sign Up Use Case
//!
//! Registers a new identity.

use std::sync::Arc;

use platform::password::{ClearTextPassword, CredentialHasher};

use crate::application::config::AuthConfig;
use crate::application::credentials::hash_password;
use crate::application::registry::IdentityRegistry;
use crate::domain::entity::identity::Identity;
use crate::domain::repository::IdentityRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// Sign up input
pub struct SignUpInput {
    pub email: String,
    pub password: String,
}

/// Sign up use case
pub struct SignUpUseCase<R>
where
    R: IdentityRepository,
{
    registry: IdentityRegistry<R>,
    hasher: CredentialHasher,
}

impl<R> SignUpUseCase<R>
where
    R: IdentityRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self {
            registry: IdentityRegistry::new(repo, config.persistence_timeout),
            hasher: config.credential_hasher(),
        }
    }

    /// Returns the created identity, credential included. Shape it with
    /// `IdentityResponse` before it leaves the system.
    pub async fn execute(&self, input: SignUpInput) -> AuthResult<Identity> {
        let email = Email::new(input.email)?;
        let password = ClearTextPassword::from(input.password);

        // Check if email is taken
        if !self.registry.find_by_email(email.as_str()).await?.is_empty() {
            tracing::debug!("Sign up rejected: email already registered");
            return Err(AuthError::IdentityAlreadyExists);
        }

        let credential = hash_password(&self.hasher, password).await?;

        // A concurrent sign up can still win here; the store's unique
        // constraint reports it as IdentityAlreadyExists.
        let identity = self.registry.create(&email, &credential).await?;

        tracing::info!(identity_id = %identity.id, "Identity signed up");

        Ok(identity)
    }
}
