//! Sign In Use Case
//!
//! Authenticates an identity by email and password.

use std::sync::Arc;

use platform::password::{ClearTextPassword, CredentialHasher};

use crate::application::config::AuthConfig;
use crate::application::credentials::authenticate;
use crate::application::registry::IdentityRegistry;
use crate::domain::entity::identity::Identity;
use crate::domain::repository::IdentityRepository;
use crate::error::{AuthError, AuthResult};

/// Sign in input
pub struct SignInInput {
    /// Matched verbatim against stored emails
    pub email: String,
    pub password: String,
}

/// Sign in use case
pub struct SignInUseCase<R>
where
    R: IdentityRepository,
{
    registry: IdentityRegistry<R>,
    hasher: CredentialHasher,
}

impl<R> SignInUseCase<R>
where
    R: IdentityRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self {
            registry: IdentityRegistry::new(repo, config.persistence_timeout),
            hasher: config.credential_hasher(),
        }
    }

    pub async fn execute(&self, input: SignInInput) -> AuthResult<Identity> {
        let password = ClearTextPassword::from(input.password);

        let mut matches = self.registry.find_by_email(&input.email).await?;

        let identity = match matches.len() {
            0 => {
                tracing::debug!("Sign in rejected: unknown email");
                return Err(AuthError::IdentityNotFound);
            }
            1 => matches.swap_remove(0),
            count => {
                tracing::error!(count, "Multiple identities share one email");
                return Err(AuthError::InvariantViolation {
                    email: input.email,
                    count,
                });
            }
        };

        authenticate(&self.hasher, password, &identity).await?;

        tracing::info!(identity_id = %identity.id, "Identity signed in");

        Ok(identity)
    }
}
