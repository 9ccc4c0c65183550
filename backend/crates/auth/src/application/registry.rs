//! Identity Registry
//!
//! Bounded access to the identity store. Every call is raced against
//! `AuthConfig::persistence_timeout`; expiry is reported as
//! `AuthError::PersistenceUnavailable`. No retries, no uniqueness checks.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::entity::identity::Identity;
use crate::domain::repository::IdentityRepository;
use crate::domain::value_object::{IdentityId, credential::UserCredential, email::Email};
use crate::error::{AuthError, AuthResult};

pub struct IdentityRegistry<R>
where
    R: IdentityRepository,
{
    repo: Arc<R>,
    timeout: Duration,
}

impl<R> IdentityRegistry<R>
where
    R: IdentityRepository,
{
    pub fn new(repo: Arc<R>, timeout: Duration) -> Self {
        Self { repo, timeout }
    }

    /// All identities registered with `email`, possibly more than one
    pub async fn find_by_email(&self, email: &str) -> AuthResult<Vec<Identity>> {
        self.bounded("find_by_email", self.repo.find_by_email(email)).await
    }

    pub async fn find_by_id(&self, id: &IdentityId) -> AuthResult<Option<Identity>> {
        self.bounded("find_by_id", self.repo.find_by_id(id)).await
    }

    pub async fn create(&self, email: &Email, credential: &UserCredential) -> AuthResult<Identity> {
        self.bounded("create", self.repo.create(email, credential)).await
    }

    pub async fn save(&self, identity: &Identity) -> AuthResult<Identity> {
        self.bounded("save", self.repo.save(identity)).await
    }

    async fn bounded<T>(
        &self,
        operation: &'static str,
        call: impl Future<Output = AuthResult<T>>,
    ) -> AuthResult<T> {
        match tokio::time::timeout(self.timeout, call).await {
            Ok(result) => result,
            Err(_) => {
                tracing::warn!(
                    operation,
                    timeout_ms = self.timeout.as_millis() as u64,
                    "Identity store call timed out"
                );
                Err(AuthError::PersistenceUnavailable(format!(
                    "{} timed out after {:?}",
                    operation, self.timeout
                )))
            }
        }
    }
}

impl<R> Clone for IdentityRegistry<R>
where
    R: IdentityRepository,
{
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
            timeout: self.timeout,
        }
    }
}
