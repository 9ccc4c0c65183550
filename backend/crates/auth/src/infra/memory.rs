//! In-Memory Repository Implementation
//!
//! Same contract as the PostgreSQL adapter, including the unique email
//! rule. Used by tests and local wiring.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::entity::identity::Identity;
use crate::domain::repository::IdentityRepository;
use crate::domain::value_object::{IdentityId, credential::UserCredential, email::Email};
use crate::error::{AuthError, AuthResult};

/// In-memory identity repository
#[derive(Clone, Default)]
pub struct InMemoryIdentityRepository {
    identities: Arc<RwLock<Vec<Identity>>>,
}

impl InMemoryIdentityRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored identities
    pub async fn len(&self) -> usize {
        self.identities.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.identities.read().await.is_empty()
    }

    /// Insert without the unique rule, to stage corrupted data
    #[cfg(test)]
    pub(crate) async fn insert_unchecked(&self, identity: Identity) {
        self.identities.write().await.push(identity);
    }
}

impl IdentityRepository for InMemoryIdentityRepository {
    async fn find_by_email(&self, email: &str) -> AuthResult<Vec<Identity>> {
        let identities = self.identities.read().await;
        Ok(identities
            .iter()
            .filter(|identity| identity.email.as_str() == email)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: &IdentityId) -> AuthResult<Option<Identity>> {
        let identities = self.identities.read().await;
        Ok(identities.iter().find(|identity| identity.id == *id).cloned())
    }

    async fn create(&self, email: &Email, credential: &UserCredential) -> AuthResult<Identity> {
        let mut identities = self.identities.write().await;

        if identities.iter().any(|identity| identity.email == *email) {
            return Err(AuthError::IdentityAlreadyExists);
        }

        let identity = Identity::new(IdentityId::new(), email.clone(), credential.clone());
        identities.push(identity.clone());

        Ok(identity)
    }

    async fn save(&self, identity: &Identity) -> AuthResult<Identity> {
        let mut identities = self.identities.write().await;

        let stored = identities
            .iter_mut()
            .find(|stored| stored.id == identity.id)
            .ok_or(AuthError::IdentityNotFound)?;
        stored.replace_credential(identity.credential.clone());

        Ok(stored.clone())
    }
}
