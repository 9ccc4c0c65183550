//! Current Identity Use Case
//!
//! Resolves the identity a session recorded at sign in. The session itself
//! lives with the caller; only its identity id is passed in.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::registry::IdentityRegistry;
use crate::domain::entity::identity::Identity;
use crate::domain::repository::IdentityRepository;
use crate::domain::value_object::IdentityId;
use crate::error::AuthResult;

/// Authentication status of a caller
#[derive(Debug, Clone)]
pub struct AuthStatus {
    pub is_authenticated: bool,
    pub identity: Option<Identity>,
}

impl AuthStatus {
    pub fn anonymous() -> Self {
        Self {
            is_authenticated: false,
            identity: None,
        }
    }

    pub fn authenticated(identity: Identity) -> Self {
        Self {
            is_authenticated: true,
            identity: Some(identity),
        }
    }
}

/// Current identity use case
pub struct CurrentIdentityUseCase<R>
where
    R: IdentityRepository,
{
    registry: IdentityRegistry<R>,
}

impl<R> CurrentIdentityUseCase<R>
where
    R: IdentityRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self {
            registry: IdentityRegistry::new(repo, config.persistence_timeout),
        }
    }

    /// An id that no longer resolves is treated as signed out
    pub async fn execute(&self, session_identity: Option<IdentityId>) -> AuthResult<AuthStatus> {
        let Some(id) = session_identity else {
            return Ok(AuthStatus::anonymous());
        };

        match self.registry.find_by_id(&id).await? {
            Some(identity) => Ok(AuthStatus::authenticated(identity)),
            None => {
                tracing::debug!(identity_id = %id, "Session refers to an unknown identity");
                Ok(AuthStatus::anonymous())
            }
        }
    }
}
