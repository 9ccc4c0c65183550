//! Authentication Service
//!
//! Bundles the auth use cases over one repository and one configuration.

use std::sync::Arc;

use crate::application::change_password::{ChangePasswordInput, ChangePasswordUseCase};
use crate::application::config::AuthConfig;
use crate::application::current_identity::{AuthStatus, CurrentIdentityUseCase};
use crate::application::sign_in::{SignInInput, SignInUseCase};
use crate::application::sign_up::{SignUpInput, SignUpUseCase};
use crate::domain::entity::identity::Identity;
use crate::domain::repository::IdentityRepository;
use crate::domain::value_object::IdentityId;
use crate::error::AuthResult;

pub struct AuthService<R>
where
    R: IdentityRepository,
{
    sign_up: SignUpUseCase<R>,
    sign_in: SignInUseCase<R>,
    change_password: ChangePasswordUseCase<R>,
    current_identity: CurrentIdentityUseCase<R>,
}

impl<R> AuthService<R>
where
    R: IdentityRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self {
            sign_up: SignUpUseCase::new(Arc::clone(&repo), Arc::clone(&config)),
            sign_in: SignInUseCase::new(Arc::clone(&repo), Arc::clone(&config)),
            change_password: ChangePasswordUseCase::new(
                Arc::clone(&repo),
                Arc::clone(&config),
            ),
            current_identity: CurrentIdentityUseCase::new(repo, config),
        }
    }

    pub async fn sign_up(
        &self,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> AuthResult<Identity> {
        self.sign_up
            .execute(SignUpInput {
                email: email.into(),
                password: password.into(),
            })
            .await
    }

    pub async fn sign_in(
        &self,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> AuthResult<Identity> {
        self.sign_in
            .execute(SignInInput {
                email: email.into(),
                password: password.into(),
            })
            .await
    }

    pub async fn change_password(
        &self,
        identity_id: &IdentityId,
        current_password: impl Into<String>,
        new_password: impl Into<String>,
    ) -> AuthResult<Identity> {
        self.change_password
            .execute(
                identity_id,
                ChangePasswordInput {
                    current_password: current_password.into(),
                    new_password: new_password.into(),
                },
            )
            .await
    }

    pub async fn current_identity(
        &self,
        session_identity: Option<IdentityId>,
    ) -> AuthResult<AuthStatus> {
        self.current_identity.execute(session_identity).await
    }
}
