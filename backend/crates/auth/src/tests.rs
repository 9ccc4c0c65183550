//! Scenario tests for the auth crate
//! Use cases run against the in-memory repository and a few fault-injecting
//! repositories; no database required.

#[cfg(test)]
mod support {
    use std::sync::Arc;
    use std::time::Duration;

    use platform::password::HasherConfig;

    use crate::application::config::AuthConfig;
    use crate::application::service::AuthService;
    use crate::domain::entity::identity::Identity;
    use crate::domain::repository::IdentityRepository;
    use crate::domain::value_object::{IdentityId, credential::UserCredential, email::Email};
    use crate::error::{AuthError, AuthResult};
    use crate::infra::memory::InMemoryIdentityRepository;

    /// Cheap scrypt cost so scenario tests stay fast
    pub fn config() -> Arc<AuthConfig> {
        Arc::new(AuthConfig {
            hasher: HasherConfig {
                log_n: 4,
                r: 8,
                p: 1,
            },
            persistence_timeout: Duration::from_secs(2),
        })
    }

    pub fn service() -> (AuthService<InMemoryIdentityRepository>, InMemoryIdentityRepository) {
        let repo = InMemoryIdentityRepository::new();
        let service = AuthService::new(Arc::new(repo.clone()), config());
        (service, repo)
    }

    /// Lookup never sees existing rows, as if a concurrent sign up committed
    /// between the check and the insert
    #[derive(Clone, Default)]
    pub struct BlindLookupRepository {
        pub inner: InMemoryIdentityRepository,
    }

    impl IdentityRepository for BlindLookupRepository {
        async fn find_by_email(&self, _email: &str) -> AuthResult<Vec<Identity>> {
            Ok(Vec::new())
        }

        async fn find_by_id(&self, id: &IdentityId) -> AuthResult<Option<Identity>> {
            self.inner.find_by_id(id).await
        }

        async fn create(&self, email: &Email, credential: &UserCredential) -> AuthResult<Identity> {
            self.inner.create(email, credential).await
        }

        async fn save(&self, identity: &Identity) -> AuthResult<Identity> {
            self.inner.save(identity).await
        }
    }

    /// Every call hangs forever
    pub struct StalledRepository;

    impl IdentityRepository for StalledRepository {
        async fn find_by_email(&self, _email: &str) -> AuthResult<Vec<Identity>> {
            std::future::pending().await
        }

        async fn find_by_id(&self, _id: &IdentityId) -> AuthResult<Option<Identity>> {
            std::future::pending().await
        }

        async fn create(
            &self,
            _email: &Email,
            _credential: &UserCredential,
        ) -> AuthResult<Identity> {
            std::future::pending().await
        }

        async fn save(&self, _identity: &Identity) -> AuthResult<Identity> {
            std::future::pending().await
        }
    }

    /// Lookups work, writes fail like a dropped connection
    #[derive(Clone, Default)]
    pub struct ReadOnlyRepository {
        pub inner: InMemoryIdentityRepository,
    }

    impl IdentityRepository for ReadOnlyRepository {
        async fn find_by_email(&self, email: &str) -> AuthResult<Vec<Identity>> {
            self.inner.find_by_email(email).await
        }

        async fn find_by_id(&self, id: &IdentityId) -> AuthResult<Option<Identity>> {
            self.inner.find_by_id(id).await
        }

        async fn create(
            &self,
            _email: &Email,
            _credential: &UserCredential,
        ) -> AuthResult<Identity> {
            Err(AuthError::PersistenceUnavailable("connection reset".into()))
        }

        async fn save(&self, _identity: &Identity) -> AuthResult<Identity> {
            Err(AuthError::PersistenceUnavailable("connection reset".into()))
        }
    }
}

#[cfg(test)]
mod sign_up_tests {
    use std::sync::Arc;

    use platform::crypto::is_hex;

    use super::support::*;
    use crate::application::service::AuthService;
    use crate::domain::repository::IdentityRepository;
    use crate::error::AuthError;

    #[tokio::test]
    async fn test_sign_up_creates_identity() {
        let (service, repo) = service();

        let identity = service
            .sign_up("alice@example.com", "dovlas123")
            .await
            .unwrap();

        assert_eq!(identity.email.as_str(), "alice@example.com");
        assert_eq!(repo.len().await, 1);

        let stored = repo.find_by_email("alice@example.com").await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id, identity.id);
    }

    #[tokio::test]
    async fn test_sign_up_stores_salted_digest_not_plaintext() {
        let (service, _repo) = service();

        let identity = service
            .sign_up("alice@example.com", "dovlas123")
            .await
            .unwrap();

        let (salt, digest) = identity.credential.as_str().split_once('.').unwrap();
        assert_ne!(identity.credential.as_str(), "dovlas123");
        assert_eq!(salt.len(), 16);
        assert_eq!(digest.len(), 64);
        assert!(is_hex(salt) && is_hex(digest));
    }

    #[tokio::test]
    async fn test_same_password_gets_distinct_salts() {
        let (service, _repo) = service();

        let first = service.sign_up("a@example.com", "shared").await.unwrap();
        let second = service.sign_up("b@example.com", "shared").await.unwrap();

        assert_ne!(first.credential, second.credential);
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let (service, repo) = service();

        service.sign_up("alice@example.com", "first").await.unwrap();
        let result = service.sign_up("alice@example.com", "second").await;

        assert!(matches!(result, Err(AuthError::IdentityAlreadyExists)));
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_email_is_case_sensitive() {
        let (service, repo) = service();

        service.sign_up("Alice@Example.com", "pw").await.unwrap();
        service.sign_up("alice@example.com", "pw").await.unwrap();

        assert_eq!(repo.len().await, 2);
    }

    #[tokio::test]
    async fn test_invalid_email_rejected_before_persisting() {
        let (service, repo) = service();

        let result = service.sign_up("not-an-email", "pw").await;

        assert!(matches!(result, Err(AuthError::InvalidEmail(_))));
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn test_concurrent_insert_caught_by_unique_rule() {
        let repo = BlindLookupRepository::default();
        let service = AuthService::new(Arc::new(repo.clone()), config());

        service.sign_up("race@example.com", "first").await.unwrap();
        let result = service.sign_up("race@example.com", "second").await;

        assert!(matches!(result, Err(AuthError::IdentityAlreadyExists)));
        assert_eq!(repo.inner.len().await, 1);
    }

    #[tokio::test]
    async fn test_store_failure_propagates_without_partial_state() {
        let repo = ReadOnlyRepository::default();
        let service = AuthService::new(Arc::new(repo.clone()), config());

        let result = service.sign_up("alice@example.com", "pw").await;

        assert!(matches!(result, Err(AuthError::PersistenceUnavailable(_))));
        assert!(repo.inner.is_empty().await);
    }
}

#[cfg(test)]
mod sign_in_tests {
    use std::sync::Arc;
    use std::time::Duration;

    use super::support::*;
    use crate::application::config::AuthConfig;
    use crate::application::service::AuthService;
    use crate::infra::memory::InMemoryIdentityRepository;
    use crate::domain::entity::identity::Identity;
    use crate::domain::value_object::{IdentityId, credential::UserCredential, email::Email};
    use crate::error::AuthError;

    #[tokio::test]
    async fn test_sign_up_then_sign_in() {
        let (service, _repo) = service();

        let created = service
            .sign_up("alice@example.com", "dovlas123")
            .await
            .unwrap();
        let signed_in = service
            .sign_in("alice@example.com", "dovlas123")
            .await
            .unwrap();

        assert_eq!(signed_in.id, created.id);
        assert_eq!(signed_in.email, created.email);
    }

    #[tokio::test]
    async fn test_unknown_email() {
        let (service, _repo) = service();

        let result = service.sign_in("nobody@example.com", "pw").await;
        assert!(matches!(result, Err(AuthError::IdentityNotFound)));
    }

    #[tokio::test]
    async fn test_wrong_password() {
        let (service, _repo) = service();
        service.sign_up("alice@example.com", "dovlas123").await.unwrap();

        let result = service.sign_in("alice@example.com", "dovlas124").await;
        assert!(matches!(result, Err(AuthError::InvalidCredential)));
    }

    #[tokio::test]
    async fn test_sign_in_uses_exact_email() {
        let (service, _repo) = service();
        service.sign_up("alice@example.com", "pw").await.unwrap();

        let result = service.sign_in("ALICE@example.com", "pw").await;
        assert!(matches!(result, Err(AuthError::IdentityNotFound)));
    }

    #[tokio::test]
    async fn test_duplicate_records_are_a_defect() {
        let (service, repo) = service();
        let email = Email::new("dup@example.com").unwrap();
        for _ in 0..2 {
            repo.insert_unchecked(Identity::new(
                IdentityId::new(),
                email.clone(),
                UserCredential::from_db("00.00"),
            ))
            .await;
        }

        let result = service.sign_in("dup@example.com", "pw").await;

        let err = result.unwrap_err();
        assert!(err.is_defect());
        assert!(matches!(err, AuthError::InvariantViolation { count: 2, .. }));
    }

    #[tokio::test]
    async fn test_malformed_stored_credential() {
        let (service, repo) = service();
        repo.insert_unchecked(Identity::new(
            IdentityId::new(),
            Email::new("broken@example.com").unwrap(),
            UserCredential::from_db("no-separator-here"),
        ))
        .await;

        let result = service.sign_in("broken@example.com", "pw").await;
        assert!(matches!(result, Err(AuthError::MalformedCredential)));
    }

    #[tokio::test]
    async fn test_stored_credential_from_previous_backend_verifies() {
        let (_, repo) = service();
        // Default cost, as written by the previous backend
        let service = AuthService::new(Arc::new(repo.clone()), Arc::new(AuthConfig::default()));
        repo.insert_unchecked(Identity::new(
            IdentityId::new(),
            Email::new("legacy@example.com").unwrap(),
            UserCredential::from_db(
                "0123456789abcdef.6213c49d9371c49315a1958061b19d4c834a67a8d6c3f63b67c7a15bb91bedd4",
            ),
        ))
        .await;

        assert!(service.sign_in("legacy@example.com", "mypassword").await.is_ok());
        assert!(matches!(
            service.sign_in("legacy@example.com", "MyPassword").await,
            Err(AuthError::InvalidCredential)
        ));
    }

    #[tokio::test]
    async fn test_environment_cannot_change_scrypt_cost() {
        let repo = InMemoryIdentityRepository::new();
        let deploy = |log_n: &'static str| {
            let config = AuthConfig::from_lookup(move |key| match key {
                "AUTH_SCRYPT_LOG_N" => Some(log_n.to_string()),
                _ => None,
            });
            AuthService::new(Arc::new(repo.clone()), Arc::new(config))
        };

        let created = deploy("10")
            .sign_up("alice@example.com", "dovlas123")
            .await
            .unwrap();
        let signed_in = deploy("11")
            .sign_in("alice@example.com", "dovlas123")
            .await
            .unwrap();

        assert_eq!(signed_in.id, created.id);
    }

    #[tokio::test]
    async fn test_stalled_store_times_out() {
        let config = Arc::new(AuthConfig {
            persistence_timeout: Duration::from_millis(50),
            ..(*config()).clone()
        });
        let service = AuthService::new(Arc::new(StalledRepository), config);

        let result = service.sign_in("alice@example.com", "pw").await;
        assert!(matches!(result, Err(AuthError::PersistenceUnavailable(_))));

        let result = service.sign_up("alice@example.com", "pw").await;
        assert!(matches!(result, Err(AuthError::PersistenceUnavailable(_))));
    }
}

#[cfg(test)]
mod change_password_tests {
    use std::sync::Arc;

    use super::support::*;
    use crate::application::service::AuthService;
    use crate::domain::value_object::IdentityId;
    use crate::error::AuthError;

    #[tokio::test]
    async fn test_change_password() {
        let (service, repo) = service();
        let created = service.sign_up("alice@example.com", "old-pw").await.unwrap();

        let updated = service
            .change_password(&created.id, "old-pw", "new-pw")
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.email, created.email);
        assert_ne!(updated.credential, created.credential);
        assert_eq!(repo.len().await, 1);

        assert!(matches!(
            service.sign_in("alice@example.com", "old-pw").await,
            Err(AuthError::InvalidCredential)
        ));
        assert_eq!(
            service
                .sign_in("alice@example.com", "new-pw")
                .await
                .unwrap()
                .id,
            created.id
        );
    }

    #[tokio::test]
    async fn test_wrong_current_password_keeps_credential() {
        let (service, _repo) = service();
        let created = service.sign_up("alice@example.com", "old-pw").await.unwrap();

        let result = service
            .change_password(&created.id, "guess", "new-pw")
            .await;

        assert!(matches!(result, Err(AuthError::InvalidCredential)));
        assert!(service.sign_in("alice@example.com", "old-pw").await.is_ok());
    }

    #[tokio::test]
    async fn test_unknown_identity() {
        let (service, _repo) = service();

        let result = service
            .change_password(&IdentityId::new(), "old-pw", "new-pw")
            .await;
        assert!(matches!(result, Err(AuthError::IdentityNotFound)));
    }

    #[tokio::test]
    async fn test_save_failure_propagates() {
        let repo = ReadOnlyRepository::default();
        let seeded = AuthService::new(Arc::new(repo.inner.clone()), config())
            .sign_up("alice@example.com", "old-pw")
            .await
            .unwrap();
        let service = AuthService::new(Arc::new(repo.clone()), config());

        let result = service
            .change_password(&seeded.id, "old-pw", "new-pw")
            .await;

        assert!(matches!(result, Err(AuthError::PersistenceUnavailable(_))));
        assert!(service.sign_in("alice@example.com", "old-pw").await.is_ok());
    }
}

#[cfg(test)]
mod current_identity_tests {
    use super::support::*;
    use crate::domain::value_object::IdentityId;

    #[tokio::test]
    async fn test_no_session_is_anonymous() {
        let (service, _repo) = service();

        let status = service.current_identity(None).await.unwrap();
        assert!(!status.is_authenticated);
        assert!(status.identity.is_none());
    }

    #[tokio::test]
    async fn test_stale_session_is_anonymous() {
        let (service, _repo) = service();

        let status = service
            .current_identity(Some(IdentityId::new()))
            .await
            .unwrap();
        assert!(!status.is_authenticated);
    }

    #[tokio::test]
    async fn test_valid_session_resolves_identity() {
        let (service, _repo) = service();
        let created = service.sign_up("alice@example.com", "pw").await.unwrap();

        let status = service.current_identity(Some(created.id)).await.unwrap();

        assert!(status.is_authenticated);
        assert_eq!(status.identity.unwrap().id, created.id);
    }
}

#[cfg(test)]
mod boundary_tests {
    use super::support::*;
    use crate::error::AuthError;
    use kernel::error::{app_error::AppError, kind::ErrorKind};

    #[tokio::test]
    async fn test_failures_map_to_distinct_kinds() {
        let (service, _repo) = service();
        service.sign_up("alice@example.com", "pw").await.unwrap();

        let conflict: AppError = service
            .sign_up("alice@example.com", "pw")
            .await
            .unwrap_err()
            .into();
        let not_found: AppError = service
            .sign_in("bob@example.com", "pw")
            .await
            .unwrap_err()
            .into();
        let unauthorized: AppError = service
            .sign_in("alice@example.com", "nope")
            .await
            .unwrap_err()
            .into();

        assert_eq!(conflict.kind(), ErrorKind::Conflict);
        assert_eq!(not_found.kind(), ErrorKind::NotFound);
        assert_eq!(unauthorized.kind(), ErrorKind::Unauthorized);
    }

    #[test]
    fn test_persistence_unavailable_is_503() {
        let app: AppError = AuthError::PersistenceUnavailable("timeout".into()).into();
        assert_eq!(app.status_code(), 503);
        assert_eq!(app.action(), Some("Please try again later"));
    }
}
