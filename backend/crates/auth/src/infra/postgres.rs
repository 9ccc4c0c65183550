//! PostgreSQL Repository Implementations
//!
//! Expected schema (managed outside this crate):
//!
//! ```sql
//! CREATE TABLE identities (
//!     id         UUID PRIMARY KEY,
//!     email      TEXT NOT NULL UNIQUE,
//!     credential TEXT NOT NULL
//! );
//! ```

use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::identity::Identity;
use crate::domain::repository::IdentityRepository;
use crate::domain::value_object::{IdentityId, credential::UserCredential, email::Email};
use crate::error::{AuthError, AuthResult};

/// PostgreSQL unique_violation
const UNIQUE_VIOLATION: &str = "23505";

/// PostgreSQL-backed identity repository
#[derive(Clone)]
pub struct PgIdentityRepository {
    pool: PgPool,
}

impl PgIdentityRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl IdentityRepository for PgIdentityRepository {
    async fn find_by_email(&self, email: &str) -> AuthResult<Vec<Identity>> {
        let rows = sqlx::query_as::<_, IdentityRow>(
            r#"
            SELECT id, email, credential
            FROM identities
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_all(&self.pool)
        .await
        .map_err(store_error)?;

        Ok(rows.into_iter().map(IdentityRow::into_identity).collect())
    }

    async fn find_by_id(&self, id: &IdentityId) -> AuthResult<Option<Identity>> {
        let row = sqlx::query_as::<_, IdentityRow>(
            r#"
            SELECT id, email, credential
            FROM identities
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(store_error)?;

        Ok(row.map(IdentityRow::into_identity))
    }

    async fn create(&self, email: &Email, credential: &UserCredential) -> AuthResult<Identity> {
        let id = IdentityId::new();

        sqlx::query(
            r#"
            INSERT INTO identities (id, email, credential)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(id.as_uuid())
        .bind(email.as_str())
        .bind(credential.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AuthError::IdentityAlreadyExists
            } else {
                store_error(e)
            }
        })?;

        Ok(Identity::new(id, email.clone(), credential.clone()))
    }

    async fn save(&self, identity: &Identity) -> AuthResult<Identity> {
        let result = sqlx::query(
            r#"
            UPDATE identities
            SET credential = $2
            WHERE id = $1
            "#,
        )
        .bind(identity.id.as_uuid())
        .bind(identity.credential.as_str())
        .execute(&self.pool)
        .await
        .map_err(store_error)?;

        if result.rows_affected() == 0 {
            return Err(AuthError::IdentityNotFound);
        }

        Ok(identity.clone())
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().as_deref() == Some(UNIQUE_VIOLATION),
        _ => false,
    }
}

fn store_error(err: sqlx::Error) -> AuthError {
    AuthError::PersistenceUnavailable(err.to_string())
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct IdentityRow {
    id: Uuid,
    email: String,
    credential: String,
}

impl IdentityRow {
    fn into_identity(self) -> Identity {
        Identity::new(
            IdentityId::from_uuid(self.id),
            Email::from_db(self.email),
            UserCredential::from_db(self.credential),
        )
    }
}
