use async_trait::async_trait;
use sqlx::PgPool;
use thiserror::Error;
use todoapp_auth::{CredentialRecord, CredentialStore};
use tracing::instrument;

/// A user about to be inserted. The password is already hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub hashed_password: String,
    pub role: String,
    pub phone_number: Option<String>,
}

/// A stored user without its password hash.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct UserRecord {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    pub is_active: bool,
    pub phone_number: Option<String>,
}

#[derive(Debug, Error)]
pub enum UserStoreError {
    #[error("username or email is already registered")]
    Conflict,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Registration on top of the credential lookup.
#[async_trait]
pub trait UserStore: CredentialStore {
    /// Inserts `new_user` as active.
    ///
    /// # Errors
    ///
    /// [`UserStoreError::Conflict`] when the username or email is taken.
    async fn create_user(&self, new_user: NewUser) -> Result<UserRecord, UserStoreError>;
}

#[derive(Clone, Debug)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct CredentialRow {
    id: i64,
    username: String,
    hashed_password: String,
    role: String,
    is_active: bool,
}

impl From<CredentialRow> for CredentialRecord {
    fn from(row: CredentialRow) -> Self {
        Self {
            user_id: row.id,
            username: row.username,
            password_hash: row.hashed_password,
            role: row.role,
            is_active: row.is_active,
        }
    }
}

#[async_trait]
impl CredentialStore for PgUserStore {
    #[instrument(skip(self))]
    async fn find_credential_by_username(
        &self,
        username: &str,
    ) -> anyhow::Result<Option<CredentialRecord>> {
        let row = sqlx::query_as::<_, CredentialRow>(
            "SELECT id, username, hashed_password, role, is_active FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(CredentialRecord::from))
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    #[instrument(skip(self, new_user), fields(username = %new_user.username))]
    async fn create_user(&self, new_user: NewUser) -> Result<UserRecord, UserStoreError> {
        sqlx::query_as::<_, UserRecord>(
            "INSERT INTO users (email, username, first_name, last_name, hashed_password, is_active, role, phone_number)
             VALUES ($1, $2, $3, $4, $5, TRUE, $6, $7)
             RETURNING id, email, username, first_name, last_name, role, is_active, phone_number",
        )
        .bind(&new_user.email)
        .bind(&new_user.username)
        .bind(&new_user.first_name)
        .bind(&new_user.last_name)
        .bind(&new_user.hashed_password)
        .bind(&new_user.role)
        .bind(&new_user.phone_number)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| match err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                UserStoreError::Conflict
            }
            other => UserStoreError::Database(other),
        })
    }
}
