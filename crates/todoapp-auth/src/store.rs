use async_trait::async_trait;

/// The persisted credentials of one user, as the authority reads them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialRecord {
    pub user_id: i64,
    pub username: String,
    pub password_hash: String,
    pub role: String,
    pub is_active: bool,
}

/// Point lookup of credentials by unique username.
///
/// This is the only query the authority issues. Implementations own their
/// own timeout and retry policy.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn find_credential_by_username(
        &self,
        username: &str,
    ) -> anyhow::Result<Option<CredentialRecord>>;
}
