//! In-process user store for tests.

use async_trait::async_trait;
use todoapp_auth::{CredentialRecord, CredentialStore};
use tokio::sync::RwLock;

use crate::{NewUser, UserRecord, UserStore, UserStoreError};

#[derive(Debug, Default)]
pub struct MemoryUserStore {
    users: RwLock<Vec<(UserRecord, String)>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl CredentialStore for MemoryUserStore {
    async fn find_credential_by_username(
        &self,
        username: &str,
    ) -> anyhow::Result<Option<CredentialRecord>> {
        let users = self.users.read().await;
        Ok(users
            .iter()
            .find(|(user, _)| user.username == username)
            .map(|(user, hash)| CredentialRecord {
                user_id: user.id,
                username: user.username.clone(),
                password_hash: hash.clone(),
                role: user.role.clone(),
                is_active: user.is_active,
            }))
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn create_user(&self, new_user: NewUser) -> Result<UserRecord, UserStoreError> {
        let mut users = self.users.write().await;
        if users
            .iter()
            .any(|(user, _)| user.username == new_user.username || user.email == new_user.email)
        {
            return Err(UserStoreError::Conflict);
        }

        let record = UserRecord {
            id: users.len() as i64 + 1,
            email: new_user.email,
            username: new_user.username,
            first_name: new_user.first_name,
            last_name: new_user.last_name,
            role: new_user.role,
            is_active: true,
            phone_number: new_user.phone_number,
        };
        users.push((record.clone(), new_user.hashed_password));
        Ok(record)
    }
}
