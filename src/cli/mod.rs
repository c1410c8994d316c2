//! Administrative commands that run outside the HTTP server.

use anyhow::{Context, anyhow};
use todoapp_auth::Authority;
use todoapp_db::UserStore;
use validator::Validate;

use crate::modules::auth::model::{CreateUserRequest, UserResponse};
use crate::modules::auth::service::AuthService;
use crate::validator::format_errors;

/// Validates and registers a user through the same path as `POST /auth`.
pub async fn create_user(
    users: &dyn UserStore,
    authority: &Authority,
    request: CreateUserRequest,
) -> anyhow::Result<UserResponse> {
    request
        .validate()
        .map_err(|errors| anyhow!(format_errors(&errors)))
        .context("invalid user details")?;

    AuthService::register_user(users, authority, request)
        .await
        .map_err(|err| err.error)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use todoapp_auth::ManualClock;
    use todoapp_config::{JwtConfig, PasswordConfig};
    use todoapp_db::MemoryUserStore;

    use super::*;

    fn authority() -> Authority {
        let jwt = JwtConfig::from_lookup(|key| match key {
            "JWT_SECRET" => Some("cli-test-secret-that-is-long-enough-1234".to_string()),
            _ => None,
        })
        .unwrap();
        let password = PasswordConfig { bcrypt_cost: 4 };
        Authority::new(&jwt, &password, Arc::new(ManualClock::starting_now())).unwrap()
    }

    fn request(username: &str, email: &str) -> CreateUserRequest {
        CreateUserRequest {
            username: username.to_string(),
            email: email.to_string(),
            first_name: "Alice".to_string(),
            last_name: "Liddell".to_string(),
            password: "password123".to_string(),
            role: "admin".to_string(),
            phone_number: None,
        }
    }

    #[tokio::test]
    async fn test_create_user_stores_hashed_credentials() {
        let store = MemoryUserStore::new();
        let authority = authority();

        let user = create_user(&store, &authority, request("alice", "alice@example.com"))
            .await
            .unwrap();
        assert_eq!(user.username, "alice");
        assert_eq!(user.role, "admin");

        let token = authority
            .login(&store, "alice", "password123")
            .await
            .unwrap();
        assert_eq!(authority.verify(&token).unwrap().user_id, user.id);
    }

    #[tokio::test]
    async fn test_create_user_rejects_invalid_details() {
        let store = MemoryUserStore::new();
        let result = create_user(&store, &authority(), request("alice", "nope")).await;
        assert!(result.is_err());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_create_user_reports_duplicates() {
        let store = MemoryUserStore::new();
        let authority = authority();
        create_user(&store, &authority, request("alice", "alice@example.com"))
            .await
            .unwrap();
        let err = create_user(&store, &authority, request("alice", "other@example.com"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("already"));
    }
}
