//! Request and response bodies for the auth endpoints.

use serde::{Deserialize, Serialize};
use todoapp_auth::MAX_PASSWORD_BYTES;
use todoapp_db::UserRecord;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// OAuth2 password-grant login form (`application/x-www-form-urlencoded`).
///
/// `grant_type`, `scope`, `client_id` and `client_secret` are accepted for
/// compatibility with OAuth2 clients and otherwise ignored.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct LoginForm {
    #[validate(length(min = 1, message = "username is required"))]
    #[schema(example = "alice")]
    pub username: String,
    #[validate(length(min = 1, message = "password is required"))]
    #[schema(example = "password123")]
    pub password: String,
    #[serde(default)]
    pub grant_type: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(default)]
    pub client_id: Option<String>,
    #[serde(default)]
    pub client_secret: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    pub access_token: String,
    #[schema(example = "bearer")]
    pub token_type: String,
}

impl TokenResponse {
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 64))]
    #[schema(example = "alice")]
    pub username: String,
    #[validate(email)]
    #[schema(example = "alice@example.com")]
    pub email: String,
    #[validate(length(min = 1))]
    pub first_name: String,
    #[validate(length(min = 1))]
    pub last_name: String,
    #[validate(
        length(min = 8, message = "password must be at least 8 characters"),
        custom(function = "validate_password_bytes")
    )]
    #[schema(example = "password123")]
    pub password: String,
    #[validate(length(min = 1))]
    #[schema(example = "user")]
    pub role: String,
    #[serde(default)]
    pub phone_number: Option<String>,
}

fn validate_password_bytes(password: &str) -> Result<(), ValidationError> {
    if password.len() > MAX_PASSWORD_BYTES {
        return Err(ValidationError::new("password_too_long")
            .with_message(format!("password must be at most {MAX_PASSWORD_BYTES} bytes").into()));
    }
    Ok(())
}

/// A registered user. Never carries the password hash.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    pub is_active: bool,
    pub phone_number: Option<String>,
}

impl From<UserRecord> for UserResponse {
    fn from(user: UserRecord) -> Self {
        Self {
            id: user.id,
            email: user.email,
            username: user.username,
            first_name: user.first_name,
            last_name: user.last_name,
            role: user.role,
            is_active: user.is_active,
            phone_number: user.phone_number,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_request() -> CreateUserRequest {
        CreateUserRequest {
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            first_name: "Alice".to_string(),
            last_name: "Liddell".to_string(),
            password: "password123".to_string(),
            role: "user".to_string(),
            phone_number: None,
        }
    }

    #[test]
    fn test_create_user_request_valid() {
        assert!(create_request().validate().is_ok());
    }

    #[test]
    fn test_create_user_request_rejects_bad_email_and_short_password() {
        let request = CreateUserRequest {
            email: "not-an-email".to_string(),
            password: "short".to_string(),
            ..create_request()
        };
        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("password"));
    }

    #[test]
    fn test_create_user_request_rejects_password_over_72_bytes() {
        let request = CreateUserRequest {
            password: format!("{}1", "a".repeat(72)),
            ..create_request()
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("password"));

        let at_limit = CreateUserRequest {
            password: "a".repeat(72),
            ..create_request()
        };
        assert!(at_limit.validate().is_ok());
    }

    #[test]
    fn test_login_form_requires_both_fields() {
        let form = LoginForm {
            username: String::new(),
            password: "pw".to_string(),
            grant_type: None,
            scope: None,
            client_id: None,
            client_secret: None,
        };
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_token_response_is_bearer() {
        let response = TokenResponse::bearer("abc".to_string());
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["token_type"], "bearer");
        assert_eq!(json["access_token"], "abc");
    }
}
