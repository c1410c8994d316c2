use todoapp_auth::Authority;
use todoapp_db::{NewUser, UserStore};
use tracing::{info, instrument};

use crate::utils::errors::AppError;

use super::model::{CreateUserRequest, LoginForm, TokenResponse, UserResponse};

pub struct AuthService;

impl AuthService {
    #[instrument(skip_all, fields(username = %dto.username))]
    pub async fn register_user(
        users: &dyn UserStore,
        authority: &Authority,
        dto: CreateUserRequest,
    ) -> Result<UserResponse, AppError> {
        let hashed_password = authority.hasher().hash(&dto.password)?;

        let user = users
            .create_user(NewUser {
                username: dto.username,
                email: dto.email,
                first_name: dto.first_name,
                last_name: dto.last_name,
                hashed_password,
                role: dto.role,
                phone_number: dto.phone_number,
            })
            .await?;

        info!(user_id = user.id, "user registered");
        Ok(user.into())
    }

    #[instrument(skip_all, fields(username = %form.username))]
    pub async fn login_user(
        users: &dyn UserStore,
        authority: &Authority,
        form: LoginForm,
    ) -> Result<TokenResponse, AppError> {
        let access_token = authority
            .login(users, &form.username, &form.password)
            .await?;

        info!("access token issued");
        Ok(TokenResponse::bearer(access_token))
    }
}
