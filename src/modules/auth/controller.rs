use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use todoapp_auth::IdentityContext;
use tracing::instrument;

use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::{ValidatedForm, ValidatedJson};

use super::model::{CreateUserRequest, ErrorResponse, LoginForm, TokenResponse, UserResponse};
use super::service::AuthService;

/// Register a new user
#[utoipa::path(
    post,
    path = "/auth",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User registered successfully", body = UserResponse),
        (status = 400, description = "Bad request - malformed body", body = ErrorResponse),
        (status = 409, description = "Username or email already registered", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    let user = AuthService::register_user(state.users.as_ref(), &state.authority, dto).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Exchange username and password for a bearer access token
#[utoipa::path(
    post,
    path = "/auth/token",
    request_body(content = LoginForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Login successful", body = TokenResponse),
        (status = 400, description = "Bad request - malformed form", body = ErrorResponse),
        (status = 401, description = "Could not validate credentials", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn login_for_access_token(
    State(state): State<AppState>,
    ValidatedForm(form): ValidatedForm<LoginForm>,
) -> Result<Json<TokenResponse>, AppError> {
    let token = AuthService::login_user(state.users.as_ref(), &state.authority, form).await?;
    Ok(Json(token))
}

/// Identity behind the presented bearer token
#[utoipa::path(
    get,
    path = "/auth/me",
    responses(
        (status = 200, description = "Verified identity", body = IdentityContext),
        (status = 401, description = "Could not validate credentials", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Authentication"
)]
#[instrument(skip_all, fields(user_id = auth_user.user_id()))]
pub async fn read_current_user(auth_user: AuthUser) -> Json<IdentityContext> {
    Json(auth_user.0)
}
