use todoapp_auth::IdentityContext;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::auth::model::{
    CreateUserRequest, ErrorResponse, LoginForm, TokenResponse, UserResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::create_user,
        crate::modules::auth::controller::login_for_access_token,
        crate::modules::auth::controller::read_current_user,
    ),
    components(
        schemas(
            CreateUserRequest,
            UserResponse,
            LoginForm,
            TokenResponse,
            IdentityContext,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Registration, login and token verification")
    ),
    info(
        title = "todoapp API",
        version = "0.1.0",
        description = "Todo application API with bcrypt credentials and short-lived JWT access tokens"
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
