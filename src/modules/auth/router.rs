use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{create_user, login_for_access_token, read_current_user};

pub fn init_auth_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_user))
        .route("/token", post(login_for_access_token))
        .route("/me", get(read_current_user))
}
