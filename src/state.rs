use std::sync::Arc;

use todoapp_auth::{Authority, SystemClock};
use todoapp_config::{JwtConfig, PasswordConfig};
use todoapp_db::{PgPool, PgUserStore, UserStore};

use crate::utils::errors::AppError;

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
    pub authority: Arc<Authority>,
}

impl AppState {
    pub fn new(users: Arc<dyn UserStore>, authority: Arc<Authority>) -> Self {
        Self { users, authority }
    }
}

pub fn init_app_state(
    pool: PgPool,
    jwt_config: &JwtConfig,
    password_config: &PasswordConfig,
) -> Result<AppState, AppError> {
    let authority = Authority::new(jwt_config, password_config, Arc::new(SystemClock))?;
    Ok(AppState::new(
        Arc::new(PgUserStore::new(pool)),
        Arc::new(authority),
    ))
}
