//! Request extractors for cross-cutting concerns.
//!
//! - [`auth`]: bearer-token authentication
//!
//! # Authentication Flow
//!
//! 1. Client sends `Authorization: Bearer <token>`
//! 2. [`auth::AuthUser`] verifies the token through the shared `Authority`
//! 3. The handler receives the verified identity, or the client gets a 401
//!
//! ```ignore
//! use crate::middleware::auth::AuthUser;
//!
//! async fn get_profile(auth_user: AuthUser) -> impl IntoResponse {
//!     Json(auth_user.0)
//! }
//! ```

pub mod auth;
