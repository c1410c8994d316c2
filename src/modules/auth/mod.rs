//! Authentication endpoints.
//!
//! | Method | Path | Purpose |
//! | --- | --- | --- |
//! | `POST` | `/auth` | register a user |
//! | `POST` | `/auth/token` | OAuth2 password login, returns a bearer token |
//! | `GET` | `/auth/me` | identity behind the bearer token |

pub mod controller;
pub mod model;
pub mod router;
pub mod service;
