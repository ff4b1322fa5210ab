//! Web layer for the subway map.
//!
//! Exposes station registration and line/section management over HTTP,
//! translating section errors into status codes.

mod dto;
mod error;
mod routes;
mod state;

pub use dto::*;
pub use error::AppError;
pub use routes::create_router;
pub use state::AppState;
