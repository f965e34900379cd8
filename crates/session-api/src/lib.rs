//! # Session API
//!
//! HTTP handlers for the login / logout flow and cookie-based session lookup.

pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod state;

pub use routes::router;
pub use state::AppState;
