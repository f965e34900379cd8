//! # Session Shared
//!
//! Configuration, telemetry, constants and the application error type.

pub mod config;
pub mod constants;
pub mod error;
pub mod telemetry;

pub use error::AppError;
