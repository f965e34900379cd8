//! # Session Core
//!
//! Member entity, repository port and the login service.

pub mod domain;
pub mod error;
pub mod repositories;
pub mod services;

pub use domain::Member;
pub use error::DomainError;
