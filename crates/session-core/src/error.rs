//! Domain errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Member not found: {0}")]
    MemberNotFound(u64),

    #[error("Login id already exists: {0}")]
    LoginIdAlreadyExists(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}
