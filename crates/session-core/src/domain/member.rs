//! Member domain entity

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Authenticated principal stored in a session.
///
/// The password is kept in plain text and never serialized outward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: u64,
    pub login_id: String,
    pub name: String,
    #[serde(skip_serializing, default)]
    pub password: String,
}

impl Member {
    /// New, unsaved member (`id == 0`).
    pub fn new(
        login_id: impl Into<String>,
        name: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let login_id = login_id.into();
        let name = name.into();
        let password = password.into();

        if login_id.trim().is_empty() {
            return Err(DomainError::ValidationError("login id must not be empty".into()));
        }
        if name.trim().is_empty() {
            return Err(DomainError::ValidationError("name must not be empty".into()));
        }
        if password.is_empty() {
            return Err(DomainError::ValidationError("password must not be empty".into()));
        }

        Ok(Self {
            id: 0,
            login_id,
            name,
            password,
        })
    }

    pub fn is_new(&self) -> bool {
        self.id == 0
    }

    pub fn password_matches(&self, password: &str) -> bool {
        self.password == password
    }
}
