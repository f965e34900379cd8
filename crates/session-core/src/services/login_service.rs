// ============================================================================
// Session Core - Login Service
// File: crates/session-core/src/services/login_service.rs
// ============================================================================
//! Credential check for the login flow

use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::Member;
use crate::error::DomainError;
use crate::repositories::MemberRepository;

/// Plain login id / password check against the member repository
pub struct LoginService {
    member_repo: Arc<dyn MemberRepository>,
}

impl LoginService {
    pub fn new(member_repo: Arc<dyn MemberRepository>) -> Self {
        Self { member_repo }
    }

    /// Returns the member when the credentials match, `Ok(None)` otherwise.
    pub async fn login(&self, login_id: &str, password: &str) -> Result<Option<Member>, DomainError> {
        info!("Login attempt for login id: {}", login_id);

        let member = self
            .member_repo
            .find_by_login_id(login_id)
            .await?
            .filter(|m| m.password_matches(password));

        match &member {
            Some(m) => info!("Login successful for member {}", m.id),
            None => warn!("Login failed for login id: {}", login_id),
        }

        Ok(member)
    }
}
