//! Member repository trait (port)

use async_trait::async_trait;
use crate::domain::Member;
use crate::error::DomainError;

#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// Persist a member. A member with `id == 0` is new and gets an id assigned.
    async fn save(&self, member: Member) -> Result<Member, DomainError>;
    async fn find_by_login_id(&self, login_id: &str) -> Result<Option<Member>, DomainError>;
}
