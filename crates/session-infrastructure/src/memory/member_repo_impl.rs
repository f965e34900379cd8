// ============================================================================
// Session Infrastructure - In-Memory Member Repository
// File: crates/session-infrastructure/src/memory/member_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use dashmap::mapref::entry::Entry as Slot;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::info;

use session_core::domain::Member;
use session_core::error::DomainError;
use session_core::repositories::MemberRepository;

/// Process-lifetime member table keyed by id, with a login id index
pub struct MemoryMemberRepository {
    members: DashMap<u64, Member>,
    /// login id -> member id. The entry API on this map is what makes
    /// login ids unique under concurrent saves.
    login_index: DashMap<String, u64>,
    sequence: AtomicU64,
}

impl Default for MemoryMemberRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryMemberRepository {
    pub fn new() -> Self {
        Self {
            members: DashMap::new(),
            login_index: DashMap::new(),
            sequence: AtomicU64::new(0),
        }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    fn insert_new(&self, mut member: Member) -> Result<Member, DomainError> {
        match self.login_index.entry(member.login_id.clone()) {
            Slot::Occupied(_) => Err(DomainError::LoginIdAlreadyExists(member.login_id)),
            Slot::Vacant(slot) => {
                member.id = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
                // Row goes in before the index entry is published.
                self.members.insert(member.id, member.clone());
                slot.insert(member.id);
                info!("Saved member {} (login id: {})", member.id, member.login_id);
                Ok(member)
            }
        }
    }

    fn update(&self, member: Member) -> Result<Member, DomainError> {
        let previous = self
            .members
            .get(&member.id)
            .map(|r| r.login_id.clone())
            .ok_or(DomainError::MemberNotFound(member.id))?;

        if previous != member.login_id {
            match self.login_index.entry(member.login_id.clone()) {
                Slot::Occupied(_) => {
                    return Err(DomainError::LoginIdAlreadyExists(member.login_id));
                }
                Slot::Vacant(slot) => {
                    slot.insert(member.id);
                }
            }
            self.login_index.remove_if(&previous, |_, id| *id == member.id);
        }

        self.members.insert(member.id, member.clone());
        Ok(member)
    }
}

#[async_trait]
impl MemberRepository for MemoryMemberRepository {
    async fn save(&self, member: Member) -> Result<Member, DomainError> {
        if member.is_new() {
            self.insert_new(member)
        } else {
            self.update(member)
        }
    }

    async fn find_by_login_id(&self, login_id: &str) -> Result<Option<Member>, DomainError> {
        let Some(id) = self.login_index.get(login_id).map(|r| *r.value()) else {
            return Ok(None);
        };
        Ok(self.members.get(&id).map(|r| r.value().clone()))
    }
}
