//! In-memory adapters

pub mod member_repo_impl;

pub use member_repo_impl::MemoryMemberRepository;
