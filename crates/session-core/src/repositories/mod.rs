//! Repository traits (ports)

pub mod member_repository;

pub use member_repository::MemberRepository;
