//! # Session Infrastructure
//!
//! Repository implementations (adapters).

pub mod memory;

pub use memory::MemoryMemberRepository;
