//! Domain entities.

pub mod member;

pub use member::Member;
