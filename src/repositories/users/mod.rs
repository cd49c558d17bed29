//! 사용자 저장소

#[cfg(test)]
pub mod memory;
pub mod user_repo;

pub use user_repo::{UserRepository, UserStore};
