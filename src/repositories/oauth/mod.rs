//! OAuth state 저장소

pub mod state_store;

pub use state_store::{InMemoryStateStore, RedisStateStore, StateStore};
