//! State management via the actor pattern

mod manager;
mod messages;

pub use manager::StateManager;
pub use messages::{StateCommand, StateError, StateResponse};
