//! State manager messages
//!
//! Commands and responses for the actor pattern.

use thiserror::Error;
use tokio::sync::oneshot;

use promptstore::{Category, Prompt, PromptUpdate, SortBy};

/// Errors from state operations
#[derive(Debug, Error)]
pub enum StateError {
    #[error("Prompt not found: {0}")]
    NotFound(String),

    #[error("Store error: {0}")]
    StoreError(String),

    #[error("Channel error")]
    ChannelError,
}

/// Response from state operations
pub type StateResponse<T> = Result<T, StateError>;

/// Commands sent to the StateManager actor
#[derive(Debug)]
pub enum StateCommand {
    List {
        category: Option<Category>,
        sort: Option<SortBy>,
        reply: oneshot::Sender<StateResponse<Vec<Prompt>>>,
    },
    Get {
        id: String,
        reply: oneshot::Sender<StateResponse<Option<Prompt>>>,
    },
    Add {
        prompt: Prompt,
        reply: oneshot::Sender<StateResponse<String>>,
    },
    AddBatch {
        prompts: Vec<Prompt>,
        reply: oneshot::Sender<StateResponse<usize>>,
    },
    Update {
        id: String,
        update: PromptUpdate,
        reply: oneshot::Sender<StateResponse<bool>>,
    },
    Delete {
        id: String,
        reply: oneshot::Sender<StateResponse<bool>>,
    },
    IncrementUse {
        id: String,
        reply: oneshot::Sender<StateResponse<bool>>,
    },
    Search {
        keyword: String,
        reply: oneshot::Sender<StateResponse<Vec<Prompt>>>,
    },
    ToggleFavorite {
        id: String,
        reply: oneshot::Sender<StateResponse<Option<bool>>>,
    },
    Favorites {
        reply: oneshot::Sender<StateResponse<Vec<Prompt>>>,
    },

    // Shutdown
    Shutdown,
}
