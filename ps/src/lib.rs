//! PromptStore - JSON-backed prompt library
//!
//! Stores reusable AI prompt snippets in a single JSON document and
//! exposes CRUD, search, favorites, and batch merge on top of it.
//!
//! # Layout
//!
//! ```text
//! {store_dir}/
//! └── prompts.json     # the whole library, pretty-printed
//! ```
//!
//! # Example
//!
//! ```ignore
//! use promptstore::{Category, Prompt, PromptStore};
//!
//! let mut store = PromptStore::open("~/.local/share/prompthelper")?;
//! store.add(Prompt::new("Explain", "Explain this code", Category::Other, "me"))?;
//! let hits = store.search("explain");
//! ```

pub mod cli;
pub mod config;
pub mod defaults;
pub mod prompt;
mod store;

pub use defaults::default_prompts;
pub use prompt::{Category, Prompt, PromptUpdate, SortBy};
pub use store::{PromptStore, STORE_FILE};
