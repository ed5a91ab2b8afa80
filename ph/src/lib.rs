//! PromptHelper - prompt snippet manager for AI chats
//!
//! Keeps a personal library of reusable prompts, suggests the right one
//! while you type, expands templates against real code, and understands
//! what kind of project you are working in.
//!
//! # Modules
//!
//! - [`state`] - actor owning the persistent store
//! - [`matcher`] - text matching and category recommendation
//! - [`suggest`] - input-driven suggestion shortlist
//! - [`template`] - `{{placeholder}}` templates
//! - [`detect`] - language and project detection
//! - [`analyze`] - code snippet analysis
//! - [`fetch`] - bundled community catalog
//! - [`share`] - community upload/download backends
//! - [`config`] - configuration types and loading
//! - [`cli`] - command-line interface

pub mod analyze;
pub mod cli;
pub mod config;
pub mod detect;
pub mod fetch;
pub mod matcher;
pub mod share;
pub mod state;
pub mod suggest;
pub mod template;

// Re-export commonly used types
pub use analyze::CodeContext;
pub use config::{Config, ShareConfig, StorageConfig};
pub use detect::{LanguageInfo, ProjectInfo, detect_project, language_from_id, language_from_path};
pub use fetch::{builtin_prompts, fetch_common_prompts};
pub use matcher::{match_by_text, rank_top, recommend_categories};
pub use share::{DownloadFilters, MockShareClient, ShareClient, ShareError, ShareSort, SharedPrompt, create_client};
pub use state::{StateCommand, StateError, StateManager, StateResponse};
pub use suggest::SuggestionService;
pub use template::{Template, builtin_templates, recommend_templates, template_by_id};
