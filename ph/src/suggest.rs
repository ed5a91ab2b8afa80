//! Input-driven prompt suggestions
//!
//! Tracks what the user is typing and keeps a ranked shortlist of matching
//! prompts. Recomputation only happens when the input actually changed and
//! is long enough to be meaningful.

use tracing::debug;

use promptstore::{Prompt, SortBy};

use crate::matcher::{MIN_INPUT_LEN, match_by_text, rank_top};
use crate::state::{StateError, StateManager};

/// How many suggestions to keep
const MAX_SUGGESTIONS: usize = 5;

/// How many prompts the fallback shortlist holds
const FALLBACK_POOL: usize = 10;

/// Suggestion service bound to a StateManager
pub struct SuggestionService {
    manager: StateManager,
    last_input: String,
    suggestions: Vec<Prompt>,
}

impl SuggestionService {
    pub fn new(manager: StateManager) -> Self {
        Self {
            manager,
            last_input: String::new(),
            suggestions: Vec::new(),
        }
    }

    /// Current suggestion shortlist
    pub fn suggestions(&self) -> &[Prompt] {
        &self.suggestions
    }

    /// Feed new input text; returns the number of suggestions now held
    ///
    /// Input below the minimum length clears the shortlist. Unchanged input
    /// is a no-op, so repeated keystrokes on the same prefix cost nothing.
    pub async fn update_from_input(&mut self, input: &str) -> Result<usize, StateError> {
        let trimmed = input.trim();
        debug!(input_len = trimmed.len(), "update_from_input: called");

        if trimmed.chars().count() < MIN_INPUT_LEN {
            self.last_input.clear();
            self.suggestions.clear();
            return Ok(0);
        }

        if trimmed == self.last_input {
            debug!("update_from_input: input unchanged");
            return Ok(self.suggestions.len());
        }
        self.last_input = trimmed.to_string();

        let all = self.manager.list(None, None).await?;
        let matched = match_by_text(trimmed, &all);
        self.suggestions = rank_top(matched, MAX_SUGGESTIONS);

        debug!(count = self.suggestions.len(), "update_from_input: shortlist updated");
        Ok(self.suggestions.len())
    }

    /// Most-used prompts, for when the shortlist is empty
    pub async fn fallback_pool(&self) -> Result<Vec<Prompt>, StateError> {
        debug!("fallback_pool: called");
        let mut prompts = self.manager.list(None, Some(SortBy::UseCount)).await?;
        prompts.truncate(FALLBACK_POOL);
        Ok(prompts)
    }
}
