//! Bundled default prompts
//!
//! Seeded on first run, or whenever the backing file is missing or
//! unreadable. Ids are fixed so they stay stable across reinstalls.

use crate::prompt::{Category, Prompt};

/// The five prompts every fresh store starts with
pub fn default_prompts() -> Vec<Prompt> {
    vec![
        Prompt::with_id(
            "1",
            "Optimize code",
            "Please optimize this code with a focus on performance, readability, and best practices.",
            Category::Optimize,
            "system",
        ),
        Prompt::with_id(
            "2",
            "Generate unit tests",
            "Please generate complete unit tests for the following code, covering both the normal path and edge cases.",
            Category::Test,
            "system",
        ),
        Prompt::with_id(
            "3",
            "Code review",
            "Please review this code and point out potential problems, security vulnerabilities, and suggestions for improvement.",
            Category::Review,
            "system",
        ),
        Prompt::with_id(
            "4",
            "Fix bug",
            "This code has a bug. Please analyze the root cause and propose a fix.",
            Category::Bugfix,
            "system",
        ),
        Prompt::with_id(
            "5",
            "Generate API docs",
            "Please write detailed documentation for the following API, including parameter descriptions, return values, and usage examples.",
            Category::Docs,
            "system",
        ),
    ]
}
