//! Community prompt catalog
//!
//! A bundled set of widely useful prompts that can be merged into the
//! store on demand. Remote catalog sources would slot in here; the
//! bundled list doubles as the offline fallback.

use tracing::{debug, info};

use promptstore::{Category, Prompt};

/// The bundled community catalog
pub fn builtin_prompts() -> Vec<Prompt> {
    let author = "builtin";
    vec![
        Prompt::with_id(
            "builtin-1",
            "Refactor for quality",
            "Please refactor the following code to improve quality, readability, and maintainability while keeping the behavior unchanged.",
            Category::Optimize,
            author,
        )
        .with_tags(["refactoring", "optimization", "code quality"]),
        Prompt::with_id(
            "builtin-2",
            "Performance analysis",
            "Please analyze the performance bottlenecks in the following code and suggest optimizations, focusing on time and space complexity.",
            Category::Optimize,
            author,
        )
        .with_tags(["performance", "optimization", "algorithms"]),
        Prompt::with_id(
            "builtin-3",
            "Implement function",
            "Please generate a complete implementation for the following function signature and requirements, including error handling and edge cases.",
            Category::Generate,
            author,
        )
        .with_tags(["codegen", "function", "implementation"]),
        Prompt::with_id(
            "builtin-4",
            "Design class structure",
            "Please design and generate a complete class structure for the following requirements, including fields, methods, and constructors.",
            Category::Generate,
            author,
        )
        .with_tags(["class design", "oop", "architecture"]),
        Prompt::with_id(
            "builtin-5",
            "Full code review",
            "Please review the following code and point out potential problems, security vulnerabilities, performance issues, and code smells, with suggestions.",
            Category::Review,
            author,
        )
        .with_tags(["code review", "best practices", "security"]),
        Prompt::with_id(
            "builtin-6",
            "Find the bug",
            "The following code has a bug. Please analyze the cause, locate the error, and provide a fix along with test cases.",
            Category::Bugfix,
            author,
        )
        .with_tags(["bug", "debugging", "fix"]),
        Prompt::with_id(
            "builtin-7",
            "Write unit tests",
            "Please write complete unit tests for the following code, covering the normal path, boundary conditions, and error conditions.",
            Category::Test,
            author,
        )
        .with_tags(["testing", "unit tests", "tdd"]),
        Prompt::with_id(
            "builtin-8",
            "Write API docs",
            "Please write detailed documentation for the following API, including a description, request parameters, response format, and usage examples.",
            Category::Docs,
            author,
        )
        .with_tags(["docs", "api", "reference"]),
        Prompt::with_id(
            "builtin-9",
            "Comment the code",
            "Please add thorough comments to the following code, covering function descriptions, parameters, return values, and algorithm logic.",
            Category::Docs,
            author,
        )
        .with_tags(["comments", "docs", "explanation"]),
        Prompt::with_id(
            "builtin-10",
            "Design the architecture",
            "Please design a system architecture for the following requirements, including module boundaries, data flow, interfaces, and key technology choices.",
            Category::Architecture,
            author,
        )
        .with_tags(["architecture", "design", "system design"]),
        Prompt::with_id(
            "builtin-11",
            "Design the database",
            "Please design a database schema for the following business requirements, including tables, columns, indexes, and relationships.",
            Category::Architecture,
            author,
        )
        .with_tags(["database", "sql", "design"]),
        Prompt::with_id(
            "builtin-12",
            "Translate between languages",
            "Please translate the following code from one programming language to another while preserving the behavior and logic.",
            Category::Generate,
            author,
        )
        .with_tags(["translation", "porting", "polyglot"]),
        Prompt::with_id(
            "builtin-13",
            "Build a regex",
            "Please generate a regular expression for the following requirement, with a detailed explanation and test cases.",
            Category::Generate,
            author,
        )
        .with_tags(["regex", "string matching"]),
        Prompt::with_id(
            "builtin-14",
            "Harden error handling",
            "Please improve the error handling in the following code, adding appropriate exception capture and error messages.",
            Category::Optimize,
            author,
        )
        .with_tags(["error handling", "exceptions", "robustness"]),
        Prompt::with_id(
            "builtin-15",
            "Normalize code style",
            "Please reformat the following code to match the project's coding conventions so the style is consistent.",
            Category::Optimize,
            author,
        )
        .with_tags(["style", "formatting", "conventions"]),
        Prompt::with_id(
            "builtin-16",
            "Clean up async code",
            "Please improve the following asynchronous code using best practices, making it more readable and performant.",
            Category::Optimize,
            author,
        )
        .with_tags(["async", "concurrency"]),
        Prompt::with_id(
            "builtin-17",
            "Apply a design pattern",
            "Please analyze the following code, suggest an appropriate design pattern, and refactor the code to apply it.",
            Category::Optimize,
            author,
        )
        .with_tags(["design patterns", "refactoring", "best practices"]),
        Prompt::with_id(
            "builtin-18",
            "Write a README",
            "Please write a README for the following project, including an introduction, installation steps, usage, and example code.",
            Category::Docs,
            author,
        )
        .with_tags(["readme", "docs", "project"]),
        Prompt::with_id(
            "builtin-19",
            "Security audit",
            "Please check the following code for security vulnerabilities, including SQL injection, XSS, and CSRF issues.",
            Category::Review,
            author,
        )
        .with_tags(["security", "vulnerabilities", "audit"]),
        Prompt::with_id(
            "builtin-20",
            "Simplify the code",
            "Please simplify the following code by removing redundant logic, making it easier to read while keeping it fully functional.",
            Category::Optimize,
            author,
        )
        .with_tags(["simplification", "refactoring", "readability"]),
    ]
}

/// Fetch the community catalog
///
/// Serves the bundled catalog, so the call cannot fail. A remote source
/// would slot in here without changing callers.
pub async fn fetch_common_prompts() -> Vec<Prompt> {
    debug!("fetch_common_prompts: called");
    let prompts = builtin_prompts();
    info!(count = prompts.len(), "Fetched community catalog");
    prompts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_twenty_unique_titles() {
        let prompts = builtin_prompts();
        assert_eq!(prompts.len(), 20);

        let mut titles: Vec<String> = prompts.iter().map(|p| p.title_key()).collect();
        titles.sort();
        titles.dedup();
        assert_eq!(titles.len(), 20);
    }

    #[test]
    fn test_catalog_prompts_start_unused() {
        for p in builtin_prompts() {
            assert_eq!(p.use_count, 0);
            assert_eq!(p.author, "builtin");
            assert!(!p.tags.is_empty());
        }
    }

    #[tokio::test]
    async fn test_fetch_includes_bundled_catalog() {
        let prompts = fetch_common_prompts().await;
        assert_eq!(prompts.len(), 20);
    }
}
