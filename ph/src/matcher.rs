//! Prompt matching and recommendation
//!
//! Pure functions over prompt snapshots. Matching is case-insensitive
//! substring containment; ranking is by use count.

use tracing::debug;

use promptstore::{Category, Prompt};

use crate::detect::{LanguageInfo, ProjectInfo};

/// Minimum trimmed input length before matching kicks in
pub const MIN_INPUT_LEN: usize = 2;

/// Match prompts against free-form input text
///
/// Inputs shorter than [`MIN_INPUT_LEN`] after trimming match nothing.
/// A prompt matches when its title, content, category label, or any tag
/// contains the lowercased input.
pub fn match_by_text(input: &str, prompts: &[Prompt]) -> Vec<Prompt> {
    let needle = input.trim().to_lowercase();
    // Length is counted in characters, not bytes, so one CJK char stays short
    if needle.chars().count() < MIN_INPUT_LEN {
        debug!(input_len = needle.len(), "match_by_text: input too short");
        return Vec::new();
    }

    prompts
        .iter()
        .filter(|p| {
            p.title.to_lowercase().contains(&needle)
                || p.content.to_lowercase().contains(&needle)
                || p.category.as_str().contains(&needle)
                || p.tags.iter().any(|t| t.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

/// Take the `n` most used prompts from a match set
pub fn rank_top(mut prompts: Vec<Prompt>, n: usize) -> Vec<Prompt> {
    prompts.sort_by(|a, b| b.use_count.cmp(&a.use_count));
    prompts.truncate(n);
    prompts
}

/// Ecosystems that get the optimize/review/test recommendation trio
const CODE_ECOSYSTEMS: &[&str] = &["javascript", "python", "java", "rust", "go"];

/// Recommend prompt categories for the current language and project
///
/// Always ends with bugfix and docs; earlier entries are context-specific.
/// The result is deduplicated while preserving order.
pub fn recommend_categories(language: Option<&LanguageInfo>, project: Option<&ProjectInfo>) -> Vec<Category> {
    debug!(
        language = ?language.map(|l| &l.language),
        project = ?project.map(|p| &p.project_type),
        "recommend_categories: called"
    );
    let mut categories = Vec::new();

    if let Some(lang) = language {
        categories.push(lang.category);
    }

    if let Some(proj) = project {
        if CODE_ECOSYSTEMS.contains(&proj.project_type.as_str()) {
            categories.extend([Category::Optimize, Category::Review, Category::Test]);
        }
        if proj.framework.is_some() {
            categories.push(Category::Architecture);
        }
    }

    categories.extend([Category::Bugfix, Category::Docs]);

    // Dedup preserving first occurrence
    let mut seen = std::collections::HashSet::new();
    categories.retain(|c| seen.insert(*c));
    categories
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::language_from_id;

    fn sample_prompts() -> Vec<Prompt> {
        vec![
            Prompt::with_id("a", "Optimize code", "make it faster", Category::Optimize, "x"),
            Prompt::with_id("b", "Write tests", "unit test coverage", Category::Test, "x")
                .with_tags(["tdd", "jest"]),
            Prompt::with_id("c", "Explain", "walk through the logic", Category::Review, "x"),
        ]
    }

    #[test]
    fn test_match_requires_two_chars() {
        let prompts = sample_prompts();
        assert!(match_by_text("o", &prompts).is_empty());
        assert!(match_by_text("  x ", &prompts).is_empty());
        assert!(!match_by_text("op", &prompts).is_empty());
    }

    #[test]
    fn test_match_length_counts_chars_not_bytes() {
        let mut prompts = sample_prompts();
        prompts.push(
            Prompt::with_id("d", "优化代码", "提升性能", Category::Optimize, "x"),
        );

        // One multi-byte char is still below the two-character minimum
        assert!(match_by_text("优", &prompts).is_empty());
        assert_eq!(match_by_text("优化", &prompts)[0].id, "d");
    }

    #[test]
    fn test_match_over_all_fields() {
        let prompts = sample_prompts();
        // title
        assert_eq!(match_by_text("OPTIMIZE", &prompts).len(), 1);
        // content
        assert_eq!(match_by_text("faster", &prompts)[0].id, "a");
        // category label
        assert_eq!(match_by_text("review", &prompts)[0].id, "c");
        // tag
        assert_eq!(match_by_text("jest", &prompts)[0].id, "b");
        // no hit
        assert!(match_by_text("kubernetes", &prompts).is_empty());
    }

    #[test]
    fn test_rank_top_orders_by_use_count() {
        let mut prompts = sample_prompts();
        prompts[1].use_count = 9;
        prompts[2].use_count = 4;

        let top = rank_top(prompts, 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].id, "b");
        assert_eq!(top[1].id, "c");
    }

    #[test]
    fn test_recommend_bare_context() {
        let recs = recommend_categories(None, None);
        assert_eq!(recs, vec![Category::Bugfix, Category::Docs]);
    }

    #[test]
    fn test_recommend_full_stack_project() {
        let lang = language_from_id("typescript");
        let proj = ProjectInfo {
            project_type: "javascript".to_string(),
            framework: Some("React".to_string()),
            package_manager: Some("yarn".to_string()),
        };
        let recs = recommend_categories(Some(&lang), Some(&proj));
        assert_eq!(
            recs,
            vec![
                Category::Generate,
                Category::Optimize,
                Category::Review,
                Category::Test,
                Category::Architecture,
                Category::Bugfix,
                Category::Docs,
            ]
        );
    }

    #[test]
    fn test_recommend_dedups() {
        let lang = language_from_id("markdown");
        let recs = recommend_categories(Some(&lang), None);
        // Docs appears once even though it is both the language category
        // and a universal recommendation
        assert_eq!(recs, vec![Category::Docs, Category::Bugfix]);
    }

    #[test]
    fn test_recommend_unknown_ecosystem_gets_no_trio() {
        let proj = ProjectInfo {
            project_type: "haskell".to_string(),
            framework: None,
            package_manager: None,
        };
        let recs = recommend_categories(None, Some(&proj));
        assert_eq!(recs, vec![Category::Bugfix, Category::Docs]);
    }
}
