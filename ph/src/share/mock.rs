//! Mock share backend with canned community prompts

use async_trait::async_trait;
use tracing::debug;
use uuid::Uuid;

use promptstore::{Category, Prompt};

use super::client::{DownloadFilters, ShareClient, ShareSort, SharedPrompt};
use super::ShareError;

/// Share backend that fakes a community server
///
/// Uploads succeed and mint a fresh share id; downloads serve a small fixed
/// set of popular prompts.
#[derive(Debug, Default)]
pub struct MockShareClient;

impl MockShareClient {
    pub fn new() -> Self {
        Self
    }

    fn canned_prompts() -> Vec<SharedPrompt> {
        let mut react = Prompt::with_id(
            "cloud-1",
            "Optimize React component",
            "Please optimize this React component for performance and maintainability.",
            Category::Optimize,
            "community user A",
        )
        .with_tags(["react", "optimization", "component"]);
        react.use_count = 150;

        let mut python = Prompt::with_id(
            "cloud-2",
            "Python API documentation",
            "Please write detailed API documentation for this Python function.",
            Category::Docs,
            "community user B",
        )
        .with_tags(["python", "api", "docs"]);
        python.use_count = 89;

        let mut js = Prompt::with_id(
            "cloud-3",
            "JavaScript unit tests",
            "Please generate complete unit tests for this JavaScript function.",
            Category::Test,
            "community user C",
        )
        .with_tags(["javascript", "testing", "unit tests"]);
        js.use_count = 203;

        vec![
            SharedPrompt {
                prompt: react,
                share_id: "share_react_001".to_string(),
                download_count: 120,
                rating: 4.5,
                is_public: true,
            },
            SharedPrompt {
                prompt: python,
                share_id: "share_python_001".to_string(),
                download_count: 75,
                rating: 4.8,
                is_public: true,
            },
            SharedPrompt {
                prompt: js,
                share_id: "share_js_test_001".to_string(),
                download_count: 180,
                rating: 4.7,
                is_public: true,
            },
        ]
    }
}

#[async_trait]
impl ShareClient for MockShareClient {
    async fn upload(&self, prompt: &Prompt) -> Result<String, ShareError> {
        debug!(id = %prompt.id, title = %prompt.title, "upload: called");
        Ok(format!("share_{}", Uuid::now_v7()))
    }

    async fn download(&self, filters: &DownloadFilters) -> Result<Vec<SharedPrompt>, ShareError> {
        debug!(?filters, "download: called");
        let mut prompts = Self::canned_prompts();

        if let Some(category) = filters.category {
            prompts.retain(|s| s.prompt.category == category);
        }
        if let Some(language) = &filters.language {
            let needle = language.to_lowercase();
            prompts.retain(|s| s.prompt.tags.iter().any(|t| t.to_lowercase() == needle));
        }

        match filters.sort_by {
            Some(ShareSort::Popular) | None => {
                prompts.sort_by(|a, b| b.download_count.cmp(&a.download_count));
            }
            Some(ShareSort::Recent) => {
                prompts.sort_by(|a, b| b.prompt.created_at.cmp(&a.prompt.created_at));
            }
            Some(ShareSort::Rating) => {
                prompts.sort_by(|a, b| b.rating.total_cmp(&a.rating));
            }
        }

        if let Some(limit) = filters.limit {
            prompts.truncate(limit);
        }

        Ok(prompts)
    }
}
