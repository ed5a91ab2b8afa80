//! ShareClient trait definition

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use promptstore::{Category, Prompt};

use super::ShareError;

/// A prompt published to the community, with sharing metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SharedPrompt {
    #[serde(flatten)]
    pub prompt: Prompt,
    pub share_id: String,
    pub download_count: u32,
    pub rating: f32,
    pub is_public: bool,
}

/// Sort order for downloaded prompts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareSort {
    Popular,
    Recent,
    Rating,
}

/// Filters for downloading community prompts
#[derive(Debug, Clone, Default)]
pub struct DownloadFilters {
    pub category: Option<Category>,
    pub language: Option<String>,
    pub limit: Option<usize>,
    pub sort_by: Option<ShareSort>,
}

/// Backend for publishing and browsing community prompts
///
/// Each call is independent; no session state is kept between calls.
#[async_trait]
pub trait ShareClient: Send + Sync + std::fmt::Debug {
    /// Publish a prompt, returning its share id
    async fn upload(&self, prompt: &Prompt) -> Result<String, ShareError>;

    /// Download community prompts matching the filters
    async fn download(&self, filters: &DownloadFilters) -> Result<Vec<SharedPrompt>, ShareError>;

    /// Search community prompts by keyword over title, content, category, and tags
    async fn search(&self, keyword: &str) -> Result<Vec<SharedPrompt>, ShareError> {
        let all = self.download(&DownloadFilters::default()).await?;
        let needle = keyword.to_lowercase();
        Ok(all
            .into_iter()
            .filter(|s| {
                s.prompt.title.to_lowercase().contains(&needle)
                    || s.prompt.content.to_lowercase().contains(&needle)
                    || s.prompt.category.as_str().contains(&needle)
                    || s.prompt.tags.iter().any(|t| t.to_lowercase().contains(&needle))
            })
            .collect())
    }
}
