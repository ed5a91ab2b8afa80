//! Prompt domain types
//!
//! The `Prompt` record is the only persistent entity. Categories form a
//! closed set; anything unrecognized maps to `Other`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Closed set of prompt categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Code optimization and refactoring
    Optimize,
    /// Code generation from a description
    Generate,
    /// Code review
    Review,
    /// Bug analysis and fixing
    Bugfix,
    /// Documentation and comments
    Docs,
    /// Test case generation
    Test,
    /// System and architecture design
    Architecture,
    /// Everything else
    #[default]
    Other,
}

impl Category {
    /// All categories, in display order
    pub const ALL: [Category; 8] = [
        Category::Optimize,
        Category::Generate,
        Category::Review,
        Category::Bugfix,
        Category::Docs,
        Category::Test,
        Category::Architecture,
        Category::Other,
    ];

    /// Lowercase label, matching the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Optimize => "optimize",
            Self::Generate => "generate",
            Self::Review => "review",
            Self::Bugfix => "bugfix",
            Self::Docs => "docs",
            Self::Test => "test",
            Self::Architecture => "architecture",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "optimize" => Ok(Self::Optimize),
            "generate" => Ok(Self::Generate),
            "review" => Ok(Self::Review),
            "bugfix" => Ok(Self::Bugfix),
            "docs" => Ok(Self::Docs),
            "test" => Ok(Self::Test),
            "architecture" => Ok(Self::Architecture),
            "other" => Ok(Self::Other),
            _ => Err(format!(
                "Unknown category: '{}'. Valid: optimize, generate, review, bugfix, docs, test, architecture, other",
                s
            )),
        }
    }
}

fn is_false(b: &bool) -> bool {
    !*b
}

/// A reusable text snippet intended to be pasted into an AI chat
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prompt {
    /// Unique identifier within the store
    pub id: String,

    /// Display title; its lowercased form is the dedup key on batch merges
    pub title: String,

    /// The prompt text itself
    pub content: String,

    /// Category label
    pub category: Category,

    /// Times this prompt has been used; never decreases
    #[serde(default)]
    pub use_count: u32,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Who wrote it ("system" for bundled prompts)
    pub author: String,

    /// Free-form tags, searchable
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Marked as a favorite by the user
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_favorite: bool,
}

impl Prompt {
    /// Create a prompt with a freshly generated id
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        category: Category,
        author: impl Into<String>,
    ) -> Self {
        Self::with_id(Uuid::now_v7().to_string(), title, content, category, author)
    }

    /// Create a prompt with an explicit id (bundled defaults use fixed ids)
    pub fn with_id(
        id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
        category: Category,
        author: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
            category,
            use_count: 0,
            created_at: Utc::now(),
            author: author.into(),
            tags: Vec::new(),
            is_favorite: false,
        }
    }

    /// Attach tags (builder style)
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Case-insensitive dedup key
    pub fn title_key(&self) -> String {
        self.title.to_lowercase()
    }
}

/// Partial update for a stored prompt; `None` fields are left untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PromptUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<Category>,
    pub author: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl PromptUpdate {
    /// Merge the set fields into `prompt`
    pub fn apply(&self, prompt: &mut Prompt) {
        if let Some(title) = &self.title {
            prompt.title = title.clone();
        }
        if let Some(content) = &self.content {
            prompt.content = content.clone();
        }
        if let Some(category) = self.category {
            prompt.category = category;
        }
        if let Some(author) = &self.author {
            prompt.author = author.clone();
        }
        if let Some(tags) = &self.tags {
            prompt.tags = tags.clone();
        }
    }

    /// True if no field is set
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.category.is_none()
            && self.author.is_none()
            && self.tags.is_none()
    }
}

/// Sort key for listing prompts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    /// Most used first
    #[default]
    UseCount,
    /// Most recent first
    CreatedAt,
}

impl std::str::FromStr for SortBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "use-count" | "usecount" | "uses" => Ok(Self::UseCount),
            "created-at" | "createdat" | "recent" => Ok(Self::CreatedAt),
            _ => Err(format!("Unknown sort key: '{}'. Use: use-count or created-at", s)),
        }
    }
}
