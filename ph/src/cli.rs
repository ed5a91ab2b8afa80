//! CLI argument parsing for prompthelper

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use promptstore::{Category, SortBy};

#[derive(Parser, Debug)]
#[command(name = "ph")]
#[command(author, version, about = "Prompt snippet manager for AI chats", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Override the store directory
    #[arg(long, global = true)]
    pub store_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List stored prompts
    List {
        /// Only this category
        #[arg(short = 'C', long)]
        category: Option<Category>,

        /// Only favorites
        #[arg(short, long)]
        favorites: bool,

        /// Sort key: use-count or created-at
        #[arg(short, long)]
        sort: Option<SortBy>,
    },

    /// Add a new prompt
    Add {
        /// Prompt title
        #[arg(required = true)]
        title: String,

        /// Prompt content
        #[arg(required = true)]
        content: String,

        /// Category (default: other)
        #[arg(short = 'C', long)]
        category: Option<Category>,

        /// Author (default: user)
        #[arg(short, long)]
        author: Option<String>,

        /// Tags
        #[arg(short, long)]
        tags: Vec<String>,
    },

    /// Display a prompt's full content
    Show {
        /// Prompt ID
        #[arg(required = true)]
        id: String,
    },

    /// Print a prompt's content and record a use of it
    Use {
        /// Prompt ID
        #[arg(required = true)]
        id: String,
    },

    /// Search prompts by keyword
    Search {
        /// Keyword (matched against title, content, and category)
        #[arg(required = true)]
        keyword: String,
    },

    /// Suggest prompts for input text
    Suggest {
        /// The text being typed
        #[arg(required = true)]
        input: String,
    },

    /// Toggle a prompt's favorite flag
    Favorite {
        /// Prompt ID
        #[arg(required = true)]
        id: String,
    },

    /// List favorited prompts
    Favorites,

    /// Delete a prompt
    Delete {
        /// Prompt ID to delete
        #[arg(required = true)]
        id: String,
    },

    /// Update fields of a prompt
    Update {
        /// Prompt ID
        #[arg(required = true)]
        id: String,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New content
        #[arg(long)]
        content: Option<String>,

        /// New category
        #[arg(short = 'C', long)]
        category: Option<Category>,

        /// New tags (replaces the old set)
        #[arg(short, long)]
        tags: Option<Vec<String>>,
    },

    /// Merge the community catalog into the store
    Fetch,

    /// List built-in templates
    Templates {
        /// Only templates for this language
        #[arg(short, long)]
        language: Option<String>,

        /// Only this category
        #[arg(short = 'C', long)]
        category: Option<Category>,
    },

    /// Generate a prompt from a code file
    Generate {
        /// Source file to analyze
        #[arg(required = true)]
        file: PathBuf,

        /// Template ID to expand (default: heuristic prompt)
        #[arg(short, long)]
        template: Option<String>,

        /// Save the generated prompt to the store
        #[arg(long)]
        save: bool,
    },

    /// Recommend prompt categories for a project directory
    Recommend {
        /// Project root (default: current directory)
        path: Option<PathBuf>,
    },

    /// Upload a prompt to the community
    Upload {
        /// Prompt ID to upload
        #[arg(required = true)]
        id: String,
    },

    /// Browse community prompts and merge them into the store
    Download {
        /// Only this category
        #[arg(short = 'C', long)]
        category: Option<Category>,

        /// Maximum number of prompts
        #[arg(short, long)]
        limit: Option<usize>,

        /// Merge the downloads into the local store
        #[arg(long)]
        save: bool,
    },
}
