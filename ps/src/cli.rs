//! CLI argument parsing for promptstore

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::prompt::{Category, SortBy};

#[derive(Parser, Debug)]
#[command(name = "ps")]
#[command(author, version, about = "JSON-backed prompt library", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the store directory
    #[arg(long)]
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

    /// Display a prompt's full content
    Show {
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

    /// Delete a prompt
    Delete {
        /// Prompt ID to delete
        #[arg(required = true)]
        id: String,
    },

    /// Print the path of the backing store file
    Path,
}
