use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use promptstore::PromptStore;
use promptstore::cli::{Cli, Command};
use promptstore::config::Config;
use promptstore::prompt::{Prompt, SortBy};

fn setup_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn print_row(p: &Prompt) {
    let star = if p.is_favorite { "★".yellow() } else { " ".normal() };
    println!(
        "{} {} [{}] {} {}",
        star,
        p.id.yellow(),
        p.category.as_str().cyan(),
        p.title,
        format!("(used {})", p.use_count).dimmed()
    );
}

fn main() -> Result<()> {
    setup_logging().context("Failed to setup logging")?;

    let cli = Cli::parse();
    let mut config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    if let Some(dir) = cli.store_dir {
        config.store_dir = dir;
    }

    info!("promptstore starting");

    match cli.command {
        Command::List {
            category,
            favorites,
            sort,
        } => {
            let store = PromptStore::open(&config.store_dir)?;
            let mut prompts = store.sorted(sort.unwrap_or(SortBy::UseCount));
            if let Some(cat) = category {
                prompts.retain(|p| p.category == cat);
            }
            if favorites {
                prompts.retain(|p| p.is_favorite);
            }
            if prompts.is_empty() {
                println!("No prompts found");
            } else {
                for p in &prompts {
                    print_row(p);
                }
            }
        }
        Command::Show { id } => {
            let store = PromptStore::open(&config.store_dir)?;
            match store.get(&id) {
                Some(p) => {
                    println!("{}", p.title.bold());
                    println!(
                        "{} {} {} {}",
                        p.category.as_str().cyan(),
                        format!("by {}", p.author).dimmed(),
                        format!("used {}", p.use_count).dimmed(),
                        p.created_at.format("%Y-%m-%d").to_string().dimmed()
                    );
                    if !p.tags.is_empty() {
                        println!("{}", p.tags.join(", ").dimmed());
                    }
                    println!();
                    println!("{}", p.content);
                }
                None => {
                    eprintln!("{} Prompt not found: {}", "✗".red(), id);
                    std::process::exit(1);
                }
            }
        }
        Command::Search { keyword } => {
            let store = PromptStore::open(&config.store_dir)?;
            let hits = store.search(&keyword);
            if hits.is_empty() {
                println!("No prompts match '{}'", keyword);
            } else {
                for p in &hits {
                    print_row(p);
                }
            }
        }
        Command::Delete { id } => {
            let mut store = PromptStore::open(&config.store_dir)?;
            if store.delete(&id)? {
                println!("{} Deleted prompt: {}", "✓".green(), id);
            } else {
                eprintln!("{} Prompt not found: {}", "✗".red(), id);
                std::process::exit(1);
            }
        }
        Command::Path => {
            let store = PromptStore::open(&config.store_dir)?;
            println!("{}", store.file_path().display());
        }
    }

    Ok(())
}
