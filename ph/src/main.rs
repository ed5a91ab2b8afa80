//! PromptHelper CLI entry point

use std::collections::HashMap;
use std::path::PathBuf;

use clap::Parser;
use colored::*;
use eyre::{Context, Result, eyre};
use tracing::{debug, info};

use promptstore::{Category, Prompt, PromptUpdate};

use prompthelper::analyze::CodeContext;
use prompthelper::cli::{Cli, Command};
use prompthelper::config::Config;
use prompthelper::detect::{detect_project, language_from_path};
use prompthelper::fetch::fetch_common_prompts;
use prompthelper::matcher::recommend_categories;
use prompthelper::share::{DownloadFilters, create_client};
use prompthelper::state::StateManager;
use prompthelper::suggest::SuggestionService;
use prompthelper::template::{recommend_templates, template_by_id};

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    // Priority: CLI --log-level > config file > WARN default
    let level = match cli_log_level.or(config_log_level) {
        Some(s) => match s.to_uppercase().as_str() {
            "TRACE" => tracing::Level::TRACE,
            "DEBUG" => tracing::Level::DEBUG,
            "INFO" => tracing::Level::INFO,
            "WARN" | "WARNING" => tracing::Level::WARN,
            "ERROR" => tracing::Level::ERROR,
            _ => {
                eprintln!("Warning: Unknown log-level '{}', defaulting to WARN", s);
                tracing::Level::WARN
            }
        },
        None => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (level: {:?})", level);
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

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load log level from config file early (before full config load)
    let config_log_level = Config::load_log_level(cli.config.as_ref());
    setup_logging(cli.log_level.as_deref(), config_log_level.as_deref()).context("Failed to setup logging")?;

    let mut config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    if let Some(dir) = cli.store_dir {
        config.storage.store_dir = dir;
    }

    let manager = StateManager::spawn(&config.storage.store_dir)?;

    debug!(command = ?cli.command, "main: dispatching command");
    let result = match cli.command {
        Command::List {
            category,
            favorites,
            sort,
        } => cmd_list(&manager, category, favorites, sort).await,
        Command::Add {
            title,
            content,
            category,
            author,
            tags,
        } => cmd_add(&manager, title, content, category, author, tags).await,
        Command::Show { id } => cmd_show(&manager, &id).await,
        Command::Use { id } => cmd_use(&manager, &id).await,
        Command::Search { keyword } => cmd_search(&manager, &keyword).await,
        Command::Suggest { input } => cmd_suggest(&manager, &input).await,
        Command::Favorite { id } => cmd_favorite(&manager, &id).await,
        Command::Favorites => cmd_favorites(&manager).await,
        Command::Delete { id } => cmd_delete(&manager, &id).await,
        Command::Update {
            id,
            title,
            content,
            category,
            tags,
        } => cmd_update(&manager, &id, title, content, category, tags).await,
        Command::Fetch => cmd_fetch(&manager).await,
        Command::Templates { language, category } => cmd_templates(language, category),
        Command::Generate { file, template, save } => cmd_generate(&manager, &file, template, save).await,
        Command::Recommend { path } => cmd_recommend(&manager, path).await,
        Command::Upload { id } => cmd_upload(&manager, &config, &id).await,
        Command::Download { category, limit, save } => cmd_download(&manager, &config, category, limit, save).await,
    };

    manager.shutdown().await.ok();
    result
}

async fn cmd_list(
    manager: &StateManager,
    category: Option<Category>,
    favorites: bool,
    sort: Option<promptstore::SortBy>,
) -> Result<()> {
    debug!(?category, favorites, ?sort, "cmd_list: called");
    let mut prompts = manager.list(category, sort).await?;
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
    Ok(())
}

async fn cmd_add(
    manager: &StateManager,
    title: String,
    content: String,
    category: Option<Category>,
    author: Option<String>,
    tags: Vec<String>,
) -> Result<()> {
    debug!(%title, "cmd_add: called");
    let prompt = Prompt::new(
        title,
        content,
        category.unwrap_or_default(),
        author.unwrap_or_else(|| "user".to_string()),
    )
    .with_tags(tags);
    let id = manager.add(prompt).await?;
    println!("{} Added prompt: {}", "✓".green(), id.cyan());
    Ok(())
}

async fn cmd_show(manager: &StateManager, id: &str) -> Result<()> {
    debug!(%id, "cmd_show: called");
    match manager.get(id).await? {
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
            Ok(())
        }
        None => Err(eyre!("Prompt not found: {}", id)),
    }
}

async fn cmd_use(manager: &StateManager, id: &str) -> Result<()> {
    debug!(%id, "cmd_use: called");
    let prompt = manager.use_prompt(id).await?;
    println!("{}", prompt.content);
    Ok(())
}

async fn cmd_search(manager: &StateManager, keyword: &str) -> Result<()> {
    debug!(%keyword, "cmd_search: called");
    let hits = manager.search(keyword).await?;
    if hits.is_empty() {
        println!("No prompts match '{}'", keyword);
    } else {
        for p in &hits {
            print_row(p);
        }
    }
    Ok(())
}

async fn cmd_suggest(manager: &StateManager, input: &str) -> Result<()> {
    debug!(%input, "cmd_suggest: called");
    let mut service = SuggestionService::new(manager.clone());
    let count = service.update_from_input(input).await?;

    if count > 0 {
        println!("{}", format!("{} suggestions", count).dimmed());
        for p in service.suggestions() {
            print_row(p);
        }
        return Ok(());
    }

    // Nothing matched; show the most-used prompts instead
    println!("{}", "No direct matches, most used prompts:".dimmed());
    for p in service.fallback_pool().await? {
        print_row(&p);
    }
    Ok(())
}

async fn cmd_favorite(manager: &StateManager, id: &str) -> Result<()> {
    debug!(%id, "cmd_favorite: called");
    match manager.toggle_favorite(id).await? {
        Some(true) => println!("{} Favorited: {}", "★".yellow(), id),
        Some(false) => println!("{} Unfavorited: {}", "☆".normal(), id),
        None => return Err(eyre!("Prompt not found: {}", id)),
    }
    Ok(())
}

async fn cmd_favorites(manager: &StateManager) -> Result<()> {
    debug!("cmd_favorites: called");
    let favorites = manager.favorites().await?;
    if favorites.is_empty() {
        println!("No favorites yet");
    } else {
        for p in &favorites {
            print_row(p);
        }
    }
    Ok(())
}

async fn cmd_delete(manager: &StateManager, id: &str) -> Result<()> {
    debug!(%id, "cmd_delete: called");
    if manager.delete(id).await? {
        println!("{} Deleted prompt: {}", "✓".green(), id);
        Ok(())
    } else {
        Err(eyre!("Prompt not found: {}", id))
    }
}

async fn cmd_update(
    manager: &StateManager,
    id: &str,
    title: Option<String>,
    content: Option<String>,
    category: Option<Category>,
    tags: Option<Vec<String>>,
) -> Result<()> {
    debug!(%id, "cmd_update: called");
    let update = PromptUpdate {
        title,
        content,
        category,
        author: None,
        tags,
    };
    if update.is_empty() {
        return Err(eyre!("Nothing to update; pass at least one of --title/--content/--category/--tags"));
    }
    if manager.update(id, update).await? {
        println!("{} Updated prompt: {}", "✓".green(), id);
        Ok(())
    } else {
        Err(eyre!("Prompt not found: {}", id))
    }
}

async fn cmd_fetch(manager: &StateManager) -> Result<()> {
    debug!("cmd_fetch: called");
    let catalog = fetch_common_prompts().await;
    let total = catalog.len();
    let added = manager.add_batch(catalog).await?;
    println!(
        "{} Imported {} new prompts ({} already present)",
        "✓".green(),
        added,
        total - added
    );
    Ok(())
}

fn cmd_templates(language: Option<String>, category: Option<Category>) -> Result<()> {
    debug!(?language, ?category, "cmd_templates: called");
    let templates = recommend_templates(language.as_deref(), category);
    if templates.is_empty() {
        println!("No templates match");
        return Ok(());
    }
    for t in templates {
        println!(
            "{} [{}] {} {}",
            t.id.yellow(),
            t.category.as_str().cyan(),
            t.name,
            format!("({})", t.variables.join(", ")).dimmed()
        );
    }
    Ok(())
}

async fn cmd_generate(manager: &StateManager, file: &PathBuf, template_id: Option<String>, save: bool) -> Result<()> {
    debug!(file = %file.display(), ?template_id, save, "cmd_generate: called");
    let source = std::fs::read_to_string(file).context(format!("Failed to read {}", file.display()))?;
    let language = language_from_path(file);
    let language_id = language.as_ref().map(|l| l.language.clone()).unwrap_or_default();
    let ctx = CodeContext::from_source(source, language_id, file.display().to_string());

    let content = match template_id {
        Some(id) => {
            let template = template_by_id(&id).ok_or_else(|| eyre!("Unknown template: {}", id))?;
            let project = file.parent().and_then(|dir| detect_project(dir));
            ctx.fill_template(template.body, language.as_ref(), project.as_ref())
        }
        None => ctx.default_prompt(),
    };

    println!("{}", content);

    if save {
        let title = file
            .file_name()
            .map(|n| format!("Generated for {}", n.to_string_lossy()))
            .unwrap_or_else(|| "Generated prompt".to_string());
        let category = language.map(|l| l.category).unwrap_or_default();
        let id = manager.add(Prompt::new(title, content, category, "user")).await?;
        eprintln!("{} Saved as prompt: {}", "✓".green(), id.cyan());
    }
    Ok(())
}

async fn cmd_recommend(manager: &StateManager, path: Option<PathBuf>) -> Result<()> {
    debug!(?path, "cmd_recommend: called");
    let root = match path {
        Some(p) => p,
        None => std::env::current_dir().context("Failed to resolve current directory")?,
    };

    let project = detect_project(&root);
    match &project {
        Some(info) => {
            println!("Project: {}", info.project_type.cyan());
            if let Some(framework) = &info.framework {
                println!("Framework: {}", framework.cyan());
            }
            if let Some(pm) = &info.package_manager {
                println!("Package manager: {}", pm.cyan());
            }
        }
        None => println!("No project manifest recognized in {}", root.display()),
    }

    let categories = recommend_categories(None, project.as_ref());
    println!(
        "Recommended categories: {}",
        categories
            .iter()
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join(", ")
            .green()
    );

    // Most used prompts within the recommended categories
    let mut prompts = manager.list(None, Some(promptstore::SortBy::UseCount)).await?;
    prompts.retain(|p| categories.contains(&p.category));
    prompts.truncate(10);
    if !prompts.is_empty() {
        println!();
        for p in &prompts {
            print_row(p);
        }
    }
    Ok(())
}

async fn cmd_upload(manager: &StateManager, config: &Config, id: &str) -> Result<()> {
    debug!(%id, "cmd_upload: called");
    let prompt = manager.get_required(id).await?;
    let client = create_client(&config.share)?;
    let share_id = client.upload(&prompt).await?;
    println!("{} Uploaded '{}' as {}", "✓".green(), prompt.title, share_id.cyan());
    Ok(())
}

async fn cmd_download(
    manager: &StateManager,
    config: &Config,
    category: Option<Category>,
    limit: Option<usize>,
    save: bool,
) -> Result<()> {
    debug!(?category, ?limit, save, "cmd_download: called");
    let client = create_client(&config.share)?;
    let filters = DownloadFilters {
        category,
        limit,
        ..Default::default()
    };
    let shared = client.download(&filters).await?;

    if shared.is_empty() {
        println!("No community prompts match");
        return Ok(());
    }

    for s in &shared {
        println!(
            "{} [{}] {} {}",
            s.share_id.yellow(),
            s.prompt.category.as_str().cyan(),
            s.prompt.title,
            format!("({} downloads, rated {:.1})", s.download_count, s.rating).dimmed()
        );
    }

    if save {
        let total = shared.len();
        let added = manager.add_batch(shared.into_iter().map(|s| s.prompt).collect()).await?;
        println!(
            "{} Imported {} new prompts ({} already present)",
            "✓".green(),
            added,
            total - added
        );
    }
    Ok(())
}
