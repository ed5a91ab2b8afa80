//! Core PromptStore implementation
//!
//! One JSON document mirrors the whole in-memory list. Every mutation
//! rewrites the file in full under an exclusive advisory lock, so partial
//! writes never land and concurrent processes cannot interleave saves.

use eyre::{Context, Result};
use fs2::FileExt;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::defaults::default_prompts;
use crate::prompt::{Category, Prompt, PromptUpdate, SortBy};

/// File name of the backing document inside the store directory
pub const STORE_FILE: &str = "prompts.json";

/// The JSON-backed prompt store
pub struct PromptStore {
    /// Path to `prompts.json`
    file_path: PathBuf,
    /// The live list; callers only ever see clones
    prompts: Vec<Prompt>,
}

impl PromptStore {
    /// Open or create a store in the given directory
    ///
    /// A missing or malformed document is not an error: the store seeds
    /// the bundled defaults and writes them out.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir).context("Failed to create store directory")?;
        let file_path = dir.join(STORE_FILE);

        let (prompts, seeded) = match fs::read_to_string(&file_path) {
            Ok(text) => match serde_json::from_str::<Vec<Prompt>>(&text) {
                Ok(list) => {
                    debug!(count = list.len(), path = %file_path.display(), "Loaded prompt store");
                    (list, false)
                }
                Err(e) => {
                    warn!(error = %e, path = %file_path.display(), "Malformed prompt store, seeding defaults");
                    (default_prompts(), true)
                }
            },
            Err(_) => {
                info!(path = %file_path.display(), "No prompt store found, seeding defaults");
                (default_prompts(), true)
            }
        };

        let store = Self { file_path, prompts };
        if seeded {
            // First write; a failure here is reported but not fatal.
            if let Err(e) = store.persist() {
                warn!(error = %e, "Failed to write seeded defaults");
            }
        }
        Ok(store)
    }

    /// Path to the backing JSON document
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Number of stored prompts
    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    /// True if the store holds no prompts
    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }

    /// Snapshot of all prompts
    pub fn all(&self) -> Vec<Prompt> {
        self.prompts.clone()
    }

    /// Prompts with an exact category match
    pub fn by_category(&self, category: Category) -> Vec<Prompt> {
        self.prompts.iter().filter(|p| p.category == category).cloned().collect()
    }

    /// Prompts sorted descending by the given key
    pub fn sorted(&self, by: SortBy) -> Vec<Prompt> {
        let mut sorted = self.prompts.clone();
        match by {
            SortBy::UseCount => sorted.sort_by(|a, b| b.use_count.cmp(&a.use_count)),
            SortBy::CreatedAt => sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        }
        sorted
    }

    /// Look up a prompt by id
    pub fn get(&self, id: &str) -> Option<Prompt> {
        self.prompts.iter().find(|p| p.id == id).cloned()
    }

    /// Append a prompt and persist
    pub fn add(&mut self, prompt: Prompt) -> Result<()> {
        debug!(id = %prompt.id, title = %prompt.title, "add: called");
        self.prompts.push(prompt);
        self.persist()
    }

    /// Merge partial fields into the prompt with the given id
    ///
    /// Returns `false` (without touching disk) when the id is unknown.
    pub fn update(&mut self, id: &str, update: &PromptUpdate) -> Result<bool> {
        debug!(%id, "update: called");
        match self.prompts.iter_mut().find(|p| p.id == id) {
            Some(prompt) => {
                update.apply(prompt);
                self.persist()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove the prompt with the given id
    pub fn delete(&mut self, id: &str) -> Result<bool> {
        debug!(%id, "delete: called");
        let before = self.prompts.len();
        self.prompts.retain(|p| p.id != id);
        if self.prompts.len() == before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    /// Bump the use counter for a prompt
    pub fn increment_use_count(&mut self, id: &str) -> Result<bool> {
        debug!(%id, "increment_use_count: called");
        match self.prompts.iter_mut().find(|p| p.id == id) {
            Some(prompt) => {
                prompt.use_count += 1;
                self.persist()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Case-insensitive substring search over title, content, and category
    pub fn search(&self, keyword: &str) -> Vec<Prompt> {
        let needle = keyword.to_lowercase();
        self.prompts
            .iter()
            .filter(|p| {
                p.title.to_lowercase().contains(&needle)
                    || p.content.to_lowercase().contains(&needle)
                    || p.category.as_str().contains(&needle)
            })
            .cloned()
            .collect()
    }

    /// Flip the favorite flag
    ///
    /// Returns `None` when the id is unknown, `Some(new_state)` otherwise,
    /// so "not found" is distinguishable from "now unfavorited".
    pub fn toggle_favorite(&mut self, id: &str) -> Result<Option<bool>> {
        debug!(%id, "toggle_favorite: called");
        match self.prompts.iter_mut().find(|p| p.id == id) {
            Some(prompt) => {
                prompt.is_favorite = !prompt.is_favorite;
                let state = prompt.is_favorite;
                self.persist()?;
                Ok(Some(state))
            }
            None => Ok(None),
        }
    }

    /// All favorited prompts
    pub fn favorites(&self) -> Vec<Prompt> {
        self.prompts.iter().filter(|p| p.is_favorite).cloned().collect()
    }

    /// Whether the given prompt is currently a favorite
    pub fn is_favorite(&self, id: &str) -> bool {
        self.prompts.iter().any(|p| p.id == id && p.is_favorite)
    }

    /// Merge a batch of prompts, deduplicating by lowercased title
    ///
    /// Every inserted prompt gets a freshly generated id. Persists once at
    /// the end, and only if anything was inserted. Returns the number of
    /// prompts actually added.
    pub fn add_batch(&mut self, incoming: Vec<Prompt>) -> Result<usize> {
        debug!(incoming = incoming.len(), "add_batch: called");
        let mut titles: HashSet<String> = self.prompts.iter().map(|p| p.title_key()).collect();

        let mut added = 0;
        for mut prompt in incoming {
            let key = prompt.title_key();
            if titles.contains(&key) {
                debug!(title = %prompt.title, "add_batch: duplicate title, skipping");
                continue;
            }
            prompt.id = format!("imported-{}", Uuid::now_v7());
            titles.insert(key);
            self.prompts.push(prompt);
            added += 1;
        }

        if added > 0 {
            self.persist()?;
        }
        info!(added, "add_batch: merge complete");
        Ok(added)
    }

    /// Write the whole list back to disk
    ///
    /// Serializes pretty-printed JSON, then writes to a temp file and
    /// renames it into place while holding an exclusive advisory lock, so
    /// a reader never observes a half-written document.
    fn persist(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.prompts).context("Failed to serialize prompts")?;

        let lock_path = self.file_path.with_extension("lock");
        let lock_file = fs::File::create(&lock_path).context("Failed to create store lock file")?;
        lock_file.lock_exclusive().context("Failed to acquire store lock")?;

        let tmp_path = self.file_path.with_extension("json.tmp");
        let result = fs::write(&tmp_path, &json)
            .and_then(|_| fs::rename(&tmp_path, &self.file_path))
            .context(format!("Failed to write {}", self.file_path.display()));

        // Release before propagating any write error.
        let _ = FileExt::unlock(&lock_file);
        result?;

        debug!(count = self.prompts.len(), "persist: wrote store");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn open_store(dir: &TempDir) -> PromptStore {
        PromptStore::open(dir.path()).unwrap()
    }

    #[test]
    fn test_open_empty_seeds_defaults() {
        let temp = TempDir::new().unwrap();
        let store = open_store(&temp);
        assert_eq!(store.len(), 5);
        assert!(store.all().iter().all(|p| p.use_count == 0));
        // Seeding persists immediately
        assert!(temp.path().join(STORE_FILE).exists());
    }

    #[test]
    fn test_open_malformed_seeds_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(STORE_FILE), "{not json").unwrap();
        let store = open_store(&temp);
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn test_crud_round_trip_survives_reopen() {
        let temp = TempDir::new().unwrap();
        {
            let mut store = open_store(&temp);
            store
                .add(Prompt::with_id("x1", "Custom", "body", Category::Generate, "me"))
                .unwrap();
            store.delete("1").unwrap();
            store
                .update(
                    "2",
                    &PromptUpdate {
                        content: Some("new tests please".to_string()),
                        ..Default::default()
                    },
                )
                .unwrap();
        }

        let store = open_store(&temp);
        assert_eq!(store.len(), 5); // 5 defaults - 1 deleted + 1 added
        assert!(store.get("1").is_none());
        assert_eq!(store.get("2").unwrap().content, "new tests please");
        assert_eq!(store.get("x1").unwrap().title, "Custom");
    }

    #[test]
    fn test_increment_use_count_k_times_adds_k() {
        let temp = TempDir::new().unwrap();
        let mut store = open_store(&temp);
        for _ in 0..3 {
            assert!(store.increment_use_count("2").unwrap());
        }
        assert_eq!(store.get("2").unwrap().use_count, 3);
        // Others untouched
        assert_eq!(store.get("1").unwrap().use_count, 0);
        assert!(!store.increment_use_count("nope").unwrap());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let temp = TempDir::new().unwrap();
        let store = open_store(&temp);
        let hits = store.search("UNIT TESTS");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "2");
        // Category label matches too
        assert!(!store.search("bugfix").is_empty());
        assert!(store.search("zzz-nothing").is_empty());
    }

    #[test]
    fn test_toggle_favorite_is_an_involution() {
        let temp = TempDir::new().unwrap();
        let mut store = open_store(&temp);

        assert_eq!(store.toggle_favorite("2").unwrap(), Some(true));
        let favorites = store.favorites();
        assert_eq!(favorites.len(), 1);
        assert_eq!(favorites[0].id, "2");
        assert!(store.is_favorite("2"));

        assert_eq!(store.toggle_favorite("2").unwrap(), Some(false));
        assert!(store.favorites().is_empty());

        // Unknown id is distinguishable from "now unfavorited"
        assert_eq!(store.toggle_favorite("missing").unwrap(), None);
    }

    #[test]
    fn test_add_batch_dedups_by_title_case_insensitive() {
        let temp = TempDir::new().unwrap();
        let mut store = open_store(&temp);
        store.delete("1").unwrap();
        store.delete("2").unwrap();
        store.delete("3").unwrap();
        store.delete("4").unwrap();
        store.delete("5").unwrap();
        assert!(store.is_empty());

        let batch = vec![
            Prompt::new("Foo", "a", Category::Other, "x"),
            Prompt::new("foo", "b", Category::Other, "y"),
        ];
        let added = store.add_batch(batch).unwrap();
        assert_eq!(added, 1);
        assert_eq!(store.len(), 1);
        assert_eq!(store.all()[0].content, "a");
    }

    #[test]
    fn test_add_batch_skips_existing_titles_and_reassigns_ids() {
        let temp = TempDir::new().unwrap();
        let mut store = open_store(&temp);

        let batch = vec![
            // Clashes with the bundled "Code review" default
            Prompt::with_id("keep-me", "code REVIEW", "dup", Category::Review, "x"),
            Prompt::with_id("keep-me-too", "Brand new", "fresh", Category::Docs, "x"),
        ];
        let added = store.add_batch(batch).unwrap();
        assert_eq!(added, 1);

        let stored = store.all().into_iter().find(|p| p.title == "Brand new").unwrap();
        assert!(stored.id.starts_with("imported-"), "id was {}", stored.id);
    }

    #[test]
    fn test_sorted_by_use_count_and_recency() {
        let temp = TempDir::new().unwrap();
        let mut store = open_store(&temp);
        store.increment_use_count("3").unwrap();
        store.increment_use_count("3").unwrap();
        store.increment_use_count("5").unwrap();

        let by_use = store.sorted(SortBy::UseCount);
        assert_eq!(by_use[0].id, "3");
        assert_eq!(by_use[1].id, "5");

        store
            .add(Prompt::with_id("new", "Newest", "n", Category::Other, "me"))
            .unwrap();
        let by_date = store.sorted(SortBy::CreatedAt);
        assert_eq!(by_date[0].id, "new");
    }

    #[test]
    fn test_by_category_exact_match() {
        let temp = TempDir::new().unwrap();
        let store = open_store(&temp);
        let docs = store.by_category(Category::Docs);
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].id, "5");
        assert!(store.by_category(Category::Architecture).is_empty());
    }
}
