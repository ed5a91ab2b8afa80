//! StateManager - actor that owns the PromptStore
//!
//! Processes commands via channels for thread-safe access to persistent state.
//! Every mutation goes through the single actor task, so a load-modify-save
//! cycle can never interleave with another one.

use std::path::Path;
use tokio::sync::mpsc;
use tracing::{debug, info};

use promptstore::{Category, Prompt, PromptStore, PromptUpdate, SortBy};

use super::messages::{StateCommand, StateError, StateResponse};

/// Handle to send commands to the StateManager
#[derive(Clone)]
pub struct StateManager {
    tx: mpsc::Sender<StateCommand>,
}

impl StateManager {
    /// Spawn a new StateManager actor owning the store in `store_dir`
    pub fn spawn(store_dir: impl AsRef<Path>) -> eyre::Result<Self> {
        debug!(store_dir = %store_dir.as_ref().display(), "spawn: called");
        let store = PromptStore::open(store_dir.as_ref())?;
        info!(count = store.len(), "Prompt store opened");

        let (tx, rx) = mpsc::channel(256);

        // Spawn the actor task
        tokio::spawn(actor_loop(store, rx));

        info!("StateManager spawned");

        Ok(Self { tx })
    }

    /// List prompts, optionally filtered by category and sorted
    pub async fn list(&self, category: Option<Category>, sort: Option<SortBy>) -> StateResponse<Vec<Prompt>> {
        debug!(?category, ?sort, "list: called");
        let (reply_tx, reply_rx) = tokio::sync::oneshot::channel();
        self.tx
            .send(StateCommand::List {
                category,
                sort,
                reply: reply_tx,
            })
            .await
            .map_err(|_| StateError::ChannelError)?;
        reply_rx.await.map_err(|_| StateError::ChannelError)?
    }

    /// Get a prompt by ID
    pub async fn get(&self, id: &str) -> StateResponse<Option<Prompt>> {
        debug!(%id, "get: called");
        let (reply_tx, reply_rx) = tokio::sync::oneshot::channel();
        self.tx
            .send(StateCommand::Get {
                id: id.to_string(),
                reply: reply_tx,
            })
            .await
            .map_err(|_| StateError::ChannelError)?;
        reply_rx.await.map_err(|_| StateError::ChannelError)?
    }

    /// Get a prompt by ID, returning error if not found
    pub async fn get_required(&self, id: &str) -> Result<Prompt, StateError> {
        debug!(%id, "get_required: called");
        self.get(id)
            .await?
            .ok_or_else(|| StateError::NotFound(id.to_string()))
    }

    /// Add a new prompt, returning its id
    pub async fn add(&self, prompt: Prompt) -> StateResponse<String> {
        debug!(id = %prompt.id, title = %prompt.title, "add: called");
        let (reply_tx, reply_rx) = tokio::sync::oneshot::channel();
        self.tx
            .send(StateCommand::Add {
                prompt,
                reply: reply_tx,
            })
            .await
            .map_err(|_| StateError::ChannelError)?;
        reply_rx.await.map_err(|_| StateError::ChannelError)?
    }

    /// Merge a batch of prompts, deduplicating by title
    pub async fn add_batch(&self, prompts: Vec<Prompt>) -> StateResponse<usize> {
        debug!(count = prompts.len(), "add_batch: called");
        let (reply_tx, reply_rx) = tokio::sync::oneshot::channel();
        self.tx
            .send(StateCommand::AddBatch {
                prompts,
                reply: reply_tx,
            })
            .await
            .map_err(|_| StateError::ChannelError)?;
        reply_rx.await.map_err(|_| StateError::ChannelError)?
    }

    /// Apply a partial update to a prompt
    pub async fn update(&self, id: &str, update: PromptUpdate) -> StateResponse<bool> {
        debug!(%id, "update: called");
        let (reply_tx, reply_rx) = tokio::sync::oneshot::channel();
        self.tx
            .send(StateCommand::Update {
                id: id.to_string(),
                update,
                reply: reply_tx,
            })
            .await
            .map_err(|_| StateError::ChannelError)?;
        reply_rx.await.map_err(|_| StateError::ChannelError)?
    }

    /// Delete a prompt by ID
    pub async fn delete(&self, id: &str) -> StateResponse<bool> {
        debug!(%id, "delete: called");
        let (reply_tx, reply_rx) = tokio::sync::oneshot::channel();
        self.tx
            .send(StateCommand::Delete {
                id: id.to_string(),
                reply: reply_tx,
            })
            .await
            .map_err(|_| StateError::ChannelError)?;
        reply_rx.await.map_err(|_| StateError::ChannelError)?
    }

    /// Bump the use counter for a prompt
    pub async fn increment_use(&self, id: &str) -> StateResponse<bool> {
        debug!(%id, "increment_use: called");
        let (reply_tx, reply_rx) = tokio::sync::oneshot::channel();
        self.tx
            .send(StateCommand::IncrementUse {
                id: id.to_string(),
                reply: reply_tx,
            })
            .await
            .map_err(|_| StateError::ChannelError)?;
        reply_rx.await.map_err(|_| StateError::ChannelError)?
    }

    /// Search prompts by keyword
    pub async fn search(&self, keyword: &str) -> StateResponse<Vec<Prompt>> {
        debug!(%keyword, "search: called");
        let (reply_tx, reply_rx) = tokio::sync::oneshot::channel();
        self.tx
            .send(StateCommand::Search {
                keyword: keyword.to_string(),
                reply: reply_tx,
            })
            .await
            .map_err(|_| StateError::ChannelError)?;
        reply_rx.await.map_err(|_| StateError::ChannelError)?
    }

    /// Flip the favorite flag; `None` means the id is unknown
    pub async fn toggle_favorite(&self, id: &str) -> StateResponse<Option<bool>> {
        debug!(%id, "toggle_favorite: called");
        let (reply_tx, reply_rx) = tokio::sync::oneshot::channel();
        self.tx
            .send(StateCommand::ToggleFavorite {
                id: id.to_string(),
                reply: reply_tx,
            })
            .await
            .map_err(|_| StateError::ChannelError)?;
        reply_rx.await.map_err(|_| StateError::ChannelError)?
    }

    /// All favorited prompts
    pub async fn favorites(&self) -> StateResponse<Vec<Prompt>> {
        debug!("favorites: called");
        let (reply_tx, reply_rx) = tokio::sync::oneshot::channel();
        self.tx
            .send(StateCommand::Favorites { reply: reply_tx })
            .await
            .map_err(|_| StateError::ChannelError)?;
        reply_rx.await.map_err(|_| StateError::ChannelError)?
    }

    /// Shutdown the StateManager
    pub async fn shutdown(&self) -> Result<(), StateError> {
        debug!("shutdown: called");
        self.tx
            .send(StateCommand::Shutdown)
            .await
            .map_err(|_| StateError::ChannelError)
    }

    // === Convenience methods ===

    /// Fetch a prompt and record a use of it, returning the updated record
    pub async fn use_prompt(&self, id: &str) -> Result<Prompt, StateError> {
        debug!(%id, "use_prompt: called");
        let prompt = self.get_required(id).await?;
        self.increment_use(id).await?;
        Ok(prompt)
    }
}

/// The actor loop that owns the PromptStore and processes commands
async fn actor_loop(mut store: PromptStore, mut rx: mpsc::Receiver<StateCommand>) {
    debug!("StateManager actor started");

    while let Some(cmd) = rx.recv().await {
        match cmd {
            StateCommand::List { category, sort, reply } => {
                debug!(?category, ?sort, "actor_loop: List command");
                let mut prompts = store.sorted(sort.unwrap_or_default());
                if let Some(cat) = category {
                    prompts.retain(|p| p.category == cat);
                }
                let _ = reply.send(Ok(prompts));
            }

            StateCommand::Get { id, reply } => {
                debug!(%id, "actor_loop: Get command");
                let _ = reply.send(Ok(store.get(&id)));
            }

            StateCommand::Add { prompt, reply } => {
                debug!(id = %prompt.id, "actor_loop: Add command");
                let id = prompt.id.clone();
                let result = store
                    .add(prompt)
                    .map(|_| id)
                    .map_err(|e| StateError::StoreError(e.to_string()));
                let _ = reply.send(result);
            }

            StateCommand::AddBatch { prompts, reply } => {
                debug!(count = prompts.len(), "actor_loop: AddBatch command");
                let result = store
                    .add_batch(prompts)
                    .map_err(|e| StateError::StoreError(e.to_string()));
                let _ = reply.send(result);
            }

            StateCommand::Update { id, update, reply } => {
                debug!(%id, "actor_loop: Update command");
                let result = store
                    .update(&id, &update)
                    .map_err(|e| StateError::StoreError(e.to_string()));
                let _ = reply.send(result);
            }

            StateCommand::Delete { id, reply } => {
                debug!(%id, "actor_loop: Delete command");
                let result = store.delete(&id).map_err(|e| StateError::StoreError(e.to_string()));
                let _ = reply.send(result);
            }

            StateCommand::IncrementUse { id, reply } => {
                debug!(%id, "actor_loop: IncrementUse command");
                let result = store
                    .increment_use_count(&id)
                    .map_err(|e| StateError::StoreError(e.to_string()));
                let _ = reply.send(result);
            }

            StateCommand::Search { keyword, reply } => {
                debug!(%keyword, "actor_loop: Search command");
                let _ = reply.send(Ok(store.search(&keyword)));
            }

            StateCommand::ToggleFavorite { id, reply } => {
                debug!(%id, "actor_loop: ToggleFavorite command");
                let result = store
                    .toggle_favorite(&id)
                    .map_err(|e| StateError::StoreError(e.to_string()));
                let _ = reply.send(result);
            }

            StateCommand::Favorites { reply } => {
                debug!("actor_loop: Favorites command");
                let _ = reply.send(Ok(store.favorites()));
            }

            StateCommand::Shutdown => {
                debug!("actor_loop: Shutdown command");
                info!("StateManager shutting down");
                break;
            }
        }
    }

    debug!("StateManager actor stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use promptstore::Category;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_state_manager_crud() {
        let temp = tempdir().unwrap();
        let manager = StateManager::spawn(temp.path()).unwrap();

        // Create
        let prompt = Prompt::with_id("my-prompt", "My prompt", "Do the thing", Category::Generate, "me");
        let id = manager.add(prompt).await.unwrap();
        assert_eq!(id, "my-prompt");

        // Get
        let retrieved = manager.get("my-prompt").await.unwrap();
        assert!(retrieved.is_some());
        assert_eq!(retrieved.unwrap().title, "My prompt");

        // Update
        let update = PromptUpdate {
            title: Some("Renamed".to_string()),
            ..Default::default()
        };
        assert!(manager.update("my-prompt", update).await.unwrap());
        let retrieved = manager.get("my-prompt").await.unwrap().unwrap();
        assert_eq!(retrieved.title, "Renamed");

        // Delete
        assert!(manager.delete("my-prompt").await.unwrap());
        assert!(manager.get("my-prompt").await.unwrap().is_none());

        manager.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_state_manager_seeds_defaults() {
        let temp = tempdir().unwrap();
        let manager = StateManager::spawn(temp.path()).unwrap();

        let prompts = manager.list(None, None).await.unwrap();
        assert_eq!(prompts.len(), 5);

        manager.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_state_manager_list_by_category() {
        let temp = tempdir().unwrap();
        let manager = StateManager::spawn(temp.path()).unwrap();

        let tests = manager.list(Some(Category::Test), None).await.unwrap();
        assert_eq!(tests.len(), 1);
        assert_eq!(tests[0].id, "2");

        manager.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_state_manager_list_honors_sort_within_category() {
        let temp = tempdir().unwrap();
        let manager = StateManager::spawn(temp.path()).unwrap();

        // Second docs prompt, newer than the seeded one but less used
        manager
            .add(Prompt::with_id("d2", "Changelog notes", "write notes", Category::Docs, "me"))
            .await
            .unwrap();
        for _ in 0..3 {
            manager.increment_use("5").await.unwrap();
        }

        let by_use = manager.list(Some(Category::Docs), Some(SortBy::UseCount)).await.unwrap();
        assert_eq!(by_use.len(), 2);
        assert_eq!(by_use[0].id, "5");

        let by_date = manager
            .list(Some(Category::Docs), Some(SortBy::CreatedAt))
            .await
            .unwrap();
        assert_eq!(by_date[0].id, "d2");

        manager.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_state_manager_get_required_not_found() {
        let temp = tempdir().unwrap();
        let manager = StateManager::spawn(temp.path()).unwrap();

        let result = manager.get_required("nonexistent").await;
        assert!(matches!(result.unwrap_err(), StateError::NotFound(_)));

        manager.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_use_prompt_increments_count() {
        let temp = tempdir().unwrap();
        let manager = StateManager::spawn(temp.path()).unwrap();

        let before = manager.use_prompt("1").await.unwrap();
        assert_eq!(before.use_count, 0);

        let after = manager.get("1").await.unwrap().unwrap();
        assert_eq!(after.use_count, 1);

        manager.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_toggle_favorite_distinguishes_missing() {
        let temp = tempdir().unwrap();
        let manager = StateManager::spawn(temp.path()).unwrap();

        assert_eq!(manager.toggle_favorite("3").await.unwrap(), Some(true));
        let favorites = manager.favorites().await.unwrap();
        assert_eq!(favorites.len(), 1);
        assert_eq!(favorites[0].id, "3");

        assert_eq!(manager.toggle_favorite("3").await.unwrap(), Some(false));
        assert_eq!(manager.toggle_favorite("missing").await.unwrap(), None);

        manager.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_concurrent_increments_all_land() {
        let temp = tempdir().unwrap();
        let manager = StateManager::spawn(temp.path()).unwrap();

        let mut handles = Vec::new();
        for _ in 0..10 {
            let m = manager.clone();
            handles.push(tokio::spawn(async move { m.increment_use("4").await }));
        }
        for h in handles {
            assert!(h.await.unwrap().unwrap());
        }

        let prompt = manager.get("4").await.unwrap().unwrap();
        assert_eq!(prompt.use_count, 10);

        manager.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_add_batch_dedups_against_store() {
        let temp = tempdir().unwrap();
        let manager = StateManager::spawn(temp.path()).unwrap();

        let batch = vec![
            Prompt::new("Code review", "dup of a default", Category::Review, "x"),
            Prompt::new("Entirely new", "fresh", Category::Other, "x"),
        ];
        let added = manager.add_batch(batch).await.unwrap();
        assert_eq!(added, 1);

        let all = manager.list(None, None).await.unwrap();
        assert_eq!(all.len(), 6);

        manager.shutdown().await.unwrap();
    }
}
