//! Destructive bulk operations over the shared idea collection.
//!
//! The original app built its delete handlers as first-call-wins singleton
//! closures, which silently captured their first set of state accessors
//! forever. Here the gateway is an explicit struct constructed once at
//! startup and passed by reference: it holds the authoritative in-memory
//! collection and the store, so every delete reads current state and
//! persists the result.

use std::sync::{Arc, Mutex};

use log::{info, warn};

use crate::{Idea, IdeaError, IdeaStore, Result};

/// Single stable entry point for delete-one and delete-all.
pub struct MutationGateway {
    /// The one authoritative in-memory copy of the collection.
    ideas: Arc<Mutex<Vec<Idea>>>,
    store: Arc<IdeaStore>,
}

impl MutationGateway {
    pub fn new(ideas: Arc<Mutex<Vec<Idea>>>, store: Arc<IdeaStore>) -> Self {
        Self { ideas, store }
    }

    /// Removes the idea with the given id and persists the remainder.
    pub fn delete_one(&self, id: &str) -> Result<()> {
        let mut ideas = self.lock_ideas()?;

        let before = ideas.len();
        ideas.retain(|idea| idea.id != id);
        if ideas.len() == before {
            warn!("Cannot delete idea {}: not found", id);
            return Err(IdeaError::IdeaNotFound { id: id.to_string() });
        }

        self.store.save(&ideas);
        info!("Deleted idea {}", id);
        Ok(())
    }

    /// Clears the entire collection and persists the empty state.
    pub fn delete_all(&self) -> Result<()> {
        let mut ideas = self.lock_ideas()?;
        let removed = ideas.len();
        ideas.clear();
        self.store.save(&ideas);
        info!("Deleted all {} idea(s)", removed);
        Ok(())
    }

    fn lock_ideas(&self) -> Result<std::sync::MutexGuard<'_, Vec<Idea>>> {
        self.ideas.lock().map_err(|_| IdeaError::ApplicationError {
            message: "Failed to acquire lock on idea collection".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mood;
    use tempfile::TempDir;

    fn gateway_with(ideas: Vec<Idea>, dir: &TempDir) -> (MutationGateway, Arc<IdeaStore>) {
        let store = Arc::new(IdeaStore::new(dir.path().to_path_buf()));
        store.save(&ideas);
        let gateway = MutationGateway::new(Arc::new(Mutex::new(ideas)), Arc::clone(&store));
        (gateway, store)
    }

    fn three_ideas() -> Vec<Idea> {
        (0..3)
            .map(|i| Idea::new(format!("idea {}", i), Mood::Neutral, vec![]))
            .collect()
    }

    #[test]
    fn delete_all_empties_the_store() {
        let dir = TempDir::new().unwrap();
        let (gateway, store) = gateway_with(three_ideas(), &dir);

        gateway.delete_all().unwrap();
        assert!(store.load().is_empty());
    }

    #[test]
    fn delete_one_removes_only_the_matching_idea() {
        let dir = TempDir::new().unwrap();
        let ideas = three_ideas();
        let target = ideas[1].id.clone();
        let (gateway, store) = gateway_with(ideas, &dir);

        gateway.delete_one(&target).unwrap();

        let remaining = store.load();
        assert_eq!(remaining.len(), 2);
        assert!(remaining.iter().all(|idea| idea.id != target));
    }

    #[test]
    fn delete_one_unknown_id_is_an_error() {
        let dir = TempDir::new().unwrap();
        let (gateway, store) = gateway_with(three_ideas(), &dir);

        let result = gateway.delete_one("no-such-id");
        assert!(matches!(result, Err(IdeaError::IdeaNotFound { .. })));
        assert_eq!(store.load().len(), 3);
    }

    #[test]
    fn deletes_observe_current_state_not_a_snapshot() {
        let dir = TempDir::new().unwrap();
        let shared = Arc::new(Mutex::new(three_ideas()));
        let store = Arc::new(IdeaStore::new(dir.path().to_path_buf()));
        let gateway = MutationGateway::new(Arc::clone(&shared), Arc::clone(&store));

        // Mutate the shared collection after the gateway was built.
        let late = Idea::new("added later".to_string(), Mood::Excited, vec![]);
        let late_id = late.id.clone();
        shared.lock().unwrap().insert(0, late);

        gateway.delete_one(&late_id).unwrap();
        assert_eq!(shared.lock().unwrap().len(), 3);
    }
}
