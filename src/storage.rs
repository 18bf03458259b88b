//! Persistence layer for the idea collection.
//!
//! The whole collection lives in a single JSON array under a fixed slot in
//! the data directory, mirroring how the original app kept everything under
//! one local-storage key. Loads migrate every record to the current shape;
//! saves replace the slot atomically. Neither operation ever surfaces an
//! error to the caller: a corrupted or unavailable store degrades to an
//! empty collection, and a failed write is logged and skipped.

use std::{fs, io::Write, path::PathBuf};

use log::{debug, error, info, warn};
use tempfile::NamedTempFile;

use crate::{migration, Idea, IdeaError, Mood, RawIdea, Result, Theme};

/// Fixed slot name for the idea collection.
pub const IDEAS_KEY: &str = "ideapulse_ideas.json";

/// Fixed slot name for the theme preference.
pub const THEME_KEY: &str = "theme.json";

/// Manages the storage and retrieval of the idea collection.
pub struct IdeaStore {
    /// Backing directory, or None when running without a storage backend.
    data_dir: Option<PathBuf>,
}

impl IdeaStore {
    /// Creates a store backed by the given data directory.
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            data_dir: Some(data_dir),
        }
    }

    /// Creates a store with no backing directory.
    ///
    /// Loads return an empty collection and saves are silent no-ops. Used
    /// in contexts where no data directory could be resolved.
    pub fn detached() -> Self {
        Self { data_dir: None }
    }

    /// Loads the full idea collection.
    ///
    /// Never fails: missing, unreadable or unparsable data yields an empty
    /// vector. Every record is run through the migration chain, so legacy
    /// shapes come back filled in.
    pub fn load(&self) -> Vec<Idea> {
        match self.try_load() {
            Ok(ideas) => {
                debug!("Loaded {} idea(s) from storage", ideas.len());
                ideas
            }
            Err(e) => {
                error!("Failed to load ideas, starting from empty: {}", e);
                Vec::new()
            }
        }
    }

    /// Persists the full idea collection, replacing the previous value.
    ///
    /// A single atomic write covers the entire collection; there is no
    /// partial update. Failures are logged and absorbed, and a detached
    /// store skips the write entirely.
    pub fn save(&self, ideas: &[Idea]) {
        if self.data_dir.is_none() {
            debug!("No storage backend configured, skipping save");
            return;
        }
        match self.try_save(ideas) {
            Ok(()) => info!("Saved {} idea(s) to storage", ideas.len()),
            Err(e) => error!("Failed to save ideas, write skipped: {}", e),
        }
    }

    /// Whether the idea slot has ever been written.
    ///
    /// Distinguishes a first run (seed with [`IdeaStore::defaults`]) from a
    /// deliberately emptied collection.
    pub fn has_data(&self) -> bool {
        self.slot_path(IDEAS_KEY).map_or(false, |p| p.exists())
    }

    /// Seed collection shown to first-time users when the store is empty.
    pub fn defaults() -> Vec<Idea> {
        vec![
            Idea::new(
                "Ace the final exam".to_string(),
                Mood::Excited,
                vec!["school".to_string()],
            ),
            Idea::new(
                "Finish the project assignment".to_string(),
                Mood::Neutral,
                vec!["homework".to_string()],
            ),
            Idea::new(
                "Plan the workload across the team".to_string(),
                Mood::Inspired,
                vec!["team".to_string()],
            ),
        ]
    }

    /// Reads the stored theme preference, if any.
    pub fn load_theme(&self) -> Option<Theme> {
        let path = self.slot_path(THEME_KEY)?;
        let raw = fs::read_to_string(&path).ok()?;
        match serde_json::from_str(&raw) {
            Ok(theme) => Some(theme),
            Err(e) => {
                warn!("Ignoring unreadable theme preference: {}", e);
                None
            }
        }
    }

    /// Persists the theme preference, independently of the idea slot.
    pub fn save_theme(&self, theme: Theme) {
        let Some(path) = self.slot_path(THEME_KEY) else {
            debug!("No storage backend configured, skipping theme save");
            return;
        };
        let result = self
            .ensure_data_dir()
            .and_then(|_| serde_json::to_string(&theme).map_err(IdeaError::Serialization))
            .and_then(|json| fs::write(&path, json).map_err(IdeaError::Io));
        if let Err(e) = result {
            error!("Failed to save theme preference: {}", e);
        }
    }

    fn try_load(&self) -> Result<Vec<Idea>> {
        let Some(path) = self.slot_path(IDEAS_KEY) else {
            debug!("No storage backend configured, returning empty collection");
            return Ok(Vec::new());
        };
        if !path.exists() {
            debug!("Storage slot {} does not exist yet", path.display());
            return Ok(Vec::new());
        }

        let raw = fs::read_to_string(&path)?;
        let records: Vec<RawIdea> = serde_json::from_str(&raw)?;
        Ok(migration::upgrade_all(records))
    }

    fn try_save(&self, ideas: &[Idea]) -> Result<()> {
        let dir = self.ensure_data_dir()?;
        let path = dir.join(IDEAS_KEY);

        // Write to a temp file in the same directory, then persist over the
        // slot so readers never observe a half-written collection.
        let mut temp_file = NamedTempFile::new_in(&dir)?;
        let json = serde_json::to_string_pretty(ideas)?;
        temp_file.write_all(json.as_bytes())?;
        temp_file.flush()?;
        temp_file.persist(&path).map_err(|e| IdeaError::Io(e.error))?;

        Ok(())
    }

    fn slot_path(&self, key: &str) -> Option<PathBuf> {
        self.data_dir.as_ref().map(|dir| dir.join(key))
    }

    fn ensure_data_dir(&self) -> Result<PathBuf> {
        let dir = self
            .data_dir
            .clone()
            .ok_or_else(|| IdeaError::ApplicationError {
                message: "No storage backend configured".to_string(),
            })?;
        if !dir.exists() {
            fs::create_dir_all(&dir).map_err(|e| {
                error!("Failed to create data directory {}: {}", dir.display(), e);
                IdeaError::DirectoryError { path: dir.clone() }
            })?;
        }
        Ok(dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> IdeaStore {
        IdeaStore::new(dir.path().to_path_buf())
    }

    #[test]
    fn load_on_empty_store_returns_empty() {
        let dir = TempDir::new().unwrap();
        assert!(store_in(&dir).load().is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let ideas = vec![
            Idea::new("first".to_string(), Mood::Tired, vec![]),
            Idea::new("second".to_string(), Mood::Excited, vec!["x".to_string()]),
        ];
        store.save(&ideas);

        let loaded = store.load();
        assert_eq!(loaded, ideas);
    }

    #[test]
    fn add_then_list_scenario() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert!(store.load().is_empty());

        let idea = Idea::new(
            "Write design doc".to_string(),
            Mood::Inspired,
            vec!["work".to_string()],
        );
        store.save(&[idea]);

        let loaded = store.load();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].content, "Write design doc");
        assert_eq!(loaded[0].mood, Mood::Inspired);
        assert_eq!(loaded[0].tags, vec!["work"]);
        assert!(!loaded[0].id.is_empty());
    }

    #[test]
    fn corrupt_slot_loads_as_empty() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(IDEAS_KEY), "{not json").unwrap();
        assert!(store_in(&dir).load().is_empty());
    }

    #[test]
    fn legacy_records_are_migrated_on_load() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(IDEAS_KEY),
            r#"[{"metin":"old note","etiket":"misc"}]"#,
        )
        .unwrap();

        let loaded = store_in(&dir).load();
        assert_eq!(loaded.len(), 1);
        assert!(!loaded[0].id.is_empty());
        assert_eq!(loaded[0].content, "old note");
        assert_eq!(loaded[0].mood, Mood::Neutral);
        assert_eq!(loaded[0].tags, vec!["misc"]);
    }

    #[test]
    fn detached_store_is_inert() {
        let store = IdeaStore::detached();
        store.save(&[Idea::new("x".to_string(), Mood::Neutral, vec![])]);
        assert!(store.load().is_empty());
        assert!(store.load_theme().is_none());
    }

    #[test]
    fn order_is_preserved_as_given() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let ideas: Vec<Idea> = (0..5)
            .map(|i| Idea::new(format!("idea {}", i), Mood::Neutral, vec![]))
            .collect();
        store.save(&ideas);
        let loaded = store.load();
        let contents: Vec<&str> = loaded.iter().map(|i| i.content.as_str()).collect();
        assert_eq!(contents, vec!["idea 0", "idea 1", "idea 2", "idea 3", "idea 4"]);
    }

    #[test]
    fn defaults_are_three_preset_ideas() {
        let seeds = IdeaStore::defaults();
        assert_eq!(seeds.len(), 3);
        assert!(seeds.iter().all(|i| !i.tags.is_empty()));
    }

    #[test]
    fn theme_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert!(store.load_theme().is_none());
        store.save_theme(Theme::Dark);
        assert_eq!(store.load_theme(), Some(Theme::Dark));
    }
}
