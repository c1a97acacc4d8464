//! Durable snapshot of the last observed roster.
//!
//! The snapshot file is the diff baseline for the next run. It is read once
//! at the start of a run and written once at the end; nothing else touches
//! durable state.

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::roster::Roster;
use crate::ui;

/// What survives between runs: the roster baseline and which source set
/// produced it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub players: Roster,
    #[serde(default)]
    pub last_run_source: String,
}

/// Owns the snapshot file. The orchestrator reads and writes only through
/// this store.
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the snapshot, creating an empty one on first use.
    ///
    /// A file that no longer parses is treated as empty rather than an
    /// error: the run proceeds, but the previous baseline is gone and every
    /// player counts as a first sighting. The reset is logged.
    pub fn load(&self) -> Result<Snapshot> {
        self.ensure_exists()?;
        let contents = fs::read_to_string(&self.path)?;
        match serde_json::from_str(&contents) {
            Ok(snapshot) => Ok(snapshot),
            Err(err) => {
                ui::warn(&format!(
                    "snapshot at {} is unreadable ({err}), starting from empty",
                    self.path.display()
                ));
                Ok(Snapshot::default())
            }
        }
    }

    /// Overwrite the snapshot file. Called exactly once per run, at the end.
    pub fn save(&self, snapshot: &Snapshot) -> Result<()> {
        let json = serde_json::to_string_pretty(snapshot)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    fn ensure_exists(&self) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        if !self.path.exists() {
            fs::write(&self.path, "{}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn roster(entries: &[(&str, &str)]) -> Roster {
        entries
            .iter()
            .map(|(n, c)| (n.to_string(), c.to_string()))
            .collect()
    }

    #[test]
    fn first_use_creates_an_empty_snapshot() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data").join("state.json");
        let store = StateStore::new(&path);

        let snapshot = store.load().unwrap();
        assert!(snapshot.players.is_empty());
        assert!(snapshot.last_run_source.is_empty());
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let store = StateStore::new(dir.path().join("state.json"));

        let snapshot = Snapshot {
            players: roster(&[("Alice", "220"), ("Bob", "120")]),
            last_run_source: "both".into(),
        };
        store.save(&snapshot).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.players, snapshot.players);
        assert_eq!(loaded.last_run_source, "both");
    }

    #[test]
    fn corrupt_file_degrades_to_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, "{ not json").unwrap();

        let store = StateStore::new(&path);
        let snapshot = store.load().unwrap();
        assert!(snapshot.players.is_empty());
    }

    #[test]
    fn snapshot_preserves_roster_order() {
        let dir = tempdir().unwrap();
        let store = StateStore::new(dir.path().join("state.json"));

        let snapshot = Snapshot {
            players: roster(&[("Zed", "320"), ("Amy", "220")]),
            last_run_source: "online".into(),
        };
        store.save(&snapshot).unwrap();

        let loaded = store.load().unwrap();
        let names: Vec<&str> = loaded.players.keys().map(String::as_str).collect();
        assert_eq!(names, ["Zed", "Amy"]);
    }

    #[test]
    fn missing_fields_default() {
        let snapshot: Snapshot = serde_json::from_str("{}").unwrap();
        assert!(snapshot.players.is_empty());
        assert!(snapshot.last_run_source.is_empty());
    }
}
