//! Local storage: data directory resolution and snapshot export/import.
//!
//! A snapshot is a single JSON document with top-level `settings`, `user`
//! and `history` keys, mirroring the three stores field-for-field.

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::GenerationRecord;
use crate::stores::{AppSettings, UserProfile};

/// File name of an exported snapshot.
pub const SNAPSHOT_FILE_NAME: &str = "content_buddy_backup.json";

/// Portable document mirroring the three stores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub settings: AppSettings,
    pub user: UserProfile,
    pub history: Vec<GenerationRecord>,
}

/// Get the base data directory for the application, creating it if needed.
pub fn get_data_dir() -> Result<PathBuf> {
    let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    let data_dir = base.join("buddy");
    if !data_dir.exists() {
        fs::create_dir_all(&data_dir).wrap_err("Failed to create data directory")?;
    }
    Ok(data_dir)
}

/// Default location snapshots are exported to.
pub fn default_snapshot_path() -> Result<PathBuf> {
    Ok(get_data_dir()?.join(SNAPSHOT_FILE_NAME))
}

/// Path of the tracing log file (stdout belongs to the TUI).
pub fn log_file_path() -> Result<PathBuf> {
    Ok(get_data_dir()?.join("buddy.log"))
}

/// Serialize a snapshot to JSON and write it to `path`.
pub fn export_snapshot(snapshot: &Snapshot, path: &Path) -> Result<()> {
    let json =
        serde_json::to_string_pretty(snapshot).wrap_err("Failed to serialize snapshot")?;
    fs::write(path, json).wrap_err(format!("Failed to write snapshot to {:?}", path))?;
    Ok(())
}

/// Read a snapshot document back from `path`.
pub fn import_snapshot(path: &Path) -> Result<Snapshot> {
    let json = fs::read_to_string(path)
        .wrap_err(format!("Failed to read snapshot from {:?}", path))?;
    let snapshot = serde_json::from_str(&json).wrap_err("Failed to deserialize snapshot")?;
    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GenerationParams, RecordKind};

    #[test]
    fn test_snapshot_round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SNAPSHOT_FILE_NAME);

        let snapshot = Snapshot {
            settings: AppSettings::default(),
            user: UserProfile::default(),
            history: vec![GenerationRecord::new(
                RecordKind::Hashtags,
                "#one #two".to_string(),
                GenerationParams {
                    amount: Some(10),
                    model_id: "gemini-2.0-flash".to_string(),
                    ..Default::default()
                },
            )],
        };

        export_snapshot(&snapshot, &path).unwrap();
        let restored = import_snapshot(&path).unwrap();
        assert_eq!(restored, snapshot);
    }

    #[test]
    fn test_snapshot_document_has_three_top_level_keys() {
        let snapshot = Snapshot {
            settings: AppSettings::default(),
            user: UserProfile::default(),
            history: Vec::new(),
        };
        let value = serde_json::to_value(&snapshot).unwrap();
        assert!(value.get("settings").is_some());
        assert!(value.get("user").is_some());
        assert!(value.get("history").is_some());
    }

    #[test]
    fn test_import_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(import_snapshot(&dir.path().join("missing.json")).is_err());
    }
}
