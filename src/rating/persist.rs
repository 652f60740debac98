//! Durable rating snapshots
//!
//! The whole ledger is stored as one flat JSON object mapping player name to
//! rating. Writes go to a sibling temporary file that is renamed over the
//! target, so a reader never observes a half-written snapshot.

use crate::error::{RatingsError, Result};
use crate::types::RatingMap;
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Trait for loading and saving complete rating snapshots
pub trait SnapshotStorage {
    /// Read the persisted snapshot; absence of prior state yields an empty map
    fn load(&self) -> Result<RatingMap>;

    /// Replace the persisted snapshot
    fn save(&self, ratings: &RatingMap) -> Result<()>;
}

/// JSON file snapshot storage
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn storage_error(&self, message: impl std::fmt::Display) -> RatingsError {
        RatingsError::StorageError {
            path: self.path.display().to_string(),
            message: message.to_string(),
        }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "ratings.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl SnapshotStorage for JsonFileStorage {
    fn load(&self) -> Result<RatingMap> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(
                    "No ratings snapshot at {}, starting empty",
                    self.path.display()
                );
                return Ok(RatingMap::new());
            }
            Err(e) => return Err(self.storage_error(e).into()),
        };

        let ratings: RatingMap =
            serde_json::from_str(&raw).map_err(|e| self.storage_error(e))?;
        debug!(
            "Loaded {} ratings from {}",
            ratings.len(),
            self.path.display()
        );

        Ok(ratings)
    }

    fn save(&self, ratings: &RatingMap) -> Result<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|e| self.storage_error(e))?;
        }

        // Sorted keys keep the file diffable between runs
        let sorted: BTreeMap<&str, f64> = ratings.iter().map(|(k, v)| (k.as_str(), *v)).collect();
        let json = serde_json::to_string_pretty(&sorted).map_err(|e| self.storage_error(e))?;

        let tmp = self.temp_path();
        let write_tmp = || -> std::io::Result<()> {
            let mut file = File::create(&tmp)?;
            file.write_all(json.as_bytes())?;
            file.write_all(b"\n")?;
            file.sync_all()
        };
        if let Err(e) = write_tmp() {
            let _ = fs::remove_file(&tmp);
            return Err(self.storage_error(e).into());
        }

        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(self.storage_error(e).into());
        }
        sync_parent_dir(&self.path).map_err(|e| self.storage_error(e))?;
        debug!("Saved {} ratings to {}", ratings.len(), self.path.display());

        Ok(())
    }
}

/// Flush the directory entry of `path` so a completed rename survives a crash
#[cfg(unix)]
fn sync_parent_dir(path: &Path) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    File::open(dir)?.sync_all()
}

#[cfg(not(unix))]
fn sync_parent_dir(_path: &Path) -> std::io::Result<()> {
    Ok(())
}
