//! Persisted location preference: a single JSON file in the config directory.

use crate::types::{SavedLocation, StoreError};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

const FILE_NAME: &str = "saved_location.json";

#[derive(Debug, Clone)]
pub struct LocationStore {
    path: PathBuf,
}

impl LocationStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store using the default file name inside `config_dir`
    pub fn in_dir(config_dir: &Path) -> Self {
        Self::new(config_dir.join(FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the saved location.
    ///
    /// Missing and unreadable files count as "no preference". A file that
    /// does not parse, or holds out-of-range coordinates, is deleted.
    pub fn load(&self) -> Option<SavedLocation> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => return None,
            Err(e) => {
                tracing::warn!("Could not read saved location {:?}: {}", self.path, e);
                return None;
            }
        };

        match serde_json::from_str::<SavedLocation>(&json) {
            Ok(saved) if saved.coordinates().is_valid() => Some(saved),
            Ok(saved) => {
                tracing::warn!(
                    "Discarding saved location with invalid coordinates: {}, {}",
                    saved.latitude,
                    saved.longitude
                );
                self.discard();
                None
            }
            Err(e) => {
                tracing::warn!("Discarding corrupt saved location: {}", e);
                self.discard();
                None
            }
        }
    }

    pub fn save(&self, location: &SavedLocation) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(location)?;
        fs::write(&self.path, json)?;

        tracing::info!("Saved location preference: {}", location.name);
        Ok(())
    }

    /// Delete the saved location; succeeds if there was none.
    pub fn clear(&self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::info!("Cleared saved location");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn discard(&self) {
        if let Err(e) = self.clear() {
            tracing::warn!("Failed to delete saved location: {}", e);
        }
    }
}
