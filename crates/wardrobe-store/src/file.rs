use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info};
use wardrobe_types::ClothingItem;

use crate::codec;
use crate::error::StoreResult;
use crate::traits::Document;

/// A JSON document on the local filesystem.
///
/// Saves write the encoded collection to a temporary file in the target's
/// directory, fsync it, then rename it over the target. Readers see either
/// the previous document or the new one.
#[derive(Clone, Debug)]
pub struct JsonFileDocument {
    path: PathBuf,
}

impl JsonFileDocument {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the document file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the parent directory and an empty document if the file does not
    /// exist yet. Returns `true` if a new document was written.
    pub fn initialize(&self) -> StoreResult<bool> {
        if self.path.exists() {
            return Ok(false);
        }
        fs::create_dir_all(self.parent_dir())?;
        self.save(&[])?;
        info!(path = %self.path.display(), "initialized empty item document");
        Ok(true)
    }

    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }
}

impl Document for JsonFileDocument {
    fn load(&self) -> StoreResult<Vec<ClothingItem>> {
        let bytes = fs::read(&self.path)?;
        let items = codec::decode(&bytes)?;
        debug!(path = %self.path.display(), count = items.len(), "document loaded");
        Ok(items)
    }

    fn save(&self, items: &[ClothingItem]) -> StoreResult<()> {
        let encoded = codec::encode(items)?;

        let mut tmp = NamedTempFile::new_in(self.parent_dir())?;
        tmp.write_all(&encoded)?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| e.error)?;

        debug!(path = %self.path.display(), count = items.len(), bytes = encoded.len(), "document saved");
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
