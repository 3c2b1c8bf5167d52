//! Catalog persisted as a JSON file

use anyhow::{Context, Result};
use songbook_core::store::{encode_songs, try_decode_songs, SongStore};
use songbook_core::Song;
use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Keeps the whole catalog in one file; a missing file is an empty catalog
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    /// Modification time left by our last write (`Some(None)` after a clear)
    own_write: Option<Option<SystemTime>>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            own_write: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the catalog, reporting a file that exists but cannot be decoded
    pub fn read(&self) -> Result<Vec<Song>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => try_decode_songs(&contents)
                .with_context(|| format!("Catalog file {} is unreadable", self.path.display())),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e).with_context(|| format!("Failed to read {}", self.path.display())),
        }
    }

    /// Copy an unreadable catalog file aside so the next save cannot lose it.
    /// Returns where the copy went, or `None` when the file reads fine.
    pub fn preserve_unreadable(&self) -> Result<Option<PathBuf>> {
        if self.read().is_ok() {
            return Ok(None);
        }
        let backup = self.sibling(".bak");
        fs::copy(&self.path, &backup)
            .with_context(|| format!("Failed to back up {}", self.path.display()))?;
        log::warn!(
            "Copied unreadable catalog {} to {}",
            self.path.display(),
            backup.display()
        );
        Ok(Some(backup))
    }

    /// Whether the file on disk is still exactly what this store last wrote
    pub fn is_own_write(&self) -> bool {
        self.own_write == Some(self.disk_stamp())
    }

    fn disk_stamp(&self) -> Option<SystemTime> {
        fs::metadata(&self.path)
            .and_then(|meta| meta.modified())
            .ok()
    }

    fn sibling(&self, suffix: &str) -> PathBuf {
        let mut name: OsString = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(suffix);
        self.path.with_file_name(name)
    }

    fn temp_path(&self) -> PathBuf {
        self.sibling(".tmp")
    }
}

impl SongStore for FileStore {
    fn load(&self) -> Vec<Song> {
        self.read().unwrap_or_else(|e| {
            log::warn!("{:#}", e);
            Vec::new()
        })
    }

    fn save(&mut self, songs: &[Song]) -> Result<()> {
        let encoded = encode_songs(songs)?;
        let temp = self.temp_path();
        fs::write(&temp, encoded)
            .with_context(|| format!("Failed to write {}", temp.display()))?;
        fs::rename(&temp, &self.path)
            .with_context(|| format!("Failed to replace {}", self.path.display()))?;
        self.own_write = Some(self.disk_stamp());
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to remove {}", self.path.display()))
            }
        }
        self.own_write = Some(None);
        Ok(())
    }
}
