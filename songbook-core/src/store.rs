//! Song storage
//!
//! The whole catalog lives in one named slot as a JSON array of songs. Every
//! write replaces the slot; there are no partial updates and no versioning.

use crate::error::SongError;
use crate::types::song::Song;
use anyhow::{Context, Result};
use std::collections::HashMap;

/// Name of the slot holding the catalog
pub const STORAGE_KEY: &str = "jazzSongs";

/// A place the catalog can be loaded from and saved to
pub trait SongStore {
    /// Current catalog; empty when nothing is stored or the data is unreadable
    fn load(&self) -> Vec<Song>;

    /// Overwrite the stored catalog
    fn save(&mut self, songs: &[Song]) -> Result<()>;

    /// Remove the slot entirely
    fn clear(&mut self) -> Result<()>;
}

/// Decode a stored catalog. Blank text is an empty catalog.
pub fn try_decode_songs(raw: &str) -> Result<Vec<Song>> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(raw).context("Unreadable song data")
}

/// Decode a stored catalog, falling back to an empty one on any problem
pub fn decode_songs(raw: &str) -> Vec<Song> {
    try_decode_songs(raw).unwrap_or_else(|e| {
        log::warn!("Ignoring unreadable song data: {:#}", e);
        Vec::new()
    })
}

pub fn encode_songs(songs: &[Song]) -> Result<String> {
    serde_json::to_string(songs).context("Failed to encode songs")
}

/// In-process key-value slots
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    slots: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw slot contents, if any
    pub fn raw(&self) -> Option<&str> {
        self.slots.get(STORAGE_KEY).map(String::as_str)
    }

    /// Put raw text into the slot, bypassing encoding
    pub fn set_raw(&mut self, raw: impl Into<String>) {
        self.slots.insert(STORAGE_KEY.to_string(), raw.into());
    }
}

impl SongStore for MemoryStore {
    fn load(&self) -> Vec<Song> {
        self.raw().map(decode_songs).unwrap_or_default()
    }

    fn save(&mut self, songs: &[Song]) -> Result<()> {
        let encoded = encode_songs(songs)?;
        self.set_raw(encoded);
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.slots.remove(STORAGE_KEY);
        Ok(())
    }
}

/// Append a song and persist the catalog. Returns the new song count.
pub fn add_song<S: SongStore + ?Sized>(store: &mut S, song: Song) -> Result<usize> {
    let mut songs = store.load();
    songs.push(song);
    store.save(&songs)?;
    Ok(songs.len())
}

/// Remove the song at `index` (0-based) and persist the catalog
pub fn delete_song<S: SongStore + ?Sized>(store: &mut S, index: usize) -> Result<Song> {
    let mut songs = store.load();
    if index >= songs.len() {
        return Err(SongError::IndexOutOfRange {
            index,
            len: songs.len(),
        }
        .into());
    }
    let removed = songs.remove(index);
    store.save(&songs)?;
    Ok(removed)
}

/// Drop the whole catalog
pub fn delete_all<S: SongStore + ?Sized>(store: &mut S) -> Result<()> {
    store.clear()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn song(title: &str, chords: &str) -> Song {
        Song::from_input(title, &[("A", chords)]).unwrap()
    }

    #[test]
    fn test_empty_store_loads_nothing() {
        assert!(MemoryStore::new().load().is_empty());
    }

    #[test]
    fn test_malformed_data_loads_nothing() {
        let mut store = MemoryStore::new();
        store.set_raw("{not json");
        assert!(store.load().is_empty());

        store.set_raw(r#"{"title":"not an array"}"#);
        assert!(store.load().is_empty());

        store.set_raw("   ");
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_try_decode_reports_problems() {
        assert!(try_decode_songs("").unwrap().is_empty());
        let err = try_decode_songs(r#"[{"title":"Giant Steps""#).unwrap_err();
        assert!(format!("{:#}", err).starts_with("Unreadable song data"));
    }

    #[test]
    fn test_save_writes_song_array_shape() {
        let mut store = MemoryStore::new();
        store.save(&[song("Tune", "C G")]).unwrap();
        assert_eq!(
            store.raw().unwrap(),
            r#"[{"title":"Tune","sections":[{"label":"A","chords":["C","G"]}]}]"#
        );
    }

    #[test]
    fn test_catalog_operations() {
        let mut store = MemoryStore::new();
        assert_eq!(add_song(&mut store, song("One", "C F")).unwrap(), 1);
        assert_eq!(add_song(&mut store, song("Two", "D G")).unwrap(), 2);

        let removed = delete_song(&mut store, 0).unwrap();
        assert_eq!(removed.title, "One");
        assert_eq!(store.load()[0].title, "Two");

        assert!(delete_song(&mut store, 5).is_err());

        delete_all(&mut store).unwrap();
        assert!(store.raw().is_none());
        assert!(store.load().is_empty());
    }
}
