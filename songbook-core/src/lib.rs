//! # Songbook Core
//!
//! WASM-compatible core library for cataloguing songs as sections of chord
//! symbols and measuring how their roots move.
//! Provides root parsing, interval statistics and storage without any
//! terminal or filesystem dependencies.
//!
//! ## Features
//!
//! - **serde** (default): JSON storage codec and serializable view models
//! - **wasm**: Enable WASM bindings via wasm-bindgen
//!
//! ## Example
//!
//! ```
//! use songbook_core::{aggregate, DisplayMode, Song};
//!
//! let song = Song::from_input("ii-V-I", &[("A", "Cmaj7 Am7 Dm7 G7")]).unwrap();
//! let table = aggregate(&[song], DisplayMode::Normalized);
//! assert_eq!(table.counts, vec![0, 0, 0, 1, 0, 2, 0]);
//! ```

pub mod analysis;
pub mod error;
#[cfg(feature = "serde")]
pub mod store;
pub mod types;
pub mod wasm;

// Re-export commonly used types
pub use analysis::{aggregate, DisplayMode, FrequencyTable};
pub use error::SongError;
pub use types::{parse_root, PitchClass, Section, SignedInterval, Song};
