//! # Songbook
//!
//! Songbook is an interactive catalog of songs written as sections of chord
//! symbols. For every song it shows how the chord roots move (the shortest
//! signed chromatic interval between neighbours), and it aggregates those
//! movements into a distribution across the whole catalog.
//!
//! ## Modules
//!
//! - `commands`: The command registry and handlers behind the REPL
//!   (adding, listing, inspecting and deleting songs, display mode).
//! - `config`: Startup configuration (catalog file, initial display mode).
//! - `render`: Terminal rendering of tables and the distribution bar.
//! - `repl`: The Read-Eval-Print Loop, including watching the catalog file.
//! - `store`: The catalog persisted as a JSON file.
//!
//! Parsing and statistics live in `songbook-core`.

pub mod commands;
pub mod config;
pub mod render;
pub mod repl;
pub mod store;

// Re-export commonly used types and functions for convenience
pub use crate::config::Config;
pub use crate::store::FileStore;
pub use songbook_core::{aggregate, parse_root, DisplayMode, FrequencyTable, Song};
