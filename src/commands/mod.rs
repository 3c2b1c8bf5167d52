//! Command registry for REPL commands
//!
//! Provides a clean, extensible pattern for handling REPL commands.

pub mod general;
pub mod songs;
pub mod stats;

use crate::store::FileStore;
use colored::*;
use songbook_core::store::SongStore;
use songbook_core::{DisplayMode, Song};

/// Destructive action waiting for the user to confirm
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    /// 0-based catalog index, plus the title the prompt named
    DeleteSong { index: usize, title: String },
    DeleteAll,
}

/// Result of executing a command
#[derive(Debug)]
pub enum CommandResult {
    /// Command executed successfully, continue REPL
    Success,
    /// Command executed, show this message
    Message(String),
    /// Exit the REPL
    Exit,
    /// No registered command matches the input
    NotACommand,
    /// Error occurred
    Error(String),
    /// Watch the catalog file for changes
    Watch(String),
    /// Ask before running a destructive action
    Confirm {
        prompt: String,
        action: PendingAction,
    },
}

/// Context passed to command handlers
pub struct CommandContext {
    pub store: FileStore,
    /// Display mode for the global distribution; only commands change it
    pub mode: DisplayMode,
}

impl CommandContext {
    pub fn new(store: FileStore, mode: DisplayMode) -> Self {
        Self { store, mode }
    }

    /// Fresh snapshot of the stored catalog
    pub fn songs(&self) -> Vec<Song> {
        self.store.load()
    }

    /// Why the catalog file is being shown as empty, if it exists but cannot be read
    pub fn load_problem(&self) -> Option<String> {
        self.store.read().err().map(|e| format!("{:#}", e))
    }

    /// Back up an unreadable catalog before it gets overwritten.
    /// Returns a warning line to show alongside the command's output.
    pub fn guard_unreadable(&self) -> Result<Option<String>, String> {
        match self.store.preserve_unreadable() {
            Ok(Some(backup)) => Ok(Some(format!(
                "{} Previous catalog could not be read; its contents were kept in {}",
                "Warning:".bright_yellow().bold(),
                backup.display()
            ))),
            Ok(None) => Ok(None),
            Err(e) => Err(format!("{:#}", e)),
        }
    }
}

/// A command handler function
pub type CommandHandler = fn(&str, &mut CommandContext) -> CommandResult;

/// Registry of available commands
pub struct CommandRegistry {
    /// Commands indexed by their prefix
    /// Sorted by prefix length descending for longest-match-first lookup
    commands: Vec<(String, CommandHandler)>,
}

impl CommandRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Register a command with its prefix
    pub fn register(&mut self, prefix: &str, handler: CommandHandler) {
        self.commands.push((prefix.to_string(), handler));
        self.commands.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
    }

    /// Execute a command, returning NotACommand if no match found
    pub fn execute(&self, input: &str, ctx: &mut CommandContext) -> CommandResult {
        for (prefix, handler) in &self.commands {
            if input == prefix || input.starts_with(&format!("{} ", prefix)) {
                let args = if input.len() > prefix.len() {
                    input[prefix.len()..].trim()
                } else {
                    ""
                };
                return handler(args, ctx);
            }
        }
        CommandResult::NotACommand
    }

    /// Get all registered command prefixes
    pub fn list_commands(&self) -> Vec<&str> {
        self.commands.iter().map(|(p, _)| p.as_str()).collect()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a fully populated command registry with all built-in commands
pub fn create_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();

    // Catalog
    registry.register("add", songs::cmd_add);
    registry.register("list", songs::cmd_list);
    registry.register("ls", songs::cmd_list);
    registry.register("show", songs::cmd_show);
    registry.register("steps", songs::cmd_steps);
    registry.register("delete", songs::cmd_delete);
    registry.register("clear", songs::cmd_clear);

    // Statistics
    registry.register("stats", stats::cmd_stats);
    registry.register("toggle", stats::cmd_toggle);
    registry.register("mode", stats::cmd_mode);

    // General commands
    registry.register("help", general::cmd_help);
    registry.register("quit", general::cmd_quit);
    registry.register("exit", general::cmd_quit);
    registry.register("watch", general::cmd_watch);

    registry
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use std::path::PathBuf;

    /// Context backed by a fresh file under the system temp dir
    pub fn scratch_context(name: &str) -> CommandContext {
        let path: PathBuf = std::env::temp_dir().join(format!(
            "songbook-cmd-{}-{}.json",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);
        colored::control::set_override(false);
        CommandContext::new(FileStore::new(path), DisplayMode::Normalized)
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::scratch_context;
    use super::*;

    #[test]
    fn test_longest_prefix_wins() {
        let registry = create_registry();
        let commands = registry.list_commands();
        assert!(commands.contains(&"steps"));
        assert!(commands.contains(&"stats"));

        let mut ctx = scratch_context("registry");
        assert!(matches!(
            registry.execute("quit", &mut ctx),
            CommandResult::Exit
        ));
        assert!(matches!(
            registry.execute("listen", &mut ctx),
            CommandResult::NotACommand
        ));
    }
}
