//! REPL (Read-Eval-Print Loop) for the songbook

use crate::commands::songs::{apply_pending, render_catalog};
use crate::commands::{
    create_registry, CommandContext, CommandRegistry, CommandResult, PendingAction,
};
use crate::config::Config;
use crate::repl::watcher::FileWatcher;
use crate::store::FileStore;
use anyhow::Result;
use colored::*;
use crossbeam_channel::{unbounded, Receiver, Sender};
use notify::Event;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RustylineResult};
use std::thread;

pub mod watcher;

/// Types of events the REPL loop handles
enum ReplEvent {
    Input(Result<String, ReadlineError>),
}

/// What the loop should do after handling a line
#[derive(Debug, PartialEq)]
enum Flow {
    Continue,
    Exit,
}

/// Interactive REPL over a song catalog
pub struct Repl {
    editor: Option<DefaultEditor>,
    registry: CommandRegistry,
    ctx: CommandContext,
    /// Destructive action waiting for a yes/no answer
    pending: Option<PendingAction>,

    // Event channels
    tx_input: Sender<ReplEvent>,
    rx_input: Receiver<ReplEvent>,
    tx_watcher: Sender<notify::Result<Event>>,
    rx_watcher: Receiver<notify::Result<Event>>,

    // File watcher
    watcher: Option<FileWatcher>,
}

impl Repl {
    /// Create a new REPL instance
    pub fn new(config: Config) -> RustylineResult<Self> {
        let editor = DefaultEditor::new()?;
        let (tx_input, rx_input) = unbounded();
        let (tx_watcher, rx_watcher) = unbounded();

        Ok(Repl {
            editor: Some(editor),
            registry: create_registry(),
            ctx: CommandContext::new(FileStore::new(config.store_path), config.mode),
            pending: None,
            tx_input,
            rx_input,
            tx_watcher,
            rx_watcher,
            watcher: None,
        })
    }

    /// Handle one line of input
    fn handle_line(&mut self, line: &str) -> Flow {
        if let Some(action) = self.pending.take() {
            if matches!(line.to_lowercase().as_str(), "y" | "yes") {
                let result = apply_pending(action, &mut self.ctx);
                self.report(result)
            } else {
                println!("{}", "Cancelled.".dimmed());
                Flow::Continue
            }
        } else {
            if line.is_empty() {
                return Flow::Continue;
            }
            let result = self.registry.execute(line, &mut self.ctx);
            self.report(result)
        }
    }

    /// Print a command result and decide whether to keep going
    fn report(&mut self, result: CommandResult) -> Flow {
        match result {
            CommandResult::Success => {}
            CommandResult::Message(msg) => println!("{}", msg),
            CommandResult::Exit => {
                println!("{} 🎵", "Goodbye!".bright_cyan());
                return Flow::Exit;
            }
            CommandResult::Error(e) => {
                println!("{} {}", "Error:".bright_red().bold(), e.red());
            }
            CommandResult::NotACommand => {
                println!(
                    "{} Unknown command. Type '{}' for a list.",
                    "Error:".bright_red().bold(),
                    "help".bright_green()
                );
            }
            CommandResult::Confirm { prompt, action } => {
                println!("{} {}", prompt.yellow(), "[y/N]".bold());
                self.pending = Some(action);
            }
            CommandResult::Watch(path) => self.start_watching(&path),
        }
        Flow::Continue
    }

    fn start_watching(&mut self, path: &str) {
        if self.watcher.is_none() {
            match FileWatcher::new(self.tx_watcher.clone()) {
                Ok(w) => self.watcher = Some(w),
                Err(e) => println!("{} Failed to create watcher: {}", "Error:".red(), e),
            }
        }

        if let Some(w) = &mut self.watcher {
            if let Err(e) = w.watch(path) {
                println!("{} Failed to watch {}: {}", "Error:".red(), path, e);
            } else {
                println!(
                    "{} Watching {} for changes...",
                    "👀".bright_cyan(),
                    path.bright_green()
                );
            }
        }
    }

    /// Re-render from storage after the catalog file changed on disk
    fn handle_watch_event(&mut self, event: Event) {
        let Some(watcher) = &self.watcher else {
            return;
        };
        if !watcher.is_catalog_change(&event) || self.ctx.store.is_own_write() {
            return;
        }
        println!(
            "{} File changed: {}",
            "⚡".bright_yellow(),
            self.ctx.store.path().display()
        );
        self.warn_if_unreadable();
        println!("{}", render_catalog(&self.ctx));
    }

    /// Say so when an existing catalog file is being shown as empty
    fn warn_if_unreadable(&self) {
        if let Some(problem) = self.ctx.load_problem() {
            println!(
                "{} {}. Showing an empty catalog; the next change keeps a .bak copy.",
                "Warning:".bright_yellow().bold(),
                problem
            );
        }
    }

    /// Start the REPL loop
    pub fn run(&mut self) -> Result<()> {
        println!(
            "{} {}",
            "🎵".bright_yellow(),
            "Songbook: chord root movement statistics".bright_cyan().bold()
        );
        println!(
            "Catalog: {}  Try: {}",
            self.ctx.store.path().display().to_string().bright_green(),
            "add Autumn Leaves | A: Cm7 F7 Bbmaj7 Ebmaj7".cyan()
        );
        println!(
            "Type '{}' for more information, '{}' or {} to exit.\n",
            "help".bright_green(),
            "quit".bright_red(),
            "Ctrl+C".bright_red()
        );
        self.warn_if_unreadable();
        println!("{}\n", render_catalog(&self.ctx));

        // Move editor to thread
        let mut editor = self
            .editor
            .take()
            .ok_or_else(|| anyhow::anyhow!("REPL is already running"))?;
        let tx_input = self.tx_input.clone();

        thread::spawn(move || loop {
            let prompt = format!("{} ", "songbook>".bright_magenta().bold());
            let readline = editor.readline(&prompt);

            match readline {
                Ok(line) => {
                    let line = line.trim().to_string();
                    if !line.is_empty() {
                        let _ = editor.add_history_entry(&line);
                    }
                    if tx_input.send(ReplEvent::Input(Ok(line))).is_err() {
                        break;
                    }
                }
                Err(err) => {
                    let _ = tx_input.send(ReplEvent::Input(Err(err)));
                    break;
                }
            }
        });

        loop {
            crossbeam_channel::select! {
                recv(self.rx_input) -> msg => match msg {
                    Ok(ReplEvent::Input(Ok(line))) => {
                        if self.handle_line(&line) == Flow::Exit {
                            break;
                        }
                    }
                    Ok(ReplEvent::Input(Err(ReadlineError::Interrupted)))
                    | Ok(ReplEvent::Input(Err(ReadlineError::Eof))) => {
                        println!("{} 🎵", "Goodbye!".bright_cyan());
                        break;
                    }
                    Ok(ReplEvent::Input(Err(err))) => {
                        println!(
                            "{} {}",
                            "Error reading input:".bright_red().bold(),
                            err.to_string().red()
                        );
                        break;
                    }
                    Err(_) => break, // Channel closed
                },

                recv(self.rx_watcher) -> msg => match msg {
                    Ok(Ok(event)) => self.handle_watch_event(event),
                    Ok(Err(e)) => println!("{} Watch error: {}", "Error:".red(), e),
                    Err(_) => break, // Channel closed
                }
            }
        }

        Ok(())
    }
}

/// Convenience function to start the REPL
pub fn start(config: Config) -> Result<()> {
    let mut repl =
        Repl::new(config).map_err(|e| anyhow::anyhow!("Failed to initialize REPL: {}", e))?;
    repl.run()
}
