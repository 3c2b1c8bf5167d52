use crossbeam_channel::Sender;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};

/// Watches the catalog file and forwards filesystem events to a channel.
///
/// The parent directory is watched rather than the file itself, so the
/// catalog may be created, replaced by rename, or removed while watched.
pub struct FileWatcher {
    watcher: RecommendedWatcher,
    target: Option<PathBuf>,
}

impl FileWatcher {
    /// Create a new file watcher that sends events to the provided channel
    pub fn new(tx: Sender<notify::Result<Event>>) -> notify::Result<Self> {
        let watcher = notify::recommended_watcher(move |res| {
            // The receiver is gone once the REPL exits
            let _ = tx.send(res);
        })?;

        Ok(Self {
            watcher,
            target: None,
        })
    }

    /// Start watching `path`
    pub fn watch<P: AsRef<Path>>(&mut self, path: P) -> notify::Result<()> {
        let path = path.as_ref();
        self.watcher
            .watch(&watch_dir(path), RecursiveMode::NonRecursive)?;
        self.target = Some(path.to_path_buf());
        Ok(())
    }

    /// Stop watching the current target
    pub fn unwatch(&mut self) -> notify::Result<()> {
        match self.target.take() {
            Some(path) => self.watcher.unwatch(&watch_dir(&path)),
            None => Ok(()),
        }
    }

    pub fn target(&self) -> Option<&Path> {
        self.target.as_deref()
    }

    /// Whether an event changed the watched catalog file
    pub fn is_catalog_change(&self, event: &Event) -> bool {
        let Some(target) = &self.target else {
            return false;
        };
        matches!(
            event.kind,
            EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
        ) && event
            .paths
            .iter()
            .any(|path| path.file_name() == target.file_name())
    }
}

fn watch_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
