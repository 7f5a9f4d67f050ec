use std::path::Path;
use std::sync::mpsc;
use std::time::Duration;

use anyhow::{Context, Result};
use log::warn;
use notify_debouncer_mini::{
    DebounceEventResult, Debouncer, new_debouncer, notify::RecommendedWatcher,
    notify::RecursiveMode,
};

const DEBOUNCE: Duration = Duration::from_millis(300);

/// Debounced watcher on the deck file. Construction failures are fatal;
/// everything after that is polled and degrades to a logged skip.
pub struct DeckWatcher {
    rx: mpsc::Receiver<DebounceEventResult>,
    _debouncer: Debouncer<RecommendedWatcher>,
}

impl DeckWatcher {
    pub fn new(path: &Path) -> Result<Self> {
        let (tx, rx) = mpsc::channel();
        let mut debouncer = new_debouncer(DEBOUNCE, tx)
            .with_context(|| "failed to start file watcher".to_string())?;
        debouncer
            .watcher()
            .watch(path, RecursiveMode::NonRecursive)
            .with_context(|| format!("failed to watch {}", path.display()))?;
        Ok(Self {
            rx,
            _debouncer: debouncer,
        })
    }

    /// Drain pending events; true when the file changed since the last poll.
    pub fn changed(&self) -> bool {
        let mut changed = false;
        while let Ok(result) = self.rx.try_recv() {
            match result {
                Ok(_) => changed = true,
                Err(e) => warn!("watch: {e:?}"),
            }
        }
        changed
    }
}
