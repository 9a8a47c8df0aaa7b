use crate::Result;
use notify::{Event, EventKind, PollWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{Receiver, Sender, channel};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchEvent {
    /// The data file was written, replaced or removed
    Changed(PathBuf),
    Error(String),
}

/// Polls the directory holding the data file and reports changes to it.
///
/// The parent directory is watched rather than the file so that editors which
/// save by renaming a temp file over the original are still noticed.
pub struct DataWatcher {
    _watcher: PollWatcher,
    rx: Receiver<WatchEvent>,
}

impl DataWatcher {
    pub fn new(path: &Path) -> Result<Self> {
        let (tx, rx) = channel();
        let target = path.to_path_buf();
        let watch_dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let config = notify::Config::default().with_poll_interval(Duration::from_millis(500));

        let mut watcher = PollWatcher::new(
            move |res: notify::Result<Event>| forward(&tx, &target, res),
            config,
        )?;

        watcher.watch(&watch_dir, RecursiveMode::NonRecursive)?;
        tracing::debug!(dir = %watch_dir.display(), "watching for data changes");

        Ok(Self {
            _watcher: watcher,
            rx,
        })
    }

    /// Drain queued events, collapsing repeated changes into one.
    pub fn poll(&self) -> Vec<WatchEvent> {
        let mut events: Vec<WatchEvent> = Vec::new();
        while let Ok(event) = self.rx.try_recv() {
            if !events.contains(&event) {
                events.push(event);
            }
        }
        events
    }
}

fn forward(tx: &Sender<WatchEvent>, target: &Path, res: notify::Result<Event>) {
    let event = match res {
        Ok(event) => event,
        Err(err) => {
            let _ = tx.send(WatchEvent::Error(err.to_string()));
            return;
        }
    };

    if !matches!(
        event.kind,
        EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
    ) {
        return;
    }

    if event.paths.iter().any(|p| same_file_name(p, target)) {
        let _ = tx.send(WatchEvent::Changed(target.to_path_buf()));
    }
}

fn same_file_name(candidate: &Path, target: &Path) -> bool {
    candidate.file_name().is_some() && candidate.file_name() == target.file_name()
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{CreateKind, ModifyKind};

    #[test]
    fn test_forward_reports_changes_to_target_only() {
        let (tx, rx) = channel();
        let target = PathBuf::from("/data/contacts.json");

        let other = Event::new(EventKind::Modify(ModifyKind::Any))
            .add_path(PathBuf::from("/data/other.json"));
        forward(&tx, &target, Ok(other));
        assert!(rx.try_recv().is_err());

        let ours = Event::new(EventKind::Create(CreateKind::File))
            .add_path(PathBuf::from("/data/contacts.json"));
        forward(&tx, &target, Ok(ours));
        assert_eq!(rx.try_recv(), Ok(WatchEvent::Changed(target.clone())));
    }

    #[test]
    fn test_forward_ignores_access_events() {
        let (tx, rx) = channel();
        let target = PathBuf::from("contacts.json");
        let access = Event::new(EventKind::Access(notify::event::AccessKind::Any))
            .add_path(PathBuf::from("contacts.json"));
        forward(&tx, &target, Ok(access));
        assert!(rx.try_recv().is_err());
    }
}
