use anyhow::{Result, anyhow};
use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex};
use std::thread;

pub trait ClipboardWriter: Send + Sync {
    fn write_text(&self, text: &str) -> Result<()>;
}

/// System clipboard via `arboard`.
///
/// The handle is created on first use and kept for the life of the process;
/// on X11 and Wayland the copied text is only served while it exists.
#[derive(Default)]
pub struct SystemClipboard {
    handle: Mutex<Option<arboard::Clipboard>>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardWriter for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<()> {
        let mut guard = self
            .handle
            .lock()
            .map_err(|_| anyhow!("clipboard lock poisoned"))?;

        if guard.is_none() {
            *guard = Some(arboard::Clipboard::new()?);
        }

        match guard.as_mut() {
            Some(clipboard) => clipboard.set_text(text.to_string())?,
            None => return Err(anyhow!("clipboard unavailable")),
        }
        Ok(())
    }
}

/// Row a copy was requested from, and the projection generation it belongs to.
///
/// Row indices only mean something within one generation; the caller bumps
/// its generation whenever the projection changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyTarget {
    pub row: usize,
    pub generation: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied { target: CopyTarget },
    Failed { target: CopyTarget, error: String },
}

/// Copy `text` on a worker thread and report back through `tx`.
///
/// Fire-and-forget for the caller: the event loop keeps running and picks
/// up the outcome on a later tick.
pub fn copy_in_background(
    writer: Arc<dyn ClipboardWriter>,
    text: String,
    target: CopyTarget,
    tx: Sender<CopyOutcome>,
) {
    thread::spawn(move || {
        let outcome = match writer.write_text(&text) {
            Ok(()) => CopyOutcome::Copied { target },
            Err(err) => CopyOutcome::Failed {
                target,
                error: err.to_string(),
            },
        };
        let _ = tx.send(outcome);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc::channel;
    use std::time::Duration;

    struct RecordingClipboard {
        written: Mutex<Vec<String>>,
        fail: bool,
    }

    impl ClipboardWriter for RecordingClipboard {
        fn write_text(&self, text: &str) -> Result<()> {
            if self.fail {
                return Err(anyhow!("no display"));
            }
            self.written.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_background_copy_reports_success() {
        let clipboard = Arc::new(RecordingClipboard {
            written: Mutex::new(Vec::new()),
            fail: false,
        });
        let (tx, rx) = channel();

        let target = CopyTarget {
            row: 3,
            generation: 7,
        };
        copy_in_background(clipboard.clone(), "Work".to_string(), target, tx);

        let outcome = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(outcome, CopyOutcome::Copied { target });
        assert_eq!(*clipboard.written.lock().unwrap(), vec!["Work".to_string()]);
    }

    #[test]
    fn test_background_copy_reports_failure() {
        let clipboard = Arc::new(RecordingClipboard {
            written: Mutex::new(Vec::new()),
            fail: true,
        });
        let (tx, rx) = channel();

        let target = CopyTarget {
            row: 0,
            generation: 0,
        };
        copy_in_background(clipboard, "Work".to_string(), target, tx);

        let outcome = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert!(matches!(
            outcome,
            CopyOutcome::Failed { target: CopyTarget { row: 0, .. }, ref error } if error == "no display"
        ));
    }
}
