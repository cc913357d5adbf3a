// crates/pickcountry-core/src/session.rs

//! # Session Manager
//!
//! The single shared picker session. Every request takes one lock for its
//! whole event + projection pair, so concurrent requests are linearized and
//! each returned snapshot reflects exactly its own event plus earlier ones.
//! The directory itself is read-only and shared without locking.

use crate::config::Config;
use crate::directory::Directory;
use crate::key::Key;
use crate::snapshot::{project, Snapshot};
use crate::state::SelectionState;
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug)]
pub struct Session {
    directory: Arc<Directory>,
    inner: Mutex<Inner>,
}

#[derive(Debug)]
struct Inner {
    state: SelectionState,
    window: usize,
}

impl Session {
    pub fn new(directory: Arc<Directory>, config: Config) -> Self {
        Self {
            directory,
            inner: Mutex::new(Inner {
                state: SelectionState::new(),
                window: config.window_size(),
            }),
        }
    }

    /// Current snapshot. No side effects.
    pub fn snapshot(&self) -> Snapshot {
        let inner = self.inner.lock();
        project(&self.directory, &inner.state, inner.window)
    }

    /// Applies `key` (if any) and returns the resulting snapshot, both under
    /// the same lock. `None` (an unrecognized key) leaves the state as is.
    pub fn submit(&self, key: Option<Key>) -> Snapshot {
        let mut inner = self.inner.lock();
        let window = inner.window;
        if let Some(key) = key {
            inner.state.process_event(&self.directory, key, window);
        }
        let snapshot = project(&self.directory, &inner.state, window);
        debug!(
            key = ?key,
            filter = %snapshot.filter,
            selection = snapshot.selection,
            is_final = snapshot.is_final,
            "event applied"
        );
        snapshot
    }

    /// Symbolic-key entry point: `key` is one of the identifiers accepted by
    /// [`Key::parse`]; `raw_code` is carried for diagnostics only.
    pub fn submit_event(&self, key: &str, raw_code: &str) -> Snapshot {
        let parsed = Key::parse(key);
        if parsed.is_none() {
            debug!(key, raw_code, "ignoring unrecognized key");
        }
        self.submit(parsed)
    }

    /// Changes the window size. `0` is ignored.
    pub fn set_window_size(&self, size: usize) {
        if size > 0 {
            self.inner.lock().window = size;
        }
    }

    pub fn window_size(&self) -> usize {
        self.inner.lock().window
    }

    /// Drops any selection and returns to the initial state.
    pub fn reset(&self) -> Snapshot {
        let mut inner = self.inner.lock();
        inner.state.reset();
        project(&self.directory, &inner.state, inner.window)
    }
}
