// crates/pickcountry-core/src/state.rs

//! # Selection State Machine
//!
//! Key events mutate a filter string and a cursor over the current
//! [`View`]. Accepting a letter descends one level; accepting a name
//! finalizes the choice, after which only `Confirm` (which resets) has any
//! effect.

use crate::common::CountryCode;
use crate::directory::Directory;
use crate::key::Key;
use crate::snapshot::{Item, View};
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    filter: String,
    /// Index into the current view, not into the directory.
    cursor: usize,
    finalized: bool,
    selected_code: Option<CountryCode>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// Present only once finalized.
    pub fn selected_code(&self) -> Option<&CountryCode> {
        self.selected_code.as_ref()
    }

    /// Applies one key event. Total: every key in every state either
    /// changes the state or is ignored.
    pub fn process_event(&mut self, directory: &Directory, key: Key, window: usize) {
        if self.finalized {
            if key == Key::Confirm {
                debug!("reset after final selection");
                self.reset();
            }
            return;
        }

        let view = View::of(directory, &self.filter, window);
        let last = view.len().saturating_sub(1);
        let cursor = view.clamp(self.cursor);

        match key {
            Key::MoveNext if !view.is_empty() => self.cursor = (cursor + 1).min(last),
            Key::MovePrev if !view.is_empty() => self.cursor = cursor.saturating_sub(1),
            Key::PageNext if !view.is_empty() => {
                self.cursor = cursor.saturating_add(window).min(last)
            }
            Key::PagePrev if !view.is_empty() => self.cursor = cursor.saturating_sub(window),
            Key::MoveNext | Key::MovePrev | Key::PageNext | Key::PagePrev => {}
            Key::BackOne | Key::Backspace => {
                if self.filter.pop().is_some() {
                    self.cursor = 0;
                }
            }
            Key::Char(c) => {
                self.filter.push(c);
                self.cursor = 0;
            }
            Key::Confirm | Key::Descend => match view.item(cursor) {
                Some(Item::Letter(c)) => {
                    self.filter.push(c);
                    self.cursor = 0;
                }
                Some(Item::Name(entry)) => {
                    let code = directory.resolve(&entry.name).unwrap_or(&entry.code);
                    self.selected_code = Some(code.clone());
                    self.filter = entry.name.clone();
                    self.finalized = true;
                    debug!(name = %entry.name, %code, "final selection");
                }
                None => {}
            },
        }
    }

    /// Back to the initial state: empty filter, cursor 0, nothing chosen.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
