// crates/pickcountry-core/src/snapshot.rs

//! # Snapshot Projector
//!
//! Turns a [`SelectionState`] into what the client renders. The visible
//! list never grows past the window size: when a filter matches more names
//! than fit, the list degrades to a menu of the possible next letters.

use crate::common::{CountryCode, NameEntry};
use crate::directory::Directory;
use crate::state::SelectionState;
use serde::{Deserialize, Serialize};

/// First-level navigation menu shown for an empty filter.
pub const ALPHABET: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Externally visible state at one point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub list: Vec<String>,
    /// Index into `list`.
    pub selection: usize,
    pub filter: String,
    pub is_final: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_code: Option<CountryCode>,
}

/// Candidate view for a filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View<'a> {
    /// Empty filter: the fixed A-Z menu, not derived from the directory.
    Alphabet,
    /// More matches than the window holds: distinct next characters,
    /// never more than `max(window, 26)`. When that cap is hit, alphabetic
    /// characters are kept ahead of spaces and punctuation.
    Letters(Vec<char>),
    /// Every matching alias. May be empty.
    Names(&'a [NameEntry]),
}

/// One highlighted entry of a [`View`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Item<'a> {
    /// A prefix branch; accepting it descends.
    Letter(char),
    /// A full alias; accepting it finalizes.
    Name(&'a NameEntry),
}

impl<'a> View<'a> {
    /// Computes the view of `directory` under `filter`.
    pub fn of(directory: &'a Directory, filter: &str, window: usize) -> Self {
        if filter.is_empty() {
            return Self::Alphabet;
        }

        let matches = directory.matches(filter);
        if matches.len() <= window {
            return Self::Names(matches);
        }

        let pos = filter.chars().count();
        let mut letters: Vec<char> = matches
            .iter()
            .filter_map(|e| e.name.chars().nth(pos))
            .map(display_letter)
            .collect();
        letters.sort_unstable();
        letters.dedup();

        // Punctuation and spaces only fill what the alphabet leaves free.
        let cap = window.max(ALPHABET.len());
        if letters.len() > cap {
            letters.sort_by_key(|c| !c.is_alphabetic());
            letters.truncate(cap);
            letters.sort_unstable();
        }
        Self::Letters(letters)
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Alphabet => ALPHABET.len(),
            Self::Letters(letters) => letters.len(),
            Self::Names(names) => names.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn item(&self, index: usize) -> Option<Item<'a>> {
        match self {
            Self::Alphabet => ALPHABET.get(index).copied().map(Item::Letter),
            Self::Letters(letters) => letters.get(index).copied().map(Item::Letter),
            Self::Names(names) => names.get(index).map(Item::Name),
        }
    }

    /// Display strings, in order.
    pub fn labels(&self) -> Vec<String> {
        match self {
            Self::Alphabet => ALPHABET.iter().map(char::to_string).collect(),
            Self::Letters(letters) => letters.iter().map(char::to_string).collect(),
            Self::Names(names) => names.iter().map(|e| e.name.clone()).collect(),
        }
    }

    /// Clamps a cursor into `[0, len - 1]`, or 0 for an empty view.
    pub fn clamp(&self, cursor: usize) -> usize {
        cursor.min(self.len().saturating_sub(1))
    }
}

/// Projects `state` over `directory`. Pure: identical inputs give an
/// identical snapshot.
pub fn project(directory: &Directory, state: &SelectionState, window: usize) -> Snapshot {
    let view = View::of(directory, state.filter(), window);
    Snapshot {
        selection: view.clamp(state.cursor()),
        list: view.labels(),
        filter: state.filter().to_string(),
        is_final: state.is_finalized(),
        selected_code: state.selected_code().cloned(),
    }
}

/// Upper-cases a menu letter when that maps to exactly one char.
///
/// Descending appends this display form to the filter, so it has to
/// lower-case back to the original. That holds for ASCII but not for
/// letters like dotless `ı` (`ı` -> `I` -> `i`), whose branch then shows
/// an empty view.
fn display_letter(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}
