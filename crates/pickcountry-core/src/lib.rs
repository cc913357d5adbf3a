// crates/pickcountry-core/src/lib.rs

//! pickcountry-core
//! ================
//!
//! Incremental, stateful country picker. A [`Directory`] of aliases is
//! built once from two JSON tables; a single shared [`Session`] then turns
//! a stream of key events into [`Snapshot`]s a thin client can render.
//!
//! ```rust
//! use pickcountry_core::{CodeAliasTable, Config, Directory, GroupedTable, Session};
//! use std::sync::Arc;
//!
//! let mut codes = CodeAliasTable::new();
//! codes.insert("US".into(), vec!["United States".into(), "USA".into()]);
//! codes.insert("CA".into(), vec!["Canada".into()]);
//! let directory = Directory::build(&codes, &GroupedTable::new()).unwrap();
//!
//! let session = Session::new(Arc::new(directory), Config::default());
//! for c in ["U", "S", "A"] {
//!     session.submit_event(c, "");
//! }
//! let snap = session.submit_event("confirm", "Enter");
//! assert!(snap.is_final);
//! assert_eq!(snap.selected_code.unwrap().as_str(), "US");
//! ```

pub mod common;
pub mod config;
pub mod directory;
pub mod error;
pub mod key;
pub mod loader;
#[doc(hidden)]
pub mod raw;
pub mod session;
pub mod snapshot;
pub mod state;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::common::{Country, CountryCode, DirectoryStats, NameEntry};
pub use crate::config::{Config, DEFAULT_MAX_LIST_SIZE};
pub use crate::directory::Directory;
pub use crate::error::{PickError, Result};
pub use crate::key::Key;
pub use crate::raw::{CodeAliasTable, GroupedEntry, GroupedTable};
pub use crate::session::Session;
pub use crate::snapshot::{project, Item, Snapshot, View, ALPHABET};
pub use crate::state::SelectionState;
