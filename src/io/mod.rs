//! Collaborator interfaces consumed by the document machine.
//!
//! The machine depends on exactly two external capabilities: a
//! persistence store (name -> content) and a name prompt. Both are
//! narrow traits so transitions can be unit tested deterministically
//! without any UI or storage dependency. Methods take `&self` and
//! implementations use interior mutability, so one handle can sit
//! behind a shared effect environment.

mod memory;
mod prompt;

pub use memory::MemoryStore;
pub use prompt::{FixedPrompt, ScriptedPrompt};

use crate::core::FileName;
use thiserror::Error;

/// Errors a persistence store can report.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The store refused or could not complete a write.
    #[error("store rejected write for '{name}': {reason}")]
    WriteRejected { name: String, reason: String },

    /// The store could not be reached at all.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// A key/value persistence store from file name to text content.
///
/// The backing technology is unconstrained; an in-memory map, an
/// on-disk key/value file, and a browser-local store are all valid.
/// Only these three operations are required by the machine.
pub trait DocumentStore: Send + Sync {
    /// Persist `content` under `name`, replacing any previous entry.
    fn save(&self, name: &FileName, content: &str) -> Result<(), StoreError>;

    /// Fetch the content stored under `name`, or `None` if absent.
    fn load(&self, name: &FileName) -> Result<Option<String>, StoreError>;

    /// Enumerate the names currently stored.
    fn list(&self) -> Vec<FileName>;
}

/// A capability that asks the user for a file name.
///
/// Any interaction modality may implement this: a dialog, a CLI line
/// read, or a test stub. `None` means the user cancelled; it is a
/// first-class negative result, never an error.
pub trait NamePrompt: Send + Sync {
    /// Ask for a name, offering `default` as the pre-filled value.
    fn ask(&self, default: &str) -> Option<String>;
}
