//! Document lifecycle states.
//!
//! A document is described by exactly four states, crossing two
//! independent facts: whether the buffer holds unsaved edits (dirty),
//! and whether the document has ever been persisted under a name
//! (bound). States are immutable values; every transition produces a
//! new state rather than mutating one in place.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error for blank or whitespace-only file names.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("file name must not be blank")]
pub struct InvalidFileName;

/// A validated file identifier.
///
/// A `FileName` is always non-empty after trimming surrounding
/// whitespace, so a bound state can never carry a blank name. The
/// serde representation is a plain string; deserialization re-runs
/// validation, keeping the invariant across persistence boundaries.
///
/// # Example
///
/// ```rust
/// use draftstate::core::FileName;
///
/// let name = FileName::new("  report ").unwrap();
/// assert_eq!(name.as_str(), "report");
///
/// assert!(FileName::new("   ").is_none());
/// assert!(FileName::new("").is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FileName(String);

impl FileName {
    /// Create a file name, trimming surrounding whitespace.
    ///
    /// Returns `None` for blank input. Blank answers from a name
    /// prompt are treated identically to cancellation, so `None` here
    /// is the natural representation.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let trimmed = raw.into().trim().to_string();
        if trimmed.is_empty() {
            None
        } else {
            Some(FileName(trimmed))
        }
    }

    /// The name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for FileName {
    type Error = InvalidFileName;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        FileName::new(raw).ok_or(InvalidFileName)
    }
}

impl From<FileName> for String {
    fn from(name: FileName) -> String {
        name.0
    }
}

/// The lifecycle state of one open document.
///
/// A name is present if and only if the state is one of the `*Saved`
/// variants, and it is always a previously accepted [`FileName`].
///
/// # Example
///
/// ```rust
/// use draftstate::core::{DocumentState, FileName};
///
/// let state = DocumentState::new();
/// assert!(!state.is_dirty());
/// assert!(state.bound_name().is_none());
///
/// let name = FileName::new("report").unwrap();
/// let state = DocumentState::CleanSaved(name);
/// let edited = state.dirtied();
/// assert!(edited.is_dirty());
/// assert_eq!(edited.bound_name().unwrap().as_str(), "report");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentState {
    /// No unsaved edits, never persisted.
    CleanUnsaved,
    /// No unsaved edits, persisted under the given name.
    CleanSaved(FileName),
    /// Unsaved edits exist, never persisted.
    DirtyUnsaved,
    /// Unsaved edits exist, last persisted under the given name.
    DirtySaved(FileName),
}

impl DocumentState {
    /// The canonical starting state for a fresh document.
    pub fn new() -> Self {
        DocumentState::CleanUnsaved
    }

    /// Get the state's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::CleanUnsaved => "CleanUnsaved",
            Self::CleanSaved(_) => "CleanSaved",
            Self::DirtyUnsaved => "DirtyUnsaved",
            Self::DirtySaved(_) => "DirtySaved",
        }
    }

    /// Check whether the buffer holds edits not yet persisted.
    pub fn is_dirty(&self) -> bool {
        matches!(self, Self::DirtyUnsaved | Self::DirtySaved(_))
    }

    /// The name the document was last persisted under, if any.
    pub fn bound_name(&self) -> Option<&FileName> {
        match self {
            Self::CleanSaved(name) | Self::DirtySaved(name) => Some(name),
            Self::CleanUnsaved | Self::DirtyUnsaved => None,
        }
    }

    /// The state after an edit: dirty, with any name binding kept.
    ///
    /// Dirtying is idempotent; input never changes the name binding
    /// by itself.
    pub fn dirtied(&self) -> Self {
        match self {
            Self::CleanUnsaved | Self::DirtyUnsaved => Self::DirtyUnsaved,
            Self::CleanSaved(name) | Self::DirtySaved(name) => Self::DirtySaved(name.clone()),
        }
    }

    /// The state after a successful persist under `name`.
    pub fn saved(name: FileName) -> Self {
        Self::CleanSaved(name)
    }
}

impl Default for DocumentState {
    fn default() -> Self {
        Self::new()
    }
}
