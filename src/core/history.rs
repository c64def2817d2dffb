//! Immutable transition history for one editing session.
//!
//! The history is append-only and pure: `record` returns a new history
//! rather than mutating the receiver. Self-transitions are recorded
//! too, since a re-save of a clean document is an observable persist
//! even though the state value does not change.

use super::state::DocumentState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single applied transition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// The state before the event.
    pub from: DocumentState,
    /// The state after the event.
    pub to: DocumentState,
    /// Name of the triggering event (`Input`, `Save`, `SaveAs`, `New`).
    pub event: String,
    /// When the transition was applied.
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of applied transitions.
///
/// # Example
///
/// ```rust
/// use chrono::Utc;
/// use draftstate::core::{DocumentHistory, DocumentState, TransitionRecord};
///
/// let history = DocumentHistory::new();
/// let history = history.record(TransitionRecord {
///     from: DocumentState::CleanUnsaved,
///     to: DocumentState::DirtyUnsaved,
///     event: "Input".to_string(),
///     timestamp: Utc::now(),
/// });
///
/// let path = history.get_path();
/// assert_eq!(path, vec![&DocumentState::CleanUnsaved, &DocumentState::DirtyUnsaved]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentHistory {
    transitions: Vec<TransitionRecord>,
}

impl DocumentHistory {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a transition, returning a new history.
    ///
    /// The receiver is left unchanged.
    pub fn record(&self, transition: TransitionRecord) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Get the path of states traversed: the initial state, then the
    /// `to` state of each transition.
    pub fn get_path(&self) -> Vec<&DocumentState> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Total duration from first to last transition, `None` when the
    /// history is empty.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// All recorded transitions in order.
    pub fn transitions(&self) -> &[TransitionRecord] {
        &self.transitions
    }
}
