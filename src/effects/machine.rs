//! State machine that executes document transitions as effects.

use crate::core::{
    transition, DocumentEvent, DocumentHistory, DocumentState, FileName, Step, TransitionRecord,
};
use crate::io::{DocumentStore, NamePrompt, StoreError};
use chrono::Utc;
use std::sync::Arc;
use stillwater::effect::Effect;
use stillwater::prelude::*;
use thiserror::Error;

/// Errors outside the transition contract.
///
/// Recoverable save failures never surface here; they are folded into
/// [`Outcome::SaveBlocked`](crate::core::Outcome) with the state
/// unchanged. This type covers the exceptional lane: a broken store,
/// or opening a file that does not exist.
#[derive(Debug, Error)]
pub enum MachineError {
    /// The requested document is not in the store.
    #[error("no document named '{name}' in the store")]
    UnknownFile { name: String },

    /// The store itself failed outside a save attempt.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Environment supplying the machine's collaborators.
///
/// Environments are cheap to clone and shared across effects,
/// following Stillwater conventions.
pub trait EditorEnv: Clone + Send + Sync + 'static {
    /// The persistence store.
    fn store(&self) -> &dyn DocumentStore;

    /// The name prompt.
    fn prompt(&self) -> &dyn NamePrompt;
}

/// Arc-backed [`EditorEnv`] over any store/prompt pair.
pub struct EditorContext<S, P> {
    store: Arc<S>,
    prompt: Arc<P>,
}

impl<S, P> EditorContext<S, P> {
    /// Create an environment owning fresh collaborators.
    pub fn new(store: S, prompt: P) -> Self {
        Self {
            store: Arc::new(store),
            prompt: Arc::new(prompt),
        }
    }

    /// Create an environment over already shared collaborators, so a
    /// caller can keep handles for later inspection.
    pub fn from_parts(store: Arc<S>, prompt: Arc<P>) -> Self {
        Self { store, prompt }
    }
}

impl<S, P> Clone for EditorContext<S, P> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            prompt: Arc::clone(&self.prompt),
        }
    }
}

impl<S, P> EditorEnv for EditorContext<S, P>
where
    S: DocumentStore + 'static,
    P: NamePrompt + 'static,
{
    fn store(&self) -> &dyn DocumentStore {
        self.store.as_ref()
    }

    fn prompt(&self) -> &dyn NamePrompt {
        self.prompt.as_ref()
    }
}

/// State machine for one open document.
///
/// Owns the current [`DocumentState`] and the session's transition
/// history. Handling an event is split in two, mirroring the pure
/// core / imperative shell boundary: [`handle`](Self::handle) builds
/// an effect without touching the machine, and
/// [`apply`](Self::apply) installs the result after the effect ran.
pub struct DocumentMachine {
    current: DocumentState,
    history: DocumentHistory,
}

impl DocumentMachine {
    /// Create a machine for a fresh document, starting at
    /// `CleanUnsaved`.
    pub fn new() -> Self {
        Self::resume(DocumentState::new())
    }

    /// Create a machine reseeded to an arbitrary state with a fresh
    /// history. Used when an existing file is opened, which
    /// re-initializes the state to `CleanSaved` without going through
    /// the transition table.
    pub fn resume(state: DocumentState) -> Self {
        Self::resume_with_history(state, DocumentHistory::new())
    }

    /// Create a machine with an existing history, as when restoring a
    /// checkpoint.
    pub fn resume_with_history(state: DocumentState, history: DocumentHistory) -> Self {
        Self {
            current: state,
            history,
        }
    }

    /// Get current state (pure).
    pub fn current_state(&self) -> &DocumentState {
        &self.current
    }

    /// Check whether the document has unsaved edits (pure).
    pub fn is_dirty(&self) -> bool {
        self.current.is_dirty()
    }

    /// The currently bound file name, if any (pure).
    pub fn bound_name(&self) -> Option<&FileName> {
        self.current.bound_name()
    }

    /// Get transition history (pure).
    pub fn history(&self) -> &DocumentHistory {
        &self.history
    }

    /// Build the effect for one event against the current state.
    ///
    /// `buffer` is the surface binding's current text. Returns
    /// `impl Effect` for zero-cost composition; after running it, call
    /// [`apply`](Self::apply) with the result to update the machine.
    pub fn handle<Env: EditorEnv>(
        &self,
        event: DocumentEvent,
        buffer: String,
    ) -> impl Effect<Output = (DocumentState, DocumentEvent, Step), Error = MachineError, Env = Env>
    {
        let from = self.current.clone();
        from_fn(move |env: &Env| {
            let step = transition(&from, &event, &buffer, env.store(), env.prompt());
            Ok::<_, MachineError>((from.clone(), event.clone(), step))
        })
    }

    /// Apply the result from [`handle`](Self::handle), recording the
    /// transition and installing the next state.
    pub fn apply(&mut self, from: DocumentState, event: DocumentEvent, step: Step) {
        self.history = self.history.record(TransitionRecord {
            from,
            to: step.next.clone(),
            event: event.name().to_string(),
            timestamp: Utc::now(),
        });
        self.current = step.next;
    }
}

impl Default for DocumentMachine {
    fn default() -> Self {
        Self::new()
    }
}
