//! Surface binding: owns the buffer and serializes events.
//!
//! [`EditorSession`] is the single owner of the mutable state slot.
//! Every method takes `&mut self`, so exactly one transition is in
//! flight per document and each event is fully processed (transition
//! computed, state stored, history recorded) before the next is
//! accepted. Any rendering is the caller's concern; the session only
//! exposes the status inputs a display needs.

use crate::checkpoint::{Checkpoint, CheckpointError};
use crate::core::{DocumentEvent, DocumentHistory, DocumentState, FileName, Outcome};
use crate::effects::{DocumentMachine, EditorEnv, MachineError};
use crate::io::DocumentStore;
use stillwater::effect::Effect;
use stillwater::prelude::*;

/// One open document bound to its collaborators.
///
/// The returned [`Outcome`] of each action tells the caller what to
/// surface: a `SaveBlocked` distinguishes "user cancelled" (no
/// message) from "could not save" (failure notice), even though the
/// state is unchanged in both cases.
pub struct EditorSession<Env: EditorEnv> {
    env: Env,
    machine: DocumentMachine,
    buffer: String,
}

impl<Env: EditorEnv> EditorSession<Env> {
    /// Start a session on a fresh, empty document.
    pub fn new(env: Env) -> Self {
        Self {
            env,
            machine: DocumentMachine::new(),
            buffer: String::new(),
        }
    }

    async fn dispatch(&mut self, event: DocumentEvent) -> Result<Outcome, MachineError> {
        let (from, event, step) = self
            .machine
            .handle(event, self.buffer.clone())
            .run(&self.env)
            .await?;
        let outcome = step.outcome.clone();
        self.machine.apply(from, event, step);
        Ok(outcome)
    }

    /// The buffer content changed to `text`.
    pub async fn input(&mut self, text: impl Into<String>) -> Result<Outcome, MachineError> {
        self.buffer = text.into();
        self.dispatch(DocumentEvent::Input(self.buffer.clone())).await
    }

    /// Save under the bound name, prompting for one if unbound.
    pub async fn save(&mut self) -> Result<Outcome, MachineError> {
        self.dispatch(DocumentEvent::Save).await
    }

    /// Save under a freshly prompted name.
    pub async fn save_as(&mut self) -> Result<Outcome, MachineError> {
        self.dispatch(DocumentEvent::SaveAs).await
    }

    /// Discard the current document and start an empty one.
    ///
    /// Unconditional: unsaved changes are dropped without prompting.
    /// A binding that wants a confirmation dialog must ask before
    /// dispatching.
    pub async fn new_document(&mut self) -> Result<Outcome, MachineError> {
        let outcome = self.dispatch(DocumentEvent::New).await?;
        self.buffer.clear();
        Ok(outcome)
    }

    /// Open an existing file from the store.
    ///
    /// Reseeds the machine directly to `CleanSaved(name)` with a fresh
    /// history; this is a state re-initialization, not a transition.
    /// The session is untouched when the name is absent or the store
    /// fails.
    pub async fn open(&mut self, name: &FileName) -> Result<(), MachineError> {
        let content = self.env.store().load(name)?;
        let Some(content) = content else {
            return Err(MachineError::UnknownFile {
                name: name.to_string(),
            });
        };
        self.buffer = content;
        self.machine = DocumentMachine::resume(DocumentState::CleanSaved(name.clone()));
        Ok(())
    }

    /// Current buffer content.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Current lifecycle state.
    pub fn state(&self) -> &DocumentState {
        self.machine.current_state()
    }

    /// Whether the buffer holds unsaved edits.
    pub fn is_dirty(&self) -> bool {
        self.machine.is_dirty()
    }

    /// The bound file name for a status display, if any.
    pub fn bound_name(&self) -> Option<&FileName> {
        self.machine.bound_name()
    }

    /// Transition history of this session.
    pub fn history(&self) -> &DocumentHistory {
        self.machine.history()
    }

    /// Names currently in the store, for a file picker.
    pub fn saved_files(&self) -> Vec<FileName> {
        self.env.store().list()
    }

    /// Snapshot the session for later restoration.
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint::capture(
            self.machine.current_state().clone(),
            self.buffer.clone(),
            self.machine.history().clone(),
        )
    }

    /// Resume a session from a checkpoint with freshly injected
    /// collaborators.
    pub fn restore(env: Env, checkpoint: Checkpoint) -> Result<Self, CheckpointError> {
        checkpoint.validate()?;
        Ok(Self {
            env,
            machine: DocumentMachine::resume_with_history(checkpoint.state, checkpoint.history),
            buffer: checkpoint.buffer,
        })
    }
}
