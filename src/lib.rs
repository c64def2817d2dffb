//! Draftstate: a document lifecycle state machine
//!
//! Draftstate tracks whether an in-memory document is "dirty" (has
//! unsaved edits) and whether it is bound to a file name, and decides,
//! for each user action, what persistence operation must occur and
//! what the resulting state is. It is built on Stillwater's "pure
//! core, imperative shell" philosophy: the transition logic is a pure
//! function over a closed four-state union, while the collaborators it
//! consults (persistence store, name prompt) are injected interfaces.
//!
//! # Core Concepts
//!
//! - **State**: `CleanUnsaved`, `CleanSaved(name)`, `DirtyUnsaved`,
//!   `DirtySaved(name)` - a name is bound if and only if the document
//!   was persisted
//! - **Events**: `Input`, `Save`, `SaveAs`, `New`
//! - **Collaborators**: `DocumentStore` and `NamePrompt`, injected so
//!   transitions are deterministic and testable without UI or storage
//! - **Outcomes**: blocked saves (cancelled prompt, blank name, store
//!   failure) are values that leave the state unchanged, never errors
//!
//! # Example
//!
//! ```rust
//! use draftstate::core::{transition, DocumentEvent, DocumentState};
//! use draftstate::io::{FixedPrompt, MemoryStore};
//!
//! let store = MemoryStore::new();
//! let prompt = FixedPrompt::answer("report");
//!
//! // Typing dirties the document.
//! let step = transition(
//!     &DocumentState::new(),
//!     &DocumentEvent::Input("hi".to_string()),
//!     "hi",
//!     &store,
//!     &prompt,
//! );
//! assert!(step.next.is_dirty());
//!
//! // Saving an unbound document prompts for a name and binds it.
//! let step = transition(&step.next, &DocumentEvent::Save, "hi", &store, &prompt);
//! assert_eq!(step.next.bound_name().unwrap().as_str(), "report");
//! assert!(!step.next.is_dirty());
//! ```

pub mod checkpoint;
pub mod core;
pub mod effects;
pub mod io;
pub mod session;

// Re-export commonly used types
pub use crate::checkpoint::{Checkpoint, CheckpointError};
pub use crate::core::{
    transition, DocumentEvent, DocumentHistory, DocumentState, FileName, Outcome, SaveBlocked,
    Step,
};
pub use crate::effects::{DocumentMachine, EditorContext, EditorEnv, MachineError};
pub use crate::io::{DocumentStore, MemoryStore, NamePrompt, StoreError};
pub use crate::session::EditorSession;
