//! The pure document lifecycle transition function.
//!
//! One exhaustive decision covers every state x event pair:
//!
//! | State          | Input         | Save                  | SaveAs          | New          |
//! |----------------|---------------|-----------------------|-----------------|--------------|
//! | CleanUnsaved   | DirtyUnsaved  | prompt, persist       | same as Save    | CleanUnsaved |
//! | CleanSaved(n)  | DirtySaved(n) | persist under n       | prompt, persist | CleanUnsaved |
//! | DirtyUnsaved   | DirtyUnsaved  | prompt, persist       | same as Save    | CleanUnsaved |
//! | DirtySaved(n)  | DirtySaved(n) | persist under n       | prompt, persist | CleanUnsaved |
//!
//! Every successful persist lands in `CleanSaved`; every cancelled,
//! blank, or failed save stays in the current state. The function is
//! deterministic given deterministic collaborator results, and it
//! never panics or raises for the normal failure modes: a blocked
//! save is a value, not an error.

use crate::core::{DocumentEvent, DocumentState, FileName};
use crate::io::{DocumentStore, NamePrompt, StoreError};
use thiserror::Error;

/// Why a save attempt left the state untouched.
///
/// All three reasons are recoverable and map to "stay in the current
/// state"; they are distinguished so user-facing messaging can differ
/// (a cancelled prompt warrants no message at all, a failed store
/// warrants "could not save").
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SaveBlocked {
    /// The user declined to supply a name.
    #[error("name prompt cancelled")]
    PromptCancelled,

    /// The supplied name was blank or whitespace-only.
    #[error("blank file name")]
    BlankName,

    /// The store refused or could not complete the write.
    #[error(transparent)]
    StoreFailed(#[from] StoreError),
}

/// What a transition did, alongside the next state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Input was processed; the document is (now) dirty.
    Edited,
    /// The buffer was written to the store under this name.
    Persisted(FileName),
    /// The document was reset to a fresh, empty one.
    Cleared,
    /// A save attempt was a no-op; the state is unchanged.
    SaveBlocked(SaveBlocked),
}

/// Result of one transition: the next state plus what happened.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step {
    /// The state the document is in after the event.
    pub next: DocumentState,
    /// What the transition did.
    pub outcome: Outcome,
}

impl Step {
    fn blocked(state: &DocumentState, why: SaveBlocked) -> Self {
        Step {
            next: state.clone(),
            outcome: Outcome::SaveBlocked(why),
        }
    }

    fn persisted(name: FileName) -> Self {
        Step {
            next: DocumentState::saved(name.clone()),
            outcome: Outcome::Persisted(name),
        }
    }
}

/// Compute the next state for one user action.
///
/// `buffer` is the surface binding's current text; it is what gets
/// persisted on `Save`/`SaveAs`. The store is invoked at most once per
/// call, and never for a cancelled or blank prompt. `New` touches
/// neither collaborator.
///
/// # Example
///
/// ```rust
/// use draftstate::core::{transition, DocumentEvent, DocumentState};
/// use draftstate::io::{FixedPrompt, MemoryStore};
///
/// let store = MemoryStore::new();
/// let prompt = FixedPrompt::answer("report");
///
/// let step = transition(
///     &DocumentState::new(),
///     &DocumentEvent::Input("hi".to_string()),
///     "hi",
///     &store,
///     &prompt,
/// );
/// assert!(step.next.is_dirty());
///
/// let step = transition(&step.next, &DocumentEvent::Save, "hi", &store, &prompt);
/// assert_eq!(step.next.bound_name().unwrap().as_str(), "report");
/// ```
pub fn transition(
    state: &DocumentState,
    event: &DocumentEvent,
    buffer: &str,
    store: &dyn DocumentStore,
    prompt: &dyn NamePrompt,
) -> Step {
    match event {
        DocumentEvent::Input(_) => Step {
            next: state.dirtied(),
            outcome: Outcome::Edited,
        },
        DocumentEvent::New => Step {
            next: DocumentState::CleanUnsaved,
            outcome: Outcome::Cleared,
        },
        DocumentEvent::Save => match state.bound_name() {
            Some(name) => save_bound(state, name, buffer, store),
            None => save_prompted(state, buffer, store, prompt),
        },
        DocumentEvent::SaveAs => save_prompted(state, buffer, store, prompt),
    }
}

/// Silent re-save under the already bound name.
fn save_bound(
    state: &DocumentState,
    name: &FileName,
    buffer: &str,
    store: &dyn DocumentStore,
) -> Step {
    match store.save(name, buffer) {
        Ok(()) => Step::persisted(name.clone()),
        Err(err) => Step::blocked(state, SaveBlocked::StoreFailed(err)),
    }
}

/// Save under a freshly prompted name: unbound `Save` and every
/// `SaveAs`. The bound name, if any, is offered as the default.
fn save_prompted(
    state: &DocumentState,
    buffer: &str,
    store: &dyn DocumentStore,
    prompt: &dyn NamePrompt,
) -> Step {
    let default = state.bound_name().map(FileName::as_str).unwrap_or("");
    let Some(raw) = prompt.ask(default) else {
        return Step::blocked(state, SaveBlocked::PromptCancelled);
    };
    let Some(name) = FileName::new(raw) else {
        return Step::blocked(state, SaveBlocked::BlankName);
    };
    match store.save(&name, buffer) {
        Ok(()) => Step::persisted(name),
        Err(err) => Step::blocked(state, SaveBlocked::StoreFailed(err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::{FixedPrompt, MemoryStore, ScriptedPrompt};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn name(s: &str) -> FileName {
        FileName::new(s).unwrap()
    }

    /// Store that rejects every write, counting the attempts.
    #[derive(Default)]
    struct RejectingStore {
        attempts: AtomicUsize,
    }

    impl DocumentStore for RejectingStore {
        fn save(&self, name: &FileName, _content: &str) -> Result<(), StoreError> {
            self.attempts.fetch_add(1, Ordering::SeqCst);
            Err(StoreError::WriteRejected {
                name: name.to_string(),
                reason: "disk full".to_string(),
            })
        }

        fn load(&self, _name: &FileName) -> Result<Option<String>, StoreError> {
            Ok(None)
        }

        fn list(&self) -> Vec<FileName> {
            Vec::new()
        }
    }

    #[test]
    fn input_dirties_every_clean_state() {
        let store = MemoryStore::new();
        let prompt = FixedPrompt::cancelled();
        let event = DocumentEvent::Input("x".to_string());

        let step = transition(&DocumentState::CleanUnsaved, &event, "x", &store, &prompt);
        assert_eq!(step.next, DocumentState::DirtyUnsaved);
        assert_eq!(step.outcome, Outcome::Edited);

        let step = transition(
            &DocumentState::CleanSaved(name("a")),
            &event,
            "x",
            &store,
            &prompt,
        );
        assert_eq!(step.next, DocumentState::DirtySaved(name("a")));
    }

    #[test]
    fn input_on_dirty_states_stays_put() {
        let store = MemoryStore::new();
        let prompt = FixedPrompt::cancelled();
        let event = DocumentEvent::Input("x".to_string());

        let step = transition(&DocumentState::DirtyUnsaved, &event, "x", &store, &prompt);
        assert_eq!(step.next, DocumentState::DirtyUnsaved);

        let step = transition(
            &DocumentState::DirtySaved(name("a")),
            &event,
            "x",
            &store,
            &prompt,
        );
        assert_eq!(step.next, DocumentState::DirtySaved(name("a")));
    }

    #[test]
    fn new_resets_from_every_state() {
        let store = MemoryStore::new();
        let prompt = FixedPrompt::answer("should-not-be-asked");
        let states = [
            DocumentState::CleanUnsaved,
            DocumentState::CleanSaved(name("a")),
            DocumentState::DirtyUnsaved,
            DocumentState::DirtySaved(name("a")),
        ];

        for state in &states {
            let step = transition(state, &DocumentEvent::New, "text", &store, &prompt);
            assert_eq!(step.next, DocumentState::CleanUnsaved);
            assert_eq!(step.outcome, Outcome::Cleared);
        }
        // New never reaches the store.
        assert!(store.is_empty());
    }

    #[test]
    fn unbound_save_prompts_and_binds() {
        let store = MemoryStore::new();
        let prompt = FixedPrompt::answer("report");

        let step = transition(
            &DocumentState::DirtyUnsaved,
            &DocumentEvent::Save,
            "hello",
            &store,
            &prompt,
        );

        assert_eq!(step.next, DocumentState::CleanSaved(name("report")));
        assert_eq!(step.outcome, Outcome::Persisted(name("report")));
        assert_eq!(
            store.load(&name("report")).unwrap(),
            Some("hello".to_string())
        );
    }

    #[test]
    fn unbound_save_normalizes_prompted_name() {
        let store = MemoryStore::new();
        let prompt = FixedPrompt::answer("  report  ");

        let step = transition(
            &DocumentState::CleanUnsaved,
            &DocumentEvent::Save,
            "hello",
            &store,
            &prompt,
        );

        assert_eq!(step.next, DocumentState::CleanSaved(name("report")));
    }

    #[test]
    fn cancelled_prompt_is_a_no_op() {
        let store = MemoryStore::new();
        let prompt = FixedPrompt::cancelled();

        for state in [DocumentState::CleanUnsaved, DocumentState::DirtyUnsaved] {
            let step = transition(&state, &DocumentEvent::Save, "text", &store, &prompt);
            assert_eq!(step.next, state);
            assert_eq!(
                step.outcome,
                Outcome::SaveBlocked(SaveBlocked::PromptCancelled)
            );
        }
        assert!(store.is_empty());
    }

    #[test]
    fn blank_name_is_treated_like_cancellation() {
        let store = MemoryStore::new();
        let prompt = FixedPrompt::answer("   ");

        let step = transition(
            &DocumentState::DirtyUnsaved,
            &DocumentEvent::Save,
            "text",
            &store,
            &prompt,
        );

        assert_eq!(step.next, DocumentState::DirtyUnsaved);
        assert_eq!(step.outcome, Outcome::SaveBlocked(SaveBlocked::BlankName));
        assert!(store.is_empty());
    }

    #[test]
    fn bound_save_skips_the_prompt() {
        let store = MemoryStore::new();
        let prompt = ScriptedPrompt::new(); // would cancel if asked

        let step = transition(
            &DocumentState::DirtySaved(name("x")),
            &DocumentEvent::Save,
            "v2",
            &store,
            &prompt,
        );

        assert_eq!(step.next, DocumentState::CleanSaved(name("x")));
        assert_eq!(prompt.asks(), 0);
        assert_eq!(store.load(&name("x")).unwrap(), Some("v2".to_string()));
    }

    #[test]
    fn clean_bound_save_is_idempotent() {
        let store = MemoryStore::new();
        let prompt = FixedPrompt::cancelled();
        let state = DocumentState::CleanSaved(name("x"));

        let step = transition(&state, &DocumentEvent::Save, "same", &store, &prompt);
        assert_eq!(step.next, state);
        assert_eq!(step.outcome, Outcome::Persisted(name("x")));
    }

    #[test]
    fn store_failure_does_not_promote_to_clean() {
        let store = RejectingStore::default();
        let prompt = FixedPrompt::cancelled();
        let state = DocumentState::DirtySaved(name("x"));

        let step = transition(&state, &DocumentEvent::Save, "text", &store, &prompt);

        assert_eq!(step.next, state);
        assert!(matches!(
            step.outcome,
            Outcome::SaveBlocked(SaveBlocked::StoreFailed(_))
        ));
        assert_eq!(store.attempts.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn store_failure_on_prompted_save_stays_unbound() {
        let store = RejectingStore::default();
        let prompt = FixedPrompt::answer("doomed");

        let step = transition(
            &DocumentState::DirtyUnsaved,
            &DocumentEvent::Save,
            "text",
            &store,
            &prompt,
        );

        assert_eq!(step.next, DocumentState::DirtyUnsaved);
        assert!(matches!(
            step.outcome,
            Outcome::SaveBlocked(SaveBlocked::StoreFailed(_))
        ));
    }

    #[test]
    fn save_as_always_prompts_even_when_bound() {
        let store = MemoryStore::new();
        store.save(&name("a"), "original").unwrap();
        let prompt = ScriptedPrompt::new().then_answer("b");

        let step = transition(
            &DocumentState::CleanSaved(name("a")),
            &DocumentEvent::SaveAs,
            "original",
            &store,
            &prompt,
        );

        assert_eq!(step.next, DocumentState::CleanSaved(name("b")));
        // Old entry untouched, new entry written.
        assert_eq!(store.load(&name("a")).unwrap(), Some("original".to_string()));
        assert_eq!(store.load(&name("b")).unwrap(), Some("original".to_string()));
    }

    #[test]
    fn save_as_offers_bound_name_as_default() {
        let store = MemoryStore::new();
        let prompt = ScriptedPrompt::new().then_cancel();

        transition(
            &DocumentState::CleanSaved(name("a")),
            &DocumentEvent::SaveAs,
            "text",
            &store,
            &prompt,
        );

        assert_eq!(prompt.defaults_seen(), vec!["a"]);
    }

    #[test]
    fn cancelled_save_as_keeps_old_binding() {
        let store = MemoryStore::new();
        let prompt = FixedPrompt::cancelled();
        let state = DocumentState::DirtySaved(name("a"));

        let step = transition(&state, &DocumentEvent::SaveAs, "text", &store, &prompt);

        assert_eq!(step.next, state);
        assert!(store.is_empty());
    }

    #[test]
    fn save_as_behaves_like_save_when_unbound() {
        let store = MemoryStore::new();
        let prompt = FixedPrompt::answer("report");

        let via_save = transition(
            &DocumentState::DirtyUnsaved,
            &DocumentEvent::Save,
            "text",
            &store,
            &prompt,
        );
        let via_save_as = transition(
            &DocumentState::DirtyUnsaved,
            &DocumentEvent::SaveAs,
            "text",
            &store,
            &prompt,
        );

        assert_eq!(via_save, via_save_as);
    }
}
