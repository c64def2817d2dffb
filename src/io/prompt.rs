//! Reference implementations of [`NamePrompt`].

use super::NamePrompt;
use std::collections::VecDeque;
use std::sync::Mutex;

/// A prompt that replays a scripted sequence of answers.
///
/// Each `ask` consumes the next scripted reply; once the script is
/// exhausted, every further ask is a cancellation. The defaults
/// offered to the user are recorded for assertion.
///
/// # Example
///
/// ```rust
/// use draftstate::io::{NamePrompt, ScriptedPrompt};
///
/// let prompt = ScriptedPrompt::new()
///     .then_answer("report")
///     .then_cancel();
///
/// assert_eq!(prompt.ask(""), Some("report".to_string()));
/// assert_eq!(prompt.ask(""), None);
/// assert_eq!(prompt.ask(""), None); // script exhausted
/// ```
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    replies: Mutex<VecDeque<Option<String>>>,
    defaults_seen: Mutex<Vec<String>>,
}

impl ScriptedPrompt {
    /// Create a prompt with an empty script (always cancels).
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an accepted answer to the script.
    pub fn then_answer(self, answer: impl Into<String>) -> Self {
        if let Ok(mut replies) = self.replies.lock() {
            replies.push_back(Some(answer.into()));
        }
        self
    }

    /// Append a cancellation to the script.
    pub fn then_cancel(self) -> Self {
        if let Ok(mut replies) = self.replies.lock() {
            replies.push_back(None);
        }
        self
    }

    /// The default values offered so far, in ask order.
    pub fn defaults_seen(&self) -> Vec<String> {
        self.defaults_seen
            .lock()
            .map(|seen| seen.clone())
            .unwrap_or_default()
    }

    /// Number of asks answered or cancelled so far.
    pub fn asks(&self) -> usize {
        self.defaults_seen.lock().map(|seen| seen.len()).unwrap_or(0)
    }
}

impl NamePrompt for ScriptedPrompt {
    fn ask(&self, default: &str) -> Option<String> {
        if let Ok(mut seen) = self.defaults_seen.lock() {
            seen.push(default.to_string());
        }
        self.replies
            .lock()
            .ok()
            .and_then(|mut replies| replies.pop_front())
            .flatten()
    }
}

/// A prompt that gives the same reply to every ask.
#[derive(Clone, Debug)]
pub struct FixedPrompt {
    reply: Option<String>,
}

impl FixedPrompt {
    /// Always answer with `name`.
    pub fn answer(name: impl Into<String>) -> Self {
        Self {
            reply: Some(name.into()),
        }
    }

    /// Always cancel.
    pub fn cancelled() -> Self {
        Self { reply: None }
    }
}

impl NamePrompt for FixedPrompt {
    fn ask(&self, _default: &str) -> Option<String> {
        self.reply.clone()
    }
}
