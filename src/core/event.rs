//! Events consumed by the document lifecycle machine.

use serde::{Deserialize, Serialize};

/// A user action forwarded by the surface binding.
///
/// Events carry no memory between calls; all memory lives in
/// [`DocumentState`](super::DocumentState).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentEvent {
    /// The buffer content changed to the given text.
    Input(String),
    /// Save under the bound name, prompting for one if unbound.
    Save,
    /// Save under a freshly prompted name.
    SaveAs,
    /// Discard the current document and start an empty one.
    New,
}

impl DocumentEvent {
    /// Get the event's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Input(_) => "Input",
            Self::Save => "Save",
            Self::SaveAs => "SaveAs",
            Self::New => "New",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_name_returns_correct_value() {
        assert_eq!(DocumentEvent::Input("x".to_string()).name(), "Input");
        assert_eq!(DocumentEvent::Save.name(), "Save");
        assert_eq!(DocumentEvent::SaveAs.name(), "SaveAs");
        assert_eq!(DocumentEvent::New.name(), "New");
    }

    #[test]
    fn event_serializes_correctly() {
        let event = DocumentEvent::Input("hello".to_string());
        let json = serde_json::to_string(&event).unwrap();
        let deserialized: DocumentEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }
}
