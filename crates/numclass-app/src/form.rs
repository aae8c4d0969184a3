//! Presentation-independent state of the number checker form.

use numclass_core::{Category, DisplayMessage, try_classify};

/// Input text, selected category and last verdict of the form.
///
/// The UI reads and writes these fields directly; [`check`](Self::check) is
/// the only operation that produces a verdict.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FormState {
    pub input: String,
    pub category: Category,
    message: Option<DisplayMessage>,
}

impl FormState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Classifies the current input against the selected category and keeps
    /// the resulting message for display.
    pub fn check(&mut self) -> &DisplayMessage {
        let message = match try_classify(&self.input, self.category) {
            Ok(classification) => {
                log::debug!("checked {:?}: {classification}", self.category);
                DisplayMessage::Classified(classification)
            }
            Err(err) => {
                log::warn!("rejected form input: {err}");
                DisplayMessage::InvalidInput
            }
        };
        self.message.insert(message)
    }

    #[must_use]
    pub fn message(&self) -> Option<&DisplayMessage> {
        self.message.as_ref()
    }

    /// Text for the result label; empty until the first check.
    #[must_use]
    pub fn result_text(&self) -> String {
        self.message
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default()
    }
}
