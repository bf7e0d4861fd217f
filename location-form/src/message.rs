use derive_more::Display;

/// Controls the visual treatment of a [`Message`]. Displays as the tag used
/// for styling, e.g. `danger`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Severity {
    #[display("info")]
    Info,
    #[display("success")]
    Success,
    #[display("danger")]
    Danger,
}

/// A transient notification shown above the form. Each operation
/// overwrites the previous one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub severity: Severity,
}

impl Message {
    pub fn new(text: impl Into<String>, severity: Severity) -> Self {
        Self {
            text: text.into(),
            severity,
        }
    }

    pub fn danger(text: impl Into<String>) -> Self {
        Self::new(text, Severity::Danger)
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Danger
    }
}
