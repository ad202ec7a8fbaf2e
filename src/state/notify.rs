//! User-visible error notifications.

/// A notification raised by a failed load, shown as a modal window until
/// the user dismisses it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
}

impl Notification {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
