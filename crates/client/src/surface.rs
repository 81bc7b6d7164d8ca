//! User-facing surface traits.
//!
//! Flows never talk to a terminal or a widget toolkit directly. They raise
//! notifications and dialogs through these traits and the frontend decides
//! how to render them.

use std::fmt;

/// A blocking message dialog with a single dismiss button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertRequest {
    pub title: String,
    pub message: String,
    pub button_label: String,
}

impl AlertRequest {
    /// Build an alert with the default "OK" button.
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            button_label: "OK".to_string(),
        }
    }
}

impl fmt::Display for AlertRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.message)
    }
}

/// A blocking yes/no dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmRequest {
    pub title: String,
    pub message: String,
    pub confirm_label: String,
    pub cancel_label: String,
}

impl ConfirmRequest {
    /// Build a confirmation with the default "Yes" / "Cancel" buttons.
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            confirm_label: "Yes".to_string(),
            cancel_label: "Cancel".to_string(),
        }
    }

    /// Replace the button labels.
    #[must_use]
    pub fn with_labels(mut self, confirm: impl Into<String>, cancel: impl Into<String>) -> Self {
        self.confirm_label = confirm.into();
        self.cancel_label = cancel.into();
        self
    }
}

impl fmt::Display for ConfirmRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.message)
    }
}

/// Transient, non-blocking status messages.
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Blocking dialogs that interrupt the current flow.
pub trait Prompt {
    /// Show a yes/no dialog. Returns `true` when the user confirms.
    fn confirm(&self, request: &ConfirmRequest) -> bool;

    /// Show a message dialog and wait for dismissal.
    fn alert(&self, request: &AlertRequest);
}

/// Everything a flow needs from a frontend.
pub trait Surface: Notifier + Prompt + Send + Sync {}

impl<T: Notifier + Prompt + Send + Sync> Surface for T {}


#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::testing::ScriptedSurface;
    use super::*;

    #[test]
    fn confirm_defaults_to_yes_cancel() {
        let request = ConfirmRequest::new("Remove Item?", "Sure?");
        assert_eq!(request.confirm_label, "Yes");
        assert_eq!(request.cancel_label, "Cancel");
    }

    #[test]
    fn alert_defaults_to_ok() {
        let request = AlertRequest::new("Heads Up", "Something happened.");
        assert_eq!(request.button_label, "OK");
    }

    #[test]
    fn scripted_surface_answers_in_order_then_declines() {
        let surface = ScriptedSurface::answering(&[true, false]);
        let request = ConfirmRequest::new("T", "M");
        assert!(surface.confirm(&request));
        assert!(!surface.confirm(&request));
        assert!(!surface.confirm(&request));
        assert_eq!(surface.confirms().len(), 3);
    }
}
