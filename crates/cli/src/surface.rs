//! Terminal implementation of the client's interaction surface.
//!
//! Notifications and dialogs print to stderr so they never mix with data
//! written to stdout. Confirmation dialogs read one line from stdin;
//! `--yes` answers every prompt without reading.

use std::io::{self, BufRead};

use frontier_books_client::surface::{AlertRequest, ConfirmRequest, Notifier, Prompt};

/// Interaction surface backed by the controlling terminal.
pub struct TerminalSurface {
    assume_yes: bool,
}

impl TerminalSurface {
    #[must_use]
    pub const fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }

    fn read_line() -> String {
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line).is_err() {
            return String::new();
        }
        line.trim().to_owned()
    }
}

impl Notifier for TerminalSurface {
    #[allow(clippy::print_stderr)]
    fn notify(&self, message: &str) {
        eprintln!("{message}");
    }
}

impl Prompt for TerminalSurface {
    #[allow(clippy::print_stderr)]
    fn confirm(&self, request: &ConfirmRequest) -> bool {
        if self.assume_yes {
            eprintln!("{}: {} [{}]", request.title, request.message, request.confirm_label);
            return true;
        }

        eprint!(
            "{}: {} [{} = y / {} = N]: ",
            request.title, request.message, request.confirm_label, request.cancel_label
        );
        let answer = Self::read_line().to_ascii_lowercase();
        matches!(answer.as_str(), "y" | "yes")
    }

    #[allow(clippy::print_stderr)]
    fn alert(&self, request: &AlertRequest) {
        eprintln!("{}: {}", request.title, request.message);
    }
}
