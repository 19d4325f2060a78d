use colored::Colorize;
use inquire::{InquireError, Select};

/// Replacement for `inquire::Confirm` — presents a Select with "Yes" / "No" choices,
/// the default listed first. Returns `None` on cancellation (Esc/Ctrl-C).
pub fn confirm(prompt: &str, default_val: bool) -> Result<Option<bool>, InquireError> {
    match Select::new(prompt, yes_no(default_val)).prompt() {
        Ok(choice) => Ok(Some(choice == "Yes")),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(err) => Err(err),
    }
}

fn yes_no(default_val: bool) -> Vec<&'static str> {
    if default_val {
        vec!["Yes", "No"]
    } else {
        vec!["No", "Yes"]
    }
}

/// Feedback colour for a value that is within its limit.
pub fn paint_ok(text: &str) -> String {
    text.green().to_string()
}

/// Feedback colour for a value that breaks its limit.
pub fn paint_error(text: &str) -> String {
    text.red().to_string()
}
