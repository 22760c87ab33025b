//! # Command Text Utilities
//!
//! Prefix detection and argument splitting for text commands.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//!
//! ## Contracts
//! - `split_args("")` is an empty list, so `!test` carries no arguments.
//! - `strip_prefix` is only called by the executor after a prefix match.
//!   Called on a shorter message it yields an empty string.

/// Strip the trigger and command name from a message.
///
/// The returned closure drops the first `trigger.len() + command.len()` bytes
/// and trims surrounding whitespace from what remains.
///
/// # Example
/// ```
/// use discord_commands::text::strip_prefix;
///
/// assert_eq!(strip_prefix("!", "ps")("!ps   test"), "test");
/// ```
pub fn strip_prefix(trigger: &str, command: &str) -> impl Fn(&str) -> String {
    let prefix_len = trigger.len() + command.len();

    move |message: &str| {
        message
            .get(prefix_len..)
            .map(|rest| rest.trim().to_string())
            .unwrap_or_default()
    }
}

/// Determines whether a message starts with `trigger + command`, followed by
/// either the end of the message or a space.
pub fn has_command_prefix(trigger: &str, command: &str, message: &str) -> bool {
    let Some(rest) = message
        .strip_prefix(trigger)
        .and_then(|rest| rest.strip_prefix(command))
    else {
        return false;
    };

    rest.is_empty() || rest.starts_with(' ')
}

/// Split command arguments on single spaces.
pub fn split_args(s: &str) -> Vec<String> {
    if s.is_empty() {
        return Vec::new();
    }

    s.split(' ').map(str::to_string).collect()
}
