//! Turns raw chat text into inbound events.
//!
//! Commands are a leading `/` followed by a word, optionally suffixed with
//! `@botname`, then whitespace-separated arguments. Anything that does not
//! start with `/` is free text.

use crate::Event;

/// Parse one inbound message
///
/// Returns `None` for empty input and for commands the assistant does not
/// handle; those are dropped without a reply.
pub fn parse_message(text: &str) -> Option<Event> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    let Some(command_line) = trimmed.strip_prefix('/') else {
        return Some(Event::FreeText(text.to_string()));
    };

    // The command word starts right after the slash: "/ start" is not a command
    if command_line.starts_with(char::is_whitespace) {
        tracing::debug!(text = trimmed, "Ignoring detached command slash");
        return None;
    }

    let mut parts = command_line.split_whitespace();
    let word = parts.next()?;
    let command = word.split_once('@').map_or(word, |(name, _)| name);

    let event = match command {
        "start" => Event::Start { display_name: None },
        "today" => Event::Today,
        "on" => Event::On(parts.next().map(str::to_string)),
        "help" => Event::Help,
        "cancel" => Event::Cancel,
        other => {
            tracing::debug!(command = other, "Ignoring unknown command");
            return None;
        }
    };

    Some(event)
}
