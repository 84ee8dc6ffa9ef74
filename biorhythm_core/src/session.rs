//! Conversational state machine.
//!
//! A single pure transition function maps the current session (or its
//! absence), an inbound event and the current date to the next session
//! and the replies to send. Every domain error is resolved here into a
//! reply; nothing propagates past this boundary.

use crate::date_parser::{parse_birth_date, parse_query_date};
use crate::engine::{compute, render};
use crate::{messages, Error, Event, Result, UserSession};
use chrono::NaiveDate;

/// Result of applying one event
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    /// Session after the event; `None` means the user has no session
    pub session: Option<UserSession>,
    pub replies: Vec<String>,
}

impl Transition {
    fn new(session: Option<UserSession>, replies: Vec<String>) -> Self {
        Self { session, replies }
    }

    fn reply(session: Option<UserSession>, text: impl Into<String>) -> Self {
        Self::new(session, vec![text.into()])
    }

    fn silent(session: Option<UserSession>) -> Self {
        Self::new(session, Vec::new())
    }
}

/// Apply `event` to `session`
///
/// `default_name` addresses users whose onboarding trigger carries no
/// display name.
pub fn transition(
    session: Option<UserSession>,
    event: &Event,
    today: NaiveDate,
    default_name: &str,
) -> Transition {
    match event {
        Event::Start { display_name } => {
            let previous = session.as_ref().and_then(UserSession::birth_date);
            let name = display_name
                .as_deref()
                .filter(|n| !n.trim().is_empty())
                .unwrap_or(default_name);
            Transition::reply(
                Some(UserSession::AwaitingBirthDate { previous }),
                messages::welcome(name),
            )
        }

        Event::FreeText(text) => match session {
            Some(UserSession::AwaitingBirthDate { previous }) => {
                accept_birth_date(previous, text, today)
            }
            other => Transition::silent(other),
        },

        Event::Cancel => match session {
            Some(UserSession::AwaitingBirthDate { previous }) => Transition::reply(
                previous.map(|birth_date| UserSession::Ready { birth_date }),
                messages::CANCELLED,
            ),
            other => Transition::silent(other),
        },

        Event::Today => {
            let text = reading_for(session.as_ref(), None, today).unwrap_or_else(error_reply);
            Transition::reply(session, text)
        }

        Event::On(arg) => {
            let text = reading_for(session.as_ref(), Some(arg.as_deref()), today)
                .unwrap_or_else(error_reply);
            Transition::reply(session, text)
        }

        Event::Help => Transition::reply(session, messages::HELP),
    }
}

fn accept_birth_date(previous: Option<NaiveDate>, text: &str, today: NaiveDate) -> Transition {
    let awaiting = Some(UserSession::AwaitingBirthDate { previous });

    let birth_date = match parse_birth_date(text) {
        Ok(date) => date,
        Err(e) => return Transition::reply(awaiting, error_reply(e)),
    };

    let report = match compute(birth_date, today) {
        Ok(reading) => render(today, &reading),
        // A birth date in the future still gets stored; only today's
        // report is replaced by the explanation.
        Err(e) => error_reply(e),
    };

    Transition::reply(
        Some(UserSession::Ready { birth_date }),
        messages::birth_date_saved(birth_date, &report),
    )
}

/// Render a reading for `today` (`query == None`) or for the argument of
/// an "on" query (`query == Some(arg)`)
fn reading_for(
    session: Option<&UserSession>,
    query: Option<Option<&str>>,
    today: NaiveDate,
) -> Result<String> {
    let birth = session
        .and_then(UserSession::birth_date)
        .ok_or(Error::NoBirthDateKnown)?;

    let target = match query {
        None => today,
        Some(None) => return Err(Error::MissingArgument),
        Some(Some(arg)) => parse_query_date(arg)?,
    };

    let reading = compute(birth, target)?;
    Ok(render(target, &reading))
}

/// Map a domain error to the text shown to the user
fn error_reply(error: Error) -> String {
    tracing::debug!(%error, "Answering with error reply");
    let text = match error {
        Error::NotRecognized(_) => messages::RETRY_BIRTH_DATE,
        Error::InvalidRange { .. } => messages::BEFORE_BIRTH,
        Error::MissingArgument => messages::ON_USAGE,
        Error::MalformedDate(_) => messages::ON_MALFORMED,
        Error::NoBirthDateKnown => messages::NO_BIRTH_DATE,
        other => {
            tracing::warn!(error = %other, "Unexpected error in conversation");
            messages::HELP
        }
    };
    text.to_string()
}
