//! Core domain types for the biorhythm assistant.
//!
//! This module defines the fundamental types used throughout the system:
//! - Cycles and computed readings
//! - User identity and per-user session state
//! - Inbound conversational events

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Cycle Types
// ============================================================================

/// One of the three named biorhythm dimensions
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Cycle {
    Physical,
    Emotional,
    Intellectual,
}

impl Cycle {
    /// All cycles in report order
    pub const ALL: [Cycle; 3] = [Cycle::Physical, Cycle::Emotional, Cycle::Intellectual];

    /// Period of the cycle in days
    pub fn period_days(self) -> u32 {
        match self {
            Cycle::Physical => 23,
            Cycle::Emotional => 28,
            Cycle::Intellectual => 33,
        }
    }

    /// Human-readable label used in reports
    pub fn label(self) -> &'static str {
        match self {
            Cycle::Physical => "Physical",
            Cycle::Emotional => "Emotional",
            Cycle::Intellectual => "Intellectual",
        }
    }
}

/// The three cycle values for one target date, each in [-100, 100]
/// and rounded to two decimals.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct BiorhythmReading {
    pub physical: f64,
    pub emotional: f64,
    pub intellectual: f64,
}

impl BiorhythmReading {
    /// Value for a single cycle
    pub fn get(&self, cycle: Cycle) -> f64 {
        match cycle {
            Cycle::Physical => self.physical,
            Cycle::Emotional => self.emotional,
            Cycle::Intellectual => self.intellectual,
        }
    }
}

// ============================================================================
// Session Types
// ============================================================================

/// Opaque identity of a conversation partner
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Per-user conversational state.
///
/// A user with no entry in the session store has no session at all.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum UserSession {
    /// Onboarding in progress; `previous` holds the birth date from an
    /// earlier completed onboarding, restored on cancel.
    AwaitingBirthDate { previous: Option<NaiveDate> },
    /// Birth date known; queries are answered
    Ready { birth_date: NaiveDate },
}

impl UserSession {
    /// The birth date queries are computed against, if any
    pub fn birth_date(&self) -> Option<NaiveDate> {
        match self {
            UserSession::AwaitingBirthDate { previous } => *previous,
            UserSession::Ready { birth_date } => Some(*birth_date),
        }
    }

    pub fn is_awaiting_birth_date(&self) -> bool {
        matches!(self, UserSession::AwaitingBirthDate { .. })
    }
}

// ============================================================================
// Inbound Events
// ============================================================================

/// An inbound interaction from one user
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// Begin (or restart) onboarding
    Start { display_name: Option<String> },
    /// Plain text that is not a command
    FreeText(String),
    /// Reading for the current date
    Today,
    /// Reading for an explicit date; the raw argument if one was given
    On(Option<String>),
    /// Capability overview
    Help,
    /// Abort onboarding
    Cancel,
}

impl Event {
    /// Short name used in log fields
    pub fn kind(&self) -> &'static str {
        match self {
            Event::Start { .. } => "start",
            Event::FreeText(_) => "free_text",
            Event::Today => "today",
            Event::On(_) => "on",
            Event::Help => "help",
            Event::Cancel => "cancel",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_periods() {
        let periods: Vec<u32> = Cycle::ALL.iter().map(|c| c.period_days()).collect();
        assert_eq!(periods, vec![23, 28, 33]);
    }

    #[test]
    fn test_session_birth_date_view() {
        let dob = NaiveDate::from_ymd_opt(1990, 3, 5).unwrap();

        let fresh = UserSession::AwaitingBirthDate { previous: None };
        assert!(fresh.is_awaiting_birth_date());
        assert_eq!(fresh.birth_date(), None);

        let rerun = UserSession::AwaitingBirthDate { previous: Some(dob) };
        assert_eq!(rerun.birth_date(), Some(dob));

        let ready = UserSession::Ready { birth_date: dob };
        assert!(!ready.is_awaiting_birth_date());
        assert_eq!(ready.birth_date(), Some(dob));
    }

    #[test]
    fn test_session_serializes_with_state_tag() {
        let dob = NaiveDate::from_ymd_opt(1990, 3, 5).unwrap();
        let json = serde_json::to_string(&UserSession::Ready { birth_date: dob }).unwrap();
        assert_eq!(json, r#"{"state":"ready","birth_date":"1990-03-05"}"#);
    }
}
