#![forbid(unsafe_code)]

//! Core domain model and conversation logic for the biorhythm assistant.
//!
//! This crate provides:
//! - Date parsing for onboarding and date queries
//! - The biorhythm engine and report rendering
//! - The per-user conversational state machine
//! - Session store, clock and transport seams for hosts

pub mod types;
pub mod error;
pub mod config;
pub mod logging;
pub mod date_parser;
pub mod engine;
pub mod messages;
pub mod command;
pub mod session;
pub mod store;
pub mod clock;
pub mod assistant;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use config::Config;
pub use date_parser::{parse_birth_date, parse_query_date};
pub use engine::{compute, render};
pub use command::parse_message;
pub use store::{InMemorySessionStore, SessionStore};
pub use clock::{Clock, FixedClock, SystemClock};
pub use assistant::{Assistant, Outcome, Transport};
