//! User-facing reply texts.

use crate::date_parser::format_display;
use chrono::NaiveDate;

pub const COMMANDS: &str = "Commands I understand:\n\
/today - biorhythms for today\n\
/on YYYY-MM-DD - biorhythms for a specific date (e.g. /on 2025-12-31)\n\
/help - what this bot can do";

pub const RETRY_BIRTH_DATE: &str = "I couldn't recognize that date.\n\
Please try again in DD.MM.YYYY format, e.g. 05.03.1990.";

pub const NO_BIRTH_DATE: &str = "I don't know your birth date yet. Send /start and enter it.";

pub const ON_USAGE: &str = "Usage: /on YYYY-MM-DD, e.g. /on 2025-12-31.";

pub const ON_MALFORMED: &str = "I couldn't recognize that date. \
Use the YYYY-MM-DD format, e.g. 2025-12-31.";

pub const BEFORE_BIRTH: &str = "The target date can't be earlier than your birth date.";

pub const CANCELLED: &str = "Okay, birth date entry cancelled. You can start over with /start.";

pub const HELP: &str = "I show your biorhythm calendar. Main commands:\n\
/start - enter your birth date again\n\
/today - biorhythms for today\n\
/on YYYY-MM-DD - biorhythms for a chosen date\n\
/cancel - abort birth date entry\n\
\n\
Remember: biorhythms are entertainment, not science.";

/// Greeting sent when onboarding starts
pub fn welcome(name: &str) -> String {
    format!(
        "Hi, {name}! I'm a biorhythm calendar bot.\n\
         Note: biorhythms are a pseudoscientific theory. Use them for fun, \
         not as medical advice.\n\
         \n\
         To begin, send me your birth date in DD.MM.YYYY format \
         (e.g. 05.03.1990)."
    )
}

/// Confirmation after a birth date is accepted
pub fn birth_date_saved(birth_date: NaiveDate, report: &str) -> String {
    format!(
        "Great! I've saved your birth date: {}\n\n{}\n\n{}",
        format_display(birth_date),
        report,
        COMMANDS
    )
}
