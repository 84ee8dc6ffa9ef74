//! Biorhythm engine.
//!
//! Each cycle is a sine wave over the number of whole days lived:
//! `sin(2π · days / period) × 100`, rounded to two decimals with
//! half-away-from-zero rounding.

use crate::date_parser::format_display;
use crate::{BiorhythmReading, Cycle, Error, Result};
use chrono::NaiveDate;
use std::f64::consts::PI;

/// Compute the reading for `target` given a `birth` date
///
/// Fails with [`Error::InvalidRange`] when `target` precedes `birth`.
pub fn compute(birth: NaiveDate, target: NaiveDate) -> Result<BiorhythmReading> {
    let days = (target - birth).num_days();
    if days < 0 {
        return Err(Error::InvalidRange { birth, target });
    }

    tracing::debug!(%birth, %target, days, "Computing biorhythm reading");

    Ok(BiorhythmReading {
        physical: cycle_value(Cycle::Physical, days),
        emotional: cycle_value(Cycle::Emotional, days),
        intellectual: cycle_value(Cycle::Intellectual, days),
    })
}

fn cycle_value(cycle: Cycle, days: i64) -> f64 {
    let phase = 2.0 * PI * days as f64 / f64::from(cycle.period_days());
    round2(phase.sin() * 100.0)
}

/// Round to two decimals, ties away from zero.
///
/// Negative zero is normalized so it never renders as "-0.00".
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0 + 0.0
}

/// Render a reading as the fixed multi-line report
pub fn render(target: NaiveDate, reading: &BiorhythmReading) -> String {
    let mut out = format!("Biorhythms for {}", format_display(target));
    for cycle in Cycle::ALL {
        out.push('\n');
        out.push_str(cycle.label());
        out.push_str(": ");
        out.push_str(&signed(reading.get(cycle)));
        out.push('%');
    }
    out
}

/// Explicit `+` only for strictly positive values
fn signed(value: f64) -> String {
    if value > 0.0 {
        format!("+{:.2}", value)
    } else {
        format!("{:.2}", value)
    }
}
