use chrono::{DateTime, Datelike, NaiveDate, Utc};

use crate::types::MoonPhaseName;

pub const SYNODIC_MONTH: f64 = 29.530588853;
/// Unix milliseconds of 2000-01-06 12:24:01 UTC, a new moon.
pub const REFERENCE_NEW_MOON_MS: i64 = 947_161_441_000;

const MILLIS_PER_DAY: i64 = 86_400_000;
const UNIX_EPOCH_DAYS_FROM_CE: i64 = 719_163;

fn phase_from_unix_millis(millis: i64) -> f64 {
    let diff_days = (millis - REFERENCE_NEW_MOON_MS) as f64 / MILLIS_PER_DAY as f64;
    let phase = (diff_days % SYNODIC_MONTH) / SYNODIC_MONTH;
    let phase = if phase < 0.0 { phase + 1.0 } else { phase };
    if phase >= 1.0 {
        0.0
    } else {
        phase
    }
}

/// Phase in `[0, 1)`: 0 new, 0.5 full.
pub fn moon_phase(instant: DateTime<Utc>) -> f64 {
    phase_from_unix_millis(instant.timestamp_millis())
}

pub fn moon_phase_on(date: NaiveDate) -> f64 {
    let unix_days = date.num_days_from_ce() as i64 - UNIX_EPOCH_DAYS_FROM_CE;
    phase_from_unix_millis(unix_days * MILLIS_PER_DAY)
}

/// Quarters and syzygies get narrow windows; crescents and gibbous phases
/// cover the rest of the cycle.
pub fn phase_name(phase: f64) -> MoonPhaseName {
    if phase < 0.03 || phase > 0.97 {
        MoonPhaseName::New
    } else if phase < 0.22 {
        MoonPhaseName::WaxingCrescent
    } else if phase < 0.28 {
        MoonPhaseName::FirstQuarter
    } else if phase < 0.47 {
        MoonPhaseName::WaxingGibbous
    } else if phase < 0.53 {
        MoonPhaseName::Full
    } else if phase < 0.72 {
        MoonPhaseName::WaningGibbous
    } else if phase < 0.78 {
        MoonPhaseName::LastQuarter
    } else {
        MoonPhaseName::WaningCrescent
    }
}

/// Whether a day ring should draw a phase marker: only close to new, the
/// quarters, and full. Bounds are exclusive.
pub fn shows_phase_marker(phase: f64) -> bool {
    phase < 0.03
        || phase > 0.97
        || (phase > 0.22 && phase < 0.28)
        || (phase > 0.47 && phase < 0.53)
        || (phase > 0.72 && phase < 0.78)
}
