use std::cell::Cell;
use std::time::{Duration, Instant};

use chrono::{DateTime, NaiveDate, Timelike, Utc};
use chrono_tz::Tz;

use crate::types::{ClockAngles, ClockFace, LocalTime};

pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Supplies "now". Everything that depends on the current instant (today's
/// highlight, the clock hands, zoom-to-today) reads it through this trait.
pub trait ClockSource {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl ClockSource for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[derive(Debug, Clone)]
pub struct FixedClock {
    now: Cell<DateTime<Utc>>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now: Cell::new(now) }
    }

    pub fn set(&self, now: DateTime<Utc>) {
        self.now.set(now);
    }

    pub fn advance(&self, by: chrono::Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl ClockSource for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now.get()
    }
}

impl<C: ClockSource + ?Sized> ClockSource for &C {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

/// IANA zone lookup. Unknown names render as UTC instead of failing.
pub fn resolve_timezone(name: &str) -> Tz {
    match name.parse::<Tz>() {
        Ok(tz) => tz,
        Err(_) => {
            log::warn!("unknown timezone {:?}, falling back to UTC", name);
            Tz::UTC
        }
    }
}

pub fn local_time(instant: DateTime<Utc>, tz: Tz) -> LocalTime {
    let local = instant.with_timezone(&tz);
    LocalTime {
        hour: local.hour(),
        minute: local.minute(),
        // leap seconds surface as second 59
        second: local.second().min(59),
    }
}

pub fn local_date(instant: DateTime<Utc>, tz: Tz) -> NaiveDate {
    instant.with_timezone(&tz).date_naive()
}

/// Hour and minute hands move continuously with the minute; the second hand
/// steps once per second.
pub fn clock_angles(time: LocalTime) -> ClockAngles {
    ClockAngles {
        hour_angle: ((time.hour % 12) as f64 + time.minute as f64 / 60.0) * 30.0,
        minute_angle: time.minute as f64 * 6.0,
        second_angle: time.second as f64 * 6.0,
    }
}

pub fn clock_face(hour: u32) -> ClockFace {
    if (6..18).contains(&hour) {
        ClockFace::Day
    } else {
        ClockFace::Night
    }
}

pub fn format_local_date(instant: DateTime<Utc>, tz: Tz) -> String {
    instant.with_timezone(&tz).format("%a, %b %-d, %Y").to_string()
}

pub fn format_local_time(instant: DateTime<Utc>, tz: Tz) -> String {
    instant.with_timezone(&tz).format("%H:%M").to_string()
}

/// Frame-polled one-second timer. The host calls `poll` every frame; it fires
/// at most once per interval and never after `stop`.
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    next_due: Option<Instant>,
}

impl Ticker {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(Duration::from_millis(1)),
            next_due: None,
        }
    }

    pub fn start(&mut self, now: Instant) {
        self.next_due = Some(now + self.interval);
    }

    pub fn stop(&mut self) {
        self.next_due = None;
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    /// True when the interval has elapsed. Missed intervals collapse into a
    /// single fire; the next deadline is rescheduled from `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if now >= due => {
                self.next_due = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new(TICK_INTERVAL)
    }
}
