use chrono::{Datelike, NaiveDate};

use crate::angles::{self, FULL_TURN};
use crate::moon;
use crate::types::DaySegment;

/// One equal angular slice per calendar day of a year. Coarser rings look up
/// their boundaries here instead of recomputing proportions, so every ring
/// agrees on where a date sits.
#[derive(Debug, Clone, PartialEq)]
pub struct DayGrid {
    year: i32,
    days: Vec<DaySegment>,
}

impl DayGrid {
    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn segments(&self) -> &[DaySegment] {
        &self.days
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DaySegment> {
        self.days.iter()
    }

    /// Falls back to the calendar length when the grid has no segments, so
    /// boundaries stay inside one turn for years chrono cannot represent.
    pub fn day_sweep(&self) -> f64 {
        let count = if self.days.is_empty() {
            angles::days_in_year(self.year) as usize
        } else {
            self.days.len()
        };
        FULL_TURN / count as f64
    }

    pub fn angle_of(&self, month: u32, day: u32) -> f64 {
        let doy = angles::day_of_year(self.year, month, day) as usize;
        self.days
            .get(doy - 1)
            .map(|d| d.start_angle)
            .unwrap_or((doy - 1) as f64 * self.day_sweep())
    }

    pub fn get(&self, date: NaiveDate) -> Option<&DaySegment> {
        if date.year() != self.year {
            return None;
        }
        self.days.get(date.ordinal0() as usize)
    }

    pub fn day_at_angle(&self, angle: f64) -> Option<&DaySegment> {
        let angle = angles::normalize_angle(angle);
        let idx = (angle / self.day_sweep()).floor() as usize;
        self.days.get(idx.min(self.days.len().saturating_sub(1)))
    }

    pub fn today(&self) -> Option<&DaySegment> {
        self.days.iter().find(|d| d.is_today)
    }
}

impl<'a> IntoIterator for &'a DayGrid {
    type Item = &'a DaySegment;
    type IntoIter = std::slice::Iter<'a, DaySegment>;

    fn into_iter(self) -> Self::IntoIter {
        self.days.iter()
    }
}

/// Builds the grid for `year`. `today` is the viewer's current local date; a
/// day is flagged only when it matches and the grid's year is today's year.
pub fn generate_day_grid(year: i32, today: NaiveDate) -> DayGrid {
    let total_days = angles::days_in_year(year).max(1);
    let showing_current_year = today.year() == year;

    let mut days = Vec::with_capacity(total_days as usize);
    let mut date = NaiveDate::from_yo_opt(year, 1);
    let mut index = 0u32;
    while let Some(d) = date {
        if d.year() != year || index >= total_days {
            break;
        }
        let start_angle = (index as f64 / total_days as f64) * FULL_TURN;
        let end_angle = ((index + 1) as f64 / total_days as f64) * FULL_TURN;
        days.push(DaySegment {
            date: d,
            day_index: index + 1,
            month: d.month(),
            day_of_month: d.day(),
            weekday: d.weekday(),
            start_angle,
            end_angle,
            mid_angle: (start_angle + end_angle) / 2.0,
            moon_phase: moon::moon_phase_on(d),
            is_today: showing_current_year && d == today,
        });
        index += 1;
        date = d.succ_opt();
    }

    log::debug!("day grid for {}: {} days", year, days.len());
    DayGrid { year, days }
}
