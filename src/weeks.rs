use chrono::Datelike;

use crate::angles::FULL_TURN;
use crate::color;
use crate::day_grid::DayGrid;
use crate::types::{RingSegment, Theme};

pub fn week_label(week: u32) -> String {
    format!("W{:02}", week)
}

fn week_segment(week: u32, start: f64, end: f64, theme: Theme) -> RingSegment {
    RingSegment {
        label: week_label(week),
        start_angle: start,
        end_angle: end,
        mid_angle: (start + end) / 2.0,
        color: color::ring_fill(color::week_hue(week), theme),
        is_split: false,
    }
}

/// Groups consecutive days by ISO week. Days at the end of December that ISO
/// assigns to week 1 of the following year stay in the year's last week, which
/// is closed at 360°. Leading January days still in the previous ISO year keep
/// their own (W52/W53) segment.
pub fn week_ring(grid: &DayGrid, theme: Theme) -> Vec<RingSegment> {
    let mut segments = Vec::with_capacity(53);
    let mut current: Option<(u32, f64)> = None;

    for day in grid {
        let iso = day.date.iso_week();
        if iso.year() > grid.year() {
            continue;
        }
        let week = iso.week();
        match current {
            Some((open_week, start)) if open_week != week => {
                segments.push(week_segment(open_week, start, day.start_angle, theme));
                current = Some((week, day.start_angle));
            }
            None => current = Some((week, day.start_angle)),
            Some(_) => {}
        }
    }

    if let Some((week, start)) = current {
        segments.push(week_segment(week, start, FULL_TURN, theme));
    }
    segments
}
