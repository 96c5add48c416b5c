use crate::angles::FULL_TURN;
use crate::color;
use crate::day_grid::DayGrid;
use crate::types::{RingSegment, Theme};

pub const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

/// Twelve arcs whose widths follow each month's day count, so February is
/// visibly narrower and grows by one day-slice in leap years.
pub fn month_ring(grid: &DayGrid, theme: Theme) -> Vec<RingSegment> {
    (1..=12u32)
        .map(|month| {
            let start = grid.angle_of(month, 1);
            let end = if month == 12 {
                FULL_TURN
            } else {
                grid.angle_of(month + 1, 1)
            };
            RingSegment {
                label: MONTH_NAMES[(month - 1) as usize].to_string(),
                start_angle: start,
                end_angle: end,
                mid_angle: start + (end - start) / 2.0,
                color: color::ring_fill(color::month_hue(month - 1), theme),
                is_split: false,
            }
        })
        .collect()
}
