use crate::angles::{self, FULL_TURN};
use crate::color;
use crate::day_grid::DayGrid;
use crate::rings;
use crate::types::{RingSegment, Season, SeasonLabel, SeasonPattern, Theme};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonTransition {
    pub season: Season,
    pub month: u32,
    pub day: u32,
}

const fn transition(season: Season, month: u32, day: u32) -> SeasonTransition {
    SeasonTransition { season, month, day }
}

const NORTHERN: [SeasonTransition; 4] = [
    transition(Season::Spring, 3, 20),
    transition(Season::Summer, 6, 21),
    transition(Season::Autumn, 9, 22),
    transition(Season::Winter, 12, 21),
];

const SOUTHERN: [SeasonTransition; 4] = [
    transition(Season::Autumn, 3, 20),
    transition(Season::Winter, 6, 21),
    transition(Season::Spring, 9, 22),
    transition(Season::Summer, 12, 21),
];

const MONSOON: [SeasonTransition; 4] = [
    transition(Season::Summer, 3, 1),
    transition(Season::Monsoon, 6, 15),
    transition(Season::Autumn, 10, 1),
    transition(Season::Winter, 12, 1),
];

/// Unknown zones fall back to the northern pattern.
pub fn season_pattern(timezone: &str) -> SeasonPattern {
    match timezone {
        "Asia/Kolkata" | "Asia/Calcutta" => SeasonPattern::Monsoon,
        "Pacific/Auckland" | "Pacific/Chatham" => SeasonPattern::Southern,
        tz if tz.starts_with("Australia/") => SeasonPattern::Southern,
        _ => SeasonPattern::Northern,
    }
}

/// Transitions in year order. The season in force on January 1 is the last
/// entry's season.
pub fn transitions(pattern: SeasonPattern) -> &'static [SeasonTransition; 4] {
    match pattern {
        SeasonPattern::Northern => &NORTHERN,
        SeasonPattern::Southern => &SOUTHERN,
        SeasonPattern::Monsoon => &MONSOON,
    }
}

pub fn base_season(pattern: SeasonPattern) -> Season {
    transitions(pattern)[3].season
}

/// Five arcs: `[0, t0]`, three arcs between transitions, and `[t3, 360]`. The
/// first and last belong to the base season and are marked split; both carry
/// that season's unwrapped label midpoint. Fill hue follows each arc's own
/// midpoint so the ring shades continuously with its neighbours.
pub fn season_ring(grid: &DayGrid, pattern: SeasonPattern, theme: Theme) -> Vec<RingSegment> {
    let table = transitions(pattern);
    let bounds: Vec<f64> = table.iter().map(|t| grid.angle_of(t.month, t.day)).collect();
    let base = base_season(pattern);
    let fill = |start: f64, end: f64| color::ring_fill((start + end) / 2.0, theme);

    let wrapped_mid = angles::unwrapped_midpoint(bounds[3], bounds[0]);
    let arc = |season: Season, start: f64, end: f64, mid: f64, is_split: bool| RingSegment {
        label: season.name().to_string(),
        start_angle: start,
        end_angle: end,
        mid_angle: mid,
        color: fill(start, end),
        is_split,
    };

    let mut arcs = Vec::with_capacity(5);
    arcs.push(arc(base, 0.0, bounds[0], wrapped_mid, true));
    for i in 0..3 {
        let (start, end) = (bounds[i], bounds[i + 1]);
        arcs.push(arc(table[i].season, start, end, (start + end) / 2.0, false));
    }
    arcs.push(arc(base, bounds[3], FULL_TURN, wrapped_mid, true));
    arcs
}

pub fn season_labels(arcs: &[RingSegment], theme: Theme) -> Vec<SeasonLabel> {
    rings::logical_segments(arcs)
        .into_iter()
        .filter_map(|arc| {
            let season = season_from_name(&arc.label)?;
            let angle = angles::normalize_angle(arc.mid_angle);
            Some(SeasonLabel {
                season,
                angle,
                text_color: color::label_text(angle, theme),
                legend_color: color::season_legend_color(season, theme),
            })
        })
        .collect()
}

pub fn season_from_name(name: &str) -> Option<Season> {
    [Season::Winter, Season::Spring, Season::Summer, Season::Autumn, Season::Monsoon]
        .into_iter()
        .find(|s| s.name() == name)
}
