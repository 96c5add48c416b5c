pub mod angles;
pub mod clock;
pub mod color;
pub mod config;
pub mod day_grid;
pub mod error;
pub mod layout;
pub mod months;
pub mod moon;
pub mod rings;
pub mod seasons;
pub mod tween;
pub mod types;
pub mod viewport;
pub mod weeks;
pub mod wheel;
pub mod zodiac;

pub use angles::{
    create_sector_path, day_of_year, days_in_months, days_in_year, deg_to_rad, describe_arc,
    leap_year, normalize_angle, pointer_angle, polar_to_cartesian, rad_to_deg, unwrapped_midpoint,
    FULL_TURN,
};

pub use clock::{
    clock_angles, clock_face, format_local_date, format_local_time, local_date, local_time,
    resolve_timezone, ClockSource, FixedClock, SystemClock, Ticker, TICK_INTERVAL,
};

pub use color::{label_text, ring_fill, season_legend_color};
pub use config::WheelConfig;
pub use day_grid::{generate_day_grid, DayGrid};
pub use error::ConfigError;
pub use layout::{label_anchor, RingLayer, CANVAS_SIZE, CENTER, FULL_VIEWPORT};
pub use months::month_ring;
pub use moon::{moon_phase, moon_phase_on, phase_name, shows_phase_marker, SYNODIC_MONTH};
pub use rings::{logical_segments, segment_at_angle};
pub use seasons::{season_labels, season_pattern, season_ring};
pub use tween::{ease_in_out_cubic, Tween};
pub use viewport::{visual_target, ViewportController};
pub use weeks::week_ring;
pub use wheel::{compute_geometry, YearGeometry, YearWheel};
pub use zodiac::{zodiac_ring, ZODIAC_SIGNS};

pub use types::{
    ClockAngles, ClockFace, DaySegment, Element, Hsl, LocalTime, MoonPhaseName, Point,
    PointerButton, Rgb, RingSegment, Season, SeasonLabel, SeasonPattern, Theme, ViewportRect,
    ZodiacSign,
};
