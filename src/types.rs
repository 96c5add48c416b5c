use std::fmt;

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Autumn,
    Monsoon,
}

impl Season {
    pub fn name(self) -> &'static str {
        match self {
            Season::Winter => "Winter",
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Autumn => "Autumn",
            Season::Monsoon => "Monsoon",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeasonPattern {
    Northern,
    Southern,
    Monsoon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoonPhaseName {
    New,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    Full,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZodiacSign {
    pub name: &'static str,
    pub symbol: &'static str,
    pub element: Element,
    pub start_month: u32,
    pub start_day: u32,
}

/// HSL color as emitted to the renderer, e.g. `hsl(120, 70%, 94%)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub hue: f64,
    pub saturation: u8,
    pub lightness: u8,
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.hue, self.saturation, self.lightness)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DaySegment {
    pub date: NaiveDate,
    pub day_index: u32,
    pub month: u32,
    pub day_of_month: u32,
    pub weekday: Weekday,
    pub start_angle: f64,
    pub end_angle: f64,
    pub mid_angle: f64,
    pub moon_phase: f64,
    pub is_today: bool,
}

impl DaySegment {
    pub fn is_weekend(&self) -> bool {
        matches!(self.weekday, Weekday::Sat | Weekday::Sun)
    }

    pub fn is_month_start(&self) -> bool {
        self.day_of_month == 1
    }

    pub fn weekday_label(&self) -> &'static str {
        match self.weekday {
            Weekday::Mon => "Mon",
            Weekday::Tue => "Tue",
            Weekday::Wed => "Wed",
            Weekday::Thu => "Thu",
            Weekday::Fri => "Fri",
            Weekday::Sat => "Sat",
            Weekday::Sun => "Sun",
        }
    }

    pub fn contains_angle(&self, angle: f64) -> bool {
        angle >= self.start_angle && angle < self.end_angle
    }
}

/// One arc of a coarse ring. A logical segment crossing the 0°/360° seam is
/// emitted as two pieces with `is_split` set on both; the pieces share a label
/// and `mid_angle` (the label position).
#[derive(Debug, Clone, PartialEq)]
pub struct RingSegment {
    pub label: String,
    pub start_angle: f64,
    pub end_angle: f64,
    pub mid_angle: f64,
    pub color: Hsl,
    pub is_split: bool,
}

impl RingSegment {
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    pub fn contains_angle(&self, angle: f64) -> bool {
        angle >= self.start_angle && angle < self.end_angle
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeasonLabel {
    pub season: Season,
    pub angle: f64,
    pub text_color: Hsl,
    pub legend_color: Rgb,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalTime {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockAngles {
    pub hour_angle: f64,
    pub minute_angle: f64,
    pub second_angle: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockFace {
    Day,
    Night,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewportRect {
    pub fn center(&self) -> Point {
        Point {
            x: self.x + self.width / 2.0,
            y: self.y + self.height / 2.0,
        }
    }
}

impl fmt::Display for ViewportRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.x, self.y, self.width, self.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}
