use crate::angles::polar_to_cartesian;
use crate::types::{Point, ViewportRect};

pub const CANVAS_SIZE: f64 = 1600.0;
pub const CENTER: Point = Point { x: 800.0, y: 800.0 };

pub const R_DAYS_DISC: f64 = 800.0;
pub const R_DAYS_OUTER: f64 = 740.0;
pub const R_DAYS_INNER: f64 = 720.0;
pub const R_WEEKS_DISC: f64 = 720.0;
pub const R_WEEKS_TEXT: f64 = 690.0;
pub const R_MONTHS_DISC: f64 = 660.0;
pub const R_MONTHS_TEXT: f64 = 620.0;
pub const R_ZODIAC_DISC: f64 = 570.0;
pub const R_ZODIAC_TEXT: f64 = 530.0;
pub const R_SEASONS_DISC: f64 = 470.0;
pub const R_SEASONS_TEXT: f64 = 420.0;
pub const R_CENTER_DISC: f64 = 340.0;

pub const FULL_VIEWPORT: ViewportRect = ViewportRect {
    x: 0.0,
    y: 0.0,
    width: CANVAS_SIZE,
    height: CANVAS_SIZE,
};

/// Stacked discs from the outside in. Each ring's disc covers everything
/// inside it, so a ring's band is `[next disc radius, own disc radius]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RingLayer {
    Days,
    Weeks,
    Months,
    Zodiac,
    Seasons,
    Center,
}

impl RingLayer {
    pub const ALL: [RingLayer; 6] = [
        RingLayer::Days,
        RingLayer::Weeks,
        RingLayer::Months,
        RingLayer::Zodiac,
        RingLayer::Seasons,
        RingLayer::Center,
    ];

    pub fn disc_radius(self) -> f64 {
        match self {
            RingLayer::Days => R_DAYS_DISC,
            RingLayer::Weeks => R_WEEKS_DISC,
            RingLayer::Months => R_MONTHS_DISC,
            RingLayer::Zodiac => R_ZODIAC_DISC,
            RingLayer::Seasons => R_SEASONS_DISC,
            RingLayer::Center => R_CENTER_DISC,
        }
    }

    /// Radius labels are laid along. The day ring labels sit outside its ticks.
    pub fn text_radius(self) -> f64 {
        match self {
            RingLayer::Days => R_DAYS_OUTER + 38.0,
            RingLayer::Weeks => R_WEEKS_TEXT,
            RingLayer::Months => R_MONTHS_TEXT,
            RingLayer::Zodiac => R_ZODIAC_TEXT,
            RingLayer::Seasons => R_SEASONS_TEXT,
            RingLayer::Center => 0.0,
        }
    }
}

pub fn label_anchor(layer: RingLayer, angle: f64) -> Point {
    polar_to_cartesian(CENTER.x, CENTER.y, layer.text_radius(), angle)
}
