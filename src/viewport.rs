use std::time::{Duration, Instant};

use crate::angles::{self, polar_to_cartesian, FULL_TURN};
use crate::layout::{CANVAS_SIZE, CENTER, FULL_VIEWPORT, R_DAYS_INNER};
use crate::tween::{Tween, DEFAULT_DURATION};
use crate::types::{Point, PointerButton, ViewportRect};

pub const MIN_ZOOM_LEVEL: f64 = 0.25;
pub const MAX_ZOOM_LEVEL: f64 = 64.0;
pub const MIN_VIEWPORT_SIZE: f64 = CANVAS_SIZE / MAX_ZOOM_LEVEL;

#[derive(Debug, Clone, Copy, PartialEq)]
struct DragAnchor {
    pointer_angle: f64,
    rotation: f64,
}

/// Interaction state: a free-running ring rotation and the visible window
/// over the canvas. Ring geometry never reads or writes this; zoom targeting
/// reads the rotation to find where a canonical angle currently appears.
#[derive(Debug, Clone)]
pub struct ViewportController {
    rotation: Tween,
    x: Tween,
    y: Tween,
    width: Tween,
    height: Tween,
    drag: Option<DragAnchor>,
}

impl Default for ViewportController {
    fn default() -> Self {
        Self::new(DEFAULT_DURATION)
    }
}

/// Zoom level clamped to a usable range; NaN and infinities mean 1x.
pub fn clamp_zoom_level(level: f64) -> f64 {
    if level.is_finite() {
        level.clamp(MIN_ZOOM_LEVEL, MAX_ZOOM_LEVEL)
    } else {
        1.0
    }
}

pub fn viewport_centered_on(focus: Point, level: f64) -> ViewportRect {
    let size = (CANVAS_SIZE / clamp_zoom_level(level)).max(MIN_VIEWPORT_SIZE);
    ViewportRect {
        x: focus.x - size / 2.0,
        y: focus.y - size / 2.0,
        width: size,
        height: size,
    }
}

/// Point on the day ring where a canonical angle appears after `rotation`.
pub fn visual_target(angle: f64, rotation: f64) -> Point {
    polar_to_cartesian(CENTER.x, CENTER.y, R_DAYS_INNER, angle + rotation)
}

impl ViewportController {
    pub fn new(duration: Duration) -> Self {
        Self {
            rotation: Tween::new(0.0, duration),
            x: Tween::new(FULL_VIEWPORT.x, duration),
            y: Tween::new(FULL_VIEWPORT.y, duration),
            width: Tween::new(FULL_VIEWPORT.width, duration),
            height: Tween::new(FULL_VIEWPORT.height, duration),
            drag: None,
        }
    }

    pub fn rotation(&self, now: Instant) -> f64 {
        self.rotation.sample(now)
    }

    pub fn viewport(&self, now: Instant) -> ViewportRect {
        ViewportRect {
            x: self.x.sample(now),
            y: self.y.sample(now),
            width: self.width.sample(now),
            height: self.height.sample(now),
        }
    }

    pub fn target_viewport(&self) -> ViewportRect {
        ViewportRect {
            x: self.x.target(),
            y: self.y.target(),
            width: self.width.target(),
            height: self.height.target(),
        }
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        [&self.rotation, &self.x, &self.y, &self.width, &self.height]
            .iter()
            .any(|t| t.is_animating(now))
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn update(&mut self, now: Instant) {
        for t in [
            &mut self.rotation,
            &mut self.x,
            &mut self.y,
            &mut self.width,
            &mut self.height,
        ] {
            t.settle(now);
        }
    }

    pub fn animate_view(&mut self, target: ViewportRect, now: Instant) {
        self.x.animate_to(target.x, now);
        self.y.animate_to(target.y, now);
        self.width.animate_to(target.width, now);
        self.height.animate_to(target.height, now);
    }

    /// Centers the day-ring point where `angle` currently appears on screen,
    /// at `zoom_level` magnification.
    pub fn zoom_to_angle(&mut self, angle: f64, zoom_level: f64, now: Instant) {
        let focus = visual_target(angle, self.rotation(now));
        let target = viewport_centered_on(focus, zoom_level);
        log::debug!("zoom to {:.2}° at {:.2}x -> {}", angle, zoom_level, target);
        self.animate_view(target, now);
    }

    pub fn reset(&mut self, now: Instant) {
        self.animate_view(FULL_VIEWPORT, now);
    }

    /// Spins back to the nearest whole turn, keeping the accumulated turn count.
    pub fn reset_rotation(&mut self, now: Instant) {
        let current = self.rotation(now);
        let target = (current / FULL_TURN).round() * FULL_TURN;
        self.rotation.animate_to(target, now);
    }

    pub fn pointer_down(&mut self, button: PointerButton, center: Point, pointer: Point, now: Instant) {
        if button != PointerButton::Primary {
            return;
        }
        let rotation = self.rotation(now);
        self.rotation.set(rotation);
        self.drag = Some(DragAnchor {
            pointer_angle: angles::pointer_angle(center, pointer),
            rotation,
        });
    }

    pub fn pointer_move(&mut self, center: Point, pointer: Point) {
        let Some(anchor) = self.drag else {
            return;
        };
        let delta = angles::pointer_angle(center, pointer) - anchor.pointer_angle;
        self.rotation.set(anchor.rotation + delta);
    }

    /// Also used for pointer-leave.
    pub fn pointer_up(&mut self) {
        self.drag = None;
    }
}
