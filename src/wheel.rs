use std::time::Instant;

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::clock::{self, ClockSource, SystemClock, Ticker};
use crate::config::WheelConfig;
use crate::day_grid::{generate_day_grid, DayGrid};
use crate::months::month_ring;
use crate::rings;
use crate::seasons::{season_labels, season_pattern, season_ring};
use crate::types::{
    ClockAngles, ClockFace, Point, PointerButton, RingSegment, SeasonLabel, SeasonPattern, Theme,
    ViewportRect,
};
use crate::viewport::ViewportController;
use crate::weeks::week_ring;
use crate::zodiac::zodiac_ring;

/// Every ring for one (year, timezone, theme) input, plus today's highlight.
#[derive(Debug, Clone, PartialEq)]
pub struct YearGeometry {
    pub year: i32,
    pub timezone: Tz,
    pub theme: Theme,
    pub season_pattern: SeasonPattern,
    pub days: DayGrid,
    pub weeks: Vec<RingSegment>,
    pub months: Vec<RingSegment>,
    pub zodiac: Vec<RingSegment>,
    pub seasons: Vec<RingSegment>,
    pub season_labels: Vec<SeasonLabel>,
}

pub fn compute_geometry(year: i32, timezone: &str, theme: Theme, today: NaiveDate) -> YearGeometry {
    let tz = clock::resolve_timezone(timezone);
    let pattern = season_pattern(tz.name());
    let days = generate_day_grid(year, today);
    let seasons = season_ring(&days, pattern, theme);
    let labels = season_labels(&seasons, theme);
    log::debug!(
        "computed geometry for {} ({}, {:?}, {:?})",
        year,
        tz.name(),
        theme,
        pattern
    );
    YearGeometry {
        year,
        timezone: tz,
        theme,
        season_pattern: pattern,
        weeks: week_ring(&days, theme),
        months: month_ring(&days, theme),
        zodiac: zodiac_ring(&days, theme),
        seasons,
        season_labels: labels,
        days,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct GeometryKey {
    year: i32,
    timezone: Tz,
    theme: Theme,
    today: NaiveDate,
}

/// One calendar view: the (year, timezone, theme) inputs, the memoized ring
/// geometry derived from them, and the interaction state layered on top.
pub struct YearWheel<C: ClockSource = SystemClock> {
    clock: C,
    config: WheelConfig,
    year: i32,
    timezone: Tz,
    theme: Theme,
    now: DateTime<Utc>,
    ticker: Ticker,
    viewport: ViewportController,
    cache: Option<(GeometryKey, YearGeometry)>,
}

impl YearWheel<SystemClock> {
    pub fn with_system_clock(config: WheelConfig, frame_now: Instant) -> Self {
        Self::new(config, SystemClock, frame_now)
    }
}

impl<C: ClockSource> YearWheel<C> {
    pub fn new(config: WheelConfig, clock: C, frame_now: Instant) -> Self {
        let now = clock.now();
        let timezone = clock::resolve_timezone(&config.timezone);
        let year = config
            .year
            .unwrap_or_else(|| clock::local_date(now, timezone).year());
        let mut ticker = Ticker::default();
        ticker.start(frame_now);
        Self {
            viewport: ViewportController::new(config.animation_duration()),
            theme: config.theme,
            clock,
            config,
            year,
            timezone,
            now,
            ticker,
            cache: None,
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Last instant read from the clock; refreshed once per tick.
    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }

    pub fn today(&self) -> NaiveDate {
        clock::local_date(self.now, self.timezone)
    }

    pub fn set_year(&mut self, year: i32) {
        self.year = year;
    }

    pub fn next_year(&mut self) {
        self.year = self.year.saturating_add(1);
    }

    pub fn previous_year(&mut self) {
        self.year = self.year.saturating_sub(1);
    }

    pub fn set_timezone(&mut self, name: &str) {
        self.timezone = clock::resolve_timezone(name);
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    fn geometry_key(&self) -> GeometryKey {
        GeometryKey {
            year: self.year,
            timezone: self.timezone,
            theme: self.theme,
            today: self.today(),
        }
    }

    /// Ring geometry for the current inputs, recomputed only when one of them
    /// (or the local date) has changed since the last call.
    pub fn geometry(&mut self) -> &YearGeometry {
        let key = self.geometry_key();
        if self.cache.as_ref().is_some_and(|(cached, _)| *cached != key) {
            self.cache = None;
        }
        let (_, geometry) = self.cache.get_or_insert_with(|| {
            let geometry = compute_geometry(key.year, key.timezone.name(), key.theme, key.today);
            (key, geometry)
        });
        geometry
    }

    pub fn clock_angles(&self) -> ClockAngles {
        clock::clock_angles(clock::local_time(self.now, self.timezone))
    }

    pub fn clock_face(&self) -> ClockFace {
        clock::clock_face(clock::local_time(self.now, self.timezone).hour)
    }

    pub fn local_date_label(&self) -> String {
        clock::format_local_date(self.now, self.timezone)
    }

    pub fn local_time_label(&self) -> String {
        clock::format_local_time(self.now, self.timezone)
    }

    /// Per-frame step. Returns true when the one-second tick fired and the
    /// current time was refreshed.
    pub fn on_frame(&mut self, frame_now: Instant) -> bool {
        self.viewport.update(frame_now);
        if !self.ticker.poll(frame_now) {
            return false;
        }
        self.now = self.clock.now();
        log::trace!("tick {}", self.now);
        true
    }

    pub fn stop(&mut self) {
        self.ticker.stop();
    }

    pub fn is_ticking(&self) -> bool {
        self.ticker.is_running()
    }

    pub fn viewport(&self, frame_now: Instant) -> ViewportRect {
        self.viewport.viewport(frame_now)
    }

    pub fn rotation(&self, frame_now: Instant) -> f64 {
        self.viewport.rotation(frame_now)
    }

    pub fn viewport_controller(&self) -> &ViewportController {
        &self.viewport
    }

    pub fn zoom_to_angle(&mut self, angle: f64, zoom_level: f64, frame_now: Instant) {
        self.viewport.zoom_to_angle(angle, zoom_level, frame_now);
    }

    pub fn reset_view(&mut self, frame_now: Instant) {
        self.viewport.reset(frame_now);
    }

    pub fn reset_rotation(&mut self, frame_now: Instant) {
        self.viewport.reset_rotation(frame_now);
    }

    /// Jumps to the current year if another one is showing, then zooms onto
    /// today's slice of the day ring.
    pub fn zoom_to_today(&mut self, frame_now: Instant) {
        let today = self.today();
        if today.year() != self.year {
            self.year = today.year();
        }
        let level = self.config.today_zoom;
        let angle = self
            .geometry()
            .days
            .get(today)
            .map(|d| d.start_angle)
            .unwrap_or(0.0);
        self.viewport.zoom_to_angle(angle, level, frame_now);
    }

    /// Zooms onto the week ring segment containing today. Returns false when
    /// today is not in the year on display.
    pub fn zoom_to_this_week(&mut self, frame_now: Instant) -> bool {
        let today = self.today();
        let level = self.config.week_zoom;
        let geometry = self.geometry();
        let target = geometry
            .days
            .get(today)
            .and_then(|day| rings::segment_at_angle(&geometry.weeks, day.mid_angle))
            .map(|week| week.mid_angle);
        match target {
            Some(angle) => {
                self.viewport.zoom_to_angle(angle, level, frame_now);
                true
            }
            None => false,
        }
    }

    /// Zooms onto the middle of the current calendar month in the year on display.
    pub fn zoom_to_this_month(&mut self, frame_now: Instant) {
        let month = self.today().month();
        let level = self.config.month_zoom;
        let angle = self
            .geometry()
            .months
            .get((month - 1) as usize)
            .map(|m| m.mid_angle)
            .unwrap_or(0.0);
        self.viewport.zoom_to_angle(angle, level, frame_now);
    }

    pub fn pointer_down(&mut self, button: PointerButton, center: Point, pointer: Point, frame_now: Instant) {
        self.viewport.pointer_down(button, center, pointer, frame_now);
    }

    pub fn pointer_move(&mut self, center: Point, pointer: Point) {
        self.viewport.pointer_move(center, pointer);
    }

    pub fn pointer_up(&mut self) {
        self.viewport.pointer_up();
    }
}

impl<C: ClockSource> Drop for YearWheel<C> {
    fn drop(&mut self) {
        if self.ticker.is_running() {
            log::debug!("stopping clock tick for {}", self.year);
            self.ticker.stop();
        }
    }
}
