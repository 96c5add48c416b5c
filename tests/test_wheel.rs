use std::time::{Duration, Instant};

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;

use year_wheel::clock::FixedClock;
use year_wheel::config::WheelConfig;
use year_wheel::error::ConfigError;
use year_wheel::rings::logical_segments;
use year_wheel::types::{ClockFace, Point, PointerButton, SeasonPattern, Theme};
use year_wheel::viewport::{viewport_centered_on, visual_target};
use year_wheel::wheel::*;

macro_rules! assert_approx {
    ($left:expr, $right:expr, $tol:expr) => {
        let (l, r) = ($left as f64, $right as f64);
        assert!(
            (l - r).abs() <= $tol,
            "assert_approx failed: left={}, right={}, diff={}, tol={}",
            l, r, (l - r).abs(), $tol
        );
    };
}

fn noon_in_may() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap()
}

fn paris_config() -> WheelConfig {
    WheelConfig {
        timezone: "Europe/Paris".to_string(),
        ..WheelConfig::default()
    }
}

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

// ── Config ──

#[test]
fn test_default_config() {
    let c = WheelConfig::default();
    assert_eq!(c.year, None);
    assert_eq!(c.timezone, "Asia/Kolkata");
    assert_eq!(c.theme, Theme::Light);
    assert_eq!(c.animation_ms, 800);
    assert_eq!(c.today_zoom, 4.0);
    assert_eq!(c.week_zoom, 6.0);
    assert_eq!(c.month_zoom, 2.5);
    assert!(c.validate().is_ok());
}

#[test]
fn test_config_from_toml() {
    let c = WheelConfig::from_toml_str(
        r#"
        year = 2024
        timezone = "Australia/Sydney"
        theme = "dark"
        "#,
    )
    .unwrap();
    assert_eq!(c.year, Some(2024));
    assert_eq!(c.timezone, "Australia/Sydney");
    assert_eq!(c.theme, Theme::Dark);
    assert_eq!(c.animation_ms, 800);
    assert_eq!(c.animation_duration(), ms(800));
}

#[test]
fn test_config_empty_is_default() {
    assert_eq!(WheelConfig::from_toml_str("").unwrap(), WheelConfig::default());
}

#[test]
fn test_config_rejects_bad_values() {
    assert!(matches!(
        WheelConfig::from_toml_str("today_zoom = 0.0"),
        Err(ConfigError::InvalidZoomLevel { name: "today_zoom", .. })
    ));
    assert!(matches!(
        WheelConfig::from_toml_str("animation_ms = 0"),
        Err(ConfigError::ZeroAnimationDuration)
    ));
    assert!(matches!(
        WheelConfig::from_toml_str("theme = \"purple\""),
        Err(ConfigError::Parse(_))
    ));
    assert!(matches!(
        WheelConfig::from_file("/definitely/not/here.toml"),
        Err(ConfigError::Io(_))
    ));
}

#[test]
fn test_config_error_messages() {
    let err = WheelConfig::from_toml_str("week_zoom = -1.0").unwrap_err();
    assert!(err.to_string().contains("week_zoom"), "{}", err);
}

// ── Geometry ──

#[test]
fn test_compute_geometry_rings() {
    let today = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();
    let g = compute_geometry(2024, "Asia/Kolkata", Theme::Light, today);
    assert_eq!(g.timezone, Tz::Asia__Kolkata);
    assert_eq!(g.season_pattern, SeasonPattern::Monsoon);
    assert_eq!(g.days.len(), 366);
    assert_eq!(g.weeks.len(), 52);
    assert_eq!(g.months.len(), 12);
    assert_eq!(g.zodiac.len(), 13);
    assert_eq!(logical_segments(&g.zodiac).len(), 12);
    assert_eq!(g.seasons.len(), 5);
    assert_eq!(g.season_labels.len(), 4);
    assert_eq!(g.days.today().unwrap().date, today);
}

#[test]
fn test_unknown_timezone_geometry_falls_back() {
    let today = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();
    let g = compute_geometry(2024, "Mars/Olympus_Mons", Theme::Light, today);
    assert_eq!(g.timezone, Tz::UTC);
    assert_eq!(g.season_pattern, SeasonPattern::Northern);
    assert_eq!(g.seasons.len(), 5);
}

#[test]
fn test_unrepresentable_year_rings_stay_in_one_turn() {
    let today = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
    let g = compute_geometry(300_000, "Europe/Berlin", Theme::Light, today);
    assert!(g.days.is_empty());
    for ring in [&g.weeks, &g.months, &g.zodiac, &g.seasons] {
        for s in ring.iter() {
            assert!(
                s.start_angle >= 0.0 && s.end_angle <= 360.0 && s.start_angle <= s.end_angle,
                "out of range ({}, {}, {})",
                s.label,
                s.start_angle,
                s.end_angle
            );
        }
    }
    let total: f64 = g.months.iter().map(|m| m.sweep()).sum();
    assert_approx!(total, 360.0, 1e-9);
    assert_eq!(g.seasons.len(), 5);
    assert_eq!(logical_segments(&g.zodiac).len(), 12);
}

// ── YearWheel inputs ──

#[test]
fn test_wheel_defaults_to_current_year() {
    let clock = FixedClock::new(noon_in_may());
    let mut wheel = YearWheel::new(paris_config(), &clock, Instant::now());
    assert_eq!(wheel.year(), 2024);
    assert_eq!(wheel.timezone(), Tz::Europe__Paris);
    assert_eq!(wheel.today(), NaiveDate::from_ymd_opt(2024, 5, 10).unwrap());
    assert_eq!(
        wheel.geometry().days.today().map(|d| d.date),
        NaiveDate::from_ymd_opt(2024, 5, 10)
    );
}

#[test]
fn test_wheel_year_navigation() {
    let clock = FixedClock::new(noon_in_may());
    let mut wheel = YearWheel::new(paris_config(), &clock, Instant::now());
    wheel.previous_year();
    assert_eq!(wheel.geometry().year, 2023);
    assert_eq!(wheel.geometry().days.len(), 365);
    assert!(wheel.geometry().days.today().is_none());
    wheel.next_year();
    wheel.next_year();
    assert_eq!(wheel.geometry().year, 2025);
    wheel.set_year(2024);
    assert_eq!(wheel.geometry().days.len(), 366);
}

#[test]
fn test_year_navigation_saturates() {
    let clock = FixedClock::new(noon_in_may());
    let mut wheel = YearWheel::new(paris_config(), &clock, Instant::now());
    wheel.set_year(i32::MAX);
    wheel.next_year();
    assert_eq!(wheel.year(), i32::MAX);
    wheel.set_year(i32::MIN);
    wheel.previous_year();
    assert_eq!(wheel.year(), i32::MIN);
}

#[test]
fn test_wheel_recomputes_on_theme_and_timezone() {
    let clock = FixedClock::new(noon_in_may());
    let mut wheel = YearWheel::new(paris_config(), &clock, Instant::now());
    assert_eq!(wheel.geometry().months[0].color.lightness, 94);
    assert_eq!(wheel.geometry().season_pattern, SeasonPattern::Northern);

    wheel.toggle_theme();
    assert_eq!(wheel.theme(), Theme::Dark);
    assert_eq!(wheel.geometry().months[0].color.lightness, 20);

    wheel.set_timezone("Australia/Sydney");
    assert_eq!(wheel.geometry().season_pattern, SeasonPattern::Southern);

    wheel.set_timezone("Invalid/Zone");
    assert_eq!(wheel.timezone(), Tz::UTC);
    assert_eq!(wheel.geometry().season_pattern, SeasonPattern::Northern);

    wheel.set_theme(Theme::Light);
    assert_eq!(wheel.geometry().theme, Theme::Light);
}

#[test]
fn test_geometry_is_stable_between_changes() {
    let clock = FixedClock::new(noon_in_may());
    let mut wheel = YearWheel::new(paris_config(), &clock, Instant::now());
    let first = wheel.geometry().clone();
    let second = wheel.geometry().clone();
    assert_eq!(first, second);
}

// ── Clock ticks ──

#[test]
fn test_clock_refreshes_once_per_second() {
    let clock = FixedClock::new(noon_in_may());
    let t0 = Instant::now();
    let mut wheel = YearWheel::new(paris_config(), &clock, t0);
    assert_approx!(wheel.clock_angles().hour_angle, 60.0, 1e-9);
    assert_eq!(wheel.clock_face(), ClockFace::Day);
    assert_eq!(wheel.local_time_label(), "14:00");
    assert_eq!(wheel.local_date_label(), "Fri, May 10, 2024");

    clock.advance(chrono::Duration::seconds(1));
    assert!(!wheel.on_frame(t0 + ms(500)));
    assert_eq!(wheel.now(), noon_in_may());
    assert!(wheel.on_frame(t0 + ms(1000)));
    assert_eq!(wheel.now(), noon_in_may() + chrono::Duration::seconds(1));
    assert_approx!(wheel.clock_angles().second_angle, 6.0, 1e-9);
}

#[test]
fn test_today_follows_local_midnight() {
    let clock = FixedClock::new(noon_in_may());
    let t0 = Instant::now();
    let mut wheel = YearWheel::new(paris_config(), &clock, t0);
    // 22:00:30 UTC is 00:00:30 the next day in Paris (CEST)
    clock.set(Utc.with_ymd_and_hms(2024, 5, 10, 22, 0, 30).unwrap());
    assert!(wheel.on_frame(t0 + ms(1000)));
    let tomorrow = NaiveDate::from_ymd_opt(2024, 5, 11).unwrap();
    assert_eq!(wheel.today(), tomorrow);
    assert_eq!(wheel.geometry().days.today().unwrap().date, tomorrow);
    assert_eq!(wheel.clock_face(), ClockFace::Night);
}

#[test]
fn test_stop_ends_ticks() {
    let clock = FixedClock::new(noon_in_may());
    let t0 = Instant::now();
    let mut wheel = YearWheel::new(paris_config(), &clock, t0);
    assert!(wheel.is_ticking());
    wheel.stop();
    assert!(!wheel.is_ticking());
    clock.advance(chrono::Duration::seconds(5));
    assert!(!wheel.on_frame(t0 + ms(5000)));
    assert_eq!(wheel.now(), noon_in_may());
}

// ── Zoom shortcuts ──

#[test]
fn test_zoom_to_today_switches_year() {
    let clock = FixedClock::new(noon_in_may());
    let t0 = Instant::now();
    let config = WheelConfig {
        year: Some(2020),
        ..paris_config()
    };
    let mut wheel = YearWheel::new(config, &clock, t0);
    assert_eq!(wheel.year(), 2020);
    wheel.zoom_to_today(t0);
    assert_eq!(wheel.year(), 2024);

    let angle = 130.0 / 366.0 * 360.0;
    let expected = viewport_centered_on(visual_target(angle, 0.0), 4.0);
    let got = wheel.viewport(t0 + ms(800));
    assert_approx!(got.x, expected.x, 1e-9);
    assert_approx!(got.y, expected.y, 1e-9);
    assert_approx!(got.width, 400.0, 1e-9);
}

#[test]
fn test_zoom_to_this_week_and_month() {
    let clock = FixedClock::new(noon_in_may());
    let t0 = Instant::now();
    let mut wheel = YearWheel::new(paris_config(), &clock, t0);

    assert!(wheel.zoom_to_this_week(t0));
    let week = wheel
        .geometry()
        .weeks
        .iter()
        .find(|w| w.label == "W19")
        .unwrap()
        .clone();
    let expected = viewport_centered_on(visual_target(week.mid_angle, 0.0), 6.0);
    let got = wheel.viewport_controller().target_viewport();
    assert_approx!(got.x, expected.x, 1e-9);
    assert_approx!(got.width, expected.width, 1e-9);

    wheel.zoom_to_this_month(t0);
    let may = wheel.geometry().months[4].clone();
    let expected = viewport_centered_on(visual_target(may.mid_angle, 0.0), 2.5);
    let got = wheel.viewport_controller().target_viewport();
    assert_approx!(got.y, expected.y, 1e-9);
    assert_approx!(got.width, 640.0, 1e-9);

    wheel.set_year(2019);
    assert!(!wheel.zoom_to_this_week(t0));
}

#[test]
fn test_drag_then_reset_view() {
    let clock = FixedClock::new(noon_in_may());
    let t0 = Instant::now();
    let mut wheel = YearWheel::new(paris_config(), &clock, t0);
    let center = Point { x: 500.0, y: 400.0 };
    wheel.pointer_down(PointerButton::Primary, center, Point { x: 600.0, y: 400.0 }, t0);
    wheel.pointer_move(center, Point { x: 500.0, y: 500.0 });
    wheel.pointer_up();
    assert_approx!(wheel.rotation(t0), 90.0, 1e-9);

    wheel.zoom_to_angle(0.0, 4.0, t0);
    let rotated = wheel.viewport_controller().target_viewport();
    let expected = viewport_centered_on(visual_target(90.0, 0.0), 4.0);
    assert_approx!(rotated.x, expected.x, 1e-9);
    assert_approx!(rotated.y, expected.y, 1e-9);

    wheel.reset_view(t0 + ms(800));
    wheel.reset_rotation(t0 + ms(800));
    wheel.on_frame(t0 + ms(1600));
    assert_eq!(wheel.viewport(t0 + ms(1600)), year_wheel::FULL_VIEWPORT);
    assert_approx!(wheel.rotation(t0 + ms(1600)), 0.0, 1e-9);
}
