use crate::types::Point;

pub const FULL_TURN: f64 = 360.0;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (std::f64::consts::PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / std::f64::consts::PI)
}

pub fn normalize_angle(angle: f64) -> f64 {
    let a = angle.rem_euclid(FULL_TURN);
    // rem_euclid can round up to the modulus for tiny negative inputs
    if a >= FULL_TURN {
        0.0
    } else {
        a
    }
}

pub fn leap_year(year: i32) -> bool {
    (year % 400 == 0) || (year % 4 == 0 && year % 100 != 0)
}

pub fn days_in_months(year: i32) -> [u32; 12] {
    [
        31,
        if leap_year(year) { 29 } else { 28 },
        31, 30, 31, 30, 31, 31, 30, 31, 30, 31,
    ]
}

pub fn days_in_year(year: i32) -> u32 {
    if leap_year(year) {
        366
    } else {
        365
    }
}

pub fn day_of_year(year: i32, month: u32, day: u32) -> u32 {
    let dim = days_in_months(year);
    let month = month.clamp(1, 12);
    let day = day.clamp(1, dim[(month - 1) as usize]);
    let sum: u32 = dim[..(month - 1) as usize].iter().sum();
    sum + day
}

/// Midpoint of the clockwise span `start -> end`. When `end < start` the span
/// crosses the 0°/360° seam, so `end` is unwrapped by a full turn before
/// averaging and the result is folded back into `[0, 360)`.
pub fn unwrapped_midpoint(start: f64, end: f64) -> f64 {
    let end = if end < start { end + FULL_TURN } else { end };
    normalize_angle((start + end) / 2.0)
}

/// Compass-convention polar coordinate: 0° points up, angles grow clockwise
/// (screen y grows downward).
pub fn polar_to_cartesian(cx: f64, cy: f64, radius: f64, angle_deg: f64) -> Point {
    let rad = deg_to_rad(angle_deg - 90.0);
    Point {
        x: cx + radius * rad.cos(),
        y: cy + radius * rad.sin(),
    }
}

/// Angle of `pointer` around `center` in screen space, degrees in `(-180, 180]`,
/// 0° along +x. Only differences of this value are meaningful.
pub fn pointer_angle(center: Point, pointer: Point) -> f64 {
    rad_to_deg((pointer.y - center.y).atan2(pointer.x - center.x))
}

fn large_arc_flag(start_angle: f64, end_angle: f64) -> u8 {
    if end_angle - start_angle <= 180.0 {
        0
    } else {
        1
    }
}

/// SVG path for an open arc, drawn from `end_angle` back to `start_angle`.
pub fn describe_arc(cx: f64, cy: f64, radius: f64, start_angle: f64, end_angle: f64) -> String {
    let start = polar_to_cartesian(cx, cy, radius, end_angle);
    let end = polar_to_cartesian(cx, cy, radius, start_angle);
    format!(
        "M {} {} A {} {} 0 {} 0 {} {}",
        start.x,
        start.y,
        radius,
        radius,
        large_arc_flag(start_angle, end_angle),
        end.x,
        end.y
    )
}

/// SVG path for a closed annular sector between two radii. A sector spanning
/// the 0°/360° seam must be split by the caller first.
pub fn create_sector_path(
    cx: f64,
    cy: f64,
    r_outer: f64,
    r_inner: f64,
    start_angle: f64,
    end_angle: f64,
) -> String {
    let p1 = polar_to_cartesian(cx, cy, r_outer, start_angle);
    let p2 = polar_to_cartesian(cx, cy, r_outer, end_angle);
    let p3 = polar_to_cartesian(cx, cy, r_inner, end_angle);
    let p4 = polar_to_cartesian(cx, cy, r_inner, start_angle);
    let large_arc = large_arc_flag(start_angle, end_angle);
    format!(
        "M {} {} A {} {} 0 {} 1 {} {} L {} {} A {} {} 0 {} 0 {} {} Z",
        p1.x, p1.y,
        r_outer, r_outer, large_arc, p2.x, p2.y,
        p3.x, p3.y,
        r_inner, r_inner, large_arc, p4.x, p4.y
    )
}
