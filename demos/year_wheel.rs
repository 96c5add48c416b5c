use std::time::Instant;

use year_wheel::{
    create_sector_path, label_anchor, logical_segments, phase_name, shows_phase_marker,
    RingLayer, WheelConfig, YearWheel, CENTER,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => WheelConfig::from_file(path)?,
        None => WheelConfig::default(),
    };

    let frame = Instant::now();
    let mut wheel = YearWheel::with_system_clock(config, frame);

    println!("=== Year Wheel ===");
    println!("Year: {}", wheel.year());
    println!("Timezone: {}", wheel.timezone().name());
    println!("Local date: {} {}", wheel.local_date_label(), wheel.local_time_label());
    let hands = wheel.clock_angles();
    println!(
        "Clock hands: hour {:.1}°, minute {:.1}°, second {:.1}° ({:?} face)",
        hands.hour_angle,
        hands.minute_angle,
        hands.second_angle,
        wheel.clock_face()
    );
    println!();

    let geometry = wheel.geometry();
    println!("--- Rings ---");
    println!("Days: {}", geometry.days.len());
    println!("Weeks: {}", geometry.weeks.len());
    println!("Months: {}", geometry.months.len());
    println!(
        "Zodiac: {} pieces, {} signs",
        geometry.zodiac.len(),
        logical_segments(&geometry.zodiac).len()
    );
    println!("Seasons ({:?}):", geometry.season_pattern);
    for label in &geometry.season_labels {
        let anchor = label_anchor(RingLayer::Seasons, label.angle);
        println!(
            "  {:<8} at {:>6.2}° ({:.0}, {:.0}) legend {}",
            label.season, label.angle, anchor.x, anchor.y, label.legend_color
        );
    }
    println!();

    println!("--- Principal moon phases ---");
    for day in geometry.days.iter().filter(|d| shows_phase_marker(d.moon_phase)) {
        println!("  {} {:?}", day.date, phase_name(day.moon_phase));
    }
    println!();

    if let Some(january) = geometry.months.first() {
        println!("January sector path:");
        println!(
            "  {}",
            create_sector_path(
                CENTER.x,
                CENTER.y,
                RingLayer::Months.disc_radius(),
                RingLayer::Zodiac.disc_radius(),
                january.start_angle,
                january.end_angle,
            )
        );
        println!("  fill {} ({})", january.color, january.color.to_rgb());
    }

    wheel.zoom_to_today(frame);
    println!("Zoom target viewBox: {}", wheel.viewport_controller().target_viewport());
    wheel.stop();
    Ok(())
}
