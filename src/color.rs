use crate::angles::normalize_angle;
use crate::types::{Hsl, Rgb, Season, Theme};

/// Background fill for ring arcs: pastel in light theme, deep and muted in dark.
pub fn ring_fill(hue: f64, theme: Theme) -> Hsl {
    let hue = normalize_angle(hue);
    match theme {
        Theme::Light => Hsl { hue, saturation: 70, lightness: 94 },
        Theme::Dark => Hsl { hue, saturation: 60, lightness: 20 },
    }
}

pub fn label_text(hue: f64, theme: Theme) -> Hsl {
    let hue = normalize_angle(hue);
    match theme {
        Theme::Light => Hsl { hue, saturation: 90, lightness: 30 },
        Theme::Dark => Hsl { hue, saturation: 90, lightness: 80 },
    }
}

pub fn week_hue(week: u32) -> f64 {
    ((week * 12) % 360) as f64
}

pub fn month_hue(month_index: u32) -> f64 {
    ((month_index * 30) % 360) as f64
}

pub fn zodiac_hue(sign_index: u32) -> f64 {
    ((sign_index * 30) % 360) as f64
}

/// Legend swatch per season. Independent of the arc fills, which follow angle.
pub fn season_legend_color(season: Season, theme: Theme) -> Rgb {
    match theme {
        Theme::Light => match season {
            Season::Winter => Rgb::new(0xA5, 0xF3, 0xFC),
            Season::Spring => Rgb::new(0xF9, 0xA8, 0xD4),
            Season::Summer => Rgb::new(0xFD, 0xE0, 0x47),
            Season::Autumn => Rgb::new(0xFB, 0x92, 0x3C),
            Season::Monsoon => Rgb::new(0x60, 0xA5, 0xFA),
        },
        Theme::Dark => match season {
            Season::Winter => Rgb::new(0x16, 0x4E, 0x63),
            Season::Spring => Rgb::new(0x83, 0x18, 0x43),
            Season::Summer => Rgb::new(0x71, 0x3F, 0x12),
            Season::Autumn => Rgb::new(0x7C, 0x2D, 0x12),
            Season::Monsoon => Rgb::new(0x1E, 0x3A, 0x8A),
        },
    }
}

impl Hsl {
    pub fn to_rgb(&self) -> Rgb {
        let h = normalize_angle(self.hue) / 60.0;
        let s = self.saturation.min(100) as f64 / 100.0;
        let l = self.lightness.min(100) as f64 / 100.0;
        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - (h % 2.0 - 1.0).abs());
        let (r1, g1, b1) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let m = l - c / 2.0;
        let channel = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        Rgb::new(channel(r1), channel(g1), channel(b1))
    }
}
