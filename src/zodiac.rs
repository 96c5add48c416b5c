use crate::color;
use crate::day_grid::DayGrid;
use crate::rings;
use crate::types::{Element, RingSegment, Theme, ZodiacSign};

/// Tropical signs in canonical order, Capricorn first. Months are 1-based.
pub const ZODIAC_SIGNS: [ZodiacSign; 12] = [
    ZodiacSign { name: "Capricorn", symbol: "♑", element: Element::Earth, start_month: 12, start_day: 22 },
    ZodiacSign { name: "Aquarius", symbol: "♒", element: Element::Air, start_month: 1, start_day: 20 },
    ZodiacSign { name: "Pisces", symbol: "♓", element: Element::Water, start_month: 2, start_day: 19 },
    ZodiacSign { name: "Aries", symbol: "♈", element: Element::Fire, start_month: 3, start_day: 21 },
    ZodiacSign { name: "Taurus", symbol: "♉", element: Element::Earth, start_month: 4, start_day: 20 },
    ZodiacSign { name: "Gemini", symbol: "♊", element: Element::Air, start_month: 5, start_day: 21 },
    ZodiacSign { name: "Cancer", symbol: "♋", element: Element::Water, start_month: 6, start_day: 21 },
    ZodiacSign { name: "Leo", symbol: "♌", element: Element::Fire, start_month: 7, start_day: 23 },
    ZodiacSign { name: "Virgo", symbol: "♍", element: Element::Earth, start_month: 8, start_day: 23 },
    ZodiacSign { name: "Libra", symbol: "♎", element: Element::Air, start_month: 9, start_day: 23 },
    ZodiacSign { name: "Scorpio", symbol: "♏", element: Element::Water, start_month: 10, start_day: 23 },
    ZodiacSign { name: "Sagittarius", symbol: "♐", element: Element::Fire, start_month: 11, start_day: 22 },
];

pub fn sign_by_name(name: &str) -> Option<&'static ZodiacSign> {
    ZODIAC_SIGNS.iter().find(|s| s.name == name)
}

/// Each sign runs from its own start angle to the next sign's. The sign that
/// crosses New Year (Capricorn) comes out as two split pieces, so the ring has
/// 13 pieces for 12 labels.
pub fn zodiac_ring(grid: &DayGrid, theme: Theme) -> Vec<RingSegment> {
    let mut starts: Vec<(usize, f64)> = ZODIAC_SIGNS
        .iter()
        .enumerate()
        .map(|(i, sign)| (i, grid.angle_of(sign.start_month, sign.start_day)))
        .collect();
    starts.sort_by(|a, b| a.1.total_cmp(&b.1));

    let mut segments = Vec::with_capacity(ZODIAC_SIGNS.len() + 1);
    for (pos, &(sign_index, start)) in starts.iter().enumerate() {
        let (_, end) = starts[(pos + 1) % starts.len()];
        let fill = color::ring_fill(color::zodiac_hue(sign_index as u32), theme);
        rings::push_span(&mut segments, ZODIAC_SIGNS[sign_index].name, start, end, |_, _| fill);
    }
    segments
}
