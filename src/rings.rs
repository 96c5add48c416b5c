use crate::angles::{self, FULL_TURN};
use crate::types::{Hsl, RingSegment};

/// Pushes the clockwise span `start -> end` as one segment, or as two split
/// pieces `[start, 360)` and `[0, end)` when it crosses the seam. Both pieces
/// carry the midpoint of the unwrapped span.
pub fn push_span<F>(out: &mut Vec<RingSegment>, label: &str, start: f64, end: f64, color_for: F)
where
    F: Fn(f64, f64) -> Hsl,
{
    if end < start {
        let mid = angles::unwrapped_midpoint(start, end);
        out.push(RingSegment {
            label: label.to_string(),
            start_angle: start,
            end_angle: FULL_TURN,
            mid_angle: mid,
            color: color_for(start, FULL_TURN),
            is_split: true,
        });
        out.push(RingSegment {
            label: label.to_string(),
            start_angle: 0.0,
            end_angle: end,
            mid_angle: mid,
            color: color_for(0.0, end),
            is_split: true,
        });
    } else {
        out.push(RingSegment {
            label: label.to_string(),
            start_angle: start,
            end_angle: end,
            mid_angle: (start + end) / 2.0,
            color: color_for(start, end),
            is_split: false,
        });
    }
}

/// One entry per logical segment: split pieces after the first with the same
/// label are dropped. Use this to place labels exactly once.
pub fn logical_segments(segments: &[RingSegment]) -> Vec<&RingSegment> {
    let mut out: Vec<&RingSegment> = Vec::with_capacity(segments.len());
    for s in segments {
        if s.is_split && out.iter().any(|o| o.is_split && o.label == s.label) {
            continue;
        }
        out.push(s);
    }
    out
}

pub fn segment_at_angle(segments: &[RingSegment], angle: f64) -> Option<&RingSegment> {
    let angle = angles::normalize_angle(angle);
    segments.iter().find(|s| s.contains_angle(angle))
}
