use std::time::{Duration, Instant};

pub const DEFAULT_DURATION: Duration = Duration::from_millis(800);

pub fn ease_in_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Flight {
    from: f64,
    started: Instant,
}

/// A float that eases toward a target over a fixed duration. Retargeting
/// mid-flight starts the new animation from wherever the value is at that
/// instant; the old target is dropped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    target: f64,
    duration: Duration,
    flight: Option<Flight>,
}

impl Tween {
    pub fn new(value: f64, duration: Duration) -> Self {
        Self {
            target: value,
            duration,
            flight: None,
        }
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn sample(&self, now: Instant) -> f64 {
        let Some(flight) = self.flight else {
            return self.target;
        };
        let elapsed = now.saturating_duration_since(flight.started).as_secs_f64();
        let total = self.duration.as_secs_f64();
        if total <= 0.0 || elapsed >= total {
            return self.target;
        }
        let eased = ease_in_out_cubic(elapsed / total);
        flight.from + (self.target - flight.from) * eased
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.flight
            .is_some_and(|f| now.saturating_duration_since(f.started) < self.duration)
    }

    pub fn animate_to(&mut self, target: f64, now: Instant) {
        let from = self.sample(now);
        self.target = target;
        self.flight = Some(Flight { from, started: now });
    }

    pub fn set(&mut self, value: f64) {
        self.target = value;
        self.flight = None;
    }

    pub fn settle(&mut self, now: Instant) {
        if !self.is_animating(now) {
            self.flight = None;
        }
    }
}
