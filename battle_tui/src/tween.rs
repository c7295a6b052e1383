//! Attack tween - the animation clock the sequencer polls
//!
//! The presentation layer owns this clock. It runs forward while an attack
//! swing plays, backward after the sequencer commands a reverse, and the
//! sequencer only ever reads its signed value.

use std::time::Duration;

pub struct Tween {
    clock_ms: f32,
    reversed: bool,
    playing: bool,
    /// Clock milliseconds advanced per real millisecond
    pub speed: f32,
}

impl Tween {
    pub fn new(speed: f32) -> Self {
        Tween {
            clock_ms: 0.0,
            reversed: false,
            playing: false,
            speed,
        }
    }

    /// Start a fresh forward cycle
    pub fn begin(&mut self) {
        self.clock_ms = 0.0;
        self.reversed = false;
        self.playing = true;
    }

    /// Play backward from the current point
    pub fn reverse(&mut self) {
        self.reversed = true;
    }

    pub fn stop(&mut self) {
        self.playing = false;
    }

    /// Advance the clock by one frame's elapsed time
    pub fn advance(&mut self, dt: Duration) {
        if !self.playing {
            return;
        }
        let delta = dt.as_secs_f32() * 1000.0 * self.speed;
        if self.reversed {
            self.clock_ms = (self.clock_ms - delta).max(0.0);
        } else {
            self.clock_ms += delta;
        }
    }

    pub fn clock_ms(&self) -> f32 {
        self.clock_ms
    }

    /// Fraction of a cycle completed, for rendering the lunge
    pub fn fraction(&self, cycle_ms: f32) -> f32 {
        if cycle_ms <= 0.0 {
            return 0.0;
        }
        (self.clock_ms / cycle_ms).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_then_reverse() {
        let mut tween = Tween::new(1.0);
        tween.begin();
        tween.advance(Duration::from_millis(600));
        assert!((tween.clock_ms() - 600.0).abs() < 1.0);

        tween.reverse();
        tween.advance(Duration::from_millis(400));
        assert!((tween.clock_ms() - 200.0).abs() < 1.0);
    }

    #[test]
    fn test_reverse_clamps_at_zero() {
        let mut tween = Tween::new(1.0);
        tween.begin();
        tween.advance(Duration::from_millis(100));
        tween.reverse();
        tween.advance(Duration::from_millis(500));
        assert_eq!(tween.clock_ms(), 0.0);
    }

    #[test]
    fn test_stopped_tween_does_not_move() {
        let mut tween = Tween::new(1.0);
        tween.advance(Duration::from_millis(500));
        assert_eq!(tween.clock_ms(), 0.0);
    }
}
