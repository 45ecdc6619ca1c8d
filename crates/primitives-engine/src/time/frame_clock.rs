use std::time::{Duration, Instant};

/// Timing for one frame.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Seconds since the previous tick, clamped.
    pub dt: f32,
    pub now: Instant,
    /// Zero-based frame counter.
    pub frame_index: u64,
}

/// Produces [`FrameTime`] snapshots with a clamped delta.
///
/// The clamp keeps integrators sane after a stall (debugger pause, window
/// drag on some platforms) and avoids a zero `dt` on very fast loops.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
}

impl FrameClock {
    pub const DEFAULT_DT_MIN: Duration = Duration::from_micros(100);
    pub const DEFAULT_DT_MAX: Duration = Duration::from_millis(250);

    pub fn new() -> Self {
        Self::with_clamps(Self::DEFAULT_DT_MIN, Self::DEFAULT_DT_MAX)
    }

    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        Self { last: Instant::now(), frame_index: 0, dt_min, dt_max }
    }

    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    /// Advances the clock to `now`. A `now` earlier than the last tick
    /// counts as zero elapsed time.
    pub fn tick_at(&mut self, now: Instant) -> FrameTime {
        let elapsed = now.saturating_duration_since(self.last);
        let dt = elapsed.clamp(self.dt_min, self.dt_max);
        self.last = now;

        let ft = FrameTime { dt: dt.as_secs_f32(), now, frame_index: self.frame_index };
        self.frame_index = self.frame_index.wrapping_add(1);
        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn frame_index_counts_up() {
        let mut clock = FrameClock::new();
        let t0 = Instant::now();
        assert_eq!(clock.tick_at(t0).frame_index, 0);
        assert_eq!(clock.tick_at(t0 + Duration::from_millis(16)).frame_index, 1);
        assert_eq!(clock.tick_at(t0 + Duration::from_millis(32)).frame_index, 2);
    }

    #[test]
    fn regular_delta_passes_through() {
        let mut clock = FrameClock::new();
        let t0 = Instant::now();
        clock.tick_at(t0);
        let ft = clock.tick_at(t0 + Duration::from_millis(16));
        assert!(approx(ft.dt, 0.016));
    }

    #[test]
    fn long_stall_is_clamped() {
        let mut clock = FrameClock::new();
        let t0 = Instant::now();
        clock.tick_at(t0);
        let ft = clock.tick_at(t0 + Duration::from_secs(3));
        assert!(approx(ft.dt, 0.25));
    }

    #[test]
    fn zero_and_backwards_time_hit_the_floor() {
        let mut clock = FrameClock::new();
        let t0 = Instant::now() + Duration::from_secs(1);
        clock.tick_at(t0);
        assert!(approx(clock.tick_at(t0).dt, 0.0001));
        assert!(approx(clock.tick_at(t0 - Duration::from_millis(5)).dt, 0.0001));
    }

    #[test]
    fn custom_clamps() {
        let mut clock = FrameClock::with_clamps(Duration::from_millis(1), Duration::from_millis(50));
        let t0 = Instant::now();
        clock.tick_at(t0);
        assert!(approx(clock.tick_at(t0 + Duration::from_millis(200)).dt, 0.05));
    }
}
