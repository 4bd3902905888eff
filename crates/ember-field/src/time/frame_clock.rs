use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Time elapsed since the previous frame, in seconds.
    pub dt: f32,

    /// Seconds since the clock was created. This is the `time` input of the fields.
    pub elapsed: f32,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

/// Frame clock producing `FrameTime` snapshots.
///
/// Delta time is clamped to avoid pathological values when the process is
/// paused by a debugger or stalls. Elapsed time is never reset, so periodic
/// field terms keep their phase across frames.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    elapsed: Duration,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
}

impl FrameClock {
    /// Creates a new clock with default clamps (0.1 ms to 250 ms).
    pub fn new() -> Self {
        Self::with_clamps(Duration::from_micros(100), Duration::from_millis(250))
    }

    /// Creates a clock with custom delta-time clamps.
    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        Self {
            last: Instant::now(),
            elapsed: Duration::ZERO,
            frame_index: 0,
            dt_min,
            dt_max,
        }
    }

    /// Resets the wall-clock baseline without touching elapsed time.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    pub fn elapsed_seconds(&self) -> f32 {
        self.elapsed.as_secs_f32()
    }

    /// Advances the clock by the wall time since the previous tick.
    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let dt = self.clamp(now.saturating_duration_since(self.last));
        self.last = now;
        self.step(dt, now)
    }

    /// Advances the clock by a fixed amount, ignoring wall time.
    ///
    /// `dt` is clamped before it moves the timestamp, so an arbitrarily long
    /// stall costs one `dt_max` step.
    pub fn advance(&mut self, dt: Duration) -> FrameTime {
        let dt = self.clamp(dt);
        // Past the platform's Instant range the timestamp stops moving.
        self.last = self.last.checked_add(dt).unwrap_or(self.last);
        self.step(dt, self.last)
    }

    fn clamp(&self, dt: Duration) -> Duration {
        dt.clamp(self.dt_min, self.dt_max)
    }

    fn step(&mut self, dt: Duration, now: Instant) -> FrameTime {
        self.elapsed = self.elapsed.saturating_add(dt);

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            elapsed: self.elapsed.as_secs_f32(),
            now,
            frame_index: self.frame_index,
        };

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

    #[test]
    fn advance_accumulates_elapsed() {
        let mut clock = FrameClock::new();
        let dt = Duration::from_millis(16);
        clock.advance(dt);
        let ft = clock.advance(dt);
        assert_eq!(ft.frame_index, 1);
        assert!((ft.elapsed - 0.032).abs() < 1e-6);
    }

    #[test]
    fn advance_clamps_long_stall() {
        let mut clock = FrameClock::new();
        let ft = clock.advance(Duration::from_secs(3));
        assert!((ft.dt - 0.25).abs() < 1e-6);
        assert!((clock.elapsed_seconds() - 0.25).abs() < 1e-6);
    }

    #[test]
    fn advance_clamps_before_moving_timestamp() {
        let mut clock = FrameClock::new();
        let start = clock.advance(Duration::from_millis(10)).now;
        let ft = clock.advance(Duration::from_secs(u64::MAX / 2));
        assert!((ft.dt - 0.25).abs() < 1e-6);
        assert_eq!(ft.now.duration_since(start), Duration::from_millis(250));
        assert_eq!(clock.advance(Duration::MAX).frame_index, 2);
    }

    #[test]
    fn advance_clamps_zero_dt_to_minimum() {
        let mut clock = FrameClock::new();
        let ft = clock.advance(Duration::ZERO);
        assert!(ft.dt > 0.0);
    }

    #[test]
    fn reset_keeps_elapsed() {
        let mut clock = FrameClock::new();
        clock.advance(Duration::from_millis(100));
        clock.reset();
        assert!((clock.elapsed_seconds() - 0.1).abs() < 1e-6);
    }
}
