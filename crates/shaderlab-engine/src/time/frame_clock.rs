/// Frame timing snapshot.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameTime {
    /// Seconds since the previous tick, clamped.
    pub dt: f32,

    /// Seconds since the first tick: the `t` handed to `render`.
    pub elapsed: f32,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

/// Turns host animation timestamps into `FrameTime` snapshots.
///
/// The host supplies the timestamp (e.g. the `requestAnimationFrame`
/// argument converted to seconds), so the clock works where `Instant` is
/// unavailable. Use one clock per preview so scenes never share timing state.
///
/// `dt` is clamped to keep stalls (background tabs, debugger pauses) from
/// producing pathological steps. `elapsed` is not clamped: it always equals
/// the distance from the first timestamp.
#[derive(Debug, Clone)]
pub struct FrameClock {
    origin: Option<f64>,
    last: f64,
    frame_index: u64,
    dt_min: f64,
    dt_max: f64,
}

impl FrameClock {
    /// Creates a clock with default clamps of 0.0001 s and 0.25 s.
    pub fn new() -> Self {
        Self::with_clamps(0.0001, 0.25)
    }

    /// Creates a clock with custom delta-time clamps, in seconds.
    pub fn with_clamps(dt_min: f64, dt_max: f64) -> Self {
        debug_assert!(dt_min <= dt_max);
        Self {
            origin: None,
            last: 0.0,
            frame_index: 0,
            dt_min,
            dt_max,
        }
    }

    /// Forgets the origin; the next tick starts again at `elapsed = 0`.
    pub fn reset(&mut self) {
        self.origin = None;
        self.frame_index = 0;
    }

    /// Advances the clock to `now` seconds and returns a new `FrameTime`.
    pub fn tick(&mut self, now: f64) -> FrameTime {
        let origin = *self.origin.get_or_insert(now);

        let dt = if self.frame_index == 0 {
            self.dt_min
        } else {
            (now - self.last).clamp(self.dt_min, self.dt_max)
        };

        self.last = now;

        let ft = FrameTime {
            dt: dt as f32,
            elapsed: (now - origin).max(0.0) as f32,
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
    use approx::assert_relative_eq;

    #[test]
    fn first_tick_starts_at_zero() {
        let mut clock = FrameClock::new();
        let ft = clock.tick(12.5);
        assert_eq!(ft.elapsed, 0.0);
        assert_eq!(ft.frame_index, 0);
    }

    #[test]
    fn elapsed_tracks_timestamps() {
        let mut clock = FrameClock::new();
        clock.tick(10.0);
        let ft = clock.tick(10.016);
        assert_relative_eq!(ft.elapsed, 0.016, epsilon = 1e-5);
        assert_relative_eq!(ft.dt, 0.016, epsilon = 1e-5);
        assert_eq!(ft.frame_index, 1);
    }

    #[test]
    fn dt_is_clamped_but_elapsed_is_not() {
        let mut clock = FrameClock::new();
        clock.tick(0.0);
        let ft = clock.tick(5.0);
        assert_relative_eq!(ft.dt, 0.25);
        assert_relative_eq!(ft.elapsed, 5.0);

        let ft = clock.tick(5.0);
        assert_relative_eq!(ft.dt, 0.0001);
    }

    #[test]
    fn reset_restarts_origin() {
        let mut clock = FrameClock::new();
        clock.tick(1.0);
        clock.tick(2.0);
        clock.reset();
        let ft = clock.tick(7.0);
        assert_eq!(ft.elapsed, 0.0);
        assert_eq!(ft.frame_index, 0);
    }
}
