use std::time::{Duration, Instant};

/// Timing snapshot for one frame.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Seconds since the previous tick, clamped (see [`FrameClock`]).
    pub dt: f32,
    /// Clamped seconds accumulated since the clock started.
    pub elapsed: f32,
    /// Monotonic frame counter, starting at 0.
    pub frame_index: u64,
}

/// Produces [`FrameTime`] snapshots for a single loop.
///
/// Delta time is clamped on both ends: a ceiling keeps simulations from
/// exploding after a stall (debugger, minimized window), a small floor
/// keeps zero deltas out of integrators on platforms with coarse timers.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last:        Instant,
    elapsed:     Duration,
    frame_index: u64,
    dt_min:      Duration,
    dt_max:      Duration,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::with_clamps(Duration::from_micros(100), Duration::from_millis(250))
    }

    /// Clock with custom delta-time clamps.
    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        Self {
            last:        Instant::now(),
            elapsed:     Duration::ZERO,
            frame_index: 0,
            dt_min,
            dt_max,
        }
    }

    /// Re-baselines the clock, e.g. after the surface was suspended.
    ///
    /// Elapsed time and the frame counter are preserved; only the next
    /// delta is affected.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    /// Advances the clock and returns the frame's timing snapshot.
    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let dt = now
            .saturating_duration_since(self.last)
            .clamp(self.dt_min, self.dt_max);
        self.last = now;
        self.elapsed += dt;

        let frame = FrameTime {
            dt: dt.as_secs_f32(),
            elapsed: self.elapsed.as_secs_f32(),
            frame_index: self.frame_index,
        };
        self.frame_index = self.frame_index.wrapping_add(1);
        frame
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
