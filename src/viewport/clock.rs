use web_time::{Duration, Instant};

/// Frame counter with elapsed time and a smoothed frame rate.
#[derive(Debug, Clone)]
pub struct FrameClock {
    /// Ticks completed so far.
    frame: u64,
    /// When the viewer started.
    start: Instant,
    /// Last tick timestamp
    last_frame: Instant,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    /// Start counting from now.
    #[must_use]
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            frame: 0,
            start: now,
            last_frame: now,
            smoothed_fps: 60.0,
            smoothing: 0.05,
        }
    }

    /// Advance one tick. Returns the new frame number.
    pub fn advance(&mut self) -> u64 {
        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.frame += 1;

        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
        self.frame
    }

    /// Ticks completed so far.
    #[must_use]
    pub const fn frame(&self) -> u64 {
        self.frame
    }

    /// Monotonic time since the clock started, as of the last tick.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.last_frame.duration_since(self.start)
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub const fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}
