use web_time::{Duration, Instant};

/// Frame-to-frame delta measurement with a smoothed FPS readout.
///
/// Feeds [`SpatialControls::update`](crate::controls::SpatialControls::update)
/// when the host has no clock of its own.
#[derive(Debug, Clone)]
pub struct FrameTiming {
    /// Timestamp of the previous frame (`None` before the first frame)
    last_frame: Option<Instant>,
    /// Longest delta ever reported; longer gaps (e.g. a suspended tab) are
    /// cut down to this
    max_delta: Duration,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl Default for FrameTiming {
    fn default() -> Self {
        Self::new(Duration::from_millis(250))
    }
}

impl FrameTiming {
    /// Create a new frame timer that never reports more than `max_delta`.
    #[must_use]
    pub fn new(max_delta: Duration) -> Self {
        Self {
            last_frame: None,
            max_delta,
            smoothed_fps: 60.0, // Start with reasonable default
            smoothing: 0.05,
        }
    }

    /// Seconds since the previous call, measured against the system clock.
    pub fn advance(&mut self) -> f32 {
        self.advance_to(Instant::now())
    }

    /// Seconds between the previous frame and `now`. The first frame
    /// reports zero.
    pub fn advance_to(&mut self, now: Instant) -> f32 {
        let Some(last) = self.last_frame.replace(now) else {
            return 0.0;
        };
        let frame_time =
            now.saturating_duration_since(last).min(self.max_delta).as_secs_f32();

        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
        frame_time
    }

    /// Forget the previous frame so the next one reports zero.
    pub fn reset(&mut self) {
        self.last_frame = None;
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}
