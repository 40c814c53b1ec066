//! Frame pacing utilities

/// Accumulates elapsed time and fires once a target frame interval has passed.
///
/// The pacer does not sleep. It is fed the real time elapsed between loop
/// iterations and reports, once the accumulated time reaches the frame
/// interval, how much time has accumulated since the previous frame. The
/// accumulator then restarts from zero, so overshoot is not carried over.
#[derive(Debug, Clone)]
pub struct FramePacer {
    frame_time: f64,
    accumulated: f64,
    frame_count: u64,
}

impl FramePacer {
    /// Create a pacer targeting `target_fps` frames per second
    pub fn new(target_fps: f64) -> Self {
        Self {
            frame_time: 1.0 / target_fps,
            accumulated: 0.0,
            frame_count: 0,
        }
    }

    /// Feed `dt` seconds of elapsed time.
    ///
    /// Returns the accumulated time in seconds when a frame is due.
    pub fn advance(&mut self, dt: f64) -> Option<f64> {
        self.accumulated += dt;
        if self.accumulated >= self.frame_time {
            let elapsed = self.accumulated;
            self.accumulated = 0.0;
            self.frame_count += 1;
            Some(elapsed)
        } else {
            None
        }
    }

    /// Target frame interval in seconds
    pub fn frame_time(&self) -> f64 {
        self.frame_time
    }

    /// Time accumulated towards the next frame
    pub fn accumulated(&self) -> f64 {
        self.accumulated
    }

    /// Number of frames fired so far
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

impl Default for FramePacer {
    fn default() -> Self {
        Self::new(60.0)
    }
}
