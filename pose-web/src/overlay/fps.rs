//! Frame rate meter for the control panel readout

/// Frames further apart than this are treated as a pause (tab hidden)
const MAX_FRAME_GAP_MS: f64 = 1000.0;

/// Exponential moving average of frames per second
#[derive(Debug, Clone, Default)]
pub struct FpsMeter {
    fps: f32,
    last_ms: Option<f64>,
}

impl FpsMeter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a frame at `now_ms` and return the smoothed rate
    pub fn tick(&mut self, now_ms: f64) -> f32 {
        if let Some(last) = self.last_ms {
            let dt = now_ms - last;
            if dt > 0.0 && dt <= MAX_FRAME_GAP_MS {
                let sample = (1000.0 / dt) as f32;
                self.fps = if self.fps == 0.0 { sample } else { self.fps * 0.9 + sample * 0.1 };
            }
        }
        self.last_ms = Some(now_ms);
        self.fps
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }
}
