use std::collections::VecDeque;

/// Rolling window size in frames.
const WINDOW: usize = 60;

/// Rolling frame-rate estimate over the last sixty frames.
#[derive(Clone, Debug, Default)]
pub struct FpsMeter {
    last_timestamp: Option<f64>,
    samples: VecDeque<f64>,
}

impl FpsMeter {
    /// Build an empty meter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a frame at `timestamp_secs`.
    ///
    /// The first frame only establishes the baseline. Non-positive or
    /// non-finite deltas are discarded, so clock resets do not skew the
    /// estimate.
    pub fn frame(&mut self, timestamp_secs: f64) {
        if !timestamp_secs.is_finite() {
            return;
        }
        if let Some(last) = self.last_timestamp {
            let delta = timestamp_secs - last;
            if delta.is_finite() && delta > 0.0 {
                if self.samples.len() == WINDOW {
                    self.samples.pop_front();
                }
                self.samples.push_back(1.0 / delta);
            }
        }
        self.last_timestamp = Some(timestamp_secs);
    }

    /// Average frames per second over the window, or `None` before the
    /// second frame.
    pub fn fps(&self) -> Option<f64> {
        if self.samples.is_empty() {
            return None;
        }
        Some(self.samples.iter().sum::<f64>() / self.samples.len() as f64)
    }

    /// Drop all samples and the baseline.
    pub fn reset(&mut self) {
        self.last_timestamp = None;
        self.samples.clear();
    }
}
