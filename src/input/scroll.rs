use crate::{
    foundation::{
        core::Progress,
        error::{MorphError, MorphResult},
    },
    input::event::ScrollMetrics,
};

/// Converts raw scroll metrics into normalized [`Progress`].
///
/// The scrollable range is `content_height - viewport_height`; content that
/// fits entirely reports `Progress::ZERO`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScrollTracker {
    last: Option<Progress>,
}

impl ScrollTracker {
    /// Build a tracker with no prior sample.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ingest new metrics and return the progress they map to.
    ///
    /// Rejects non-finite measurements so host glitches cannot poison
    /// downstream interpolation.
    pub fn update(&mut self, metrics: ScrollMetrics) -> MorphResult<Progress> {
        let ScrollMetrics {
            scroll_top,
            content_height,
            viewport_height,
        } = metrics;
        if !(scroll_top.is_finite() && content_height.is_finite() && viewport_height.is_finite()) {
            return Err(MorphError::input("scroll metrics must be finite"));
        }
        let scrollable = content_height - viewport_height;
        let progress = if scrollable <= 0.0 {
            Progress::ZERO
        } else {
            Progress::new(scroll_top / scrollable)
        };
        self.last = Some(progress);
        Ok(progress)
    }

    /// Latest progress, or `None` before the first sample.
    pub fn progress(&self) -> Option<Progress> {
        self.last
    }
}
