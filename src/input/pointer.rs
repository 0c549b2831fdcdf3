use crate::{
    foundation::{
        core::{PointerOffset, Viewport},
        error::{MorphError, MorphResult},
    },
};

/// Converts pixel pointer positions into center-relative [`PointerOffset`]s.
///
/// Without a viewport, or with a zero-area one, the tracker reports
/// [`PointerOffset::ZERO`] so parallax stays inert instead of dividing by
/// zero.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerTracker {
    viewport: Option<Viewport>,
    offset: PointerOffset,
}

impl PointerTracker {
    /// Build a tracker with no viewport.
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the viewport used for normalization.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = Some(viewport);
    }

    /// Ingest a pointer position in viewport pixels.
    pub fn update(&mut self, x: f64, y: f64) -> MorphResult<PointerOffset> {
        if !(x.is_finite() && y.is_finite()) {
            return Err(MorphError::input("pointer coordinates must be finite"));
        }
        let offset = match self.viewport {
            Some(vp) if vp.has_area() => {
                let center = vp.center();
                PointerOffset {
                    x: (x - center.x) / center.x,
                    y: (y - center.y) / center.y,
                }
            }
            _ => PointerOffset::ZERO,
        };
        self.offset = offset;
        Ok(offset)
    }

    /// Latest offset, `ZERO` before the first sample.
    pub fn offset(&self) -> PointerOffset {
        self.offset
    }
}
