use crate::foundation::core::Viewport;

/// Raw scroll measurements as reported by a host.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollMetrics {
    /// Scrolled distance from the top in pixels.
    pub scroll_top: f64,
    /// Total content height in pixels.
    pub content_height: f64,
    /// Visible viewport height in pixels.
    pub viewport_height: f64,
}

/// A host-originated input sample.
///
/// Continuous events (`Scroll`, `PointerMove`, `Resize`) may arrive faster
/// than frames and are safe to collapse to the latest value per frame.
/// Discrete events carry state changes and must be applied in order.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum InputEvent {
    /// New scroll measurements.
    Scroll(ScrollMetrics),
    /// Pointer moved to viewport coordinates `(x, y)` in pixels.
    PointerMove {
        /// Horizontal position.
        x: f64,
        /// Vertical position.
        y: f64,
    },
    /// Viewport was resized.
    Resize(Viewport),
    /// Pointer entered the named shape.
    PointerEnter {
        /// Target shape id.
        shape: String,
    },
    /// Pointer left the named shape.
    PointerLeave {
        /// Target shape id.
        shape: String,
    },
    /// A watched region's visible ratio changed.
    RegionIntersect {
        /// Watched region id.
        region: String,
        /// Fraction of the region currently visible, in `[0, 1]`.
        ratio: f64,
    },
}

impl InputEvent {
    /// Whether collapsing to the latest sample per frame is lossless.
    pub fn is_continuous(&self) -> bool {
        matches!(
            self,
            Self::Scroll(_) | Self::PointerMove { .. } | Self::Resize(_)
        )
    }
}
