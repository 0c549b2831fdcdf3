use crate::{
    foundation::core::Viewport,
    input::{
        event::{InputEvent, ScrollMetrics},
        source::EventSource,
    },
};

/// One frame's worth of input after coalescing.
///
/// Continuous channels keep only the newest sample; discrete events keep
/// arrival order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameInput {
    /// Latest resize, if any arrived this frame.
    pub resize: Option<Viewport>,
    /// Latest scroll metrics, if any arrived this frame.
    pub scroll: Option<ScrollMetrics>,
    /// Latest pointer position in pixels, if any arrived this frame.
    pub pointer: Option<(f64, f64)>,
    /// Ordered discrete events (enter, leave, region intersections).
    pub discrete: Vec<InputEvent>,
}

impl FrameInput {
    /// Whether the frame carried no input at all.
    pub fn is_empty(&self) -> bool {
        self.resize.is_none()
            && self.scroll.is_none()
            && self.pointer.is_none()
            && self.discrete.is_empty()
    }
}

/// Collapses a burst of host events into a single [`FrameInput`].
///
/// Hosts fire scroll and pointer callbacks far more often than frames are
/// produced; only the newest sample of each continuous channel can affect
/// the frame, so earlier samples are dropped.
#[derive(Debug, Default)]
pub struct FrameCoalescer;

impl FrameCoalescer {
    /// Build a coalescer.
    pub fn new() -> Self {
        Self
    }

    /// Drain `source` completely into a coalesced frame.
    pub fn drain(&self, source: &mut dyn EventSource) -> FrameInput {
        let mut frame = FrameInput::default();
        while let Some(event) = source.next_event() {
            match event {
                InputEvent::Resize(viewport) => frame.resize = Some(viewport),
                InputEvent::Scroll(metrics) => frame.scroll = Some(metrics),
                InputEvent::PointerMove { x, y } => frame.pointer = Some((x, y)),
                discrete => frame.discrete.push(discrete),
            }
        }
        frame
    }
}

#[cfg(test)]
#[path = "../../tests/unit/input/coalesce.rs"]
mod tests;
