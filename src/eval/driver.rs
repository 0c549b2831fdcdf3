use std::collections::HashMap;

use crate::{
    animation::{ease::Ease, scrub::Scrubber},
    composition::model::{CompiledSection, ShapeConfig, Storyboard},
    effects::{focus::FocusLayer, hover::HoverLayer},
    eval::interpolate::interpolate,
    foundation::{
        core::{PathData, Progress, Rgba8, Vec2},
        error::{MorphError, MorphResult},
    },
    input::{
        coalesce::FrameInput,
        event::InputEvent,
        pointer::PointerTracker,
        scroll::ScrollTracker,
        visibility::VisibilityTrigger,
    },
};

/// What is currently steering a shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum ShapePhase {
    /// No scroll sample seen yet and not hovered.
    Idle,
    /// Attributes follow smoothed scroll progress.
    ScrollDriven,
    /// A pointer is over the shape; hover treatment dominates.
    Hovering,
}

/// One shape's complete output attributes for a frame.
///
/// `color` is `None` for shapes that do not follow sections; the host keeps
/// its own fill for those.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ShapeFrame {
    /// Shape id from the storyboard.
    pub shape_id: String,
    /// Steering state this frame.
    pub phase: ShapePhase,
    /// Shape path to render.
    pub path: PathData,
    /// Fill color, when section-driven.
    pub color: Option<Rgba8>,
    /// Uniform scale factor.
    pub scale: f64,
    /// Rotation in degrees.
    pub rotation_deg: f64,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Translation from the shape's resting position, in pixels.
    pub translate: Vec2,
}

enum PathSource {
    Sections,
    Fixed(PathData),
}

struct ShapeState {
    config: ShapeConfig,
    source: PathSource,
    scrubber: Scrubber,
    hover: HoverLayer,
    focus: FocusLayer,
}

impl ShapeState {
    fn new(config: ShapeConfig) -> MorphResult<Self> {
        let source = if config.follows_sections {
            PathSource::Sections
        } else {
            let data = config.base_path.as_deref().ok_or_else(|| {
                MorphError::validation(format!(
                    "shape '{}': a non-following shape needs a base_path",
                    config.id
                ))
            })?;
            PathSource::Fixed(PathData::from_svg(data)?)
        };
        Ok(Self {
            scrubber: Scrubber::new(0.0, config.scrub_lag_secs),
            hover: HoverLayer::new(config.hover),
            focus: FocusLayer::new(config.focus_boost),
            source,
            config,
        })
    }

    fn phase(&self, progress_seen: bool) -> ShapePhase {
        if self.hover.is_hovered() {
            ShapePhase::Hovering
        } else if progress_seen {
            ShapePhase::ScrollDriven
        } else {
            ShapePhase::Idle
        }
    }
}

/// Stateful frame producer: feeds coalesced input through the trackers and
/// per-shape layers, then emits one [`ShapeFrame`] per driven shape.
pub struct ShapeDriver {
    sections: Vec<CompiledSection>,
    shapes: Vec<ShapeState>,
    scroll: ScrollTracker,
    pointer: PointerTracker,
    regions: HashMap<String, VisibilityTrigger>,
    section_ease: Ease,
    progress_seen: bool,
    warned_empty_sections: bool,
}

impl ShapeDriver {
    /// Validate `storyboard` and build a driver at rest.
    pub fn new(storyboard: &Storyboard) -> MorphResult<Self> {
        let sections = storyboard.compile()?;
        let shapes = storyboard
            .shapes
            .iter()
            .cloned()
            .map(ShapeState::new)
            .collect::<MorphResult<Vec<_>>>()?;
        Ok(Self {
            sections,
            shapes,
            scroll: ScrollTracker::new(),
            pointer: PointerTracker::new(),
            regions: HashMap::new(),
            section_ease: Ease::InOutCubic,
            progress_seen: false,
            warned_empty_sections: false,
        })
    }

    /// Override the curve used between sections.
    pub fn set_section_ease(&mut self, ease: Ease) {
        self.section_ease = ease;
    }

    /// Start watching a region for the in-view focus boost.
    ///
    /// `RegionIntersect` events for unwatched regions are ignored.
    pub fn watch_region(&mut self, region: impl Into<String>, threshold: f64, once: bool) {
        self.regions
            .insert(region.into(), VisibilityTrigger::new(threshold, once));
    }

    /// Latest smoothed progress of the named shape.
    pub fn shape_progress(&self, shape_id: &str) -> Option<Progress> {
        self.shapes
            .iter()
            .find(|s| s.config.id == shape_id)
            .map(|s| Progress::new(s.scrubber.position()))
    }

    /// Apply one frame of input, advance time by `dt_secs`, and produce
    /// the output attributes for every shape.
    ///
    /// Non-finite or negative `dt_secs` is treated as `0`: state updates
    /// still apply, time does not advance.
    #[tracing::instrument(level = "debug", skip(self, frame))]
    pub fn advance(&mut self, frame: &FrameInput, dt_secs: f64) -> MorphResult<Vec<ShapeFrame>> {
        let dt = if dt_secs.is_finite() && dt_secs > 0.0 {
            dt_secs
        } else {
            0.0
        };

        if let Some(viewport) = frame.resize {
            self.pointer.set_viewport(viewport);
        }
        if let Some(metrics) = frame.scroll {
            let progress = self.scroll.update(metrics)?;
            self.progress_seen = true;
            for shape in &mut self.shapes {
                shape.scrubber.sync(progress.0);
            }
        }
        if let Some((x, y)) = frame.pointer {
            self.pointer.update(x, y)?;
        }

        for event in &frame.discrete {
            match event {
                InputEvent::PointerEnter { shape } => self.set_hovered(shape, true),
                InputEvent::PointerLeave { shape } => self.set_hovered(shape, false),
                InputEvent::RegionIntersect { region, ratio } => {
                    match self.regions.get_mut(region) {
                        Some(trigger) => {
                            trigger.update(*ratio);
                        }
                        None => {
                            tracing::debug!(region = %region, "intersection for unwatched region");
                        }
                    }
                }
                // Continuous events are coalesced away before this point.
                _ => {}
            }
        }

        let focused = self.regions.values().any(VisibilityTrigger::is_visible);
        for shape in &mut self.shapes {
            shape.focus.set_focused(focused);
            shape.scrubber.tick(dt);
            shape.hover.tick(dt);
            shape.focus.tick(dt);
        }

        let pointer_offset = self.pointer.offset();
        let mut frames = Vec::with_capacity(self.shapes.len());
        for shape in &self.shapes {
            let (path, color, mut scale, mut rotation_deg, opacity) = match &shape.source {
                PathSource::Sections => {
                    let progress = Progress::new(shape.scrubber.position());
                    match interpolate(progress, &self.sections, self.section_ease) {
                        Some(attrs) => (
                            attrs.path,
                            Some(attrs.color),
                            attrs.scale,
                            attrs.rotation_deg,
                            attrs.opacity,
                        ),
                        None => {
                            if !self.warned_empty_sections {
                                self.warned_empty_sections = true;
                                tracing::debug!(
                                    "storyboard has no sections; following shapes skipped"
                                );
                            }
                            continue;
                        }
                    }
                }
                PathSource::Fixed(path) => (path.clone(), None, 1.0, 0.0, 1.0),
            };

            let hover = shape.hover.offsets();
            scale *= hover.scale_mul;
            rotation_deg += hover.rotation_delta_deg;
            scale *= shape.focus.scale_mul();

            let mut translate = pointer_offset.scaled(shape.config.parallax_gain);
            translate.y += hover.lift_px;

            frames.push(ShapeFrame {
                shape_id: shape.config.id.clone(),
                phase: shape.phase(self.progress_seen),
                path,
                color,
                scale,
                rotation_deg,
                opacity,
                translate,
            });
        }
        Ok(frames)
    }

    fn set_hovered(&mut self, shape_id: &str, hovered: bool) {
        match self.shapes.iter_mut().find(|s| s.config.id == shape_id) {
            Some(shape) => shape.hover.set_hovered(hovered),
            None => tracing::debug!(shape = shape_id, "hover event for unknown shape"),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/driver.rs"]
mod tests;
