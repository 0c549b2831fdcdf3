//! Scrollmorph is a host-agnostic driver for scroll and pointer reactive
//! vector shapes.
//!
//! A declarative [`Storyboard`] names scroll-addressed sections and the
//! shapes that react to them. Each frame, the host feeds raw input events
//! (scroll metrics, pointer positions, region intersections) through a
//! [`FrameCoalescer`] and hands the result to a [`ShapeDriver`], which
//! answers with fully blended per-shape attributes (`path`, color, scale,
//! rotation, opacity, translation) ready to apply to an SVG or canvas
//! layer.
//!
//! # Pipeline overview
//!
//! 1. **Collect**: host callbacks push [`InputEvent`]s into an
//!    [`EventSource`]
//! 2. **Coalesce**: [`FrameCoalescer`] collapses each burst into one
//!    [`FrameInput`] (latest-wins for continuous channels)
//! 3. **Advance**: [`ShapeDriver::advance`] updates trackers, smooths
//!    progress through per-shape scrubbers, layers hover / focus /
//!    parallax treatment, and emits [`ShapeFrame`]s
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: the same storyboard, event sequence,
//!   and frame timing always produce the same frames; decorative
//!   randomness derives from the storyboard seed.
//! - **No IO and no clock**: hosts own event delivery and time; the
//!   driver only consumes elapsed seconds.
//! - **Finite-by-construction**: non-finite host input is rejected or
//!   collapsed at the boundary, never propagated into attribute space.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod composition;
mod effects;
mod eval;
mod foundation;
mod input;
mod telemetry;

pub use animation::anim::{Lerp, ToggleTransition, Tween};
pub use animation::ease::Ease;
pub use animation::scrub::Scrubber;
pub use composition::dsl::{StoryboardBuilder, contrast_shape, primary_shape};
pub use composition::model::{
    CompiledSection, HoverSpec, Section, ShapeConfig, Storyboard,
};
pub use effects::focus::FocusLayer;
pub use effects::hover::{HoverLayer, HoverOffsets};
pub use effects::particles::{Particle, ParticleField, ParticleFrame};
pub use effects::reveal::{Reveal, RevealFrame, SlideFrom, stagger};
pub use eval::driver::{ShapeDriver, ShapeFrame, ShapePhase};
pub use eval::interpolate::{SectionAttrs, interpolate, segment_index};
pub use foundation::core::{
    BezPath, PathData, PathEl, Point, PointerOffset, Progress, Rgba8, Vec2, Viewport,
};
pub use foundation::error::{MorphError, MorphResult};
pub use foundation::math::Rng64;
pub use input::coalesce::{FrameCoalescer, FrameInput};
pub use input::event::{InputEvent, ScrollMetrics};
pub use input::pointer::PointerTracker;
pub use input::scroll::ScrollTracker;
pub use input::source::{EventHandle, EventSource, QueueSource, ScriptedSource};
pub use input::visibility::VisibilityTrigger;
pub use telemetry::fps::FpsMeter;
