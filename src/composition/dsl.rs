use crate::{
    composition::model::{HoverSpec, Section, ShapeConfig, Storyboard},
    foundation::error::{MorphError, MorphResult},
};

/// Incremental [`Storyboard`] constructor with id dedup at insert time.
///
/// Full validation (paths, colors, numeric ranges) runs once in
/// [`StoryboardBuilder::build`].
#[derive(Debug, Default)]
pub struct StoryboardBuilder {
    sections: Vec<Section>,
    shapes: Vec<ShapeConfig>,
    seed: u64,
}

impl StoryboardBuilder {
    /// Start an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a section, rejecting duplicate ids.
    pub fn section(mut self, section: Section) -> MorphResult<Self> {
        if self.sections.iter().any(|s| s.id == section.id) {
            return Err(MorphError::validation(format!(
                "duplicate section id '{}'",
                section.id
            )));
        }
        self.sections.push(section);
        Ok(self)
    }

    /// Append a shape, rejecting duplicate ids.
    pub fn shape(mut self, shape: ShapeConfig) -> MorphResult<Self> {
        if self.shapes.iter().any(|s| s.id == shape.id) {
            return Err(MorphError::validation(format!(
                "duplicate shape id '{}'",
                shape.id
            )));
        }
        self.shapes.push(shape);
        Ok(self)
    }

    /// Set the seed for decorative randomness.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Validate everything and produce the storyboard.
    pub fn build(self) -> MorphResult<Storyboard> {
        let storyboard = Storyboard {
            sections: self.sections,
            shapes: self.shapes,
            seed: self.seed,
        };
        storyboard.validate()?;
        Ok(storyboard)
    }
}

/// A section-following foreground shape with the stock reaction set:
/// strong parallax, slow scrub, grow-and-lift hover, focus boost.
pub fn primary_shape(id: impl Into<String>) -> ShapeConfig {
    ShapeConfig {
        id: id.into(),
        follows_sections: true,
        base_path: None,
        parallax_gain: 30.0,
        scrub_lag_secs: 1.5,
        hover: HoverSpec::default(),
        focus_boost: 1.1,
    }
}

/// A fixed-path background shape that counters the primary: parallax in the
/// opposite direction, quicker scrub, shrink-and-tilt hover.
pub fn contrast_shape(id: impl Into<String>, base_path: impl Into<String>) -> ShapeConfig {
    ShapeConfig {
        id: id.into(),
        follows_sections: false,
        base_path: Some(base_path.into()),
        parallax_gain: -24.0,
        scrub_lag_secs: 1.0,
        hover: HoverSpec {
            scale: 0.85,
            rotation_deg: -5.0,
            lift_px: 0.0,
            ..HoverSpec::default()
        },
        focus_boost: 1.1,
    }
}
