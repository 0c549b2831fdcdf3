use crate::{
    animation::ease::Ease,
    foundation::{
        core::{PathData, Rgba8},
        error::{MorphError, MorphResult},
    },
};

/// One scroll-addressed visual state in a storyboard, as authored.
///
/// String-typed fields (`shape_path`, `color`) are parsed and checked by
/// [`Section::compile`]; the raw form round-trips through serde unchanged.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Section {
    /// Stable identifier, unique within a storyboard.
    pub id: String,
    /// SVG path data for the section's shape.
    pub shape_path: String,
    /// Fill color as `#rrggbb` or `#rrggbbaa`.
    pub color: String,
    /// Uniform scale factor.
    pub scale: f64,
    /// Rotation in degrees.
    pub rotation: f64,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
}

impl Section {
    /// Parse and validate the section into its evaluated form.
    pub fn compile(&self) -> MorphResult<CompiledSection> {
        if self.id.is_empty() {
            return Err(MorphError::validation("section id must not be empty"));
        }
        let path = PathData::from_svg(&self.shape_path)
            .map_err(|e| MorphError::validation(format!("section '{}': {e}", self.id)))?;
        let color = Rgba8::from_hex(&self.color)
            .map_err(|e| MorphError::validation(format!("section '{}': {e}", self.id)))?;
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(MorphError::validation(format!(
                "section '{}': scale must be finite and positive",
                self.id
            )));
        }
        if !self.rotation.is_finite() {
            return Err(MorphError::validation(format!(
                "section '{}': rotation must be finite",
                self.id
            )));
        }
        if !(self.opacity.is_finite() && (0.0..=1.0).contains(&self.opacity)) {
            return Err(MorphError::validation(format!(
                "section '{}': opacity must be within [0, 1]",
                self.id
            )));
        }
        Ok(CompiledSection {
            id: self.id.clone(),
            path,
            color,
            scale: self.scale,
            rotation_deg: self.rotation,
            opacity: self.opacity,
        })
    }
}

/// A [`Section`] after parsing and validation.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct CompiledSection {
    /// Stable identifier.
    pub id: String,
    /// Parsed shape path.
    pub path: PathData,
    /// Parsed fill color.
    pub color: Rgba8,
    /// Uniform scale factor.
    pub scale: f64,
    /// Rotation in degrees.
    pub rotation_deg: f64,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
}

/// Hover reaction parameters for a shape.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HoverSpec {
    /// Scale multiplier applied at full hover.
    pub scale: f64,
    /// Rotation delta in degrees at full hover.
    pub rotation_deg: f64,
    /// Vertical lift in pixels at full hover (negative is up).
    pub lift_px: f64,
    /// Sweep duration in seconds for a full off-to-on transition.
    pub duration_secs: f64,
    /// Curve applied to the hover blend factor.
    pub ease: Ease,
}

impl Default for HoverSpec {
    /// Primary hover reaction: grow, tilt clockwise, lift up.
    fn default() -> Self {
        Self {
            scale: 1.15,
            rotation_deg: 5.0,
            lift_px: -15.0,
            duration_secs: 0.4,
            ease: Ease::InOutCubic,
        }
    }
}

impl HoverSpec {
    fn validate(&self, shape_id: &str) -> MorphResult<()> {
        for (name, v) in [
            ("scale", self.scale),
            ("rotation_deg", self.rotation_deg),
            ("lift_px", self.lift_px),
        ] {
            if !v.is_finite() {
                return Err(MorphError::validation(format!(
                    "shape '{shape_id}': hover {name} must be finite"
                )));
            }
        }
        if !(self.duration_secs.is_finite() && self.duration_secs > 0.0) {
            return Err(MorphError::validation(format!(
                "shape '{shape_id}': hover duration must be finite and positive"
            )));
        }
        Ok(())
    }
}

/// Per-shape driver configuration.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct ShapeConfig {
    /// Stable identifier, unique within a storyboard.
    pub id: String,
    /// Whether the shape interpolates through the storyboard's sections.
    ///
    /// Non-following shapes keep `base_path` and still receive parallax,
    /// hover, and focus treatment.
    pub follows_sections: bool,
    /// Path rendered when not following sections. Optional for followers.
    pub base_path: Option<String>,
    /// Pointer parallax gain in pixels per unit offset.
    pub parallax_gain: f64,
    /// Scroll smoothing lag in seconds. `0` disables smoothing.
    pub scrub_lag_secs: f64,
    /// Hover reaction.
    pub hover: HoverSpec,
    /// Scale multiplier applied while the watched region is in view.
    pub focus_boost: f64,
}

impl ShapeConfig {
    fn validate(&self) -> MorphResult<()> {
        if self.id.is_empty() {
            return Err(MorphError::validation("shape id must not be empty"));
        }
        if !self.follows_sections && self.base_path.is_none() {
            return Err(MorphError::validation(format!(
                "shape '{}': a non-following shape needs a base_path",
                self.id
            )));
        }
        if let Some(path) = &self.base_path {
            PathData::from_svg(path)
                .map_err(|e| MorphError::validation(format!("shape '{}': {e}", self.id)))?;
        }
        if !self.parallax_gain.is_finite() {
            return Err(MorphError::validation(format!(
                "shape '{}': parallax_gain must be finite",
                self.id
            )));
        }
        if !(self.scrub_lag_secs.is_finite() && self.scrub_lag_secs >= 0.0) {
            return Err(MorphError::validation(format!(
                "shape '{}': scrub_lag_secs must be finite and non-negative",
                self.id
            )));
        }
        self.hover.validate(&self.id)?;
        if !(self.focus_boost.is_finite() && self.focus_boost > 0.0) {
            return Err(MorphError::validation(format!(
                "shape '{}': focus_boost must be finite and positive",
                self.id
            )));
        }
        Ok(())
    }
}

/// Complete declarative description of a scroll-morph scene.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Storyboard {
    /// Scroll-addressed sections, in scroll order.
    pub sections: Vec<Section>,
    /// Driven shapes.
    pub shapes: Vec<ShapeConfig>,
    /// Seed for decorative randomness.
    #[serde(default)]
    pub seed: u64,
}

impl Storyboard {
    /// Parse a storyboard from JSON text.
    pub fn from_json_str(json: &str) -> MorphResult<Self> {
        serde_json::from_str(json).map_err(|e| MorphError::serde(e.to_string()))
    }

    /// Validate the storyboard and compile its sections.
    pub fn compile(&self) -> MorphResult<Vec<CompiledSection>> {
        self.validate()?;
        self.sections.iter().map(Section::compile).collect()
    }

    /// Check identifiers and per-item fields without compiling.
    pub fn validate(&self) -> MorphResult<()> {
        let mut section_ids = std::collections::HashSet::new();
        for section in &self.sections {
            section.compile()?;
            if !section_ids.insert(section.id.as_str()) {
                return Err(MorphError::validation(format!(
                    "duplicate section id '{}'",
                    section.id
                )));
            }
        }
        let mut shape_ids = std::collections::HashSet::new();
        for shape in &self.shapes {
            shape.validate()?;
            if !shape_ids.insert(shape.id.as_str()) {
                return Err(MorphError::validation(format!(
                    "duplicate shape id '{}'",
                    shape.id
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/model.rs"]
mod tests;
