use crate::{animation::anim::ToggleTransition, composition::model::HoverSpec};

/// Attribute deltas a hover applies on top of the base frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoverOffsets {
    /// Multiplier for the shape's scale.
    pub scale_mul: f64,
    /// Additive rotation in degrees.
    pub rotation_delta_deg: f64,
    /// Additive vertical translation in pixels.
    pub lift_px: f64,
}

impl HoverOffsets {
    /// Offsets that leave the base frame untouched.
    pub const IDENTITY: Self = Self {
        scale_mul: 1.0,
        rotation_delta_deg: 0.0,
        lift_px: 0.0,
    };
}

/// Per-shape hover state: a reversible sweep toward the `HoverSpec` targets.
#[derive(Clone, Copy, Debug)]
pub struct HoverLayer {
    spec: HoverSpec,
    transition: ToggleTransition,
}

impl HoverLayer {
    /// Build a layer from a shape's hover spec.
    pub fn new(spec: HoverSpec) -> Self {
        Self {
            spec,
            transition: ToggleTransition::new(spec.duration_secs, spec.ease),
        }
    }

    /// Record pointer enter or leave.
    pub fn set_hovered(&mut self, hovered: bool) {
        self.transition.set_on(hovered);
    }

    /// Whether the pointer is currently over the shape.
    pub fn is_hovered(&self) -> bool {
        self.transition.is_on()
    }

    /// Advance the sweep by `dt` seconds.
    pub fn tick(&mut self, dt_secs: f64) {
        self.transition.tick(dt_secs);
    }

    /// Current deltas, blended by the sweep's eased factor.
    pub fn offsets(&self) -> HoverOffsets {
        let f = self.transition.factor();
        HoverOffsets {
            scale_mul: 1.0 + (self.spec.scale - 1.0) * f,
            rotation_delta_deg: self.spec.rotation_deg * f,
            lift_px: self.spec.lift_px * f,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/hover.rs"]
mod tests;
