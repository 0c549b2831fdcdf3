use crate::{
    animation::{anim::Tween, ease::Ease},
    foundation::core::Vec2,
};

/// Horizontal direction a slide-in reveal enters from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum SlideFrom {
    /// Enter from the left edge.
    Left,
    /// Enter from the right edge.
    Right,
}

/// Sampled reveal attributes at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealFrame {
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Translation from the element's resting position, in pixels.
    pub offset: Vec2,
    /// Uniform scale factor.
    pub scale: f64,
}

/// An entrance animation driven by elapsed time since triggering.
///
/// Built from one of the preset constructors; sampled once per frame after
/// a visibility trigger fires.
#[derive(Clone, Debug, serde::Serialize)]
pub struct Reveal {
    opacity: Tween<f64>,
    offset: Tween<Vec2>,
    scale: Tween<f64>,
}

impl Reveal {
    /// Fade up from transparent while drifting in from below.
    pub fn fade_in(duration_secs: f64, delay_secs: f64) -> Self {
        Self {
            opacity: Tween {
                from: 0.0,
                to: 1.0,
                duration_secs,
                delay_secs,
                ease: Ease::OutCubic,
            },
            offset: Tween {
                from: Vec2::new(0.0, 30.0),
                to: Vec2::ZERO,
                duration_secs,
                delay_secs,
                ease: Ease::OutCubic,
            },
            scale: Self::constant_scale(1.0, duration_secs, delay_secs),
        }
    }

    /// Slide in horizontally while fading up.
    pub fn slide_in(from: SlideFrom, duration_secs: f64, delay_secs: f64) -> Self {
        let start_x = match from {
            SlideFrom::Left => -50.0,
            SlideFrom::Right => 50.0,
        };
        Self {
            opacity: Tween {
                from: 0.0,
                to: 1.0,
                duration_secs,
                delay_secs,
                ease: Ease::OutCubic,
            },
            offset: Tween {
                from: Vec2::new(start_x, 0.0),
                to: Vec2::ZERO,
                duration_secs,
                delay_secs,
                ease: Ease::OutCubic,
            },
            scale: Self::constant_scale(1.0, duration_secs, delay_secs),
        }
    }

    /// Grow from slightly shrunken while fading up, with overshoot.
    pub fn scale_in(duration_secs: f64, delay_secs: f64) -> Self {
        Self {
            opacity: Tween {
                from: 0.0,
                to: 1.0,
                duration_secs,
                delay_secs,
                ease: Ease::OutCubic,
            },
            offset: Tween {
                from: Vec2::ZERO,
                to: Vec2::ZERO,
                duration_secs,
                delay_secs,
                ease: Ease::Linear,
            },
            scale: Tween {
                from: 0.8,
                to: 1.0,
                duration_secs,
                delay_secs,
                ease: Ease::OutBack,
            },
        }
    }

    fn constant_scale(value: f64, duration_secs: f64, delay_secs: f64) -> Tween<f64> {
        Tween {
            from: value,
            to: value,
            duration_secs,
            delay_secs,
            ease: Ease::Linear,
        }
    }

    /// Sample the reveal at `elapsed` seconds since it was triggered.
    pub fn sample(&self, elapsed_secs: f64) -> RevealFrame {
        RevealFrame {
            opacity: self.opacity.sample(elapsed_secs),
            offset: self.offset.sample(elapsed_secs),
            scale: self.scale.sample(elapsed_secs),
        }
    }

    /// Whether all channels have reached their end values.
    pub fn finished(&self, elapsed_secs: f64) -> bool {
        self.opacity.finished(elapsed_secs)
            && self.offset.finished(elapsed_secs)
            && self.scale.finished(elapsed_secs)
    }

    fn shift_delay(&mut self, extra_secs: f64) {
        self.opacity.delay_secs += extra_secs;
        self.offset.delay_secs += extra_secs;
        self.scale.delay_secs += extra_secs;
    }
}

/// Offset each reveal's delay by `step_secs` times its position, producing
/// a cascading entrance.
pub fn stagger(reveals: &mut [Reveal], step_secs: f64) {
    if !(step_secs.is_finite() && step_secs > 0.0) {
        return;
    }
    for (i, reveal) in reveals.iter_mut().enumerate() {
        reveal.shift_delay(step_secs * i as f64);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/reveal.rs"]
mod tests;
