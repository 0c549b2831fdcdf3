use crate::{
    animation::ease::Ease,
    foundation::core::{PathData, Rgba8, Vec2},
};

/// Linear interpolation between two values of the same type.
pub trait Lerp: Sized {
    /// Blend `a` into `b` at offset `t` (callers pass eased offsets).
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for f32 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        (*a as f64 + ((*b as f64 - *a as f64) * t)) as f32
    }
}

impl Lerp for Vec2 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Vec2::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }
}

impl Lerp for Rgba8 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        fn lerp_u8(a: u8, b: u8, t: f64) -> u8 {
            let a = f64::from(a);
            let b = f64::from(b);
            (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
        }

        Self {
            r: lerp_u8(a.r, b.r, t),
            g: lerp_u8(a.g, b.g, t),
            b: lerp_u8(a.b, b.b, t),
            a: lerp_u8(a.a, b.a, t),
        }
    }
}

impl Lerp for PathData {
    /// Pointwise when the paths are morph-compatible; otherwise hold `a`
    /// until `t` reaches `1` (discrete switch at the segment boundary).
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        if a.compatible(b) {
            a.lerp_points(b, t)
        } else if t >= 1.0 {
            b.clone()
        } else {
            a.clone()
        }
    }
}

/// A fixed-duration `from -> to` animation over wall-clock seconds.
#[derive(Clone, Debug, serde::Serialize)]
pub struct Tween<T> {
    /// Start value, held until `delay` has elapsed.
    pub from: T,
    /// End value, held once `delay + duration` has elapsed.
    pub to: T,
    /// Animation duration in seconds.
    pub duration_secs: f64,
    /// Start delay in seconds.
    pub delay_secs: f64,
    /// Curve applied to the local offset.
    pub ease: Ease,
}

impl<T> Tween<T>
where
    T: Lerp + Clone,
{
    /// Sample the tween at `elapsed` seconds since it was started.
    pub fn sample(&self, elapsed_secs: f64) -> T {
        if !elapsed_secs.is_finite() || elapsed_secs <= self.delay_secs {
            return self.from.clone();
        }
        let local = elapsed_secs - self.delay_secs;
        if self.duration_secs <= 0.0 || local >= self.duration_secs {
            return self.to.clone();
        }
        let t = self.ease.apply(local / self.duration_secs);
        T::lerp(&self.from, &self.to, t)
    }

    /// Whether the tween has reached its end value.
    pub fn finished(&self, elapsed_secs: f64) -> bool {
        elapsed_secs.is_finite() && elapsed_secs >= self.delay_secs + self.duration_secs.max(0.0)
    }
}

/// A reversible timed transition between an off state (`0`) and an on state
/// (`1`).
///
/// Retargeting mid-flight keeps the current position, so rapid enter/leave
/// flips stay continuous instead of jumping.
#[derive(Clone, Copy, Debug)]
pub struct ToggleTransition {
    t: f64,
    on: bool,
    duration_secs: f64,
    ease: Ease,
}

impl ToggleTransition {
    /// Build a transition that takes `duration_secs` for a full sweep.
    pub fn new(duration_secs: f64, ease: Ease) -> Self {
        Self {
            t: 0.0,
            on: false,
            duration_secs: duration_secs.max(0.0),
            ease,
        }
    }

    /// Set the target state.
    pub fn set_on(&mut self, on: bool) {
        self.on = on;
    }

    /// Current target state.
    pub fn is_on(&self) -> bool {
        self.on
    }

    /// Advance by `dt` seconds toward the current target.
    pub fn tick(&mut self, dt_secs: f64) {
        if !dt_secs.is_finite() || dt_secs <= 0.0 {
            return;
        }
        if self.duration_secs <= 0.0 {
            self.t = if self.on { 1.0 } else { 0.0 };
            return;
        }
        let step = dt_secs / self.duration_secs;
        self.t = if self.on {
            (self.t + step).min(1.0)
        } else {
            (self.t - step).max(0.0)
        };
    }

    /// Eased blend factor in `[0, 1]` (`OutBack` may exceed `1` mid-sweep).
    pub fn factor(&self) -> f64 {
        self.ease.apply(self.t)
    }

    /// Whether the transition is fully settled in the off state.
    pub fn is_settled_off(&self) -> bool {
        !self.on && self.t == 0.0
    }
}
