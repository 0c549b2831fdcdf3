use crate::{
    animation::ease::Ease,
    foundation::math::{Rng64, stable_hash64},
};

/// Particle count at intensity `1`.
const BASE_COUNT: f64 = 30.0;

/// Static per-particle parameters, derived once from the field seed.
#[derive(Clone, Copy, Debug, serde::Serialize)]
pub struct Particle {
    /// Diameter in pixels.
    pub size_px: f64,
    /// Seconds for one full rise-and-return cycle half.
    pub cycle_secs: f64,
    /// Seconds before the particle first appears.
    pub delay_secs: f64,
    /// Horizontal origin as a percentage of the container width.
    pub origin_x_pct: f64,
    /// Vertical origin as a percentage of the container height.
    pub origin_y_pct: f64,
    /// Total rise height in pixels.
    pub rise_px: f64,
    /// Total horizontal drift in pixels.
    pub drift_px: f64,
    /// Index into the host's accent palette.
    pub palette_index: usize,
}

/// Sampled particle placement at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleFrame {
    /// Horizontal offset from the origin in pixels.
    pub x_px: f64,
    /// Vertical offset from the origin in pixels (negative is up).
    pub y_px: f64,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Uniform scale factor.
    pub scale: f64,
}

impl ParticleFrame {
    const HIDDEN: Self = Self {
        x_px: 0.0,
        y_px: 0.0,
        opacity: 0.0,
        scale: 1.0,
    };
}

/// A deterministic field of decorative floating particles.
///
/// Layout and timing derive entirely from the seed; two fields with the
/// same seed and intensity are identical on every frame.
#[derive(Clone, Debug, serde::Serialize)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    /// Build a field. `intensity` scales the particle count around the
    /// stock density of thirty; non-finite or negative values yield an
    /// empty field.
    pub fn new(seed: u64, intensity: f64) -> Self {
        let count = if intensity.is_finite() && intensity > 0.0 {
            (BASE_COUNT * intensity).round() as usize
        } else {
            0
        };
        let particles = (0..count)
            .map(|i| {
                let mut rng = Rng64::new(stable_hash64(seed, &i.to_string()));
                Particle {
                    size_px: rng.next_f64_01() * 4.0 + 2.0,
                    cycle_secs: 4.0 + rng.next_f64_01() * 3.0,
                    delay_secs: rng.next_f64_01() * 2.0,
                    origin_x_pct: rng.next_f64_01() * 100.0,
                    origin_y_pct: rng.next_f64_01() * 100.0,
                    rise_px: 150.0 + rng.next_f64_01() * 100.0,
                    drift_px: (rng.next_f64_01() - 0.5) * 100.0,
                    palette_index: i % 3,
                }
            })
            .collect();
        Self { particles }
    }

    /// Static particle parameters.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Number of particles in the field.
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Whether the field is empty.
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Sample every particle at `time_secs` since the field started.
    pub fn sample(&self, time_secs: f64) -> Vec<ParticleFrame> {
        self.particles
            .iter()
            .map(|p| Self::sample_particle(p, time_secs))
            .collect()
    }

    fn sample_particle(p: &Particle, time_secs: f64) -> ParticleFrame {
        if !time_secs.is_finite() || time_secs < p.delay_secs {
            return ParticleFrame::HIDDEN;
        }
        let local = time_secs - p.delay_secs;
        // Ping-pong phase: rise over one cycle, fall back over the next.
        let cycle = (local / p.cycle_secs) % 2.0;
        let u = if cycle <= 1.0 { cycle } else { 2.0 - cycle };
        let e = Ease::InOutQuad.apply(u);
        ParticleFrame {
            x_px: p.drift_px * e,
            y_px: -p.rise_px * e,
            opacity: 0.8 * e,
            scale: 1.0 + 0.5 * e,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/particles.rs"]
mod tests;
