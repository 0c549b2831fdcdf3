/// Threshold detector over a region's visible ratio.
///
/// Emits only on state changes. A one-shot trigger latches after its first
/// crossing and never reports again, matching reveal-once semantics.
#[derive(Clone, Copy, Debug)]
pub struct VisibilityTrigger {
    threshold: f64,
    once: bool,
    visible: bool,
    spent: bool,
}

impl VisibilityTrigger {
    /// Build a trigger firing at `threshold` visible ratio.
    ///
    /// The threshold is clamped into `[0, 1]`; non-finite input collapses
    /// to `0`.
    pub fn new(threshold: f64, once: bool) -> Self {
        let threshold = if threshold.is_finite() {
            threshold.clamp(0.0, 1.0)
        } else {
            0.0
        };
        Self {
            threshold,
            once,
            visible: false,
            spent: false,
        }
    }

    /// Ingest a new visible ratio.
    ///
    /// Returns `Some(state)` when visibility changed, `None` otherwise.
    /// Non-finite ratios are ignored.
    pub fn update(&mut self, ratio: f64) -> Option<bool> {
        if !ratio.is_finite() || self.spent {
            return None;
        }
        let now_visible = ratio >= self.threshold;
        if now_visible == self.visible {
            return None;
        }
        self.visible = now_visible;
        if self.once && now_visible {
            self.spent = true;
        }
        Some(now_visible)
    }

    /// Current visibility state.
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

#[cfg(test)]
#[path = "../../tests/unit/input/visibility.rs"]
mod tests;
