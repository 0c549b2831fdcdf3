use crate::{
    animation::{anim::Lerp, ease::Ease},
    composition::model::CompiledSection,
    foundation::core::{PathData, Progress, Rgba8},
};

/// Blended section attributes at one progress value.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SectionAttrs {
    /// Shape path, pointwise-blended when adjacent sections are
    /// morph-compatible.
    pub path: PathData,
    /// Fill color.
    pub color: Rgba8,
    /// Uniform scale factor.
    pub scale: f64,
    /// Rotation in degrees.
    pub rotation_deg: f64,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
}

/// Index of the segment containing `progress` when the scroll range is cut
/// into `len` equal segments.
///
/// `progress == 1` lands in the last segment; `len == 0` reports `0`.
pub fn segment_index(progress: Progress, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let raw = (progress.0 * len as f64).floor() as usize;
    raw.min(len - 1)
}

/// Blend the section pair bracketing `progress`.
///
/// The scroll range divides into one segment per section. Within segment
/// `i` the attributes blend from section `i` toward section `i + 1` with
/// `ease` applied to the local offset; the final segment holds its section's
/// exact attributes. Returns `None` when `sections` is empty.
pub fn interpolate(
    progress: Progress,
    sections: &[CompiledSection],
    ease: Ease,
) -> Option<SectionAttrs> {
    let len = sections.len();
    if len == 0 {
        return None;
    }
    let index = segment_index(progress, len);
    let current = &sections[index];
    if index + 1 >= len {
        return Some(SectionAttrs {
            path: current.path.clone(),
            color: current.color,
            scale: current.scale,
            rotation_deg: current.rotation_deg,
            opacity: current.opacity,
        });
    }
    let next = &sections[index + 1];
    let local = progress.0 * len as f64 - index as f64;
    let t = ease.apply(local);
    Some(SectionAttrs {
        path: PathData::lerp(&current.path, &next.path, t),
        color: Rgba8::lerp(&current.color, &next.color, t),
        scale: f64::lerp(&current.scale, &next.scale, t),
        rotation_deg: f64::lerp(&current.rotation_deg, &next.rotation_deg, t),
        opacity: f64::lerp(&current.opacity, &next.opacity, t),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/eval/interpolate.rs"]
mod tests;
