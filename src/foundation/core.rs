use crate::foundation::error::{MorphError, MorphResult};

pub use kurbo::{BezPath, PathEl, Point, Vec2};

/// Normalized scroll position in `[0, 1]`.
///
/// `0` is the top of the scrollable range, `1` the bottom. Content that fits
/// without scrolling always reports `0`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
pub struct Progress(pub f64);

impl Progress {
    /// Progress at the top of the page.
    pub const ZERO: Self = Self(0.0);

    /// Build a progress value, clamping into `[0, 1]`.
    ///
    /// Non-finite input collapses to `0` so a bad division upstream can never
    /// leak `NaN` into attribute space.
    pub fn new(value: f64) -> Self {
        if value.is_finite() {
            Self(value.clamp(0.0, 1.0))
        } else {
            Self(0.0)
        }
    }
}

/// Pointer position relative to the viewport center.
///
/// Each component is `(coord - center) / center`: `0` at the center, `±1` at
/// the viewport edges, and beyond `±1` at extreme positions (unclamped).
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PointerOffset {
    /// Horizontal offset, positive to the right of center.
    pub x: f64,
    /// Vertical offset, positive below center.
    pub y: f64,
}

impl PointerOffset {
    /// Offset at the exact viewport center.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Scale both components by `gain`, yielding a pixel translation.
    pub fn scaled(self, gain: f64) -> Vec2 {
        Vec2::new(self.x * gain, self.y * gain)
    }
}

/// Viewport dimensions in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Viewport width in pixels.
    pub width: f64,
    /// Viewport height in pixels.
    pub height: f64,
}

impl Viewport {
    /// Build a viewport, rejecting non-finite or negative dimensions.
    pub fn new(width: f64, height: f64) -> MorphResult<Self> {
        if !(width.is_finite() && height.is_finite()) {
            return Err(MorphError::validation("viewport dimensions must be finite"));
        }
        if width < 0.0 || height < 0.0 {
            return Err(MorphError::validation(
                "viewport dimensions must be non-negative",
            ));
        }
        Ok(Self { width, height })
    }

    /// Center point of the viewport.
    pub fn center(self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Whether both dimensions are strictly positive.
    pub fn has_area(self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// Straight (non-premultiplied) RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel (255 = opaque).
    pub a: u8,
}

impl Rgba8 {
    /// Parse a `#rrggbb` or `#rrggbbaa` hex color.
    pub fn from_hex(s: &str) -> MorphResult<Self> {
        let hex = s.strip_prefix('#').ok_or_else(|| {
            MorphError::validation(format!("color '{s}' must start with '#'"))
        })?;
        if !hex.is_ascii() {
            return Err(MorphError::validation(format!(
                "color '{s}' has invalid hex digits"
            )));
        }
        let byte = |i: usize| -> MorphResult<u8> {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| MorphError::validation(format!("color '{s}' has invalid hex digits")))
        };
        match hex.len() {
            6 => Ok(Self {
                r: byte(0)?,
                g: byte(2)?,
                b: byte(4)?,
                a: 255,
            }),
            8 => Ok(Self {
                r: byte(0)?,
                g: byte(2)?,
                b: byte(4)?,
                a: byte(6)?,
            }),
            _ => Err(MorphError::validation(format!(
                "color '{s}' must be #rrggbb or #rrggbbaa"
            ))),
        }
    }

    /// Format as lowercase hex, omitting the alpha byte when fully opaque.
    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

/// Parsed SVG path data.
///
/// Two paths are *morph-compatible* when their element sequences share the
/// same verb structure; only compatible paths interpolate pointwise.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PathData {
    path: BezPath,
}

impl PathData {
    /// Parse SVG path data (the `d` attribute).
    pub fn from_svg(data: &str) -> MorphResult<Self> {
        let path = BezPath::from_svg(data)
            .map_err(|e| MorphError::validation(format!("invalid path data '{data}': {e}")))?;
        Ok(Self { path })
    }

    /// Access the underlying Bezier path.
    pub fn bez_path(&self) -> &BezPath {
        &self.path
    }

    /// Serialize back to SVG path data.
    pub fn to_svg(&self) -> String {
        self.path.to_svg()
    }

    /// Whether `self` and `other` share the same verb structure.
    pub fn compatible(&self, other: &Self) -> bool {
        let a = self.path.elements();
        let b = other.path.elements();
        a.len() == b.len()
            && a.iter()
                .zip(b.iter())
                .all(|(ea, eb)| std::mem::discriminant(ea) == std::mem::discriminant(eb))
    }

    pub(crate) fn lerp_points(&self, other: &Self, t: f64) -> Self {
        fn pt(a: Point, b: Point, t: f64) -> Point {
            Point::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
        }

        let elements = self
            .path
            .elements()
            .iter()
            .zip(other.path.elements().iter())
            .map(|(ea, eb)| match (ea, eb) {
                (PathEl::MoveTo(a), PathEl::MoveTo(b)) => PathEl::MoveTo(pt(*a, *b, t)),
                (PathEl::LineTo(a), PathEl::LineTo(b)) => PathEl::LineTo(pt(*a, *b, t)),
                (PathEl::QuadTo(a1, a2), PathEl::QuadTo(b1, b2)) => {
                    PathEl::QuadTo(pt(*a1, *b1, t), pt(*a2, *b2, t))
                }
                (PathEl::CurveTo(a1, a2, a3), PathEl::CurveTo(b1, b2, b3)) => {
                    PathEl::CurveTo(pt(*a1, *b1, t), pt(*a2, *b2, t), pt(*a3, *b3, t))
                }
                _ => *ea,
            })
            .collect::<Vec<_>>();
        Self {
            path: BezPath::from_vec(elements),
        }
    }
}
