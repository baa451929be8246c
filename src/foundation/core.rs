use std::fmt;

use crate::foundation::error::{HeroError, HeroResult};

pub use kurbo::{Point, Rect, Size};

/// Stable handle to a node in a [`Scene`](crate::Scene).
///
/// Animations hold these handles directly instead of re-resolving element ids.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct NodeId(pub u32);

/// Frames-per-second represented as a rational `num/den`.
///
/// Only used to sample the continuous driver clock at fixed steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator (frames).
    pub num: u32,
    /// Denominator (seconds), must be non-zero.
    pub den: u32,
}

impl Fps {
    /// Create a validated FPS value.
    pub fn new(num: u32, den: u32) -> HeroResult<Self> {
        if den == 0 {
            return Err(HeroError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(HeroError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Convert to floating-point FPS.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Duration of one frame in seconds.
    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    /// Convert frame count to seconds.
    pub fn frames_to_secs(self, frames: u64) -> f64 {
        (frames as f64) * self.frame_duration_secs()
    }

    /// Convert seconds to frame count using ceil semantics, so the last frame covers `secs`.
    pub fn secs_to_frames_ceil(self, secs: f64) -> u64 {
        (secs * self.as_f64()).ceil().max(0.0) as u64
    }
}

/// A CSS-like length: absolute pixels or a percentage of a basis.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Length {
    /// Absolute pixels.
    Px(f64),
    /// Percentage of the containing basis.
    Percent(f64),
}

/// Root font size used to resolve `rem` literals.
pub const REM_PX: f64 = 16.0;

impl Length {
    /// Parse `12px`, `40%`, `16rem` or a bare number (pixels).
    pub fn parse(s: &str) -> HeroResult<Self> {
        let s = s.trim();
        let (num, make): (&str, fn(f64) -> Length) = if let Some(n) = s.strip_suffix('%') {
            (n, Length::Percent)
        } else if let Some(n) = s.strip_suffix("px") {
            (n, Length::Px)
        } else if let Some(n) = s.strip_suffix("rem") {
            (n, |v| Length::Px(v * REM_PX))
        } else {
            (s, Length::Px)
        };
        let v: f64 = num
            .trim()
            .parse()
            .map_err(|_| HeroError::validation(format!("invalid length '{s}'")))?;
        if !v.is_finite() {
            return Err(HeroError::validation(format!("length '{s}' is not finite")));
        }
        Ok(make(v))
    }

    /// Resolve to pixels against `basis_px` (used for percentages).
    pub fn resolve_px(self, basis_px: f64) -> f64 {
        match self {
            Self::Px(v) => v,
            Self::Percent(p) => basis_px * p / 100.0,
        }
    }

    /// `true` for a zero length in any unit.
    pub fn is_zero(self) -> bool {
        match self {
            Self::Px(v) | Self::Percent(v) => v == 0.0,
        }
    }

    /// Interpolate between two lengths.
    ///
    /// Matching units interpolate in that unit. A zero endpoint adopts the other endpoint's unit.
    /// Otherwise both sides are resolved to pixels against `basis_px`. At `t >= 1` the result is
    /// exactly `b`, in `b`'s unit.
    pub fn lerp(a: Self, b: Self, t: f64, basis_px: f64) -> Self {
        if t >= 1.0 {
            return b;
        }
        match (a, b) {
            (Self::Px(x), Self::Px(y)) => Self::Px(x + (y - x) * t),
            (Self::Percent(x), Self::Percent(y)) => Self::Percent(x + (y - x) * t),
            (Self::Px(x), Self::Percent(y)) if x == 0.0 => Self::Percent(y * t),
            (Self::Percent(x), Self::Px(y)) if x == 0.0 => Self::Px(y * t),
            (Self::Px(x), Self::Percent(_)) if b.is_zero() => Self::Px(x * (1.0 - t)),
            (Self::Percent(x), Self::Px(_)) if b.is_zero() => Self::Percent(x * (1.0 - t)),
            _ => {
                let x = a.resolve_px(basis_px);
                let y = b.resolve_px(basis_px);
                Self::Px(x + (y - x) * t)
            }
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Px(v) if *v == 0.0 => f.write_str("0"),
            Self::Px(v) => write!(f, "{}px", fmt_num(*v)),
            Self::Percent(v) => write!(f, "{}%", fmt_num(*v)),
        }
    }
}

/// A `polygon(...)` clip shape with vertices in percent of the element box.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ClipPolygon {
    /// Vertices as `(x%, y%)`.
    pub points: Vec<Point>,
}

impl ClipPolygon {
    /// The unclipped full rectangle.
    pub fn full_rect() -> Self {
        Self {
            points: vec![
                Point::new(0.0, 0.0),
                Point::new(100.0, 0.0),
                Point::new(100.0, 100.0),
                Point::new(0.0, 100.0),
            ],
        }
    }

    /// Parse `polygon(14% 0%, 72% 0%, ...)`.
    pub fn parse(s: &str) -> HeroResult<Self> {
        let s = s.trim();
        let inner = s
            .strip_prefix("polygon(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| HeroError::validation(format!("expected polygon(...), got '{s}'")))?;

        let mut points = Vec::new();
        for vertex in inner.split(',') {
            let mut parts = vertex.split_whitespace();
            let (Some(x), Some(y), None) = (parts.next(), parts.next(), parts.next()) else {
                return Err(HeroError::validation(format!(
                    "polygon vertex '{}' must have exactly two coordinates",
                    vertex.trim()
                )));
            };
            points.push(Point::new(percent_coord(x)?, percent_coord(y)?));
        }
        if points.len() < 3 {
            return Err(HeroError::validation("polygon needs at least three vertices"));
        }
        Ok(Self { points })
    }

    /// Pointwise interpolation. Polygons with differing vertex counts snap at `t >= 1`.
    pub fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        if a.points.len() != b.points.len() {
            return if t >= 1.0 { b.clone() } else { a.clone() };
        }
        Self {
            points: a
                .points
                .iter()
                .zip(&b.points)
                .map(|(p, q)| p.lerp(*q, t))
                .collect(),
        }
    }
}

fn percent_coord(s: &str) -> HeroResult<f64> {
    match Length::parse(s)? {
        Length::Percent(v) => Ok(v),
        Length::Px(v) if v == 0.0 => Ok(0.0),
        Length::Px(_) => Err(HeroError::validation(format!(
            "polygon coordinate '{s}' must be a percentage"
        ))),
    }
}

impl fmt::Display for ClipPolygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("polygon(")?;
        for (i, p) in self.points.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}% {}%", fmt_num(p.x), fmt_num(p.y))?;
        }
        f.write_str(")")
    }
}

/// Border radii in CSS order: top-left, top-right, bottom-right, bottom-left.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CornerRadii(pub [Length; 4]);

impl CornerRadii {
    /// All corners square.
    pub fn zero() -> Self {
        Self([Length::Px(0.0); 4])
    }

    /// Parse the 1-4 value `border-radius` shorthand.
    pub fn parse(s: &str) -> HeroResult<Self> {
        let values = s
            .split_whitespace()
            .map(Length::parse)
            .collect::<HeroResult<Vec<_>>>()?;
        let corners = match values.as_slice() {
            [a] => [*a, *a, *a, *a],
            [a, b] => [*a, *b, *a, *b],
            [a, b, c] => [*a, *b, *c, *b],
            [a, b, c, d] => [*a, *b, *c, *d],
            _ => {
                return Err(HeroError::validation(format!(
                    "border radius '{s}' must have 1 to 4 values"
                )));
            }
        };
        Ok(Self(corners))
    }

    /// Per-corner interpolation, see [`Length::lerp`].
    pub fn lerp(a: &Self, b: &Self, t: f64, basis_px: f64) -> Self {
        Self(std::array::from_fn(|i| {
            Length::lerp(a.0[i], b.0[i], t, basis_px)
        }))
    }
}

impl fmt::Display for CornerRadii {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.0;
        write!(f, "{a} {b} {c} {d}")
    }
}

/// Format a float for CSS output: at most four decimals, no trailing zeros.
pub fn fmt_num(v: f64) -> String {
    let rounded = (v * 10_000.0).round() / 10_000.0;
    // Avoid "-0".
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{rounded}")
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
