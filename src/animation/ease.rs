use std::str::FromStr;

use crate::foundation::error::{HeroError, HeroResult};

/// Easing functions used to map normalized tween progress.
///
/// Names follow the `power` family used by timeline libraries (`power1` is quadratic, `power2`
/// cubic); CSS keywords are accepted as aliases.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    /// Linear interpolation.
    #[serde(rename = "linear", alias = "none")]
    Linear,
    /// Quadratic ease-in.
    #[serde(rename = "power1.in", alias = "ease-in")]
    InQuad,
    /// Quadratic ease-out.
    #[serde(rename = "power1.out", alias = "ease-out")]
    OutQuad,
    /// Quadratic ease-in/out.
    #[serde(rename = "power1.inOut", alias = "ease-in-out")]
    InOutQuad,
    /// Cubic ease-in.
    #[serde(rename = "power2.in")]
    InCubic,
    /// Cubic ease-out.
    #[serde(rename = "power2.out")]
    OutCubic,
    /// Cubic ease-in/out.
    #[serde(rename = "power2.inOut")]
    InOutCubic,
}

impl Ease {
    /// All curves, in declaration order.
    pub const ALL: [Ease; 7] = [
        Ease::Linear,
        Ease::InQuad,
        Ease::OutQuad,
        Ease::InOutQuad,
        Ease::InCubic,
        Ease::OutCubic,
        Ease::InOutCubic,
    ];

    /// Apply this easing function to normalized progress `t` in `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
        }
    }

    /// Canonical name of this curve.
    pub fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::InQuad => "power1.in",
            Self::OutQuad => "power1.out",
            Self::InOutQuad => "power1.inOut",
            Self::InCubic => "power2.in",
            Self::OutCubic => "power2.out",
            Self::InOutCubic => "power2.inOut",
        }
    }
}

impl FromStr for Ease {
    type Err = HeroError;

    fn from_str(s: &str) -> HeroResult<Self> {
        match s.trim() {
            "linear" | "none" => Ok(Self::Linear),
            "power1.in" | "ease-in" => Ok(Self::InQuad),
            "power1.out" | "power1" | "ease-out" => Ok(Self::OutQuad),
            "power1.inOut" | "ease-in-out" => Ok(Self::InOutQuad),
            "power2.in" => Ok(Self::InCubic),
            "power2.out" | "power2" => Ok(Self::OutCubic),
            "power2.inOut" => Ok(Self::InOutCubic),
            other => Err(HeroError::validation(format!("unknown ease '{other}'"))),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
