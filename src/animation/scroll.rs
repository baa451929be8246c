use std::str::FromStr;

use crate::animation::tween::Tween;
use crate::foundation::core::{NodeId, Rect};
use crate::foundation::error::{HeroError, HeroResult};

/// A vertical anchor inside a box, as a fraction of its height.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Anchor(pub f64);

impl Anchor {
    /// Top edge.
    pub const TOP: Anchor = Anchor(0.0);
    /// Vertical center.
    pub const CENTER: Anchor = Anchor(0.5);
    /// Bottom edge.
    pub const BOTTOM: Anchor = Anchor(1.0);

    fn parse(s: &str) -> HeroResult<Self> {
        match s {
            "top" => Ok(Self::TOP),
            "center" => Ok(Self::CENTER),
            "bottom" => Ok(Self::BOTTOM),
            other => match other.strip_suffix('%').map(str::parse::<f64>) {
                Some(Ok(p)) if p.is_finite() => Ok(Self(p / 100.0)),
                _ => Err(HeroError::validation(format!("invalid scroll anchor '{other}'"))),
            },
        }
    }
}

/// `"<element anchor> <viewport anchor>"`: the scroll position where the element anchor meets the
/// viewport anchor.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollPoint {
    /// Anchor in the trigger element.
    pub element: Anchor,
    /// Anchor in the viewport.
    pub viewport: Anchor,
}

impl ScrollPoint {
    /// Scroll offset at which the two anchors coincide.
    pub fn offset(self, bounds: Rect, viewport_height: f64) -> f64 {
        bounds.y0 + bounds.height() * self.element.0 - viewport_height * self.viewport.0
    }
}

impl FromStr for ScrollPoint {
    type Err = HeroError;

    fn from_str(s: &str) -> HeroResult<Self> {
        let mut parts = s.split_whitespace();
        let (Some(element), Some(viewport), None) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(HeroError::validation(format!(
                "scroll point '{s}' must be '<element> <viewport>'"
            )));
        };
        Ok(Self {
            element: Anchor::parse(element)?,
            viewport: Anchor::parse(viewport)?,
        })
    }
}

/// Maps a scroll offset onto progress `[0, 1]` between two scroll points of a trigger element.
///
/// Progress is scrubbed: it follows the scroll offset directly, with no elapsed-time component.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollTrigger {
    /// Node whose layout bounds define the scroll points.
    pub trigger: NodeId,
    /// Progress 0 position.
    pub start: ScrollPoint,
    /// Progress 1 position.
    pub end: ScrollPoint,
}

impl ScrollTrigger {
    /// Scroll offsets `(start, end)` for the given trigger bounds.
    pub fn range(&self, bounds: Rect, viewport_height: f64) -> (f64, f64) {
        (
            self.start.offset(bounds, viewport_height),
            self.end.offset(bounds, viewport_height),
        )
    }

    /// Scrubbed progress at `scroll_y`, clamped to `[0, 1]`.
    ///
    /// A degenerate range acts as a step at its start offset.
    pub fn progress(&self, scroll_y: f64, bounds: Rect, viewport_height: f64) -> f64 {
        let (start, end) = self.range(bounds, viewport_height);
        let span = end - start;
        if span <= 0.0 {
            return if scroll_y >= start { 1.0 } else { 0.0 };
        }
        ((scroll_y - start) / span).clamp(0.0, 1.0)
    }
}

/// A tween whose progress is driven by a [`ScrollTrigger`] instead of time.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrubBinding {
    /// Scroll mapping.
    pub trigger: ScrollTrigger,
    /// Animated values; its duration is ignored.
    pub tween: Tween,
}

#[cfg(test)]
#[path = "../../tests/unit/animation/scroll.rs"]
mod tests;
