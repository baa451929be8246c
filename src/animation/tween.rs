use std::collections::BTreeMap;

use crate::animation::ease::Ease;
use crate::animation::value::{Property, PropValue, Visibility, check_kind};
use crate::foundation::core::{ClipPolygon, CornerRadii, Length, NodeId};
use crate::foundation::error::{HeroError, HeroResult};

/// How a tween obtains its endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TweenKind {
    /// Animate from the values current when the tween starts to `to`.
    To,
    /// Animate from `from` to the values current when the tween is played.
    From,
    /// Animate from `from` to `to`; both explicit.
    FromTo,
    /// Zero-duration `To`.
    Set,
}

/// Side effects a tween requests when it starts.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cue {
    /// Start playback of a media node.
    PlayMedia(NodeId),
}

/// Animation descriptor: target, properties, endpoints, easing and duration.
///
/// A tween is plain data. [`Driver`](crate::Driver) interprets it against a scene.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Tween {
    /// Node whose inline style is animated.
    pub target: NodeId,
    /// Endpoint semantics.
    pub kind: TweenKind,
    /// Explicit start values (`From`, `FromTo`).
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub from: BTreeMap<Property, PropValue>,
    /// Explicit end values (`To`, `FromTo`, `Set`).
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub to: BTreeMap<Property, PropValue>,
    /// Duration in seconds.
    pub duration: f64,
    /// Easing applied to normalized progress.
    pub ease: Ease,
    /// Write start values as soon as the tween is played rather than when it starts.
    pub immediate_render: bool,
    /// Cues fired once when the tween starts.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub on_start: Vec<Cue>,
}

impl Tween {
    fn new(target: NodeId, kind: TweenKind) -> Self {
        Self {
            target,
            kind,
            from: BTreeMap::new(),
            to: BTreeMap::new(),
            duration: if kind == TweenKind::Set { 0.0 } else { 0.5 },
            ease: Ease::OutQuad,
            immediate_render: kind == TweenKind::From,
            on_start: Vec::new(),
        }
    }

    /// Tween toward explicit end values.
    pub fn to(target: NodeId) -> Self {
        Self::new(target, TweenKind::To)
    }

    /// Tween from explicit start values back to the node's current values.
    pub fn from_values(target: NodeId) -> Self {
        Self::new(target, TweenKind::From)
    }

    /// Tween between explicit start and end values.
    pub fn from_to(target: NodeId) -> Self {
        Self::new(target, TweenKind::FromTo)
    }

    /// Instantly set values.
    pub fn set(target: NodeId) -> Self {
        Self::new(target, TweenKind::Set)
    }

    /// Add a property on the tween's primary side: `from` for [`TweenKind::From`], `to` otherwise.
    pub fn with(mut self, prop: Property, value: impl Into<PropValue>) -> Self {
        match self.kind {
            TweenKind::From => self.from.insert(prop, value.into()),
            TweenKind::To | TweenKind::FromTo | TweenKind::Set => self.to.insert(prop, value.into()),
        };
        self
    }

    /// Add an explicit start value (for [`TweenKind::FromTo`]).
    pub fn starting(mut self, prop: Property, value: impl Into<PropValue>) -> Self {
        self.from.insert(prop, value.into());
        self
    }

    /// Set duration in seconds. Ignored for [`TweenKind::Set`].
    pub fn duration(mut self, secs: f64) -> Self {
        if self.kind != TweenKind::Set {
            self.duration = secs;
        }
        self
    }

    /// Set easing.
    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Override the immediate-render flag.
    pub fn immediate_render(mut self, on: bool) -> Self {
        self.immediate_render = on;
        self
    }

    /// Fire `cue` when the tween starts.
    pub fn on_start(mut self, cue: Cue) -> Self {
        self.on_start.push(cue);
        self
    }

    /// Properties this tween writes.
    pub fn properties(&self) -> impl Iterator<Item = Property> + '_ {
        let primary = match self.kind {
            TweenKind::From => &self.from,
            TweenKind::To | TweenKind::FromTo | TweenKind::Set => &self.to,
        };
        primary.keys().copied()
    }

    /// Validate static invariants.
    pub fn validate(&self) -> HeroResult<()> {
        if !self.duration.is_finite() || self.duration < 0.0 {
            return Err(HeroError::animation(format!(
                "tween duration must be finite and >= 0, got {}",
                self.duration
            )));
        }
        if self.kind == TweenKind::Set && self.duration != 0.0 {
            return Err(HeroError::animation("set tweens have zero duration"));
        }

        let (needs_from, needs_to) = match self.kind {
            TweenKind::To | TweenKind::Set => (false, true),
            TweenKind::From => (true, false),
            TweenKind::FromTo => (true, true),
        };
        if needs_from && self.from.is_empty() {
            return Err(HeroError::animation(format!(
                "{:?} tween needs start values",
                self.kind
            )));
        }
        if needs_to && self.to.is_empty() {
            return Err(HeroError::animation(format!(
                "{:?} tween needs end values",
                self.kind
            )));
        }
        if !needs_from && !self.from.is_empty() {
            return Err(HeroError::animation(format!(
                "{:?} tween does not take start values",
                self.kind
            )));
        }
        if !needs_to && !self.to.is_empty() {
            return Err(HeroError::animation(format!(
                "{:?} tween does not take end values",
                self.kind
            )));
        }
        if self.kind == TweenKind::FromTo {
            if let Some(p) = self.from.keys().find(|p| !self.to.contains_key(p)) {
                return Err(HeroError::animation(format!(
                    "fromTo start value for {p:?} has no end value"
                )));
            }
            if let Some(p) = self.to.keys().find(|p| !self.from.contains_key(p)) {
                return Err(HeroError::animation(format!(
                    "fromTo end value for {p:?} has no start value"
                )));
            }
        }

        for (prop, value) in self.from.iter().chain(&self.to) {
            check_kind(*prop, value)?;
        }
        Ok(())
    }
}

impl From<f64> for PropValue {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<Length> for PropValue {
    fn from(v: Length) -> Self {
        Self::Length(v)
    }
}

impl From<Visibility> for PropValue {
    fn from(v: Visibility) -> Self {
        Self::Visibility(v)
    }
}

impl From<ClipPolygon> for PropValue {
    fn from(v: ClipPolygon) -> Self {
        Self::Polygon(v)
    }
}

impl From<CornerRadii> for PropValue {
    fn from(v: CornerRadii) -> Self {
        Self::Radii(v)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/tween.rs"]
mod tests;
