use std::collections::BTreeMap;
use std::fmt::Write as _;

use crate::foundation::core::{ClipPolygon, CornerRadii, Length, fmt_num};
use crate::foundation::error::{HeroError, HeroResult};

/// Animatable view-node properties.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Property {
    /// `visibility`.
    Visibility,
    /// `opacity`, 0..1.
    Opacity,
    /// Uniform scale factor.
    Scale,
    /// Rotation around the X axis, degrees.
    RotateX,
    /// Rotation around the Y axis, degrees.
    RotateY,
    /// Perspective distance for the 3D rotations, pixels. Zero means none.
    TransformPerspective,
    /// `transform-origin` keyword pair.
    TransformOrigin,
    /// `width`.
    Width,
    /// `height`.
    Height,
    /// `clip-path` polygon.
    ClipPath,
    /// `border-radius`.
    BorderRadius,
    /// Replaces the node's inner markup.
    InnerHtml,
}

/// Which viewport dimension percentages of a property resolve against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    /// Resolve against the viewport width.
    Horizontal,
    /// Resolve against the viewport height.
    Vertical,
}

impl Property {
    /// Value a node has when neither inline style nor intrinsic style sets it.
    pub fn initial(self) -> Option<PropValue> {
        match self {
            Self::Visibility => Some(PropValue::Visibility(Visibility::Visible)),
            Self::Opacity | Self::Scale => Some(PropValue::Number(1.0)),
            Self::RotateX | Self::RotateY | Self::TransformPerspective => {
                Some(PropValue::Number(0.0))
            }
            Self::ClipPath => Some(PropValue::Polygon(ClipPolygon::full_rect())),
            Self::BorderRadius => Some(PropValue::Radii(CornerRadii::zero())),
            Self::TransformOrigin | Self::Width | Self::Height | Self::InnerHtml => None,
        }
    }

    /// Percentage basis axis.
    pub fn axis(self) -> Axis {
        match self {
            Self::Height => Axis::Vertical,
            _ => Axis::Horizontal,
        }
    }

    /// `true` for properties folded into the `transform` declaration.
    pub fn is_transform(self) -> bool {
        matches!(
            self,
            Self::Scale | Self::RotateX | Self::RotateY | Self::TransformPerspective
        )
    }
}

/// `visibility` keyword.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    /// Rendered.
    Visible,
    /// Laid out but not painted.
    Hidden,
}

/// A property value. Continuous kinds interpolate, discrete kinds switch.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropValue {
    /// Unitless number (opacity, scale, degrees, perspective px).
    Number(f64),
    /// Length in px or percent.
    Length(Length),
    /// Visibility keyword.
    Visibility(Visibility),
    /// Opaque keyword such as a transform origin.
    Keyword(String),
    /// Raw inline markup.
    Markup(String),
    /// Clip polygon.
    Polygon(ClipPolygon),
    /// Corner radii.
    Radii(CornerRadii),
}

impl PropValue {
    /// Interpolate `a -> b` at eased progress `t`.
    ///
    /// Discrete kinds hold `a` at `t == 0` and switch to `b` for any positive progress.
    pub fn lerp(a: &Self, b: &Self, t: f64, basis_px: f64) -> HeroResult<Self> {
        Ok(match (a, b) {
            (Self::Number(x), Self::Number(y)) => Self::Number(x + (y - x) * t),
            (Self::Length(x), Self::Length(y)) => Self::Length(Length::lerp(*x, *y, t, basis_px)),
            (Self::Polygon(x), Self::Polygon(y)) => Self::Polygon(ClipPolygon::lerp(x, y, t)),
            (Self::Radii(x), Self::Radii(y)) => Self::Radii(CornerRadii::lerp(x, y, t, basis_px)),
            (Self::Visibility(_), Self::Visibility(_))
            | (Self::Keyword(_), Self::Keyword(_))
            | (Self::Markup(_), Self::Markup(_)) => {
                if t > 0.0 {
                    b.clone()
                } else {
                    a.clone()
                }
            }
            _ => {
                return Err(HeroError::animation(format!(
                    "cannot interpolate {} into {}",
                    a.kind(),
                    b.kind()
                )));
            }
        })
    }

    /// Short kind name used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Length(_) => "length",
            Self::Visibility(_) => "visibility",
            Self::Keyword(_) => "keyword",
            Self::Markup(_) => "markup",
            Self::Polygon(_) => "polygon",
            Self::Radii(_) => "radii",
        }
    }

    /// Numeric payload, if any.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(v) => Some(*v),
            _ => None,
        }
    }

    fn css(&self) -> String {
        match self {
            Self::Number(v) => fmt_num(*v),
            Self::Length(l) => l.to_string(),
            Self::Visibility(Visibility::Visible) => "visible".to_owned(),
            Self::Visibility(Visibility::Hidden) => "hidden".to_owned(),
            Self::Keyword(k) | Self::Markup(k) => k.clone(),
            Self::Polygon(p) => p.to_string(),
            Self::Radii(r) => r.to_string(),
        }
    }
}

/// Check that `value` is a kind `prop` accepts.
pub fn check_kind(prop: Property, value: &PropValue) -> HeroResult<()> {
    let ok = match prop {
        Property::Visibility => matches!(value, PropValue::Visibility(_)),
        Property::Opacity
        | Property::Scale
        | Property::RotateX
        | Property::RotateY
        | Property::TransformPerspective => matches!(value, PropValue::Number(_)),
        Property::TransformOrigin => matches!(value, PropValue::Keyword(_)),
        Property::Width | Property::Height => matches!(value, PropValue::Length(_)),
        Property::ClipPath => matches!(value, PropValue::Polygon(_)),
        Property::BorderRadius => matches!(value, PropValue::Radii(_)),
        Property::InnerHtml => matches!(value, PropValue::Markup(_)),
    };
    if ok {
        Ok(())
    } else {
        Err(HeroError::animation(format!(
            "property {prop:?} does not accept a {} value",
            value.kind()
        )))
    }
}

/// Render inline style declarations. `InnerHtml` is content, not style, and is skipped.
pub fn css_declarations(style: &BTreeMap<Property, PropValue>) -> String {
    let mut out = String::new();
    let mut push = |name: &str, value: &str| {
        if !out.is_empty() {
            out.push(' ');
        }
        let _ = write!(out, "{name}: {value};");
    };

    for (prop, value) in style {
        let name = match prop {
            Property::Visibility => "visibility",
            Property::Opacity => "opacity",
            Property::TransformOrigin => "transform-origin",
            Property::Width => "width",
            Property::Height => "height",
            Property::ClipPath => "clip-path",
            Property::BorderRadius => "border-radius",
            Property::Scale
            | Property::RotateX
            | Property::RotateY
            | Property::TransformPerspective
            | Property::InnerHtml => continue,
        };
        push(name, &value.css());
    }

    let transform = transform_css(style);
    if !transform.is_empty() {
        push("transform", &transform);
    }
    out
}

fn transform_css(style: &BTreeMap<Property, PropValue>) -> String {
    let num = |p: Property| style.get(&p).and_then(PropValue::as_number);
    let mut parts = Vec::new();
    if let Some(d) = num(Property::TransformPerspective).filter(|d| *d > 0.0) {
        parts.push(format!("perspective({}px)", fmt_num(d)));
    }
    if let Some(x) = num(Property::RotateX) {
        parts.push(format!("rotateX({}deg)", fmt_num(x)));
    }
    if let Some(y) = num(Property::RotateY) {
        parts.push(format!("rotateY({}deg)", fmt_num(y)));
    }
    if let Some(s) = num(Property::Scale) {
        parts.push(format!("scale({})", fmt_num(s)));
    }
    parts.join(" ")
}

#[cfg(test)]
#[path = "../../tests/unit/animation/value.rs"]
mod tests;
