use std::path::Path;

use crate::animation::ease::Ease;
use crate::animation::scroll::ScrollPoint;
use crate::foundation::core::{ClipPolygon, CornerRadii, Size};
use crate::foundation::error::{HeroError, HeroResult};
use crate::hero::headings::HeadingMap;
use crate::view::components::GATED_VIDEO_COUNT;

/// What a click does while a transition is still playing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClickPolicy {
    /// Advance immediately and rebuild the timelines, interrupting the running ones.
    #[default]
    Interrupt,
    /// Drop clicks until every timeline finished.
    IgnoreWhileTransitioning,
    /// Remember clicks and replay them one at a time as timelines finish.
    Queue,
}

/// Timing of the click transition.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TransitionConfig {
    /// Growth of the upcoming video to full frame.
    pub grow_secs: f64,
    /// Easing of the growth.
    pub grow_ease: Ease,
    /// Shrink-in of the preview video from scale 0.
    pub shrink_secs: f64,
    /// Easing of the shrink-in.
    pub shrink_ease: Ease,
    /// Heading fade-out.
    pub text_out_secs: f64,
    /// Easing of the fade-out.
    pub text_out_ease: Ease,
    /// Heading fade-in.
    pub text_in_secs: f64,
    /// Easing of the fade-in.
    pub text_in_ease: Ease,
    /// Perspective distance for the heading rotation, pixels.
    pub perspective_px: f64,
    /// Heading X rotation magnitude, degrees.
    pub text_rotate_x_deg: f64,
    /// Heading Y rotation magnitude, degrees.
    pub text_rotate_y_deg: f64,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            grow_secs: 1.0,
            grow_ease: Ease::OutQuad,
            shrink_secs: 1.5,
            shrink_ease: Ease::InOutQuad,
            text_out_secs: 0.5,
            text_out_ease: Ease::InQuad,
            text_in_secs: 0.5,
            text_in_ease: Ease::OutQuad,
            perspective_px: 1000.0,
            text_rotate_x_deg: 20.0,
            text_rotate_y_deg: 60.0,
        }
    }
}

/// Scroll-scrubbed clip reveal of the video frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RevealConfig {
    /// Revealed (resting) clip polygon.
    pub clip_path: String,
    /// Revealed border radius.
    pub border_radius: String,
    /// Unrevealed clip polygon, shown before scrolling.
    pub unrevealed_clip_path: String,
    /// Unrevealed border radius.
    pub unrevealed_border_radius: String,
    /// Easing along the scrubbed progress.
    pub ease: Ease,
    /// Progress 0 scroll point.
    pub start: String,
    /// Progress 1 scroll point.
    pub end: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            clip_path: "polygon(14% 0%, 72% 0%, 90% 90%, 0% 100%)".to_owned(),
            border_radius: "0 0 40% 10%".to_owned(),
            unrevealed_clip_path: "polygon(0% 0%, 100% 0%, 100% 100%, 0% 100%)".to_owned(),
            unrevealed_border_radius: "0 0 0 0".to_owned(),
            ease: Ease::InOutQuad,
            start: "center center".to_owned(),
            end: "bottom center".to_owned(),
        }
    }
}

/// Parsed form of [`RevealConfig`].
#[derive(Clone, Debug, PartialEq)]
pub struct RevealShapes {
    /// Revealed clip polygon.
    pub clip_path: ClipPolygon,
    /// Revealed radii.
    pub border_radius: CornerRadii,
    /// Unrevealed clip polygon.
    pub unrevealed_clip_path: ClipPolygon,
    /// Unrevealed radii.
    pub unrevealed_border_radius: CornerRadii,
    /// Progress 0 scroll point.
    pub start: ScrollPoint,
    /// Progress 1 scroll point.
    pub end: ScrollPoint,
}

impl RevealConfig {
    /// Parse the CSS-like literals.
    pub fn shapes(&self) -> HeroResult<RevealShapes> {
        Ok(RevealShapes {
            clip_path: ClipPolygon::parse(&self.clip_path)?,
            border_radius: CornerRadii::parse(&self.border_radius)?,
            unrevealed_clip_path: ClipPolygon::parse(&self.unrevealed_clip_path)?,
            unrevealed_border_radius: CornerRadii::parse(&self.unrevealed_border_radius)?,
            start: self.start.parse()?,
            end: self.end.parse()?,
        })
    }
}

/// One card of the feature grid.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FeatureCard {
    /// Background video.
    pub src: String,
    /// Title markup.
    pub title: String,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
}

/// Landing page configuration. Every field has a default, so `{}` is a valid document.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeroConfig {
    /// Number of hero videos.
    pub total_videos: u32,
    /// Video path with an `{index}` placeholder.
    pub video_path_template: String,
    /// Heading markup per video index.
    pub headings: HeadingMap,
    /// Transition timing.
    pub transition: TransitionConfig,
    /// Behaviour of clicks during a transition.
    pub click_policy: ClickPolicy,
    /// Open the load gate after this many seconds even if videos did not load. `null` waits
    /// forever.
    pub load_timeout_secs: Option<f64>,
    /// Play the heading swap once on mount.
    pub heading_intro_on_mount: bool,
    /// Scroll reveal shapes.
    pub reveal: RevealConfig,
    /// Viewport size used for percentages and scroll geometry.
    pub viewport: Size,
    /// Feature grid cards.
    pub features: Vec<FeatureCard>,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            total_videos: 4,
            video_path_template: "videos/hero-{index}.mp4".to_owned(),
            headings: HeadingMap::default(),
            transition: TransitionConfig::default(),
            click_policy: ClickPolicy::default(),
            load_timeout_secs: Some(8.0),
            heading_intro_on_mount: true,
            reveal: RevealConfig::default(),
            viewport: Size::new(1440.0, 900.0),
            features: default_features(),
        }
    }
}

fn default_features() -> Vec<FeatureCard> {
    [
        ("videos/feature-1.mp4", "radia<b>n</b>t", Some("A cross-platform metagame app, turning your activities across Web2 and Web3 games into a rewarding adventure.")),
        ("videos/feature-2.mp4", "<b>z</b>igma", Some("An anime and gaming-inspired NFT collection, the IP primed for expansion.")),
        ("videos/feature-3.mp4", "n<b>e</b>xus", Some("A gamified social hub, adding a new dimension of play to social interaction.")),
        ("videos/feature-4.mp4", "az<b>u</b>l", Some("A cross-world AI agent, elevating your gameplay to be more fun and productive.")),
    ]
    .into_iter()
    .map(|(src, title, description)| FeatureCard {
        src: src.to_owned(),
        title: title.to_owned(),
        description: description.map(str::to_owned),
    })
    .collect()
}

impl HeroConfig {
    /// Parse and validate a JSON document.
    pub fn from_json_str(s: &str) -> HeroResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a JSON file.
    pub fn from_path(path: &Path) -> HeroResult<Self> {
        let s = std::fs::read_to_string(path).map_err(|e| {
            HeroError::config(format!("read config '{}': {e}", path.display()))
        })?;
        Self::from_json_str(&s)
    }

    /// Check every constraint the controller relies on.
    pub fn validate(&self) -> HeroResult<()> {
        if self.total_videos < 2 {
            return Err(HeroError::config("total_videos must be >= 2"));
        }
        if !self.video_path_template.contains("{index}") {
            return Err(HeroError::config(
                "video_path_template must contain '{index}'",
            ));
        }
        self.headings.validate(self.total_videos)?;

        let t = &self.transition;
        for (name, secs) in [
            ("grow_secs", t.grow_secs),
            ("shrink_secs", t.shrink_secs),
            ("text_out_secs", t.text_out_secs),
            ("text_in_secs", t.text_in_secs),
            ("perspective_px", t.perspective_px),
        ] {
            if !secs.is_finite() || secs < 0.0 {
                return Err(HeroError::config(format!(
                    "transition.{name} must be finite and >= 0"
                )));
            }
        }
        if let Some(timeout) = self.load_timeout_secs
            && (!timeout.is_finite() || timeout <= 0.0)
        {
            return Err(HeroError::config("load_timeout_secs must be > 0 or null"));
        }
        if !(self.viewport.width > 0.0 && self.viewport.height > 0.0) {
            return Err(HeroError::config("viewport must have a positive size"));
        }
        self.reveal
            .shapes()
            .map_err(|e| HeroError::config(format!("reveal: {e}")))?;
        Ok(())
    }

    /// Source path of video `index`.
    pub fn video_src(&self, index: u32) -> String {
        self.video_path_template
            .replace("{index}", &index.to_string())
    }

    /// Number of load events the gate waits for: `total_videos - 1`, capped at the number of
    /// video elements that can report a load before the first click.
    pub fn required_loads(&self) -> u32 {
        self.total_videos
            .saturating_sub(1)
            .min(GATED_VIDEO_COUNT as u32)
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
