//! Timed page-event scripts and frame sampling.
//!
//! A script drives a [`HeroController`] through clicks, load events and scrolling, and records a
//! [`FrameSnapshot`] of the hero at every frame of a fixed rate.

use std::collections::BTreeMap;

use crate::animation::value::{Property, PropValue, css_declarations};
use crate::foundation::core::Fps;
use crate::foundation::error::{HeroError, HeroResult};
use crate::hero::controller::HeroController;
use crate::hero::gate::ReadyReason;
use crate::view::scene::Content;

/// A page event.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScriptEvent {
    /// Click on the preview.
    Click,
    /// A video element finished loading; `video` is its DOM id or one of `current`, `next`,
    /// `background`.
    VideoLoaded {
        /// Which video.
        video: String,
    },
    /// Scroll to a document offset.
    Scroll {
        /// Offset in pixels.
        y: f64,
    },
}

/// An event at a point in time.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TimedEvent {
    /// Seconds since mount.
    pub at: f64,
    /// The event.
    #[serde(flatten)]
    pub event: ScriptEvent,
}

/// A sequence of page events over a fixed duration.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Script {
    /// Total sampled time in seconds.
    pub duration: f64,
    /// Events, applied in time order; ties keep their listed order.
    #[serde(default)]
    pub events: Vec<TimedEvent>,
}

impl Script {
    /// Parse a JSON script.
    pub fn from_json_str(s: &str) -> HeroResult<Self> {
        let script: Self = serde_json::from_str(s)?;
        script.validate()?;
        Ok(script)
    }

    /// Check times and durations.
    pub fn validate(&self) -> HeroResult<()> {
        if !self.duration.is_finite() || self.duration < 0.0 {
            return Err(HeroError::validation("script duration must be finite and >= 0"));
        }
        for (i, e) in self.events.iter().enumerate() {
            if !e.at.is_finite() || e.at < 0.0 {
                return Err(HeroError::validation(format!(
                    "script event {i}: time must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }
}

/// Visible state of one hero node.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct NodeSnapshot {
    /// Inline style declarations.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub style: String,
    /// Rendered inner markup, for text nodes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markup: Option<String>,
    /// Media source, for video nodes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    /// Whether the media is playing, for video nodes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub playing: Option<bool>,
}

/// State of the hero at one sampled frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FrameSnapshot {
    /// Frame number.
    pub frame: u64,
    /// Seconds since mount.
    pub t: f64,
    /// Current video index.
    pub index: u32,
    /// Upcoming video index.
    pub upcoming: u32,
    /// Whether the load gate is open.
    pub ready: bool,
    /// Why the gate opened, once it did.
    pub ready_reason: Option<ReadyReason>,
    /// Load events counted so far.
    pub loaded: u32,
    /// Whether the user clicked at least once.
    pub has_clicked: bool,
    /// Whether the loading overlay is still mounted.
    pub overlay_mounted: bool,
    /// Hero nodes by name.
    pub nodes: BTreeMap<&'static str, NodeSnapshot>,
}

/// Capture the hero's visible state.
pub fn snapshot(ctl: &HeroController, frame: u64, t: f64) -> HeroResult<FrameSnapshot> {
    let hero = ctl.nodes().hero;
    let scene = ctl.scene();
    let mut nodes = BTreeMap::new();
    for (name, id) in [
        ("video_frame", hero.video_frame),
        ("current_video", hero.current_video),
        ("next_video", hero.next_video),
        ("background_video", hero.background_video),
        ("current_text", hero.current_text),
        ("backdrop_heading", hero.backdrop_heading),
    ] {
        let node = scene.get(id)?;
        let markup = match node.inline_style().get(&Property::InnerHtml) {
            Some(PropValue::Markup(m)) => Some(m.clone()),
            _ => match &node.content {
                Content::Empty => None,
                Content::Text(s) | Content::Markup(s) => Some(s.clone()),
            },
        };
        nodes.insert(
            name,
            NodeSnapshot {
                style: css_declarations(node.inline_style()),
                markup,
                src: node.media.as_ref().map(|m| m.src.clone()),
                playing: node.media.as_ref().map(|m| m.playing),
            },
        );
    }

    let state = ctl.state();
    Ok(FrameSnapshot {
        frame,
        t,
        index: state.current().get(),
        upcoming: state.upcoming().get(),
        ready: state.is_ready(),
        ready_reason: state.gate().ready_reason(),
        loaded: state.loaded_count(),
        has_clicked: state.has_clicked(),
        overlay_mounted: scene.is_mounted(hero.loading_overlay),
        nodes,
    })
}

fn apply(ctl: &mut HeroController, event: &TimedEvent) -> HeroResult<()> {
    match &event.event {
        ScriptEvent::Click => {
            ctl.click(event.at)?;
        }
        ScriptEvent::VideoLoaded { video } => {
            let hero = ctl.nodes().hero;
            let id = match video.as_str() {
                "current" => hero.current_video,
                "next" => hero.next_video,
                "background" => hero.background_video,
                dom_id => ctl.scene().find_by_dom_id(dom_id).ok_or_else(|| {
                    HeroError::validation(format!("unknown video '{dom_id}'"))
                })?,
            };
            ctl.video_loaded(id, event.at)?;
        }
        ScriptEvent::Scroll { y } => ctl.scroll_to(*y)?,
    }
    Ok(())
}

/// Run `script` against `ctl`, sampling at `fps` from `0` through `script.duration`.
///
/// Events due at or before a frame's time are applied before the frame is ticked.
#[tracing::instrument(skip(ctl, script), fields(events = script.events.len()))]
pub fn run_script(
    ctl: &mut HeroController,
    script: &Script,
    fps: Fps,
) -> HeroResult<Vec<FrameSnapshot>> {
    script.validate()?;
    let mut events: Vec<&TimedEvent> = script.events.iter().collect();
    events.sort_by(|a, b| a.at.total_cmp(&b.at));
    let mut pending = events.into_iter().peekable();

    let last = fps.secs_to_frames_ceil(script.duration);
    let mut frames = Vec::with_capacity(last as usize + 1);
    for frame in 0..=last {
        let t = fps.frames_to_secs(frame);
        while let Some(event) = pending.next_if(|e| e.at <= t) {
            tracing::debug!(at = event.at, event = ?event.event, "script event");
            apply(ctl, event)?;
        }
        ctl.tick(t)?;
        frames.push(snapshot(ctl, frame, t)?);
    }
    Ok(frames)
}

#[cfg(test)]
#[path = "../tests/unit/script.rs"]
mod tests;
