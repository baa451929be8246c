use std::collections::BTreeSet;

use crate::animation::scroll::{ScrollTrigger, ScrubBinding};
use crate::animation::timeline::Timeline;
use crate::animation::tween::{Cue, Tween};
use crate::animation::value::{Property, PropValue, Visibility};
use crate::config::{ClickPolicy, HeroConfig};
use crate::eval::driver::{Channel, Driver, PlayOpts};
use crate::foundation::core::{Length, NodeId};
use crate::foundation::error::{HeroError, HeroResult};
use crate::hero::cycle::VideoIndex;
use crate::hero::gate::{GateChange, LoadGate, ReadyReason};
use crate::hero::state::{HeroState, IndexChange};
use crate::view::components::{HeroProps, LandingNodes, landing_page};
use crate::view::scene::{Content, Scene};

/// Channel of the preview grow/shrink transition.
pub const GEOMETRY: Channel = Channel("geometry");
/// Channel of the heading swap.
pub const HEADING: Channel = Channel("heading");

/// Result of [`HeroController::click`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The index advanced and transitions were started.
    Advanced(IndexChange),
    /// Dropped because a transition is running.
    Ignored,
    /// Deferred until the running transition finishes.
    Queued,
}

/// Index the background video shows for `current`.
///
/// The second-to-last index maps back to the first; every other index shows itself.
pub fn background_index(current: VideoIndex) -> u32 {
    if current.get() == current.total() - 1 {
        1
    } else {
        current.get()
    }
}

/// Owns the page scene, the hero state and the animation driver, and translates page events
/// into state changes and timelines.
///
/// Time is the caller's clock in seconds; the controller mounts at `0.0`.
#[derive(Clone, Debug)]
pub struct HeroController {
    config: HeroConfig,
    scene: Scene,
    nodes: LandingNodes,
    state: HeroState,
    driver: Driver,
    awaiting_load: BTreeSet<NodeId>,
    pending_clicks: u32,
}

impl HeroController {
    /// Build the page and run the mount-time animations.
    #[tracing::instrument(skip(config), fields(total_videos = config.total_videos))]
    pub fn new(config: HeroConfig) -> HeroResult<Self> {
        config.validate()?;

        let gate = LoadGate::new(config.required_loads(), config.load_timeout_secs, 0.0)?;
        let state = HeroState::new(config.total_videos, gate)?;
        let current = state.current();

        let mut scene = Scene::new(config.viewport);
        let props = HeroProps {
            current_src: config.video_src(current.get()),
            upcoming_src: config.video_src(state.upcoming().get()),
            background_src: config.video_src(background_index(current)),
            heading: config.headings.get(current)?,
        };
        let nodes = landing_page(&mut scene, &props, &config.features)?;

        let mut ctl = Self {
            awaiting_load: nodes.hero.gated_videos().into_iter().collect(),
            config,
            scene,
            nodes,
            state,
            driver: Driver::new(),
            pending_clicks: 0,
        };
        ctl.setup_scroll_reveal()?;
        if ctl.config.heading_intro_on_mount {
            ctl.play_heading(current, 0.0)?;
        }
        Ok(ctl)
    }

    /// Handle a click on the preview.
    ///
    /// Clicks are accepted before the videos are ready.
    #[tracing::instrument(skip(self))]
    pub fn click(&mut self, now: f64) -> HeroResult<ClickOutcome> {
        if !self.driver.is_idle() {
            match self.config.click_policy {
                ClickPolicy::Interrupt => {}
                ClickPolicy::IgnoreWhileTransitioning => {
                    tracing::debug!("click ignored during transition");
                    return Ok(ClickOutcome::Ignored);
                }
                ClickPolicy::Queue => {
                    self.pending_clicks += 1;
                    tracing::debug!(pending = self.pending_clicks, "click queued");
                    return Ok(ClickOutcome::Queued);
                }
            }
        }
        self.advance(now).map(ClickOutcome::Advanced)
    }

    /// Handle a load event from one of the gated videos.
    #[tracing::instrument(skip(self))]
    pub fn video_loaded(&mut self, video: NodeId, now: f64) -> HeroResult<GateChange> {
        if !self.nodes.hero.gated_videos().contains(&video) {
            return Err(HeroError::validation(format!(
                "node {} is not a hero video",
                video.0
            )));
        }
        if !self.awaiting_load.remove(&video) {
            tracing::debug!(node = video.0, "load event without a pending source ignored");
            return Ok(GateChange::Unchanged);
        }
        let change = self.state.video_loaded();
        tracing::debug!(
            node = video.0,
            loaded = self.state.loaded_count(),
            required = self.state.gate().required(),
            "video loaded"
        );
        if let GateChange::Opened(reason) = change {
            self.on_ready(reason)?;
        }
        Ok(change)
    }

    /// Advance animations and timers to `now`.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn tick(&mut self, now: f64) -> HeroResult<Vec<Cue>> {
        let cues = self.driver.tick(&mut self.scene, now)?;
        for cue in &cues {
            match cue {
                Cue::PlayMedia(node) => self.scene.media_mut(*node)?.playing = true,
            }
        }

        if let GateChange::Opened(reason) = self.state.poll(now) {
            tracing::warn!(
                loaded = self.state.loaded_count(),
                required = self.state.gate().required(),
                "videos did not load in time, showing the page anyway"
            );
            self.on_ready(reason)?;
        }

        if self.pending_clicks > 0 && self.driver.is_idle() {
            self.pending_clicks -= 1;
            self.advance(now)?;
        }
        Ok(cues)
    }

    /// Scrub scroll-linked animations to document offset `scroll_y`.
    pub fn scroll_to(&mut self, scroll_y: f64) -> HeroResult<()> {
        self.driver.scroll_to(&mut self.scene, scroll_y)
    }

    /// Hero state.
    pub fn state(&self) -> &HeroState {
        &self.state
    }

    /// Page scene.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Page node handles.
    pub fn nodes(&self) -> &LandingNodes {
        &self.nodes
    }

    /// Active configuration.
    pub fn config(&self) -> &HeroConfig {
        &self.config
    }

    /// `true` while any transition is running.
    pub fn is_transitioning(&self) -> bool {
        !self.driver.is_idle()
    }

    /// Clicks waiting for the running transition.
    pub fn pending_clicks(&self) -> u32 {
        self.pending_clicks
    }

    fn on_ready(&mut self, reason: ReadyReason) -> HeroResult<()> {
        tracing::debug!(?reason, "load gate opened");
        self.scene.detach(self.nodes.hero.loading_overlay)
    }

    fn advance(&mut self, now: f64) -> HeroResult<IndexChange> {
        let change = self.state.click();
        tracing::debug!(from = %change.from, to = %change.to, now, "advancing hero video");

        let hero = self.nodes.hero;
        let current = change.to;
        self.set_video_src(hero.current_video, self.state.upcoming().get())?;
        self.set_video_src(hero.next_video, current.get())?;
        self.set_video_src(hero.background_video, background_index(current))?;

        let heading = Content::Markup(self.config.headings.get(current)?.to_owned());
        // `current_text` keeps the old markup until the heading timeline swaps it.
        self.scene.set_content(hero.backdrop_heading, heading)?;

        if self.state.has_clicked() {
            self.play_geometry(now)?;
        }
        self.play_heading(current, now)?;
        Ok(change)
    }

    fn set_video_src(&mut self, video: NodeId, index: u32) -> HeroResult<()> {
        let src = self.config.video_src(index);
        let media = self.scene.media_mut(video)?;
        if media.src == src {
            return Ok(());
        }
        media.src = src;
        media.playing = media.autoplay;
        self.awaiting_load.insert(video);
        Ok(())
    }

    fn play_geometry(&mut self, now: f64) -> HeroResult<()> {
        let t = &self.config.transition;
        let hero = self.nodes.hero;
        let timeline = Timeline::new()
            .then(Tween::set(hero.next_video).with(Property::Visibility, Visibility::Visible))
            .with_previous(
                Tween::to(hero.next_video)
                    .with(
                        Property::TransformOrigin,
                        PropValue::Keyword("center center".to_owned()),
                    )
                    .with(Property::Scale, 1.0)
                    .with(Property::Width, Length::Percent(100.0))
                    .with(Property::Height, Length::Percent(100.0))
                    .duration(t.grow_secs)
                    .ease(t.grow_ease)
                    .on_start(Cue::PlayMedia(hero.next_video)),
            )
            .with_previous(
                Tween::from_values(hero.current_video)
                    .with(
                        Property::TransformOrigin,
                        PropValue::Keyword("center center".to_owned()),
                    )
                    .with(Property::Scale, 0.0)
                    .duration(t.shrink_secs)
                    .ease(t.shrink_ease),
            );
        self.driver.play(
            GEOMETRY,
            &timeline,
            PlayOpts {
                revert_on_replace: true,
            },
            &mut self.scene,
            now,
        )
    }

    fn play_heading(&mut self, index: VideoIndex, now: f64) -> HeroResult<()> {
        let t = &self.config.transition;
        let text = self.nodes.hero.current_text;
        let markup = self.config.headings.get(index)?.to_owned();
        let timeline = Timeline::new()
            .then(
                Tween::to(text)
                    .with(Property::Opacity, 0.0)
                    .with(Property::RotateX, -t.text_rotate_x_deg)
                    .with(Property::RotateY, t.text_rotate_y_deg)
                    .with(Property::TransformPerspective, t.perspective_px)
                    .duration(t.text_out_secs)
                    .ease(t.text_out_ease),
            )
            .then(Tween::set(text).with(Property::InnerHtml, PropValue::Markup(markup)))
            .then(
                Tween::from_to(text)
                    .starting(Property::Opacity, 0.0)
                    .starting(Property::RotateX, t.text_rotate_x_deg)
                    .starting(Property::RotateY, -t.text_rotate_y_deg)
                    .starting(Property::TransformPerspective, t.perspective_px)
                    .with(Property::Opacity, 1.0)
                    .with(Property::RotateX, 0.0)
                    .with(Property::RotateY, 0.0)
                    .with(Property::TransformPerspective, t.perspective_px)
                    .duration(t.text_in_secs)
                    .ease(t.text_in_ease),
            );
        self.driver
            .play(HEADING, &timeline, PlayOpts::default(), &mut self.scene, now)
    }

    #[tracing::instrument(skip(self))]
    fn setup_scroll_reveal(&mut self) -> HeroResult<()> {
        let shapes = self.config.reveal.shapes()?;
        let frame = self.nodes.hero.video_frame;
        self.scene
            .set_inline(frame, Property::ClipPath, shapes.clip_path.into())?;
        self.scene
            .set_inline(frame, Property::BorderRadius, shapes.border_radius.into())?;

        let binding = ScrubBinding {
            trigger: ScrollTrigger {
                trigger: frame,
                start: shapes.start,
                end: shapes.end,
            },
            tween: Tween::from_values(frame)
                .with(Property::ClipPath, shapes.unrevealed_clip_path)
                .with(Property::BorderRadius, shapes.unrevealed_border_radius)
                .ease(self.config.reveal.ease),
        };
        self.driver.bind_scroll(&binding, &mut self.scene)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/hero/controller.rs"]
mod tests;
