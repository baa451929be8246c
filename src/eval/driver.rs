use std::collections::BTreeMap;

use crate::animation::scroll::{ScrollTrigger, ScrubBinding};
use crate::animation::timeline::{ScheduledStep, Timeline};
use crate::animation::tween::{Cue, Tween, TweenKind};
use crate::animation::value::{Axis, Property, PropValue};
use crate::foundation::core::NodeId;
use crate::foundation::error::{HeroError, HeroResult};
use crate::view::scene::Scene;

/// Named slot holding at most one running timeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
pub struct Channel(pub &'static str);

/// How a timeline treats the instance it replaces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlayOpts {
    /// Restore every inline value the previous instance wrote before starting.
    pub revert_on_replace: bool,
}

/// Resolved endpoints of one tween.
#[derive(Clone, Debug)]
struct Endpoints {
    target: NodeId,
    tracks: Vec<(Property, PropValue, PropValue)>,
}

#[derive(Clone, Debug)]
enum StepState {
    Pending(Option<Endpoints>),
    Running(Endpoints),
    Done,
}

/// Values a channel instance overwrote, keyed by slot, holding what was there before.
type Touched = BTreeMap<(NodeId, Property), Option<PropValue>>;

#[derive(Clone, Debug)]
struct Instance {
    steps: Vec<ScheduledStep>,
    states: Vec<StepState>,
    started_at: f64,
    touched: Touched,
    revert_on_replace: bool,
}

impl Instance {
    fn is_finished(&self) -> bool {
        self.states.iter().all(|s| matches!(s, StepState::Done))
    }
}

#[derive(Clone, Debug)]
struct Scrub {
    trigger: ScrollTrigger,
    ease: crate::animation::ease::Ease,
    endpoints: Endpoints,
}

/// Interprets animation descriptors against a [`Scene`].
///
/// Time is supplied by the caller in seconds. Each channel holds one timeline instance; playing on
/// an occupied channel discards the previous instance (last write wins). Steps of one instance
/// apply in declared order; channels are visited in key order, which callers must not rely on.
#[derive(Clone, Debug, Default)]
pub struct Driver {
    channels: BTreeMap<Channel, Instance>,
    scrubs: BTreeMap<NodeId, Scrub>,
}

impl Driver {
    /// Empty driver.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start `timeline` on `channel` at time `now`, replacing whatever ran there.
    ///
    /// Steps at offset zero start on the next [`Driver::tick`]; steps with immediate render write
    /// their start values now.
    #[tracing::instrument(skip(self, timeline, scene), fields(steps = timeline.steps.len()))]
    pub fn play(
        &mut self,
        channel: Channel,
        timeline: &Timeline,
        opts: PlayOpts,
        scene: &mut Scene,
        now: f64,
    ) -> HeroResult<()> {
        let steps = timeline.schedule()?;
        for step in &steps {
            scene.get(step.tween.target)?;
        }

        if let Some(prev) = self.channels.remove(&channel) {
            tracing::debug!(
                channel = channel.0,
                finished = prev.is_finished(),
                "replacing timeline"
            );
            if prev.revert_on_replace {
                revert(&prev.touched, scene)?;
            }
        }

        let mut inst = Instance {
            states: Vec::with_capacity(steps.len()),
            steps,
            started_at: now,
            touched: BTreeMap::new(),
            revert_on_replace: opts.revert_on_replace,
        };
        for step in &inst.steps {
            let state = if step.tween.immediate_render {
                let ends = resolve(&step.tween, scene)?;
                apply(&ends, 0.0, scene, &mut inst.touched)?;
                StepState::Pending(Some(ends))
            } else {
                StepState::Pending(None)
            };
            inst.states.push(state);
        }
        self.channels.insert(channel, inst);
        Ok(())
    }

    /// Advance every channel to `now`, returning cues of steps that started.
    pub fn tick(&mut self, scene: &mut Scene, now: f64) -> HeroResult<Vec<Cue>> {
        let mut cues = Vec::new();
        for (channel, inst) in &mut self.channels {
            if inst.is_finished() {
                continue;
            }
            let local = now - inst.started_at;
            advance(inst, local, scene, &mut cues)?;
            if inst.is_finished() {
                tracing::debug!(channel = channel.0, "timeline finished");
            }
        }
        Ok(cues)
    }

    /// `true` when `channel` holds an unfinished instance.
    pub fn is_running(&self, channel: Channel) -> bool {
        self.channels
            .get(&channel)
            .is_some_and(|inst| !inst.is_finished())
    }

    /// `true` when no channel is running.
    pub fn is_idle(&self) -> bool {
        self.channels.values().all(Instance::is_finished)
    }

    /// Register a scroll-scrubbed tween, replacing any binding on the same trigger node.
    ///
    /// End values for a `From` tween are the node's current values at bind time.
    pub fn bind_scroll(&mut self, binding: &ScrubBinding, scene: &mut Scene) -> HeroResult<()> {
        binding.tween.validate()?;
        let trigger_node = scene.get(binding.trigger.trigger)?;
        if trigger_node.bounds.is_none() {
            return Err(HeroError::evaluation(format!(
                "scroll trigger node {} has no layout bounds",
                binding.trigger.trigger.0
            )));
        }

        if let Some(prev) = self.scrubs.remove(&binding.trigger.trigger) {
            // Rebinding resolves against the un-scrubbed state.
            apply(&prev.endpoints, 1.0, scene, &mut BTreeMap::new())?;
        }

        let endpoints = resolve(&binding.tween, scene)?;
        if binding.tween.immediate_render {
            apply(&endpoints, 0.0, scene, &mut BTreeMap::new())?;
        }
        self.scrubs.insert(
            binding.trigger.trigger,
            Scrub {
                trigger: binding.trigger,
                ease: binding.tween.ease,
                endpoints,
            },
        );
        Ok(())
    }

    /// Evaluate every scroll binding at `scroll_y`.
    pub fn scroll_to(&self, scene: &mut Scene, scroll_y: f64) -> HeroResult<()> {
        let viewport_h = scene.viewport().height;
        for (node, scrub) in &self.scrubs {
            let bounds = scene.get(*node)?.bounds.ok_or_else(|| {
                HeroError::evaluation(format!("scroll trigger node {} lost its bounds", node.0))
            })?;
            let p = scrub.trigger.progress(scroll_y, bounds, viewport_h);
            apply(
                &scrub.endpoints,
                scrub.ease.apply(p),
                scene,
                &mut BTreeMap::new(),
            )?;
        }
        Ok(())
    }

    /// Number of scroll bindings.
    pub fn scroll_bindings(&self) -> usize {
        self.scrubs.len()
    }
}

fn advance(
    inst: &mut Instance,
    local: f64,
    scene: &mut Scene,
    cues: &mut Vec<Cue>,
) -> HeroResult<()> {
    for (step, state) in inst.steps.iter().zip(inst.states.iter_mut()) {
        if local < step.start {
            continue;
        }

        if let StepState::Pending(pre) = state {
            let ends = match pre.take() {
                Some(ends) => ends,
                None => resolve(&step.tween, scene)?,
            };
            cues.extend(step.tween.on_start.iter().cloned());
            *state = StepState::Running(ends);
        }

        if let StepState::Running(ends) = state {
            let progress = if step.tween.duration <= 0.0 {
                1.0
            } else {
                ((local - step.start) / step.tween.duration).min(1.0)
            };
            apply(ends, step.tween.ease.apply(progress), scene, &mut inst.touched)?;
            if progress >= 1.0 {
                *state = StepState::Done;
            }
        }
    }
    Ok(())
}

fn resolve(tween: &Tween, scene: &Scene) -> HeroResult<Endpoints> {
    let mut tracks = Vec::new();
    match tween.kind {
        TweenKind::To | TweenKind::Set => {
            for (prop, to) in &tween.to {
                // Discrete properties without a current value start at their target.
                let from = scene
                    .computed(tween.target, *prop)?
                    .unwrap_or_else(|| to.clone());
                tracks.push((*prop, from, to.clone()));
            }
        }
        TweenKind::From => {
            for (prop, from) in &tween.from {
                let to = scene.computed(tween.target, *prop)?.ok_or_else(|| {
                    HeroError::evaluation(format!(
                        "node {} has no current {prop:?} to animate back to",
                        tween.target.0
                    ))
                })?;
                tracks.push((*prop, from.clone(), to));
            }
        }
        TweenKind::FromTo => {
            for (prop, from) in &tween.from {
                let to = tween.to.get(prop).ok_or_else(|| {
                    HeroError::animation(format!("fromTo is missing an end value for {prop:?}"))
                })?;
                tracks.push((*prop, from.clone(), to.clone()));
            }
        }
    }
    Ok(Endpoints {
        target: tween.target,
        tracks,
    })
}

fn apply(ends: &Endpoints, eased: f64, scene: &mut Scene, touched: &mut Touched) -> HeroResult<()> {
    let viewport = scene.viewport();
    for (prop, from, to) in &ends.tracks {
        let basis = match prop.axis() {
            Axis::Horizontal => viewport.width,
            Axis::Vertical => viewport.height,
        };
        let value = PropValue::lerp(from, to, eased, basis)?;
        if !touched.contains_key(&(ends.target, *prop)) {
            let prior = scene.inline(ends.target, *prop)?.cloned();
            touched.insert((ends.target, *prop), prior);
        }
        scene.set_inline(ends.target, *prop, value)?;
    }
    Ok(())
}

fn revert(touched: &Touched, scene: &mut Scene) -> HeroResult<()> {
    for ((node, prop), prior) in touched {
        scene.restore_inline(*node, *prop, prior.clone())?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/eval/driver.rs"]
mod tests;
