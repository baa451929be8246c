use crate::animation::tween::Tween;
use crate::foundation::error::{HeroError, HeroResult};

/// Where a step starts relative to the timeline built so far.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    /// After every step added so far has ended.
    Sequential,
    /// Together with the previously added step.
    WithPrevious,
    /// At an absolute offset in seconds.
    At(f64),
}

/// One step of a [`Timeline`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Step {
    /// The tween to run.
    pub tween: Tween,
    /// Start placement.
    pub position: Position,
}

/// A step with its start time resolved.
#[derive(Clone, Debug, PartialEq)]
pub struct ScheduledStep {
    /// Start offset from the timeline origin, seconds.
    pub start: f64,
    /// The tween to run.
    pub tween: Tween,
}

impl ScheduledStep {
    /// End offset from the timeline origin, seconds.
    pub fn end(&self) -> f64 {
        self.start + self.tween.duration
    }
}

/// Ordered sequence of tweens. Steps apply in declared order.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Timeline {
    /// Steps in declared order.
    pub steps: Vec<Step>,
}

impl Timeline {
    /// Empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `tween` after everything added so far.
    pub fn then(self, tween: Tween) -> Self {
        self.push(tween, Position::Sequential)
    }

    /// Append `tween` starting with the previous step.
    pub fn with_previous(self, tween: Tween) -> Self {
        self.push(tween, Position::WithPrevious)
    }

    /// Append `tween` at an absolute offset.
    pub fn at(self, secs: f64, tween: Tween) -> Self {
        self.push(tween, Position::At(secs))
    }

    fn push(mut self, tween: Tween, position: Position) -> Self {
        self.steps.push(Step { tween, position });
        self
    }

    /// `true` when no steps were added.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Validate every step and resolve start offsets.
    pub fn schedule(&self) -> HeroResult<Vec<ScheduledStep>> {
        let mut out: Vec<ScheduledStep> = Vec::with_capacity(self.steps.len());
        let mut end = 0.0f64;
        for (i, step) in self.steps.iter().enumerate() {
            step.tween
                .validate()
                .map_err(|e| HeroError::animation(format!("timeline step {i}: {e}")))?;
            let start = match step.position {
                Position::Sequential => end,
                Position::WithPrevious => out.last().map_or(0.0, |s| s.start),
                Position::At(t) => {
                    if !t.is_finite() || t < 0.0 {
                        return Err(HeroError::animation(format!(
                            "timeline step {i}: position must be finite and >= 0"
                        )));
                    }
                    t
                }
            };
            let scheduled = ScheduledStep {
                start,
                tween: step.tween.clone(),
            };
            end = end.max(scheduled.end());
            out.push(scheduled);
        }
        Ok(out)
    }

    /// Total duration in seconds.
    pub fn duration(&self) -> HeroResult<f64> {
        Ok(self
            .schedule()?
            .iter()
            .map(ScheduledStep::end)
            .fold(0.0, f64::max))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timeline.rs"]
mod tests;
