use crate::foundation::error::{HeroError, HeroResult};

/// Why a [`LoadGate`] opened.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadyReason {
    /// The load quota was met.
    Loaded,
    /// The timeout fallback fired first.
    TimedOut,
}

/// Result of feeding an event to the gate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateChange {
    /// Readiness did not change.
    Unchanged,
    /// The gate opened with this event.
    Opened(ReadyReason),
}

/// Readiness gate counting media load events against a quota.
///
/// Every event counts; a video firing its load event twice is counted twice. Once open the gate
/// never closes.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct LoadGate {
    required: u32,
    loaded: u32,
    ready: Option<ReadyReason>,
    armed_at: f64,
    timeout: Option<f64>,
}

impl LoadGate {
    /// Gate requiring `required` load events, armed at `now`, with an optional timeout fallback.
    pub fn new(required: u32, timeout_secs: Option<f64>, now: f64) -> HeroResult<Self> {
        if let Some(t) = timeout_secs
            && (!t.is_finite() || t <= 0.0)
        {
            return Err(HeroError::validation(format!(
                "load timeout must be finite and > 0, got {t}"
            )));
        }
        Ok(Self {
            required,
            loaded: 0,
            ready: (required == 0).then_some(ReadyReason::Loaded),
            armed_at: now,
            timeout: timeout_secs,
        })
    }

    /// Record one media load event.
    pub fn on_video_loaded(&mut self) -> GateChange {
        self.loaded = self.loaded.saturating_add(1);
        if self.ready.is_none() && self.loaded >= self.required {
            self.ready = Some(ReadyReason::Loaded);
            return GateChange::Opened(ReadyReason::Loaded);
        }
        GateChange::Unchanged
    }

    /// Open the gate if the timeout elapsed by `now`.
    pub fn poll(&mut self, now: f64) -> GateChange {
        match self.timeout {
            Some(t) if self.ready.is_none() && now - self.armed_at >= t => {
                self.ready = Some(ReadyReason::TimedOut);
                GateChange::Opened(ReadyReason::TimedOut)
            }
            _ => GateChange::Unchanged,
        }
    }

    /// `true` once open.
    pub fn is_ready(&self) -> bool {
        self.ready.is_some()
    }

    /// Why the gate opened, if it did.
    pub fn ready_reason(&self) -> Option<ReadyReason> {
        self.ready
    }

    /// Load events seen so far.
    pub fn loaded_count(&self) -> u32 {
        self.loaded
    }

    /// Quota of load events.
    pub fn required(&self) -> u32 {
        self.required
    }
}

#[cfg(test)]
#[path = "../../tests/unit/hero/gate.rs"]
mod tests;
