use crate::foundation::error::HeroResult;
use crate::hero::cycle::VideoIndex;
use crate::hero::gate::{GateChange, LoadGate};

/// The index change a click produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct IndexChange {
    /// Index before the click.
    pub from: VideoIndex,
    /// Index after the click (the former upcoming index).
    pub to: VideoIndex,
    /// `true` when this click flipped the has-clicked latch.
    pub first_click: bool,
}

/// Hero reel state: current index, load gate and the has-clicked latch.
///
/// The upcoming index is always derived from the current one, and both latches (ready,
/// has-clicked) only move from false to true.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct HeroState {
    index: VideoIndex,
    gate: LoadGate,
    has_clicked: bool,
}

impl HeroState {
    /// Initial state: first video, nothing loaded, no click.
    pub fn new(total_videos: u32, gate: LoadGate) -> HeroResult<Self> {
        Ok(Self {
            index: VideoIndex::first(total_videos)?,
            gate,
            has_clicked: false,
        })
    }

    /// The visually dominant video.
    pub fn current(&self) -> VideoIndex {
        self.index
    }

    /// The video shown in the click preview, next in the cycle.
    pub fn upcoming(&self) -> VideoIndex {
        self.index.advance()
    }

    /// Whether the user has clicked at least once.
    pub fn has_clicked(&self) -> bool {
        self.has_clicked
    }

    /// Whether the load gate is open.
    pub fn is_ready(&self) -> bool {
        self.gate.is_ready()
    }

    /// Load events seen.
    pub fn loaded_count(&self) -> u32 {
        self.gate.loaded_count()
    }

    /// Borrow the load gate.
    pub fn gate(&self) -> &LoadGate {
        &self.gate
    }

    /// Apply a click: latch has-clicked and advance to the upcoming index.
    pub fn click(&mut self) -> IndexChange {
        let first_click = !self.has_clicked;
        self.has_clicked = true;
        let from = self.index;
        self.index = self.upcoming();
        IndexChange {
            from,
            to: self.index,
            first_click,
        }
    }

    /// Record a media load event.
    pub fn video_loaded(&mut self) -> GateChange {
        self.gate.on_video_loaded()
    }

    /// Let the gate's timeout fallback fire.
    pub fn poll(&mut self, now: f64) -> GateChange {
        self.gate.poll(now)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/hero/state.rs"]
mod tests;
