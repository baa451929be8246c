//! Hero video transition sequencer for a landing page.
//!
//! The hero shows one full-frame video and a small preview of the next one. Clicking the preview
//! grows it to full frame while the heading rotates out and back in with the new title. Scrolling
//! unclips the video frame.
//!
//! - Build a [`HeroController`] from a [`HeroConfig`]
//! - Feed it clicks, video load events, ticks and scroll offsets
//! - Inspect the [`Scene`] or render it as HTML
//!
//! Animations are plain descriptors ([`Tween`], [`Timeline`], [`ScrubBinding`]) interpreted by a
//! [`Driver`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// Animation descriptors.
pub mod animation;
/// Page configuration.
pub mod config;
/// Descriptor interpretation.
pub mod eval;
/// Foundation types.
pub mod foundation;
/// Hero state machine and controller.
pub mod hero;
/// Scripted page events and frame snapshots.
pub mod script;
/// View tree and components.
pub mod view;

pub use crate::animation::ease::Ease;
pub use crate::animation::scroll::{Anchor, ScrollPoint, ScrollTrigger, ScrubBinding};
pub use crate::animation::timeline::{Position, Timeline};
pub use crate::animation::tween::{Cue, Tween, TweenKind};
pub use crate::animation::value::{Property, PropValue, Visibility};
pub use crate::config::{ClickPolicy, HeroConfig, RevealConfig, TransitionConfig};
pub use crate::eval::driver::{Channel, Driver, PlayOpts};
pub use crate::foundation::core::{
    ClipPolygon, CornerRadii, Fps, Length, NodeId, Point, Rect, Size,
};
pub use crate::foundation::error::{HeroError, HeroResult};
pub use crate::hero::controller::{ClickOutcome, HeroController};
pub use crate::hero::cycle::VideoIndex;
pub use crate::hero::gate::{GateChange, LoadGate, ReadyReason};
pub use crate::hero::state::{HeroState, IndexChange};
pub use crate::script::{FrameSnapshot, Script, ScriptEvent, run_script};
pub use crate::view::scene::{Node, Scene};
