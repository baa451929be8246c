/// Page event handling and transitions.
pub mod controller;
/// Video index cycle.
pub mod cycle;
/// Load gate.
pub mod gate;
/// Heading markup per video.
pub mod headings;
/// Hero state value.
pub mod state;
