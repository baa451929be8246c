/// Easing curves.
pub mod ease;
/// Scroll-linked triggers and scrub bindings.
pub mod scroll;
/// Timelines of tweens.
pub mod timeline;
/// Tween descriptors.
pub mod tween;
/// Animatable properties and values.
pub mod value;
