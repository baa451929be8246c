/// Landing page components.
pub mod components;
/// View node arena and HTML rendering.
pub mod scene;
