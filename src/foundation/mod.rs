/// Core value types: handles, lengths, shapes, frame rate.
pub mod core;
/// Error type and result alias.
pub mod error;
