//! Encoders consume a finished [`AnimationSequence`](crate::AnimationSequence) exactly once.

/// GIF container output.
pub mod gif;
/// Encoder trait and the in-memory sink.
pub mod sink;
