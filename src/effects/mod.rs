//! Whole-image geometric effects.

/// Rotation about the image center with bicubic sampling.
pub mod rotate;
/// Radius-decaying polar twist.
pub mod swirl;
