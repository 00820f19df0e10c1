//! From swirled canvas to an ordered sequence of indexed frames.

/// Indexed frames and the animation container model.
pub mod frame;
/// Palette reduction with error-diffusion dithering.
pub mod quantize;
/// Rotation/resize/quantize per frame, in index order.
pub mod sequencer;
