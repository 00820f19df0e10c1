//! Pinwheel renders a swirled, multi-colored pinwheel and encodes it as a looping GIF.
//!
//! Pipeline:
//!
//! 1. draw one wedge of concentric arcs per palette entry (in parallel, merged in order)
//! 2. twist the canvas with a [`SwirlTransform`]
//! 3. rotate, downsize and quantize it into evenly spaced frames ([`FrameSequencer`])
//! 4. hand the [`AnimationSequence`] to an [`AnimationEncoder`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Frames, quantization and frame sequencing.
pub mod animation;
/// Render parameters.
pub mod config;
/// Whole-image geometric effects.
pub mod effects;
/// Animation encoders.
pub mod encode;
/// The fixed wedge palette.
pub mod palette;
/// Orchestration of the full render.
pub mod pipeline;
/// Progress observers.
pub mod progress;
/// Arc rendering and compositing.
pub mod render;

pub use crate::foundation::core::{Point, Rect, Rgb8};
pub use crate::foundation::error::{PinwheelError, PinwheelResult};

pub use crate::animation::frame::{AnimationSequence, Disposal, Frame, IndexedImage, LoopCount};
pub use crate::animation::quantize::quantize_dithered;
pub use crate::animation::sequencer::FrameSequencer;
pub use crate::config::PinwheelConfig;
pub use crate::effects::rotate::rotate_bicubic;
pub use crate::effects::swirl::SwirlTransform;
pub use crate::encode::gif::{GifFileEncoder, GifFileEncoderOpts, write_gif};
pub use crate::encode::sink::{AnimationEncoder, InMemoryEncoder};
pub use crate::palette::ColorPalette;
pub use crate::pipeline::{Pipeline, PipelineStats};
pub use crate::progress::{NoProgress, Progress, TerminalProgress};
pub use crate::render::arc::{ArcRenderer, WedgeLayer, WedgeSpec, uncovered_degrees, wedge_specs};
pub use crate::render::canvas::CanvasSurface;
