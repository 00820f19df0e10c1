use image::RgbImage;
use image::imageops::FilterType;
use rayon::prelude::*;

use crate::animation::frame::{Frame, IndexedImage};
use crate::animation::quantize::quantize_dithered;
use crate::effects::rotate::rotate_bicubic;
use crate::foundation::error::{PinwheelError, PinwheelResult};
use crate::progress::Progress;

/// Turns one canvas into `frame_count` evenly rotated, downsized, quantized frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameSequencer {
    frame_count: usize,
    output_size: u32,
    delay_ms: u32,
}

impl FrameSequencer {
    /// Sequencer producing `frame_count` frames of `output_size × output_size`.
    pub fn new(frame_count: usize, output_size: u32, delay_ms: u32) -> PinwheelResult<Self> {
        if frame_count == 0 {
            return Err(PinwheelError::geometry("frame count must be > 0"));
        }
        if output_size == 0 {
            return Err(PinwheelError::geometry("output size must be > 0"));
        }
        Ok(Self {
            frame_count,
            output_size,
            delay_ms,
        })
    }

    /// Number of frames produced.
    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    /// Rotation step between consecutive frames (integer degrees).
    pub fn step_degrees(&self) -> u32 {
        (360 / self.frame_count).min(360) as u32
    }

    /// Rotation applied to frame `index`.
    pub fn rotation_for(&self, index: usize) -> u32 {
        self.step_degrees() * index as u32
    }

    /// Build frame `index`: rotate (bicubic), resize (Lanczos3), quantize (dithered).
    pub fn frame(&self, src: &RgbImage, index: usize) -> PinwheelResult<Frame> {
        let rotation_deg = self.rotation_for(index);
        let rotated = rotate_bicubic(src, f64::from(rotation_deg));
        let resized = image::imageops::resize(
            &rotated,
            self.output_size,
            self.output_size,
            FilterType::Lanczos3,
        );
        let image: IndexedImage = quantize_dithered(&resized)?;
        Ok(Frame {
            index,
            rotation_deg,
            image,
            delay_ms: self.delay_ms,
        })
    }

    /// Build every frame in parallel, returned in index order.
    #[tracing::instrument(level = "debug", skip(self, src, progress), fields(frames = self.frame_count))]
    pub fn sequence(&self, src: &RgbImage, progress: &dyn Progress) -> PinwheelResult<Vec<Frame>> {
        if src.width() == 0 || src.height() == 0 {
            return Err(PinwheelError::geometry("cannot sequence an empty canvas"));
        }
        progress.start("frames", self.frame_count as u64);
        let rendered = (0..self.frame_count)
            .into_par_iter()
            .map(|i| {
                let frame = self.frame(src, i);
                progress.advance(1);
                frame
            })
            .collect::<Vec<_>>();
        progress.finish();

        let mut frames = Vec::with_capacity(rendered.len());
        for item in rendered {
            frames.push(item?);
        }
        Ok(frames)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/sequencer.rs"]
mod tests;
