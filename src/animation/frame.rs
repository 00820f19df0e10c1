use image::RgbImage;

use crate::foundation::core::Rgb8;
use crate::foundation::error::{PinwheelError, PinwheelResult};

/// Palette-indexed image with at most 256 colors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexedImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Color table; `indices` point into it.
    pub palette: Vec<Rgb8>,
    /// Row-major palette indices, `width * height` long.
    pub indices: Vec<u8>,
}

impl IndexedImage {
    /// Build an indexed image, checking buffer and palette sizes.
    pub fn new(
        width: u32,
        height: u32,
        palette: Vec<Rgb8>,
        indices: Vec<u8>,
    ) -> PinwheelResult<Self> {
        if palette.is_empty() || palette.len() > 256 {
            return Err(PinwheelError::validation(format!(
                "indexed palette must have 1..=256 entries, got {}",
                palette.len()
            )));
        }
        if indices.len() != width as usize * height as usize {
            return Err(PinwheelError::validation(format!(
                "index buffer has {} entries, expected {}x{}",
                indices.len(),
                width,
                height
            )));
        }
        if let Some(bad) = indices.iter().find(|&&i| usize::from(i) >= palette.len()) {
            return Err(PinwheelError::validation(format!(
                "index {bad} out of range for {}-entry palette",
                palette.len()
            )));
        }
        Ok(Self {
            width,
            height,
            palette,
            indices,
        })
    }

    /// Palette as packed `rgbrgb...` bytes.
    pub fn palette_bytes(&self) -> Vec<u8> {
        self.palette.iter().flat_map(|c| c.to_array()).collect()
    }

    /// Expand back to RGB.
    pub fn to_rgb(&self) -> RgbImage {
        RgbImage::from_fn(self.width, self.height, |x, y| {
            let i = self.indices[(y * self.width + x) as usize];
            self.palette[usize::from(i)].into()
        })
    }
}

/// One animation frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    /// Position in the animation.
    pub index: usize,
    /// Counter-clockwise rotation of the source canvas, in degrees.
    pub rotation_deg: u32,
    /// Quantized pixels.
    pub image: IndexedImage,
    /// Display time in milliseconds.
    pub delay_ms: u32,
}

/// How often the animation repeats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum LoopCount {
    /// Loop forever.
    Infinite,
    /// Play this many extra times after the first.
    Finite(u16),
}

/// What happens to a frame's pixels before the next one is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Disposal {
    /// Leave the frame in place.
    Keep,
    /// Restore the frame area to the background.
    Background,
}

/// Ordered frames plus playback settings, handed to an encoder once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnimationSequence {
    /// Frames in playback order.
    pub frames: Vec<Frame>,
    /// Display time for every frame.
    pub frame_delay_ms: u32,
    /// Repeat behaviour.
    pub loop_count: LoopCount,
    /// Disposal between frames.
    pub disposal: Disposal,
}

impl AnimationSequence {
    /// Assemble a sequence, checking that frames are in index order and share one size and
    /// one delay equal to `frame_delay_ms`.
    pub fn new(
        frames: Vec<Frame>,
        frame_delay_ms: u32,
        loop_count: LoopCount,
        disposal: Disposal,
    ) -> PinwheelResult<Self> {
        let Some(first) = frames.first() else {
            return Err(PinwheelError::validation(
                "animation needs at least one frame",
            ));
        };
        let dims = (first.image.width, first.image.height);
        for (i, f) in frames.iter().enumerate() {
            if f.index != i {
                return Err(PinwheelError::validation(format!(
                    "frame at position {i} has index {}",
                    f.index
                )));
            }
            if f.delay_ms != frame_delay_ms {
                return Err(PinwheelError::validation(format!(
                    "frame {i} delay {} ms differs from sequence delay {frame_delay_ms} ms",
                    f.delay_ms
                )));
            }
            if (f.image.width, f.image.height) != dims {
                return Err(PinwheelError::validation(format!(
                    "frame {i} is {}x{}, expected {}x{}",
                    f.image.width, f.image.height, dims.0, dims.1
                )));
            }
        }
        Ok(Self {
            frames,
            frame_delay_ms,
            loop_count,
            disposal,
        })
    }

    /// Frame dimensions.
    pub fn dimensions(&self) -> (u32, u32) {
        self.frames
            .first()
            .map(|f| (f.image.width, f.image.height))
            .unwrap_or((0, 0))
    }

    /// Number of frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Return `true` when there are no frames.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/frame.rs"]
mod tests;
