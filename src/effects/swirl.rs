use image::RgbImage;
use rayon::prelude::*;

use crate::foundation::error::{PinwheelError, PinwheelResult};
use crate::foundation::math::trunc_clamp_index;

/// Radius-dependent angular distortion.
///
/// Every output pixel pulls exactly one input pixel: the one found by rotating its polar
/// angle (about the integer image center) by `strength * (radius - r) / radius`. The twist
/// fades linearly to zero at `radius`; pixels at or beyond it are copied unmoved. Sample
/// coordinates are truncated toward zero and clamped to the image, so strong twists smear
/// the border pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwirlTransform {
    strength: f64,
    radius: f64,
}

impl SwirlTransform {
    /// Build a swirl with `strength` radians at the center and falloff `radius` pixels.
    pub fn new(strength: f64, radius: u32) -> PinwheelResult<Self> {
        if !strength.is_finite() {
            return Err(PinwheelError::geometry("swirl strength must be finite"));
        }
        if radius == 0 {
            return Err(PinwheelError::geometry("swirl radius must be > 0"));
        }
        Ok(Self {
            strength,
            radius: f64::from(radius),
        })
    }

    /// Twist strength at the center, in radians.
    pub fn strength(&self) -> f64 {
        self.strength
    }

    /// Falloff radius in pixels.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Twist applied at distance `r` from the center.
    pub fn twist_at(&self, r: f64) -> f64 {
        if r < self.radius {
            self.strength * (self.radius - r) / self.radius
        } else {
            0.0
        }
    }

    /// Source pixel sampled for output pixel `(x, y)` of a `width × height` image.
    pub fn source_of(&self, x: u32, y: u32, width: u32, height: u32) -> (u32, u32) {
        let (cx, cy) = (f64::from(width / 2), f64::from(height / 2));
        let dx = f64::from(x) - cx;
        let dy = f64::from(y) - cy;
        let r = dx.hypot(dy);
        let twist = self.twist_at(r);
        if twist == 0.0 {
            return (x, y);
        }
        let theta = dy.atan2(dx) + twist;
        (
            trunc_clamp_index(r * theta.cos() + cx, width),
            trunc_clamp_index(r * theta.sin() + cy, height),
        )
    }

    /// Produce the swirled copy of `src`. Rows are computed in parallel.
    #[tracing::instrument(level = "debug", skip(self, src), fields(width = src.width(), height = src.height()))]
    pub fn apply(&self, src: &RgbImage) -> PinwheelResult<RgbImage> {
        let (w, h) = src.dimensions();
        if w == 0 || h == 0 {
            return Ok(src.clone());
        }
        let row_len = w as usize * 3;
        let input = src.as_raw();
        let mut out = vec![0u8; input.len()];

        out.par_chunks_mut(row_len)
            .enumerate()
            .for_each(|(y, row)| {
                let y = y as u32;
                for (x, px) in row.chunks_exact_mut(3).enumerate() {
                    let (sx, sy) = self.source_of(x as u32, y, w, h);
                    let i = sy as usize * row_len + sx as usize * 3;
                    px.copy_from_slice(&input[i..i + 3]);
                }
            });

        RgbImage::from_raw(w, h, out)
            .ok_or_else(|| PinwheelError::validation("swirl output buffer size mismatch"))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/swirl.rs"]
mod tests;
