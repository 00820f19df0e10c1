use image::RgbImage;

use crate::foundation::core::Rgb8;
use crate::foundation::error::{PinwheelError, PinwheelResult};
use crate::render::arc::WedgeLayer;
use crate::render::composite::over_region_in_place;

/// Square premultiplied RGBA8 drawing surface that wedge layers are merged onto.
#[derive(Clone, Debug)]
pub struct CanvasSurface {
    side: u32,
    data: Vec<u8>,
}

impl CanvasSurface {
    /// Opaque surface of `side × side` pixels filled with `background`.
    pub fn new(side: u32, background: Rgb8) -> PinwheelResult<Self> {
        if side == 0 {
            return Err(PinwheelError::geometry("canvas side must be > 0"));
        }
        let len = (side as usize)
            .checked_mul(side as usize)
            .and_then(|v| v.checked_mul(4))
            .ok_or_else(|| PinwheelError::geometry("canvas buffer size overflow"))?;
        let mut data = vec![0u8; len];
        let px = background.to_premul_rgba();
        for d in data.chunks_exact_mut(4) {
            d.copy_from_slice(&px);
        }
        Ok(Self { side, data })
    }

    /// Canvas side in pixels.
    pub fn side(&self) -> u32 {
        self.side
    }

    /// Raw premultiplied RGBA8 bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Source-over `layer` at its origin.
    pub fn composite(&mut self, layer: &WedgeLayer) -> PinwheelResult<()> {
        over_region_in_place(
            &mut self.data,
            self.side,
            layer.pixmap.data_as_u8_slice(),
            layer.width(),
            layer.origin,
        )
    }

    /// Merge layers in wedge-index order regardless of the order they were produced in.
    pub fn composite_ordered(&mut self, mut layers: Vec<WedgeLayer>) -> PinwheelResult<()> {
        layers.sort_by_key(|l| l.index);
        for layer in &layers {
            self.composite(layer)?;
        }
        Ok(())
    }

    /// Flatten into an RGB image.
    ///
    /// The surface starts opaque and source-over keeps it opaque, so premultiplied channels
    /// equal straight channels and alpha can be dropped.
    pub fn into_rgb(self) -> PinwheelResult<RgbImage> {
        let rgb: Vec<u8> = self
            .data
            .chunks_exact(4)
            .flat_map(|px| [px[0], px[1], px[2]])
            .collect();
        RgbImage::from_raw(self.side, self.side, rgb)
            .ok_or_else(|| PinwheelError::validation("canvas buffer does not match its side"))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/canvas.rs"]
mod tests;
