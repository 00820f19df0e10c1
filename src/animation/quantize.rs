use std::collections::HashMap;

use color_quant::NeuQuant;
use image::imageops::{self, ColorMap};
use image::{RgbImage, RgbaImage};

use crate::animation::frame::IndexedImage;
use crate::foundation::core::Rgb8;
use crate::foundation::error::{PinwheelError, PinwheelResult};

/// Largest palette an indexed frame may carry.
pub const MAX_COLORS: usize = 256;

/// NeuQuant sampling factor (1 = best, 30 = fastest).
const NEUQUANT_SAMPLE_FACTOR: i32 = 10;

/// Reduce `img` to at most 256 colors.
///
/// Images that already fit are indexed exactly. Otherwise a NeuQuant palette is trained and
/// pixels are mapped onto it with Floyd–Steinberg error diffusion.
pub fn quantize_dithered(img: &RgbImage) -> PinwheelResult<IndexedImage> {
    let (w, h) = img.dimensions();
    if w == 0 || h == 0 {
        return Err(PinwheelError::geometry("cannot quantize an empty image"));
    }
    if let Some(exact) = exact_palette(img)? {
        return Ok(exact);
    }

    let mut rgba = RgbaImage::from_fn(w, h, |x, y| {
        let [r, g, b] = img.get_pixel(x, y).0;
        image::Rgba([r, g, b, 255])
    });
    let nq = NeuQuant::new(NEUQUANT_SAMPLE_FACTOR, MAX_COLORS, rgba.as_raw());
    let palette: Vec<Rgb8> = nq
        .color_map_rgb()
        .chunks_exact(3)
        .map(|c| Rgb8::new(c[0], c[1], c[2]))
        .collect();

    let indices = dither_to_indices(&mut rgba, &nq);
    IndexedImage::new(w, h, palette, indices)
}

/// Index `img` directly when it has no more than [`MAX_COLORS`] distinct colors.
fn exact_palette(img: &RgbImage) -> PinwheelResult<Option<IndexedImage>> {
    let mut lookup: HashMap<[u8; 3], u8> = HashMap::new();
    let mut palette = Vec::new();
    let mut indices = Vec::with_capacity(img.as_raw().len() / 3);
    for p in img.pixels() {
        let idx = match lookup.get(&p.0) {
            Some(&i) => i,
            None => {
                if palette.len() == MAX_COLORS {
                    return Ok(None);
                }
                let i = palette.len() as u8;
                palette.push(Rgb8::from(p.0));
                lookup.insert(p.0, i);
                i
            }
        };
        indices.push(idx);
    }
    IndexedImage::new(img.width(), img.height(), palette, indices).map(Some)
}

/// Floyd–Steinberg dither `rgba` onto `map` in place, then return its index plane.
fn dither_to_indices<M>(rgba: &mut RgbaImage, map: &M) -> Vec<u8>
where
    M: ColorMap<Color = image::Rgba<u8>>,
{
    imageops::dither(rgba, map);
    imageops::index_colors(rgba, map).into_raw()
}

#[cfg(test)]
#[path = "../../tests/unit/animation/quantize.rs"]
mod tests;
