use crate::foundation::error::{PinwheelError, PinwheelResult};
use crate::foundation::math::mul_div255_u8;

/// Premultiplied RGBA8 pixel.
pub type PremulRgba8 = [u8; 4];

/// Source-over for premultiplied pixels.
pub fn over(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    match src[3] {
        0 => return dst,
        255 => return src,
        _ => {}
    }

    let inv = 255u16 - u16::from(src[3]);
    let mut out = [0u8; 4];
    for i in 0..4 {
        out[i] = src[i].saturating_add(mul_div255_u8(u16::from(dst[i]), inv));
    }
    out
}

/// Composite `src` (a `src_width`-wide premultiplied buffer) over `dst` at `origin`.
///
/// `dst` is `dst_width` pixels wide; the source rectangle must fit inside it.
pub fn over_region_in_place(
    dst: &mut [u8],
    dst_width: u32,
    src: &[u8],
    src_width: u32,
    origin: (u32, u32),
) -> PinwheelResult<()> {
    if !dst.len().is_multiple_of(4) || !src.len().is_multiple_of(4) {
        return Err(PinwheelError::validation(
            "over_region_in_place expects rgba8 buffers",
        ));
    }
    if src_width == 0 || dst_width == 0 {
        return Ok(());
    }
    let src_row = src_width as usize * 4;
    let dst_row = dst_width as usize * 4;
    if !src.len().is_multiple_of(src_row) || !dst.len().is_multiple_of(dst_row) {
        return Err(PinwheelError::validation(
            "over_region_in_place buffer length is not a whole number of rows",
        ));
    }
    let src_height = src.len() / src_row;
    let dst_height = dst.len() / dst_row;
    let (ox, oy) = (origin.0 as usize, origin.1 as usize);
    if ox + src_width as usize > dst_width as usize || oy + src_height > dst_height {
        return Err(PinwheelError::validation(format!(
            "layer {}x{} at ({ox}, {oy}) does not fit in {}x{} canvas",
            src_width, src_height, dst_width, dst_height
        )));
    }

    for (row, s_row) in src.chunks_exact(src_row).enumerate() {
        let start = (oy + row) * dst_row + ox * 4;
        let d_row = &mut dst[start..start + src_row];
        for (d, s) in d_row.chunks_exact_mut(4).zip(s_row.chunks_exact(4)) {
            let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]]);
            d.copy_from_slice(&out);
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
