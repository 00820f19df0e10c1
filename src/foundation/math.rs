pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

pub(crate) fn mul_div255_u8(x: u16, y: u16) -> u8 {
    mul_div255_u16(x, y) as u8
}

/// Truncate toward zero, then clamp into `[0, len - 1]`.
///
/// `len` must be non-zero. NaN maps to 0.
pub(crate) fn trunc_clamp_index(v: f64, len: u32) -> u32 {
    let max = i64::from(len) - 1;
    (v as i64).clamp(0, max) as u32
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
