pub use kurbo::{Point, Rect};

/// Straight (non-premultiplied) 8-bit RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Build a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Opaque black.
    pub const fn black() -> Self {
        Self::new(0, 0, 0)
    }

    /// Channels as `[r, g, b]`.
    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Opaque premultiplied RGBA8 (alpha 255 leaves channels unchanged).
    pub fn to_premul_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }
}

impl From<[u8; 3]> for Rgb8 {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

impl From<Rgb8> for image::Rgb<u8> {
    fn from(c: Rgb8) -> Self {
        image::Rgb(c.to_array())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
