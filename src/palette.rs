//! The fixed pinwheel palette.
//!
//! Wedge `i` is painted with `palette[i]`, so entry order decides where each hue lands.

use crate::foundation::core::Rgb8;

/// The twelve base hues, walking the color wheel from red.
pub const BASE_HUES: [Rgb8; 12] = [
    Rgb8::new(255, 0, 0),
    Rgb8::new(255, 127, 0),
    Rgb8::new(255, 255, 0),
    Rgb8::new(127, 255, 0),
    Rgb8::new(0, 255, 0),
    Rgb8::new(0, 255, 127),
    Rgb8::new(0, 255, 255),
    Rgb8::new(0, 127, 255),
    Rgb8::new(0, 0, 255),
    Rgb8::new(127, 0, 255),
    Rgb8::new(255, 0, 255),
    Rgb8::new(255, 0, 127),
];

/// How many times the base hues are repeated around the wheel.
pub const HUE_REPEATS: usize = 5;

/// Ordered, repeatable sequence of wedge colors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorPalette {
    colors: Vec<Rgb8>,
}

impl ColorPalette {
    /// The standard 60-entry palette: [`BASE_HUES`] repeated [`HUE_REPEATS`] times.
    pub fn standard() -> Self {
        Self::repeated(&BASE_HUES, HUE_REPEATS)
    }

    /// Concatenate `hues` with itself `times` times.
    pub fn repeated(hues: &[Rgb8], times: usize) -> Self {
        let mut colors = Vec::with_capacity(hues.len() * times);
        for _ in 0..times {
            colors.extend_from_slice(hues);
        }
        Self { colors }
    }

    /// Build a palette from an explicit color list.
    pub fn from_colors(colors: Vec<Rgb8>) -> Self {
        Self { colors }
    }

    /// Number of entries (also the number of wedges and animation frames).
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Return `true` when the palette has no entries.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color for wedge `index`.
    pub fn get(&self, index: usize) -> Option<Rgb8> {
        self.colors.get(index).copied()
    }

    /// Iterate colors in wedge order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Rgb8> + '_ {
        self.colors.iter().copied()
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
#[path = "../tests/unit/palette.rs"]
mod tests;
