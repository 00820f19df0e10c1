use std::path::Path;

use anyhow::Context as _;

use crate::foundation::error::{PinwheelError, PinwheelResult};

/// Largest canvas side `vello_cpu` pixmaps can address.
pub const MAX_CANVAS_SIDE: u32 = u16::MAX as u32;

/// Render parameters.
///
/// Everything else (palette, wedge layout, filters) is fixed.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PinwheelConfig {
    /// Output frame side in pixels. The drawing canvas is twice this.
    pub size: u32,
    /// Target playback rate; each frame is shown for `1000 / fps` ms.
    pub fps: u32,
    /// Maximum swirl twist in radians, applied at the canvas center.
    pub swirl_strength: f64,
    /// Swirl falloff radius in canvas pixels. `None` means `size / 2`.
    pub swirl_radius: Option<u32>,
    /// Worker thread override for the render pool.
    pub threads: Option<usize>,
}

impl Default for PinwheelConfig {
    fn default() -> Self {
        Self {
            size: 512,
            fps: 30,
            swirl_strength: 2.0,
            swirl_radius: None,
            threads: None,
        }
    }
}

impl PinwheelConfig {
    /// Load a JSON config file. Missing fields take their defaults.
    pub fn from_path(path: &Path) -> PinwheelResult<Self> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        let cfg: Self = serde_json::from_slice(&bytes)
            .with_context(|| format!("parse config JSON '{}'", path.display()))?;
        Ok(cfg)
    }

    /// Reject configurations that cannot produce a picture.
    pub fn validate(&self) -> PinwheelResult<()> {
        if self.size == 0 {
            return Err(PinwheelError::geometry("size must be > 0"));
        }
        if self.size > MAX_CANVAS_SIDE / 2 {
            return Err(PinwheelError::geometry(format!(
                "size {} exceeds the maximum of {} (canvas side is 2 * size)",
                self.size,
                MAX_CANVAS_SIDE / 2
            )));
        }
        if self.fps == 0 {
            return Err(PinwheelError::geometry("fps must be > 0"));
        }
        if !self.swirl_strength.is_finite() {
            return Err(PinwheelError::geometry("swirl_strength must be finite"));
        }
        if self.swirl_radius() == 0 {
            return Err(PinwheelError::geometry("swirl radius must be > 0"));
        }
        if let Some(n) = self.threads
            && n == 0
        {
            return Err(PinwheelError::geometry("threads must be >= 1 when set"));
        }
        Ok(())
    }

    /// Side of the square drawing canvas.
    pub fn canvas_side(&self) -> u32 {
        self.size * 2
    }

    /// Outer radius of the pinwheel arcs.
    pub fn arc_radius(&self) -> u32 {
        self.size / 2
    }

    /// Effective swirl radius.
    pub fn swirl_radius(&self) -> u32 {
        self.swirl_radius.unwrap_or(self.size / 2)
    }

    /// Per-frame display time in milliseconds (truncating).
    pub fn frame_delay_ms(&self) -> u32 {
        1000 / self.fps.max(1)
    }

    /// Side of each encoded frame.
    pub fn output_size(&self) -> u32 {
        self.size
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
