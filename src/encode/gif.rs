use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::animation::frame::{AnimationSequence, Disposal, LoopCount};
use crate::encode::sink::AnimationEncoder;
use crate::foundation::error::{PinwheelError, PinwheelResult};

/// Options for [`GifFileEncoder`].
#[derive(Clone, Debug)]
pub struct GifFileEncoderOpts {
    /// Output GIF path.
    pub out_path: PathBuf,
    /// Replace `out_path` if it already exists.
    pub overwrite: bool,
}

impl GifFileEncoderOpts {
    /// Options for writing a GIF to `out_path`, overwriting by default.
    pub fn new(out_path: impl Into<PathBuf>) -> Self {
        Self {
            out_path: out_path.into(),
            overwrite: true,
        }
    }
}

/// Writes an animated GIF89a file.
///
/// Bytes go to a temporary file next to the destination, which is renamed into place only
/// after the last frame and trailer are written.
#[derive(Clone, Debug)]
pub struct GifFileEncoder {
    opts: GifFileEncoderOpts,
}

impl GifFileEncoder {
    /// Create an encoder for `opts.out_path`.
    pub fn new(opts: GifFileEncoderOpts) -> Self {
        Self { opts }
    }

    /// Destination path.
    pub fn out_path(&self) -> &Path {
        &self.opts.out_path
    }
}

impl AnimationEncoder for GifFileEncoder {
    #[tracing::instrument(level = "debug", skip(self, seq), fields(path = %self.opts.out_path.display(), frames = seq.len()))]
    fn encode(&mut self, seq: &AnimationSequence) -> PinwheelResult<()> {
        let path = &self.opts.out_path;
        if !self.opts.overwrite && path.exists() {
            return Err(PinwheelError::validation(format!(
                "output file '{}' already exists",
                path.display()
            )));
        }
        let dir = ensure_parent_dir(path)?;

        let tmp = tempfile::Builder::new()
            .prefix(".pinwheel-")
            .suffix(".gif.tmp")
            .tempfile_in(&dir)
            .with_context(|| format!("create temporary file in '{}'", dir.display()))?;
        let writer = write_gif(BufWriter::new(tmp), seq)?;
        let tmp = writer
            .into_inner()
            .map_err(|e| PinwheelError::encoding(format!("flush GIF data: {}", e.error())))?;

        let persisted = if self.opts.overwrite {
            tmp.persist(path)
        } else {
            tmp.persist_noclobber(path)
        };
        persisted.map_err(|e| {
            PinwheelError::encoding(format!("write '{}': {}", path.display(), e.error))
        })?;
        tracing::debug!(bytes = ?std::fs::metadata(path).map(|m| m.len()).ok(), "gif written");
        Ok(())
    }
}

/// Encode `seq` as an animated GIF into `writer` and hand the writer back.
///
/// Every frame carries its own color table, the frame delay in centiseconds (truncated) and
/// the sequence's disposal method. Infinite looping writes the NETSCAPE loop count 0.
pub fn write_gif<W: Write>(writer: W, seq: &AnimationSequence) -> PinwheelResult<W> {
    let (w, h) = seq.dimensions();
    let width: u16 = w
        .try_into()
        .map_err(|_| PinwheelError::geometry("GIF width exceeds u16"))?;
    let height: u16 = h
        .try_into()
        .map_err(|_| PinwheelError::geometry("GIF height exceeds u16"))?;
    if seq.is_empty() {
        return Err(PinwheelError::validation("cannot encode an empty animation"));
    }

    let mut encoder = gif::Encoder::new(writer, width, height, &[])?;
    encoder.set_repeat(match seq.loop_count {
        LoopCount::Infinite => gif::Repeat::Infinite,
        LoopCount::Finite(n) => gif::Repeat::Finite(n),
    })?;

    let delay_cs = u16::try_from(seq.frame_delay_ms / 10).unwrap_or(u16::MAX);
    let dispose = match seq.disposal {
        Disposal::Keep => gif::DisposalMethod::Keep,
        Disposal::Background => gif::DisposalMethod::Background,
    };

    for frame in &seq.frames {
        let img = &frame.image;
        if img.indices.len() != usize::from(width) * usize::from(height) {
            return Err(PinwheelError::validation(format!(
                "frame {} index buffer does not match {}x{}",
                frame.index, width, height
            )));
        }
        let mut out = gif::Frame::from_palette_pixels(
            width,
            height,
            img.indices.as_slice(),
            img.palette_bytes(),
            None::<u8>,
        );
        out.delay = delay_cs;
        out.dispose = dispose;
        encoder.write_frame(&out)?;
    }

    encoder
        .into_inner()
        .map_err(|e| PinwheelError::encoding(format!("finish GIF stream: {e}")))
}

/// Create the parent directory of `path` and return it (`.` for bare file names).
pub fn ensure_parent_dir(path: &Path) -> PinwheelResult<PathBuf> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    std::fs::create_dir_all(&parent)
        .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    Ok(parent)
}

#[cfg(test)]
#[path = "../../tests/unit/encode/gif.rs"]
mod tests;
