use std::time::Instant;

use image::RgbImage;
use rayon::prelude::*;

use crate::animation::frame::{AnimationSequence, Disposal, LoopCount};
use crate::animation::sequencer::FrameSequencer;
use crate::config::PinwheelConfig;
use crate::effects::swirl::SwirlTransform;
use crate::encode::sink::AnimationEncoder;
use crate::foundation::core::{Point, Rgb8};
use crate::foundation::error::{PinwheelError, PinwheelResult};
use crate::palette::ColorPalette;
use crate::progress::{NoProgress, Progress};
use crate::render::arc::{ArcRenderer, WedgeLayer, uncovered_degrees, wedge_specs};
use crate::render::canvas::CanvasSurface;

/// Counters collected during a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PipelineStats {
    /// Side of the drawing canvas.
    pub canvas_side: u32,
    /// Wedges that produced a layer.
    pub wedges_drawn: usize,
    /// Arc strokes issued across all wedges.
    pub arc_strokes: u64,
    /// Degrees of the circle no wedge covers.
    pub uncovered_degrees: u32,
    /// Frames in the animation.
    pub frames: usize,
    /// Per-frame display time in milliseconds.
    pub frame_delay_ms: u32,
}

/// Arcs → swirl → frames → encoder.
///
/// Arc wedges are drawn in parallel into private layers; the join barrier is the end of the
/// parallel collect, after which layers are merged in wedge order. Swirl and frame sequencing
/// run after that, each on the same rayon pool.
pub struct Pipeline {
    cfg: PinwheelConfig,
    palette: ColorPalette,
    progress: Box<dyn Progress>,
}

impl Pipeline {
    /// Validate `cfg` and build a pipeline with the standard palette and no progress output.
    pub fn new(cfg: PinwheelConfig) -> PinwheelResult<Self> {
        cfg.validate()?;
        Ok(Self {
            cfg,
            palette: ColorPalette::standard(),
            progress: Box::new(NoProgress),
        })
    }

    /// Replace the palette (and with it the wedge and frame count).
    pub fn with_palette(mut self, palette: ColorPalette) -> PinwheelResult<Self> {
        if palette.is_empty() {
            return Err(PinwheelError::geometry("palette must not be empty"));
        }
        self.palette = palette;
        Ok(self)
    }

    /// Report phase progress to `progress`.
    pub fn with_progress(mut self, progress: Box<dyn Progress>) -> Self {
        self.progress = progress;
        self
    }

    /// Effective configuration.
    pub fn config(&self) -> &PinwheelConfig {
        &self.cfg
    }

    /// Wheel center in continuous canvas coordinates.
    ///
    /// This is the middle of pixel `(size, size)`, the same pixel the swirl pivots on.
    pub fn hub(&self) -> Point {
        let c = f64::from(self.cfg.size) + 0.5;
        Point::new(c, c)
    }

    /// Draw every wedge and return the flattened canvas.
    #[tracing::instrument(level = "debug", skip(self, pool))]
    pub fn render_canvas(&self, pool: &rayon::ThreadPool) -> PinwheelResult<(RgbImage, PipelineStats)> {
        let side = self.cfg.canvas_side();
        let renderer = ArcRenderer::new(side)?;
        let radius = i32::try_from(self.cfg.arc_radius())
            .map_err(|_| PinwheelError::geometry("arc radius exceeds i32"))?;
        let specs = wedge_specs(&self.palette, self.hub(), radius);

        let uncovered = uncovered_degrees(self.palette.len());
        if uncovered > 0 {
            tracing::warn!(
                uncovered,
                palette_len = self.palette.len(),
                "palette length does not divide 360; a sliver of the wheel stays empty"
            );
        }

        let progress = self.progress.as_ref();
        progress.start("arcs", specs.len() as u64);
        let rendered = pool.install(|| {
            specs
                .par_iter()
                .map(|spec| -> PinwheelResult<Option<WedgeLayer>> {
                    let layer = renderer.render(spec);
                    progress.advance(1);
                    layer
                })
                .collect::<Vec<_>>()
        });
        progress.finish();

        let mut layers = Vec::with_capacity(rendered.len());
        for item in rendered {
            if let Some(layer) = item? {
                layers.push(layer);
            }
        }

        let stats = PipelineStats {
            canvas_side: side,
            wedges_drawn: layers.len(),
            arc_strokes: layers.iter().map(|l| u64::from(l.strokes)).sum(),
            uncovered_degrees: uncovered,
            ..PipelineStats::default()
        };

        let mut surface = CanvasSurface::new(side, Rgb8::black())?;
        surface.composite_ordered(layers)?;
        Ok((surface.into_rgb()?, stats))
    }

    /// Apply the configured swirl to `canvas`.
    pub fn swirl(&self, canvas: &RgbImage, pool: &rayon::ThreadPool) -> PinwheelResult<RgbImage> {
        let swirl = SwirlTransform::new(self.cfg.swirl_strength, self.cfg.swirl_radius())?;
        pool.install(|| swirl.apply(canvas))
    }

    /// Produce the finished animation without encoding it.
    #[tracing::instrument(level = "info", skip(self), fields(size = self.cfg.size, fps = self.cfg.fps))]
    pub fn render(&self) -> PinwheelResult<(AnimationSequence, PipelineStats)> {
        let pool = build_thread_pool(self.cfg.threads)?;

        let t0 = Instant::now();
        let (canvas, mut stats) = self.render_canvas(&pool)?;
        tracing::info!(
            wedges = stats.wedges_drawn,
            strokes = stats.arc_strokes,
            elapsed_ms = t0.elapsed().as_millis() as u64,
            "arcs drawn"
        );

        let t1 = Instant::now();
        let swirled = self.swirl(&canvas, &pool)?;
        drop(canvas);
        tracing::info!(elapsed_ms = t1.elapsed().as_millis() as u64, "swirl applied");

        let t2 = Instant::now();
        let delay_ms = self.cfg.frame_delay_ms();
        let sequencer = FrameSequencer::new(self.palette.len(), self.cfg.output_size(), delay_ms)?;
        let frames = pool.install(|| sequencer.sequence(&swirled, self.progress.as_ref()))?;
        tracing::info!(
            frames = frames.len(),
            elapsed_ms = t2.elapsed().as_millis() as u64,
            "frames sequenced"
        );

        stats.frames = frames.len();
        stats.frame_delay_ms = delay_ms;
        let seq = AnimationSequence::new(frames, delay_ms, LoopCount::Infinite, Disposal::Background)?;
        Ok((seq, stats))
    }

    /// Render and hand the animation to `encoder`.
    pub fn run(&self, encoder: &mut dyn AnimationEncoder) -> PinwheelResult<PipelineStats> {
        let (seq, stats) = self.render()?;
        let t = Instant::now();
        encoder.encode(&seq)?;
        tracing::info!(elapsed_ms = t.elapsed().as_millis() as u64, "animation encoded");
        Ok(stats)
    }
}

/// `threads` has already been validated by [`PinwheelConfig::validate`].
fn build_thread_pool(threads: Option<usize>) -> PinwheelResult<rayon::ThreadPool> {
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| PinwheelError::Other(anyhow::anyhow!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;
