//! Progress observers.
//!
//! The pipeline reports each phase as `start(total) → advance(n)* → finish()`. Observers are
//! shared with rayon workers, so they must be `Sync`.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::Mutex;

/// Observer for long-running pipeline phases.
pub trait Progress: Sync {
    /// A phase with `total` units of work begins.
    fn start(&self, phase: &str, total: u64);
    /// `n` more units completed.
    fn advance(&self, n: u64);
    /// The current phase ended.
    fn finish(&self);
}

/// Discards all progress events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoProgress;

impl Progress for NoProgress {
    fn start(&self, _phase: &str, _total: u64) {}
    fn advance(&self, _n: u64) {}
    fn finish(&self) {}
}

/// Terminal progress bar on stderr, one bar per phase.
#[derive(Default)]
pub struct TerminalProgress {
    bar: Mutex<Option<ProgressBar>>,
}

impl TerminalProgress {
    /// Create an idle bar; nothing is drawn until a phase starts.
    pub fn new() -> Self {
        Self::default()
    }

    fn style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{msg:>8} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-")
    }
}

impl Progress for TerminalProgress {
    fn start(&self, phase: &str, total: u64) {
        let bar = ProgressBar::with_draw_target(Some(total), ProgressDrawTarget::stderr());
        bar.set_style(Self::style());
        bar.set_message(phase.to_string());
        if let Ok(mut slot) = self.bar.lock()
            && let Some(prev) = slot.replace(bar)
        {
            prev.finish_and_clear();
        }
    }

    fn advance(&self, n: u64) {
        if let Ok(slot) = self.bar.lock()
            && let Some(bar) = slot.as_ref()
        {
            bar.inc(n);
        }
    }

    fn finish(&self) {
        if let Ok(mut slot) = self.bar.lock()
            && let Some(bar) = slot.take()
        {
            bar.finish();
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/progress.rs"]
mod tests;
