use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt as _, util::SubscriberInitExt as _};

/// Render a swirled pinwheel and save it as a looping GIF.
#[derive(Parser, Debug)]
#[command(name = "pinwheel", version)]
struct Cli {
    /// Output GIF path (defaults to `image.gif` on the Desktop).
    #[arg(long)]
    out: Option<PathBuf>,

    /// JSON config file; flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output frame size in pixels (the drawing canvas is twice this).
    #[arg(long)]
    size: Option<u32>,

    /// Playback rate in frames per second.
    #[arg(long)]
    fps: Option<u32>,

    /// Swirl strength in radians at the center.
    #[arg(long, allow_negative_numbers = true)]
    strength: Option<f64>,

    /// Swirl falloff radius in canvas pixels (defaults to size / 2).
    #[arg(long)]
    swirl_radius: Option<u32>,

    /// Override rayon worker threads.
    #[arg(long)]
    threads: Option<usize>,

    /// Fail instead of replacing an existing output file.
    #[arg(long, default_value_t = false)]
    no_overwrite: bool,

    /// Do not draw progress bars.
    #[arg(long, default_value_t = false)]
    no_progress: bool,

    /// Open the GIF with the platform viewer after writing it.
    #[arg(long, default_value_t = false)]
    open: bool,

    /// Print the effective config as JSON and exit.
    #[arg(long, default_value_t = false)]
    dump_config: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "pinwheel=info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let cfg = effective_config(&cli)?;
    if cli.dump_config {
        println!("{}", serde_json::to_string_pretty(&cfg)?);
        return Ok(());
    }

    let out = match cli.out.clone() {
        Some(p) => p,
        None => default_out_path(),
    };

    let mut pipeline = pinwheel::Pipeline::new(cfg)?;
    if !cli.no_progress {
        pipeline = pipeline.with_progress(Box::new(pinwheel::TerminalProgress::new()));
    }
    let mut encoder = pinwheel::GifFileEncoder::new(pinwheel::GifFileEncoderOpts {
        out_path: out.clone(),
        overwrite: !cli.no_overwrite,
    });
    let stats = pipeline
        .run(&mut encoder)
        .with_context(|| format!("render '{}'", out.display()))?;
    tracing::debug!(?stats, "render finished");

    println!("Saved GIF as: {}", out.display());

    if cli.open {
        open_file(&out)?;
    }
    Ok(())
}

fn effective_config(cli: &Cli) -> anyhow::Result<pinwheel::PinwheelConfig> {
    let mut cfg = match &cli.config {
        Some(path) => pinwheel::PinwheelConfig::from_path(path)?,
        None => pinwheel::PinwheelConfig::default(),
    };
    if let Some(v) = cli.size {
        cfg.size = v;
    }
    if let Some(v) = cli.fps {
        cfg.fps = v;
    }
    if let Some(v) = cli.strength {
        cfg.swirl_strength = v;
    }
    if cli.swirl_radius.is_some() {
        cfg.swirl_radius = cli.swirl_radius;
    }
    if cli.threads.is_some() {
        cfg.threads = cli.threads;
    }
    cfg.validate()?;
    Ok(cfg)
}

fn default_out_path() -> PathBuf {
    dirs::desktop_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join("image.gif")
}

fn open_file(path: &Path) -> anyhow::Result<()> {
    let mut cmd = if cfg!(target_os = "windows") {
        let mut c = std::process::Command::new("cmd");
        c.args(["/C", "start", ""]);
        c
    } else if cfg!(target_os = "macos") {
        std::process::Command::new("open")
    } else {
        std::process::Command::new("xdg-open")
    };
    cmd.arg(path)
        .spawn()
        .with_context(|| format!("open '{}'", path.display()))?;
    Ok(())
}
