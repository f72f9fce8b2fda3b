mod replay;

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use touchbar::{RangeSelector, TouchbarConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_BAR_WIDTH_PX: f32 = 640.0;

const USAGE: &str = "usage: touchbar-replay [--config FILE] [--width PX] [--frames N] \
                     [--duration-ms MS] [--step-ms MS] SCRIPT";

struct Args {
    config: Option<PathBuf>,
    width: f32,
    frames: usize,
    duration_ms: u64,
    step: Option<Duration>,
    script: PathBuf,
}

fn main() -> Result<()> {
    init_tracing();

    let args = parse_args()?;
    let config = match &args.config {
        Some(path) => TouchbarConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => TouchbarConfig::default(),
    };
    let mut selector: RangeSelector = RangeSelector::from_config(&config)
        .context("building selector from config")?;
    let options = replay::ReplayOptions {
        hit_area: config.hit_area_half_width(args.width),
        frame_count: args.frames,
        duration_ms: args.duration_ms,
        step: args.step.unwrap_or(replay::DEFAULT_GESTURE_STEP),
        speeder: config.speeder(),
    };

    let script = File::open(&args.script)
        .with_context(|| format!("opening script {}", args.script.display()))?;
    let stdout = io::stdout();
    let summary = replay::replay(
        &mut selector,
        BufReader::new(script),
        stdout.lock(),
        options,
    )?;

    info!(
        gestures = summary.gestures,
        events = summary.events,
        haptics = summary.haptics,
        "replay finished"
    );
    Ok(())
}

fn parse_args() -> Result<Args> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        println!("{USAGE}");
        std::process::exit(0);
    }

    let config = args
        .opt_value_from_str("--config")
        .context("invalid --config")?;
    let width = args
        .opt_value_from_str("--width")
        .context("invalid --width")?
        .unwrap_or(DEFAULT_BAR_WIDTH_PX);
    let frames = args
        .opt_value_from_str("--frames")
        .context("invalid --frames")?
        .unwrap_or(0);
    let duration_ms = args
        .opt_value_from_str("--duration-ms")
        .context("invalid --duration-ms")?
        .unwrap_or(0);
    let step = args
        .opt_value_from_str("--step-ms")
        .context("invalid --step-ms")?
        .map(Duration::from_millis);
    let script = args
        .free_from_str()
        .with_context(|| format!("missing gesture script\n{USAGE}"))?;

    Ok(Args {
        config,
        width,
        frames,
        duration_ms,
        step,
        script,
    })
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init();
}
