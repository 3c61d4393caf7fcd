//! Writes a reconstruction run to a 3-channel WAV file.
//!
//! Channel 1 is the ground truth, channel 2 the held staircase and channel 3
//! the smoothed output. Open the file in any editor that shows waveforms to
//! compare them.
//!
//! Run with: cargo run --example export_traces --features wav-export -- traces.wav

use anyhow::{Context, Result};
use clap::Parser;
use holdramp::export::write_wav;
use holdramp::{Reconstruction, ReconstructionConfig};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(about = "Export signal, held and smoothed traces as WAV")]
struct Cli {
    /// Output file
    output: PathBuf,

    /// Ticks to simulate
    #[arg(long, default_value_t = 5000)]
    ticks: usize,

    /// Ticks between fresh readings of the source
    #[arg(long, env = "HOLDRAMP_HOLD_INTERVAL", default_value_t = 40)]
    hold_interval: usize,

    /// Phase advance of the sine source per tick, in radians
    #[arg(long, default_value_t = 0.01)]
    sine_step: f64,

    /// Sample rate written into the WAV header
    #[arg(long, default_value_t = 1000)]
    tick_rate: u32,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = ReconstructionConfig::default()
        .with_hold_interval(cli.hold_interval)
        .with_sine_step(cli.sine_step);

    let frames = Reconstruction::sine(&config)?.run(cli.ticks)?;
    write_wav(&cli.output, &frames, cli.tick_rate)
        .with_context(|| format!("writing {}", cli.output.display()))?;

    info!(ticks = frames.len(), path = %cli.output.display(), "traces exported");
    Ok(())
}
