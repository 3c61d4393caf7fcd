//! Live terminal plot of a held signal and its linear reconstruction.
//!
//! Three traces scroll from right to left: the ground truth, the staircase
//! published by the sample-and-hold stage and the smoothed estimate trailing
//! one hold interval behind.
//!
//! Run with: cargo run --example staircase_plot -- --hold-interval 40
//! Press q or Esc to quit.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use crossterm::{
    ExecutableCommand, QueueableCommand, cursor,
    event::{self, Event, KeyCode},
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{
        self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
        enable_raw_mode,
    },
};
use holdramp::{
    FrameHistory, RandomWalk, Reconstruction, ReconstructionConfig, Signal, SignalExt,
    SineOscillator, StartupPolicy, WhiteNoise,
};
use std::io::{Write, stdout};
use std::panic;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Source {
    /// Pure sine wave
    Sine,
    /// Sine wave with a little white noise on top
    NoisySine,
    /// Bounded random walk
    Walk,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Startup {
    /// Start from zero and accept the first-tick transient
    Zero,
    /// Seed from the first held value
    First,
}

impl From<Startup> for StartupPolicy {
    fn from(startup: Startup) -> Self {
        match startup {
            Startup::Zero => StartupPolicy::ZeroSeeded,
            Startup::First => StartupPolicy::SeedFromFirst,
        }
    }
}

#[derive(Debug, Parser)]
#[command(about = "Plot a sampled signal and its linear reconstruction")]
struct Cli {
    /// Ticks between fresh readings of the source
    #[arg(long, env = "HOLDRAMP_HOLD_INTERVAL", default_value_t = 40)]
    hold_interval: usize,

    /// Phase advance of the sine source per tick, in radians
    #[arg(long, default_value_t = 0.01)]
    sine_step: f64,

    /// Ticks kept on screen
    #[arg(long, default_value_t = 1000)]
    history: usize,

    #[arg(long, value_enum, default_value_t = Source::Sine)]
    source: Source,

    #[arg(long, value_enum, default_value_t = Startup::Zero)]
    startup: Startup,

    /// Delay between redraws, in milliseconds
    #[arg(long, default_value_t = 40)]
    frame_ms: u64,

    /// Ticks advanced per redraw
    #[arg(long, default_value_t = 4)]
    ticks_per_frame: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = ReconstructionConfig::default()
        .with_hold_interval(cli.hold_interval)
        .with_sine_step(cli.sine_step)
        .with_history_capacity(cli.history)
        .with_startup(cli.startup.into());
    config.validate()?;

    let source: Box<dyn Signal> = match cli.source {
        Source::Sine => Box::new(SineOscillator::new(config.sine_step)),
        Source::NoisySine => Box::new(
            SineOscillator::new(config.sine_step).add(WhiteNoise::new(0.05)?),
        ),
        Source::Walk => Box::new(RandomWalk::new(0.02, 1.0)?),
    };
    let mut pipeline = Reconstruction::new(source, &config)?;
    let mut history = FrameHistory::new(config.history_capacity)?;
    info!(?config, source = ?cli.source, "starting plot");

    enable_raw_mode()?;
    stdout()
        .execute(EnterAlternateScreen)?
        .execute(cursor::Hide)?;

    // Set up panic hook to restore terminal on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        cleanup_terminal();
        original_hook(panic_info);
    }));

    let result = run_loop(&mut pipeline, &mut history, &cli);
    cleanup_terminal();
    result
}

fn run_loop<S: Signal>(
    pipeline: &mut Reconstruction<S>,
    history: &mut FrameHistory,
    cli: &Cli,
) -> Result<()> {
    loop {
        for _ in 0..cli.ticks_per_frame {
            history.push(&pipeline.tick()?);
        }
        draw(history, pipeline.ticks())?;

        if event::poll(Duration::from_millis(cli.frame_ms))?
            && let Event::Key(key_event) = event::read()?
            && is_quit_key(key_event.code)
        {
            return Ok(());
        }
    }
}

fn draw(history: &FrameHistory, tick: u64) -> Result<()> {
    let (columns, rows) = terminal::size()?;
    let width = columns.max(1) as usize;
    let height = rows.saturating_sub(2).max(3) as usize;
    let (lo, hi) = history.range();
    let span = (hi - lo).max(1e-9);

    let mut out = stdout();
    out.queue(Clear(ClearType::All))?;

    let traces = [
        (&history.signal, Color::DarkGrey, '.'),
        (&history.held, Color::Yellow, '_'),
        (&history.smoothed, Color::Cyan, '*'),
    ];
    for (trace, color, glyph) in traces {
        let samples = trace.to_vec();
        out.queue(SetForegroundColor(color))?;
        for column in 0..width {
            let value = samples[column * samples.len() / width];
            let row = ((hi - value) / span * (height - 1) as f64).round() as u16;
            out.queue(cursor::MoveTo(column as u16, row + 1))?
                .queue(Print(glyph))?;
        }
    }

    out.queue(ResetColor)?
        .queue(cursor::MoveTo(0, 0))?
        .queue(Print(format!(
            "tick {tick}  range [{lo:.3}, {hi:.3}]  . signal  _ held  * smoothed  (q quits)"
        )))?;
    out.flush()?;
    Ok(())
}

/// Cleans up terminal state (cursor, alternate screen, raw mode).
fn cleanup_terminal() {
    let _ = stdout().execute(cursor::Show);
    let _ = stdout().execute(LeaveAlternateScreen);
    let _ = disable_raw_mode();
}

fn is_quit_key(code: KeyCode) -> bool {
    matches!(code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
}
