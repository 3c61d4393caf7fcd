//! WAV export of reconstruction runs.
//!
//! Each frame becomes one 3-channel sample: ground truth, held value and
//! smoothed value, as 32-bit floats. Any audio editor or `hound`-based tool
//! can then display the three traces side by side.

use crate::reconstruction::TickFrame;
use std::io::{Read, Seek, Write};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Channels per exported sample.
pub const TRACE_CHANNELS: u16 = 3;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("WAV encoding failed: {0}")]
    Wav(#[from] hound::Error),
    #[error("expected 3 float channels, found {channels} channels of {format:?}")]
    Layout {
        channels: u16,
        format: hound::SampleFormat,
    },
}

fn trace_spec(tick_rate: u32) -> hound::WavSpec {
    hound::WavSpec {
        channels: TRACE_CHANNELS,
        sample_rate: tick_rate,
        bits_per_sample: 32,
        sample_format: hound::SampleFormat::Float,
    }
}

/// Writes `frames` to a WAV file at `path`, tagged with `tick_rate` as the
/// sample rate.
pub fn write_wav<P: AsRef<Path>>(
    path: P,
    frames: &[TickFrame],
    tick_rate: u32,
) -> Result<(), ExportError> {
    let path = path.as_ref();
    debug!(path = %path.display(), frames = frames.len(), "exporting traces");
    let mut writer = hound::WavWriter::create(path, trace_spec(tick_rate))?;
    write_frames(&mut writer, frames)?;
    writer.finalize()?;
    Ok(())
}

/// Writes `frames` as WAV data into any seekable writer.
pub fn write_wav_to<W: Write + Seek>(
    writer: W,
    frames: &[TickFrame],
    tick_rate: u32,
) -> Result<(), ExportError> {
    let mut writer = hound::WavWriter::new(writer, trace_spec(tick_rate))?;
    write_frames(&mut writer, frames)?;
    writer.finalize()?;
    Ok(())
}

fn write_frames<W: Write + Seek>(
    writer: &mut hound::WavWriter<W>,
    frames: &[TickFrame],
) -> Result<(), hound::Error> {
    for frame in frames {
        writer.write_sample(frame.signal as f32)?;
        writer.write_sample(frame.held as f32)?;
        writer.write_sample(frame.smoothed as f32)?;
    }
    Ok(())
}

/// Reads frames back from WAV data written by [`write_wav_to`].
///
/// Tick indices are reconstructed from sample positions. Values come back at
/// 32-bit precision.
pub fn read_wav_from<R: Read>(reader: R) -> Result<Vec<TickFrame>, ExportError> {
    let reader = hound::WavReader::new(reader)?;
    let spec = reader.spec();
    if spec.channels != TRACE_CHANNELS || spec.sample_format != hound::SampleFormat::Float {
        return Err(ExportError::Layout {
            channels: spec.channels,
            format: spec.sample_format,
        });
    }

    let samples = reader.into_samples::<f32>().collect::<Result<Vec<f32>, _>>()?;
    Ok(samples
        .chunks_exact(TRACE_CHANNELS as usize)
        .zip(0u64..)
        .map(|(chunk, tick)| TickFrame {
            tick,
            signal: chunk[0] as f64,
            held: chunk[1] as f64,
            smoothed: chunk[2] as f64,
        })
        .collect())
}
