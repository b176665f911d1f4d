use rayon::prelude::*;

use crate::{
    color::{gamma::Gamma, model::Color},
    foundation::error::{PixfmtError, PixfmtResult},
    pixel::{
        codec::{decode_seed, decode_with_layout, encode_with_layout},
        format::PixelFormat,
        layout::PixelLayout,
    },
};

/// Clamp and encode `colors` back to back into `dst` starting at `offset`.
///
/// Returns the offset just past the last record. An empty slice is a no-op.
///
/// # Panics
///
/// Panics if `dst` has fewer than `colors.len() * format.channel_count()` bytes after
/// `offset`.
pub fn convert_color_format(
    colors: &[Color],
    format: PixelFormat,
    gamma: &Gamma,
    dst: &mut [u8],
    offset: usize,
) -> usize {
    encode_run(colors, format, &format.layout(), gamma, dst, offset)
}

fn encode_run(
    colors: &[Color],
    format: PixelFormat,
    layout: &PixelLayout,
    gamma: &Gamma,
    dst: &mut [u8],
    offset: usize,
) -> usize {
    colors.iter().fold(offset, |at, color| {
        encode_with_layout(&color.clamped(), format, layout, gamma, dst, at)
    })
}

/// Allocating form of [`convert_color_format`].
#[tracing::instrument(skip(colors, gamma), fields(count = colors.len()))]
pub fn encode_colors(colors: &[Color], format: PixelFormat, gamma: &Gamma) -> Vec<u8> {
    let mut out = vec![0u8; colors.len() * format.channel_count()];
    convert_color_format(colors, format, gamma, &mut out, 0);
    out
}

/// Decode a buffer of back-to-back records.
///
/// `src.len()` must be a multiple of `format.channel_count()`.
#[tracing::instrument(skip(src), fields(len = src.len()))]
pub fn decode_colors(format: PixelFormat, src: &[u8]) -> PixfmtResult<Vec<Color>> {
    let stride = format.channel_count();
    if src.len() % stride != 0 {
        return Err(PixfmtError::validation(format!(
            "buffer length {} is not a multiple of {stride} bytes per pixel for '{format}'",
            src.len()
        )));
    }

    let layout = format.layout();
    let mut colors = Vec::with_capacity(src.len() / stride);
    for record in src.chunks_exact(stride) {
        let mut color = decode_seed(format);
        decode_with_layout(format, &layout, record, 0, &mut color);
        colors.push(color);
    }
    tracing::debug!(pixels = colors.len(), "decoded buffer");
    Ok(colors)
}

/// Threading options for batch encoding.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BatchThreading {
    /// Encode chunks on a rayon pool.
    pub parallel: bool,
    /// Pixels per parallel work item (`0` is treated as `1`).
    pub chunk_size: usize,
    /// Dedicated pool size; `None` uses the global rayon pool.
    pub threads: Option<usize>,
}

impl Default for BatchThreading {
    fn default() -> Self {
        Self {
            parallel: false,
            chunk_size: 4096,
            threads: None,
        }
    }
}

/// Encode `colors` using `threading`; output is byte-identical to [`encode_colors`].
///
/// Each chunk writes only its own region, located at `index * channel_count`.
#[tracing::instrument(skip(colors, gamma), fields(count = colors.len()))]
pub fn par_encode_colors(
    colors: &[Color],
    format: PixelFormat,
    gamma: &Gamma,
    threading: &BatchThreading,
) -> PixfmtResult<Vec<u8>> {
    if !threading.parallel {
        return Ok(encode_colors(colors, format, gamma));
    }

    let layout = format.layout();
    let stride = layout.len();
    let chunk = normalized_chunk_size(threading.chunk_size, colors.len());
    let mut out = vec![0u8; colors.len() * stride];
    tracing::debug!(chunk, stride, threads = ?threading.threads, "parallel encode");

    let run = |out: &mut [u8]| {
        out.par_chunks_mut(chunk * stride)
            .zip(colors.par_chunks(chunk))
            .for_each(|(dst, src)| {
                encode_run(src, format, &layout, gamma, dst, 0);
            });
    };

    match threading.threads {
        Some(n) => build_thread_pool(n)?.install(|| run(&mut out)),
        None => run(&mut out),
    }
    Ok(out)
}

fn build_thread_pool(threads: usize) -> PixfmtResult<rayon::ThreadPool> {
    if threads == 0 {
        return Err(PixfmtError::validation(
            "batch threading 'threads' must be >= 1 when set",
        ));
    }

    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .map_err(|e| PixfmtError::validation(format!("failed to build rayon thread pool: {e}")))
}

/// Pixels per work item, in `1..=max(len, 1)` so `chunk * stride` cannot overflow.
fn normalized_chunk_size(chunk_size: usize, len: usize) -> usize {
    chunk_size.clamp(1, len.max(1))
}

#[cfg(test)]
#[path = "../../tests/unit/pixel/batch.rs"]
mod tests;
