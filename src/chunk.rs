//! Waveform chunking: split the normalized WAV into fixed-duration segments.
//!
//! Segments are consecutive, non-overlapping, and cover the input exactly
//! once in time order. The final segment may be shorter than the nominal
//! duration. Files are named `chunk_<index>.wav` in the input's directory;
//! the index-based names can collide across concurrent runs in the same
//! directory.

use crate::audio::wav;
use crate::defaults::SEGMENT_PREFIX;
use crate::error::{Result, ScribeError};
use crate::normalize::TempArtifact;
use std::path::{Path, PathBuf};

/// One segment file; deleted when dropped.
#[derive(Debug)]
pub struct Segment {
    index: usize,
    artifact: TempArtifact,
}

impl Segment {
    /// Zero-based position of this segment in the source waveform.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn path(&self) -> &Path {
        self.artifact.path()
    }
}

fn segment_path(dir: &Path, index: usize) -> PathBuf {
    dir.join(format!("{SEGMENT_PREFIX}{index}.wav"))
}

/// Split the WAV at `path` into segments of at most `chunk_ms` milliseconds.
///
/// Produces ceil(D/C) segments for total duration D and chunk duration C;
/// their durations sum to D, each is ≤ C, and all but possibly the last
/// equal C.
pub fn split(path: &Path, chunk_ms: u32) -> Result<Vec<Segment>> {
    if chunk_ms == 0 {
        return Err(ScribeError::Other(
            "chunk duration must be positive".to_string(),
        ));
    }

    let (samples, spec) = wav::read_samples(path)?;
    let samples_per_chunk = (chunk_ms as u64 * spec.sample_rate as u64 / 1000).max(1) as usize;
    let dir = path.parent().unwrap_or(Path::new("."));

    let mut segments = Vec::new();
    for (index, window) in samples.chunks(samples_per_chunk).enumerate() {
        let seg_path = segment_path(dir, index);
        let artifact = TempArtifact::new(seg_path.clone());
        wav::write_samples(&seg_path, spec, window)?;
        segments.push(Segment { index, artifact });
    }

    Ok(segments)
}
