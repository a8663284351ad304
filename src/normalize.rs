//! Input normalization: guarantee a 16kHz mono PCM WAV working file.
//!
//! Conforming inputs pass through untouched. Everything else is decoded,
//! downmixed, resampled, and written as `<stem>__converted.wav` next to the
//! input.

use crate::audio::{decode, resample, wav};
use crate::defaults::{CONVERTED_SUFFIX, SAMPLE_RATE};
use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// A temporary file that is deleted when the guard drops.
///
/// Deletion is best-effort; a file already removed is not an error. Guards
/// are created before the file is written, so a partially written file is
/// removed on the error path too.
#[derive(Debug)]
pub struct TempArtifact {
    path: PathBuf,
}

impl TempArtifact {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempArtifact {
    fn drop(&mut self) {
        fs::remove_file(&self.path).ok();
    }
}

/// The normalized working file: either the input itself or a derived WAV.
#[derive(Debug)]
pub struct NormalizedAudio {
    path: PathBuf,
    /// Present when the file is a derived artifact; deletes it on drop.
    guard: Option<TempArtifact>,
}

impl NormalizedAudio {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the working file was converted from the input (as opposed to
    /// being the input itself).
    pub fn is_derived(&self) -> bool {
        self.guard.is_some()
    }
}

/// Path of the derived intermediate for `input`: `<stem>__converted.wav`.
pub fn converted_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("audio");
    input.with_file_name(format!("{stem}{CONVERTED_SUFFIX}.wav"))
}

/// Ensure `input` is a 16kHz mono WAV, converting if necessary.
///
/// Identity when the input already conforms: the returned path is the input
/// path, no file is created. Decode and write failures propagate.
pub fn normalize(input: &Path) -> Result<NormalizedAudio> {
    if wav::is_normalized(input) {
        return Ok(NormalizedAudio {
            path: input.to_path_buf(),
            guard: None,
        });
    }

    let decoded = decode::decode_file(input)?;
    let mono = resample::downmix_to_mono(&decoded.samples, decoded.channels);
    let samples = resample::resample(&mono, decoded.sample_rate, SAMPLE_RATE);

    let out = converted_path(input);
    let guard = TempArtifact::new(out.clone());
    wav::write_normalized(&out, &samples)?;

    Ok(NormalizedAudio {
        path: out,
        guard: Some(guard),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScribeError;
    use tempfile::tempdir;

    fn make_wav(path: &Path, sample_rate: u32, channels: u16, samples: &[i16]) {
        let spec = hound::WavSpec {
            channels,
            sample_rate,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut writer = hound::WavWriter::create(path, spec).unwrap();
        for &s in samples {
            writer.write_sample(s).unwrap();
        }
        writer.finalize().unwrap();
    }

    #[test]
    fn converted_path_replaces_extension() {
        assert_eq!(
            converted_path(Path::new("/tmp/meeting.mp3")),
            PathBuf::from("/tmp/meeting__converted.wav")
        );
    }

    #[test]
    fn converted_path_handles_no_extension() {
        assert_eq!(
            converted_path(Path::new("/tmp/meeting")),
            PathBuf::from("/tmp/meeting__converted.wav")
        );
    }

    #[test]
    fn conforming_wav_passes_through() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("ready.wav");
        make_wav(&input, 16000, 1, &[1i16, 2, 3]);

        let normalized = normalize(&input).unwrap();

        assert_eq!(normalized.path(), input);
        assert!(!normalized.is_derived());
        // Identity: no intermediate created
        assert!(!converted_path(&input).exists());
    }

    #[test]
    fn stereo_input_is_converted_to_mono_16k() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("stereo.wav");
        make_wav(&input, 44100, 2, &vec![500i16; 44100 * 2]); // 1s stereo

        let normalized = normalize(&input).unwrap();

        assert!(normalized.is_derived());
        assert_eq!(normalized.path(), converted_path(&input));
        assert!(crate::audio::wav::is_normalized(normalized.path()));

        let (samples, _) = crate::audio::wav::read_samples(normalized.path()).unwrap();
        // ~1 second at 16kHz after downmix+resample
        assert!(samples.len() >= 15900 && samples.len() <= 16100);
    }

    #[test]
    fn derived_file_is_deleted_on_drop() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("high.wav");
        make_wav(&input, 48000, 1, &vec![100i16; 4800]);

        let converted = {
            let normalized = normalize(&input).unwrap();
            let p = normalized.path().to_path_buf();
            assert!(p.exists());
            p
        };

        assert!(!converted.exists());
        assert!(input.exists());
    }

    #[test]
    fn temp_artifact_tolerates_already_removed_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("gone.wav");
        std::fs::write(&path, b"x").unwrap();

        let guard = TempArtifact::new(path.clone());
        std::fs::remove_file(&path).unwrap();
        drop(guard); // must not panic
    }

    #[test]
    fn unreadable_input_propagates_decode_error() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("noise.mp3");
        std::fs::write(&input, b"definitely not an mp3 bitstream").unwrap();

        let result = normalize(&input);
        assert!(matches!(result, Err(ScribeError::Decode { .. })));
        assert!(!converted_path(&input).exists());
    }

    #[test]
    fn missing_input_is_an_error() {
        let result = normalize(Path::new("/nonexistent/talk.mp3"));
        assert!(result.is_err());
    }
}
