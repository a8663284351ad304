//! WAV probing, reading, and writing via hound.

use crate::defaults::SAMPLE_RATE;
use crate::error::{Result, ScribeError};
use hound::{SampleFormat, WavSpec};
use std::path::Path;

/// Layout of normalized waveform files: 16kHz mono 16-bit integer PCM.
pub fn normalized_spec() -> WavSpec {
    WavSpec {
        channels: 1,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    }
}

/// Whether `path` already is a WAV in the normalized layout.
///
/// Returns `false` for non-WAV files, unreadable files, and WAVs in any
/// other layout — all of those take the conversion path.
pub fn is_normalized(path: &Path) -> bool {
    match hound::WavReader::open(path) {
        Ok(reader) => reader.spec() == normalized_spec(),
        Err(_) => false,
    }
}

/// Read all samples and the spec from a WAV file.
pub fn read_samples(path: &Path) -> Result<(Vec<i16>, WavSpec)> {
    let mut reader = hound::WavReader::open(path).map_err(|e| ScribeError::WavParse {
        message: format!("{}: {e}", path.display()),
    })?;
    let spec = reader.spec();
    let samples = reader
        .samples::<i16>()
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| ScribeError::WavParse {
            message: format!("{}: {e}", path.display()),
        })?;
    Ok((samples, spec))
}

/// Write samples to `path` with the given spec.
pub fn write_samples(path: &Path, spec: WavSpec, samples: &[i16]) -> Result<()> {
    let mut writer = hound::WavWriter::create(path, spec).map_err(|e| ScribeError::WavWrite {
        message: format!("{}: {e}", path.display()),
    })?;
    for &s in samples {
        writer.write_sample(s).map_err(|e| ScribeError::WavWrite {
            message: format!("{}: {e}", path.display()),
        })?;
    }
    writer.finalize().map_err(|e| ScribeError::WavWrite {
        message: format!("{}: {e}", path.display()),
    })?;
    Ok(())
}

/// Write mono 16kHz samples to `path`.
pub fn write_normalized(path: &Path, samples: &[i16]) -> Result<()> {
    write_samples(path, normalized_spec(), samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    fn make_wav(path: &Path, sample_rate: u32, channels: u16, samples: &[i16]) {
        let spec = WavSpec {
            channels,
            sample_rate,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        };
        let mut writer = hound::WavWriter::create(path, spec).unwrap();
        for &s in samples {
            writer.write_sample(s).unwrap();
        }
        writer.finalize().unwrap();
    }

    #[test]
    fn normalized_wav_is_recognized() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("mono16k.wav");
        make_wav(&path, 16000, 1, &[1i16, 2, 3]);

        assert!(is_normalized(&path));
    }

    #[test]
    fn wrong_rate_is_not_normalized() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("mono44k.wav");
        make_wav(&path, 44100, 1, &[1i16, 2, 3]);

        assert!(!is_normalized(&path));
    }

    #[test]
    fn stereo_is_not_normalized() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("stereo16k.wav");
        make_wav(&path, 16000, 2, &[1i16, 2, 3, 4]);

        assert!(!is_normalized(&path));
    }

    #[test]
    fn non_wav_file_is_not_normalized() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("garbage.wav");
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(b"XXXX not a riff header").unwrap();

        assert!(!is_normalized(&path));
    }

    #[test]
    fn missing_file_is_not_normalized() {
        assert!(!is_normalized(Path::new("/nonexistent/input.wav")));
    }

    #[test]
    fn read_samples_returns_spec_and_data() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.wav");
        make_wav(&path, 22050, 2, &[10i16, -10, 20, -20]);

        let (samples, spec) = read_samples(&path).unwrap();
        assert_eq!(samples, vec![10i16, -10, 20, -20]);
        assert_eq!(spec.sample_rate, 22050);
        assert_eq!(spec.channels, 2);
    }

    #[test]
    fn read_samples_maps_parse_errors() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.wav");
        std::fs::write(&path, b"RIFF\x00\x00").unwrap();

        let result = read_samples(&path);
        assert!(matches!(result, Err(ScribeError::WavParse { .. })));
    }

    #[test]
    fn write_normalized_produces_conforming_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.wav");

        write_normalized(&path, &[5i16, 6, 7]).unwrap();

        assert!(is_normalized(&path));
        let (samples, _) = read_samples(&path).unwrap();
        assert_eq!(samples, vec![5i16, 6, 7]);
    }

    #[test]
    fn write_samples_fails_for_missing_directory() {
        let path = Path::new("/nonexistent/dir/out.wav");
        let result = write_normalized(path, &[0i16]);
        assert!(matches!(result, Err(ScribeError::WavWrite { .. })));
    }
}
