//! Compressed-audio decoding via symphonia.
//!
//! Probes the container, picks the default audio track, and decodes all
//! packets into interleaved 16-bit PCM plus the source layout. Supports
//! whatever symphonia's codec registry supports (MP3, FLAC, OGG, M4A, WAV).

use crate::error::{Result, ScribeError};
use std::fs::File;
use std::path::Path;
use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::DecoderOptions;
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

/// Decoded PCM audio in its source layout.
#[derive(Debug, Clone)]
pub struct DecodedAudio {
    /// Interleaved 16-bit samples.
    pub samples: Vec<i16>,
    pub sample_rate: u32,
    pub channels: u16,
}

impl DecodedAudio {
    /// Duration of the decoded audio in milliseconds.
    pub fn duration_ms(&self) -> u64 {
        if self.channels == 0 || self.sample_rate == 0 {
            return 0;
        }
        let frames = self.samples.len() as u64 / self.channels as u64;
        frames * 1000 / self.sample_rate as u64
    }
}

/// Decode an audio file of any supported encoding to PCM.
pub fn decode_file(path: &Path) -> Result<DecodedAudio> {
    let file = File::open(path)?;
    let mss = MediaSourceStream::new(Box::new(file), Default::default());

    // The extension is only a probe hint; content decides the format.
    let mut hint = Hint::new();
    if let Some(ext) = path.extension().and_then(|s| s.to_str()) {
        hint.with_extension(ext);
    }

    let probed = symphonia::default::get_probe()
        .format(
            &hint,
            mss,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )
        .map_err(|e| ScribeError::Decode {
            message: format!("failed to probe audio format: {e}"),
        })?;

    let mut format = probed.format;
    let track = format.default_track().ok_or_else(|| ScribeError::Decode {
        message: "no audio tracks found".to_string(),
    })?;

    let sample_rate = track
        .codec_params
        .sample_rate
        .ok_or_else(|| ScribeError::Decode {
            message: "unknown sample rate".to_string(),
        })?;
    let channels = track.codec_params.channels.map(|c| c.count()).unwrap_or(1) as u16;

    let mut decoder = symphonia::default::get_codecs()
        .make(&track.codec_params, &DecoderOptions::default())
        .map_err(|e| ScribeError::Decode {
            message: format!("failed to create decoder: {e}"),
        })?;

    let track_id = track.id;
    let mut samples: Vec<i16> = Vec::new();

    loop {
        let packet = match format.next_packet() {
            Ok(p) => p,
            Err(SymphoniaError::IoError(e)) if e.kind() == std::io::ErrorKind::UnexpectedEof => {
                break;
            }
            Err(e) => {
                return Err(ScribeError::Decode {
                    message: format!("failed to read audio packet: {e}"),
                });
            }
        };

        if packet.track_id() != track_id {
            continue;
        }

        let decoded = match decoder.decode(&packet) {
            Ok(d) => d,
            // Malformed packets are skipped; the rest of the stream is usable.
            Err(SymphoniaError::DecodeError(_)) => continue,
            Err(e) => {
                return Err(ScribeError::Decode {
                    message: format!("failed to decode audio packet: {e}"),
                });
            }
        };

        let spec = *decoded.spec();
        let duration = decoded.capacity() as u64;
        let mut sample_buf = SampleBuffer::<i16>::new(duration, spec);
        sample_buf.copy_interleaved_ref(decoded);
        samples.extend_from_slice(sample_buf.samples());
    }

    if samples.is_empty() {
        return Err(ScribeError::Decode {
            message: "no audio samples decoded".to_string(),
        });
    }

    Ok(DecodedAudio {
        samples,
        sample_rate,
        channels,
    })
}
