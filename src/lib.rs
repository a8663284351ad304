//! wavscribe - Chunked audio transcription via the Google Web Speech API
//!
//! Normalizes an input file to a 16kHz mono WAV, splits it into
//! fixed-duration segments, recognizes each segment remotely, and assembles
//! the transcript. Temporary files are deleted on every exit path.

#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![warn(clippy::let_underscore_must_use)]

pub mod app;
pub mod audio;
pub mod chunk;
pub mod cli;
pub mod config;
pub mod defaults;
pub mod error;
pub mod minutes;
pub mod normalize;
pub mod recognize;

// Pipeline stages (normalize → chunk → recognize → assemble)
pub use app::transcribe_file;
pub use chunk::Segment;
pub use normalize::{NormalizedAudio, TempArtifact};

// Recognition seam
pub use recognize::google::{GoogleConfig, GoogleRecognizer};
pub use recognize::{MockRecognizer, Recognition, Recognizer};

// Error handling
pub use error::{Result, ScribeError};

// Config
pub use config::Config;
