//! Command-line interface for wavscribe
//!
//! Provides argument parsing using clap derive macros.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Transcribe audio files via the Google Web Speech API
#[derive(Parser, Debug)]
#[command(
    name = "wavscribe",
    version,
    about = "Transcribe audio files via the Google Web Speech API"
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Audio file to transcribe (MP3, FLAC, OGG, M4A, or WAV)
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Suppress status output (quiet mode)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose output (-v: per-segment progress, -vv: full diagnostics)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Segment duration (default: 60s). Examples: 90, 60s, 5m
    #[arg(long, short = 'c', value_name = "DURATION", value_parser = parse_chunk_ms)]
    pub chunk_size: Option<u32>,

    /// Recognition language (BCP-47, e.g. en-US, de-DE)
    #[arg(long, value_name = "LANG")]
    pub language: Option<String>,

    /// Web Speech API key override
    #[arg(long, value_name = "KEY")]
    pub api_key: Option<String>,
}

/// Parse a chunk duration string into milliseconds.
///
/// Supports any duration format accepted by `humantime`: bare numbers
/// (seconds), single-unit (`60s`, `5m`), and compound (`1m30s`).
fn parse_chunk_ms(s: &str) -> Result<u32, String> {
    let s = s.trim();
    // Bare number → seconds
    let millis: u128 = if let Ok(secs) = s.parse::<u64>() {
        secs as u128 * 1000
    } else {
        humantime::parse_duration(s)
            .map(|d| d.as_millis())
            .map_err(|e| e.to_string())?
    };

    if millis == 0 {
        return Err("chunk duration must be positive".to_string());
    }
    u32::try_from(millis).map_err(|_| "chunk duration too large".to_string())
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract action items from a transcript
    Actions {
        /// Transcript file to scan
        #[arg(value_name = "TRANSCRIPT")]
        transcript: PathBuf,
    },

    /// Render a meeting minutes document from a transcript
    Minutes {
        /// Transcript file
        #[arg(value_name = "TRANSCRIPT")]
        transcript: PathBuf,

        /// Meeting title
        #[arg(long, value_name = "TITLE")]
        title: String,

        /// Meeting date (free-form, e.g. 2026-08-06)
        #[arg(long, value_name = "DATE")]
        date: String,

        /// Meeting organizer
        #[arg(long, value_name = "NAME")]
        organizer: String,

        /// Attendees, comma-separated
        #[arg(long, value_name = "NAMES")]
        attendees: String,

        /// Output path (default: transcript path with .txt extension)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_name = "SHELL")]
        shell: Shell,
    },
}
