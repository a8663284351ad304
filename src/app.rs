//! Application entry points.
//!
//! Orchestrates the transcription pipeline:
//! normalize → chunk → recognize → assemble/cleanup
//! plus the transcript post-processing commands (actions, minutes).

use crate::audio::wav;
use crate::chunk;
use crate::config::Config;
use crate::error::Result;
use crate::minutes::{self, MeetingMetadata};
use crate::normalize;
use crate::recognize::google::{GoogleConfig, GoogleRecognizer};
use crate::recognize::{Recognition, Recognizer};
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};

/// Run the transcribe command: normalize → chunk → recognize → print.
///
/// CLI overrides win over the config file. Prints the transcript to stdout
/// on success; on a fatal pipeline error prints `Transcription failed: ...`
/// and exits nonzero. Per-segment recognition failures are not fatal.
pub async fn run_transcribe_command(
    mut config: Config,
    input: &Path,
    chunk_size: Option<u32>,
    language: Option<String>,
    api_key: Option<String>,
    quiet: bool,
    verbosity: u8,
) -> anyhow::Result<()> {
    // Apply CLI overrides
    if let Some(ms) = chunk_size {
        config.audio.chunk_duration_ms = ms;
    }
    if let Some(l) = language {
        config.recognition.language = l;
    }
    if let Some(k) = api_key {
        config.recognition.api_key = k;
    }

    let recognizer = GoogleRecognizer::new(GoogleConfig {
        endpoint: config.recognition.endpoint.clone(),
        language: config.recognition.language.clone(),
        api_key: config.recognition.api_key.clone(),
        timeout_secs: config.recognition.timeout_secs,
    })?;

    match transcribe_file(
        input,
        config.audio.chunk_duration_ms,
        &recognizer,
        quiet,
        verbosity,
    )
    .await
    {
        Ok(transcript) => {
            println!("{transcript}");
            Ok(())
        }
        Err(e) => {
            println!("Transcription failed: {e}");
            std::process::exit(1);
        }
    }
}

/// Transcribe `input` and return the assembled transcript.
///
/// Temp artifacts (the converted intermediate and every segment) are deleted
/// on all exit paths, including early errors, via their drop guards.
pub async fn transcribe_file(
    input: &Path,
    chunk_ms: u32,
    recognizer: &dyn Recognizer,
    quiet: bool,
    verbosity: u8,
) -> Result<String> {
    let normalized = normalize::normalize(input)?;
    if !quiet && normalized.is_derived() {
        eprintln!(
            "Converted {} -> {}",
            input.display(),
            normalized.path().display()
        );
    }

    let segments = chunk::split(normalized.path(), chunk_ms)?;
    let total = segments.len();
    if verbosity >= 1 {
        eprintln!("Split into {total} segment(s) of up to {chunk_ms}ms");
    }

    let mut lines = Vec::with_capacity(total);
    for segment in segments {
        if verbosity >= 1 {
            eprintln!("Recognizing segment {}/{}...", segment.index() + 1, total);
        }

        let outcome = match wav::read_samples(segment.path()) {
            Ok((samples, _)) => recognizer.recognize(&samples).await,
            // An unreadable segment is an operational failure for that
            // slice only; the rest of the pipeline continues.
            Err(e) => Recognition::Failed(e.to_string()),
        };
        lines.push(outcome.into_line());

        // Segment file deleted here, before the next request
        drop(segment);
    }

    Ok(lines.join("\n").trim().to_string())
}

/// Run the actions command: print one `- item` line per action item.
pub fn run_actions_command(transcript_path: &Path) -> anyhow::Result<()> {
    let transcript = std::fs::read_to_string(transcript_path)?;
    let items = minutes::extract_action_items(&transcript);

    if items.is_empty() {
        eprintln!("{}", "No action items found".dimmed());
        return Ok(());
    }
    for item in &items {
        println!("- {item}");
    }
    Ok(())
}

/// Run the minutes command: render and write the minutes document.
pub fn run_minutes_command(
    transcript_path: &Path,
    meta: MeetingMetadata,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let transcript = std::fs::read_to_string(transcript_path)?;
    let actions = minutes::extract_action_items(&transcript);
    let doc = minutes::render_minutes(&meta, transcript.trim(), &actions);

    let out_path = output.unwrap_or_else(|| transcript_path.with_extension("txt"));
    std::fs::write(&out_path, &doc)?;

    println!("{} {}", "Minutes written to".green(), out_path.display());
    Ok(())
}
