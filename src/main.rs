use anyhow::Result;
use clap::{CommandFactory, Parser};
use wavscribe::app::{run_actions_command, run_minutes_command, run_transcribe_command};
use wavscribe::cli::{Cli, Commands};
use wavscribe::config::Config;
use wavscribe::minutes::MeetingMetadata;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        None => {
            let Some(input) = cli.input else {
                Cli::command().print_help()?;
                std::process::exit(2);
            };
            let config = load_config(cli.config.as_deref())?;
            run_transcribe_command(
                config,
                &input,
                cli.chunk_size,
                cli.language,
                cli.api_key,
                cli.quiet,
                cli.verbose,
            )
            .await?;
        }
        Some(Commands::Actions { transcript }) => {
            run_actions_command(&transcript)?;
        }
        Some(Commands::Minutes {
            transcript,
            title,
            date,
            organizer,
            attendees,
            output,
        }) => {
            run_minutes_command(
                &transcript,
                MeetingMetadata {
                    title,
                    date,
                    organizer,
                    attendees,
                },
                output,
            )?;
        }
        Some(Commands::Completions { shell }) => {
            clap_complete::generate(shell, &mut Cli::command(), "wavscribe", &mut std::io::stdout());
        }
    }

    Ok(())
}

/// Load configuration from file or use defaults.
///
/// Priority order:
/// 1. Custom config path from CLI (--config)
/// 2. Default config path (~/.config/wavscribe/config.toml)
/// 3. Built-in defaults with environment variable overrides
fn load_config(custom_path: Option<&std::path::Path>) -> Result<Config> {
    let config = if let Some(path) = custom_path {
        // Load from custom path
        Config::load(path)?
    } else {
        // Try default path, fall back to defaults
        let default_path = Config::default_path();
        Config::load_or_default(&default_path)
    };

    // Apply environment variable overrides
    Ok(config.with_env_overrides())
}
