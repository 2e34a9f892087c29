use anyhow::{Context, Result};
use colored::Colorize;
use std::io::Read;
use std::path::Path;

use crate::{
    app::{init_config, Config},
    envelope::{RequestEnvelope, SpeechletDispatcher},
    runtime::{describe_response, format_outcomes, parse_script, Simulator},
    speechlet::{ResponseBuilder, SessionSpeechlet},
};

use super::{Commands, OutputFormat};

/// Build the favorite-color skill wired up from configuration
pub fn build_dispatcher(config: &Config) -> SpeechletDispatcher<SessionSpeechlet> {
    let responses = ResponseBuilder::new(config.skill.card_title_prefix.clone());
    SpeechletDispatcher::new(SessionSpeechlet::new(responses))
        .with_supported_application_ids(config.skill.supported_application_ids.clone())
}

/// Handle CLI subcommands
///
/// Returns `false` when a request failed and the process should exit non-zero.
pub fn handle_command(command: &Commands, config: &Config, config_path: Option<&Path>) -> Result<bool> {
    match command {
        Commands::Handle { input, output_format } => {
            let raw = match input {
                Some(path) => std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read {}", path.display()))?,
                None => {
                    let mut buf = String::new();
                    std::io::stdin()
                        .read_to_string(&mut buf)
                        .context("Failed to read request from stdin")?;
                    buf
                }
            };
            Ok(handle_envelope(&raw, config, *output_format))
        }
        Commands::Simulate { script, output_format } => {
            let source = std::fs::read_to_string(script)
                .with_context(|| format!("Failed to read {}", script.display()))?;
            let turns = parse_script(&source)?;

            let mut simulator = Simulator::new(build_dispatcher(config), config.skill.application_id.clone());
            let outcomes = simulator.run(&turns);

            print!("{}", format_outcomes(&outcomes, *output_format, config.output.pretty_json));
            if *output_format == OutputFormat::Json {
                println!();
            }
            Ok(outcomes.iter().all(|o| !o.is_error()))
        }
        Commands::Init => {
            println!("Initializing speechlet configuration...");
            let (path, created) = init_config(config_path.map(Path::to_path_buf))?;
            if created {
                println!("Created default configuration at: {}", path.display().to_string().green());
            } else {
                println!("Configuration already exists at: {}", path.display());
            }
            Ok(true)
        }
        Commands::Version => {
            show_version();
            Ok(true)
        }
    }
}

/// Dispatch one raw envelope and print the reply; errors go to stderr
fn handle_envelope(raw: &str, config: &Config, format: OutputFormat) -> bool {
    let dispatcher = build_dispatcher(config);
    let reply = RequestEnvelope::from_json(raw).and_then(|envelope| dispatcher.dispatch(envelope));

    match reply {
        Ok(reply) => {
            match format {
                OutputFormat::Json => match reply.to_json(config.output.pretty_json) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("{} {}", "[ERROR]".red(), e);
                        return false;
                    }
                },
                OutputFormat::Text => print!("{}", describe_response(&reply.response)),
            }
            true
        }
        Err(e) => {
            eprintln!("{} {}", "[ERROR]".red(), e);
            false
        }
    }
}

/// Show version information
pub fn show_version() {
    println!("speechlet v{}", env!("CARGO_PKG_VERSION"));
    println!("   Favorite-color session skill with a local request host");
}
