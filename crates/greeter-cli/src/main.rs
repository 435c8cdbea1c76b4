use clap::{Parser, Subcommand};
use greeter_core::config::{self, Scenario};
use greeter_core::error::ConfigError;
use greeter_core::{greet, AuthenticationOutcome};
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Greeter command-line interface
#[derive(Parser, Debug)]
#[command(name = "greeter", author, version, about = "Render greetings for authentication outcomes", long_about = None)]
struct Cli {
    /// Print JSON instead of plain text
    #[arg(long, global = true)]
    json: bool,
    /// Enable debug logging on stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Greet an unauthenticated visitor
    Anonymous,
    /// Greet an authenticated user
    User {
        username: String,
        /// The user has administrator rights
        #[arg(long)]
        admin: bool,
    },
    /// Describe a failed login by its status code
    Error {
        #[arg(allow_negative_numbers = true)]
        code: i32,
    },
    /// Render every scenario from a TOML scenario file
    Batch {
        /// Scenario file (defaults to $GREETER_SCENARIOS or ~/.config/greeter/scenarios.toml)
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Serialize, Debug)]
struct Rendered<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    outcome: &'a AuthenticationOutcome,
    greeting: String,
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    // Another subscriber may already be installed; keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn render_one(outcome: &AuthenticationOutcome, json: bool) -> Result<String, CliError> {
    let greeting = greet(outcome);
    if !json {
        return Ok(greeting);
    }
    Ok(serde_json::to_string_pretty(&Rendered {
        name: None,
        outcome,
        greeting,
    })?)
}

fn render_batch(scenarios: &[Scenario], json: bool) -> Result<String, CliError> {
    if json {
        let rendered: Vec<_> = scenarios
            .iter()
            .map(|s| Rendered {
                name: Some(s.name.as_str()),
                outcome: &s.outcome,
                greeting: greet(&s.outcome),
            })
            .collect();
        return Ok(serde_json::to_string_pretty(&rendered)?);
    }
    Ok(scenarios
        .iter()
        .map(|s| format!("{}: {}", s.name, greet(&s.outcome)))
        .collect::<Vec<_>>()
        .join("\n"))
}

fn run(cli: Cli) -> Result<String, CliError> {
    let outcome = match cli.command {
        None => return Ok("No subcommand provided. Try `greeter anonymous`.".to_string()),
        Some(Commands::Anonymous) => AuthenticationOutcome::Anonymous,
        Some(Commands::User { username, admin }) => {
            AuthenticationOutcome::authenticated(username, admin)
        }
        Some(Commands::Error { code }) => AuthenticationOutcome::auth_error(code),
        Some(Commands::Batch { file }) => {
            let (scenarios, path) = config::load_scenarios(file.as_deref())?;
            scenarios.validate()?;
            tracing::info!(path = %path.display(), count = scenarios.scenarios.len(), "rendering scenarios");
            return render_batch(&scenarios.scenarios, cli.json);
        }
    };
    tracing::debug!(kind = outcome.kind(), "rendering outcome");
    render_one(&outcome, cli.json)
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match run(cli) {
        Ok(output) => println!("{}", output),
        Err(err) => {
            tracing::error!("{}", err);
            std::process::exit(1);
        }
    }
}
