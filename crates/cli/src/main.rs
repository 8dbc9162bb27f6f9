mod commands;
mod config;
mod meta;
mod og;
mod serve;
mod share_plan;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use moodcast_core::{Energy, Pressure, Social};
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

/// MoodCast: a three-question mental weather card.
#[derive(Parser)]
#[command(name = "moodcast", version, about = "Score, encode and share mental weather cards")]
struct Cli {
    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text", value_enum)]
    output: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    quiet: bool,

    /// Path of the last-result pointer file (overrides MOODCAST_STORE)
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score three answers and print the result card with its share link
    Create {
        /// high, mid or low
        #[arg(long)]
        energy: Option<Energy>,
        /// open, neutral or off
        #[arg(long)]
        social: Option<Social>,
        /// calm, normal or overload
        #[arg(long)]
        pressure: Option<Pressure>,
        /// Pick a random value for every answer not given explicitly
        #[arg(long)]
        random: bool,
    },

    /// Decode a result token
    Decode {
        /// Token from a result link (`/result?s=<token>`)
        token: String,
    },

    /// Validate a JSON result record against the formal JSON Schema
    Validate {
        /// Path to the JSON record
        file: PathBuf,
    },

    /// Print the link to the most recently created result
    Last,

    /// Print links, texts and the Kakao payload for sharing a result
    Share {
        /// Result token
        token: String,
    },

    /// Start the MoodCast HTTP API server
    Serve {
        /// Port to listen on
        #[arg(long, default_value = "8080")]
        port: u16,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = match cli.command {
        Commands::Serve { .. } => "info",
        _ => "warn",
    };
    init_tracing(default_level);

    let mut config = AppConfig::from_env();
    if let Some(store) = cli.store {
        config.store_path = store;
    }

    match cli.command {
        Commands::Create {
            energy,
            social,
            pressure,
            random,
        } => {
            let answers = commands::create::Answers {
                energy,
                social,
                pressure,
            };
            commands::create::cmd_create(&config, answers, random, cli.output, cli.quiet);
        }
        Commands::Decode { token } => {
            commands::decode::cmd_decode(&token, cli.output, cli.quiet);
        }
        Commands::Validate { file } => {
            commands::validate::cmd_validate(&file, cli.output, cli.quiet);
        }
        Commands::Last => {
            commands::last::cmd_last(&config, cli.output, cli.quiet);
        }
        Commands::Share { token } => {
            commands::share::cmd_share(&config, &token, cli.output, cli.quiet);
        }
        Commands::Serve { port } => {
            let rt = match tokio::runtime::Runtime::new() {
                Ok(rt) => rt,
                Err(e) => {
                    report_error(
                        &format!("failed to create tokio runtime: {}", e),
                        cli.output,
                        cli.quiet,
                    );
                    process::exit(1);
                }
            };
            if let Err(e) = rt.block_on(serve::start_server(port, config)) {
                report_error(&format!("Server error: {}", e), cli.output, cli.quiet);
                process::exit(1);
            }
        }
    }
}

/// Install the stderr log subscriber. `RUST_LOG` wins over `default_level`.
fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Report an error in the appropriate output format.
pub(crate) fn report_error(msg: &str, output: OutputFormat, quiet: bool) {
    if quiet {
        return;
    }
    match output {
        OutputFormat::Text => eprintln!("{}", msg),
        OutputFormat::Json => {
            eprintln!("{}", serde_json::json!({ "error": msg }));
        }
    }
}

/// Print a JSON value to stdout, pretty-printed.
pub(crate) fn print_json(value: &serde_json::Value) {
    println!(
        "{}",
        serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
    );
}
