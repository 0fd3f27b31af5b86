//! Finance client CLI
//!
//! Command-line interface for resolving and calling finance API endpoints.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use finance_client::{limit_word_length, load_config, Action, Config};
use tracing::Level;

#[derive(Parser)]
#[command(name = "finance-client")]
#[command(about = "Client for the personal finance REST API")]
#[command(version)]
struct Args {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Server base URL (overrides config file)
    #[arg(long)]
    base_url: Option<String>,

    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: Level,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the endpoint path of an action
    Url {
        /// Action name, e.g. detailAsset
        action: Action,
        /// Resource id for parameterised actions
        param: Option<String>,
    },
    /// GET an action's endpoint and print the JSON body
    Get {
        action: Action,
        param: Option<String>,
    },
    /// Shorten long words for display
    Limit {
        text: String,
        /// Longest word shown in full (defaults to the configured limit)
        #[arg(long)]
        limit: Option<usize>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(
        "Parsed command line arguments: config={:?}, base_url={:?}, log_level={:?}",
        args.config,
        args.base_url,
        args.log_level
    );

    let mut config = if let Some(config_path) = &args.config {
        tracing::debug!("Loading configuration from {:?}", config_path);
        load_config(config_path)?
    } else {
        tracing::debug!("Using default configuration");
        Config::default()
    };

    if let Some(base_url) = args.base_url {
        config.base_url = base_url;
    }

    match args.command {
        Command::Url { action, param } => {
            let param = param.as_ref().map(|p| p as &dyn std::fmt::Display);
            println!("{}", action.path(param)?);
        }
        Command::Get { action, param } => {
            let client = finance_client::connect(&config);
            let param = param.as_ref().map(|p| p as &dyn std::fmt::Display);
            let options = client.options(reqwest::Method::GET);
            match client.get_json(action, param, &options).await {
                Some(value) => println!("{}", serde_json::to_string_pretty(&value)?),
                None => {
                    tracing::warn!("No data received for {}", action);
                    std::process::exit(1);
                }
            }
        }
        Command::Limit { text, limit } => {
            println!("{}", limit_word_length(&text, limit.unwrap_or(config.word_limit)));
        }
    }

    Ok(())
}
