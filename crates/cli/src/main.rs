//! Storedash CLI - terminal front end for the admin dashboard.
//!
//! # Usage
//!
//! ```bash
//! # List the sample products, cheapest first
//! sd-cli list products --sort price
//!
//! # Search orders on the live API and print JSON
//! sd-cli list orders --search "tery" --remote --format json
//!
//! # Headline metrics and revenue series
//! sd-cli dashboard
//!
//! # AI analysis of the dashboard figures
//! sd-cli insights --topic dashboard
//! ```
//!
//! # Commands
//!
//! - `list` - Render a listing table with search and sort
//! - `dashboard` - Show metric cards and the revenue chart data
//! - `insights` - Request AI insights (or canned ones with `--mock`)

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use storedash_admin::DashboardConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;
mod render;

use commands::insights::Topic;
use commands::list::ListKind;
use error::CliError;
use render::OutputFormat;

#[derive(Parser)]
#[command(name = "sd-cli")]
#[command(author, version, about = "Storedash admin dashboard CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a listing
    List {
        /// Which listing to show
        #[arg(value_enum)]
        kind: ListKind,

        /// Case-insensitive search term
        #[arg(short, long, default_value = "")]
        search: String,

        /// Column key to sort by (e.g. `name`, `price`)
        #[arg(long)]
        sort: Option<String>,

        /// Sort descending
        #[arg(long, requires = "sort")]
        desc: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Fetch from the dashboard API instead of the sample data
        #[arg(long)]
        remote: bool,
    },
    /// Show the dashboard overview
    Dashboard {
        /// Fetch analytics from the dashboard API
        #[arg(long)]
        remote: bool,
    },
    /// Request AI insights
    Insights {
        /// What to analyze
        #[arg(short, long, value_enum, default_value_t = Topic::Dashboard)]
        topic: Topic,

        /// Print canned insights without calling the AI endpoint
        #[arg(long)]
        mock: bool,
    },
}

#[tokio::main]
async fn main() {
    init_tracing();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

/// Text logs by default, JSON when `STOREDASH_LOG_FORMAT=json`.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "storedash_admin=info,storedash_cli=info".into());

    let is_json = std::env::var("STOREDASH_LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));
    let json_layer = is_json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(std::io::stderr)
    });
    let text_layer = (!is_json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = DashboardConfig::from_env()?;
    tracing::debug!(?config, "Loaded configuration");

    match cli.command {
        Commands::List {
            kind,
            search,
            sort,
            desc,
            format,
            remote,
        } => {
            let options = commands::list::ListOptions {
                search,
                sort,
                desc,
                format,
                remote,
            };
            commands::list::run(&config, kind, &options).await?;
        }
        Commands::Dashboard { remote } => commands::dashboard::run(&config, remote).await?,
        Commands::Insights { topic, mock } => commands::insights::run(&config, topic, mock).await?,
    }
    Ok(())
}
