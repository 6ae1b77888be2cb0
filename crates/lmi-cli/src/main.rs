mod report;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use lmi_report::ReportTier;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "lmi-cli")]
#[command(about = "Labour market intelligence command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Extract fields from a report document (path or URL) and print them as JSON
    Parse {
        /// File path or http(s) URL of a PDF or text report
        locator: String,
    },
    /// Aggregate vacancy search results and print them as JSON
    Search {
        /// Job title to search for
        #[arg(long)]
        title: String,
        /// City or region
        #[arg(long)]
        location: String,
        /// Maximum number of results to request (the API returns at most 20)
        #[arg(long)]
        max_results: Option<usize>,
    },
    /// Run every available source, synthesize and render a report
    DeepDive {
        /// Job title to research
        #[arg(long)]
        title: String,
        /// City or region
        #[arg(long)]
        location: String,
        /// Optional report document (path or URL)
        #[arg(long)]
        document: Option<String>,
        /// Verbosity: minimal, standard, extensive or action-plan
        #[arg(long, default_value = "standard")]
        tier: ReportTier,
        /// Print the canonical report as JSON instead of markdown
        #[arg(long)]
        json: bool,
    },
    /// Render a canonical report previously saved with `deep-dive --json`
    Render {
        /// Path to the canonical report JSON
        #[arg(long)]
        input: PathBuf,
        /// Verbosity: minimal, standard, extensive or action-plan
        #[arg(long, default_value = "standard")]
        tier: ReportTier,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = lmi_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Parse { locator }) => report::run_parse(&config, &locator).await?,
        Some(Commands::Search {
            title,
            location,
            max_results,
        }) => report::run_search(&config, &title, &location, max_results).await?,
        Some(Commands::DeepDive {
            title,
            location,
            document,
            tier,
            json,
        }) => report::run_deep_dive(&config, title, location, document, tier, json).await?,
        Some(Commands::Render { input, tier }) => report::run_render(&input, tier)?,
        None => println!("lmi-cli: run with --help to list commands"),
    }

    Ok(())
}
