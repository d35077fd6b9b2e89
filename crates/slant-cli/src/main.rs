mod timeline;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use slant_core::FilterType;
use tracing_subscriber::EnvFilter;

use crate::timeline::TimelineArgs;

#[derive(Debug, Parser)]
#[command(name = "slant-cli")]
#[command(about = "Sentiment timeline analytics for media search results")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Build the chart dataset (points, stats, domain, trends) as JSON
    Timeline {
        /// JSON file with search results (an array, or an object with a `results` array)
        #[arg(long)]
        results: PathBuf,

        /// Comma-separated result indices to include; all results when omitted
        #[arg(long, value_delimiter = ',')]
        select: Option<Vec<usize>>,

        /// Category filter: all, left, right or social
        #[arg(long)]
        filter: Option<FilterType>,

        /// Fold social posts into the trend cohort of their bias label
        #[arg(long, num_args = 0..=1, default_missing_value = "true")]
        color_by_bias: Option<bool>,

        /// Fixed "now" in epoch milliseconds, used when the selection is empty
        #[arg(long)]
        now_millis: Option<i64>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Print the source classification of every result as JSON
    Classify {
        /// JSON file with search results
        #[arg(long)]
        results: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    let config = slant_core::load_app_config_from_env()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(env = %config.env, "configuration loaded");

    match cli.command {
        Some(Commands::Timeline {
            results,
            select,
            filter,
            color_by_bias,
            now_millis,
            pretty,
        }) => {
            let args = TimelineArgs {
                results,
                select,
                filter,
                color_by_bias,
                now_millis,
                pretty,
            };
            println!("{}", timeline::run_timeline(&config, &args)?);
        }
        Some(Commands::Classify { results }) => {
            println!("{}", timeline::run_classify(&config, &results)?);
        }
        None => println!("slant-cli: run with --help to list commands"),
    }

    Ok(())
}
