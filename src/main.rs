use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use samhita::config::{parse_selection, Config};
use samhita::models::{GroupId, GROUP_COUNT};

mod commands;

use commands::ViewContext;

#[derive(Parser)]
#[command(
    name = "samhita",
    version,
    about = "Chart-ready analytics views over a hymn corpus",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to a TOML config file (defaults to SAMHITA_* environment variables)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding the JSON payloads
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Base URL of the corpus service; takes precedence over --data-dir
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log format (text, json)
    #[arg(long, global = true)]
    log_format: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Verse-count histograms and averages per group
    Lengths,

    /// Deity mentions pivoted into one row per group
    Deities,

    /// Case and tense distributions per group
    Grammar,

    /// Keyword search and per-group frequency of the selected term
    Keywords {
        /// Case-insensitive filter over known terms
        #[arg(short, long, default_value = "")]
        query: String,

        /// Term to chart (defaults to the configured keyword)
        #[arg(short, long)]
        term: Option<String>,
    },

    /// Side-by-side statistics for selected groups
    Compare {
        /// Comma-separated group ids, e.g. 1,2,10
        #[arg(short, long)]
        select: Option<String>,
    },

    /// Vocabulary size per group
    Vocabulary,

    /// Average verses per hymn and words per verse
    Complexity,

    /// Verse counts for the hymns of one group
    Hymns {
        /// Group id (1-10)
        #[arg(short, long, value_parser = group_id_parser())]
        group: GroupId,
    },

    /// Verses of one hymn with decoded grammar tags
    Verses {
        /// Group id (1-10)
        #[arg(short, long, value_parser = group_id_parser())]
        group: GroupId,

        /// Hymn id within the group
        #[arg(long)]
        hymn: u32,
    },

    /// Tribes, rivers and places with the groups that mention them
    Cultural {
        /// Only one category (tribes, rivers, places)
        #[arg(long)]
        category: Option<String>,
    },
}

fn group_id_parser() -> clap::builder::RangedI64ValueParser<GroupId> {
    clap::value_parser!(GroupId).range(1..=GROUP_COUNT as i64)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::from_env()?,
    };
    if let Some(data_dir) = cli.data_dir.clone() {
        config.source.data_dir = data_dir;
    }
    if let Some(api_url) = cli.api_url.clone() {
        config.source.api_url = Some(api_url);
    }
    if let Some(format) = cli.log_format.clone() {
        config.logging.format = format;
    }
    config.validate().context("Invalid configuration")?;

    // Initialize tracing/logging
    setup_tracing(&config.logging.format, &config.logging.level, cli.verbose)?;

    let ctx = ViewContext::from_config(config)?;
    tracing::info!(source = ctx.source_name(), "samhita starting");

    match cli.command {
        Commands::Lengths => {
            tracing::info!("Starting lengths command");
            commands::lengths(&ctx).await?;
        }

        Commands::Deities => {
            tracing::info!("Starting deities command");
            commands::deities(&ctx).await?;
        }

        Commands::Grammar => {
            tracing::info!("Starting grammar command");
            commands::grammar(&ctx).await?;
        }

        Commands::Keywords { query, term } => {
            tracing::info!(query = %query, term = ?term, "Starting keywords command");
            commands::keywords(&ctx, query, term).await?;
        }

        Commands::Compare { select } => {
            let selection = select.as_deref().map(parse_selection).transpose()?;
            tracing::info!(selection = ?selection, "Starting compare command");
            commands::compare(&ctx, selection).await?;
        }

        Commands::Vocabulary => {
            tracing::info!("Starting vocabulary command");
            commands::vocabulary(&ctx).await?;
        }

        Commands::Complexity => {
            tracing::info!("Starting complexity command");
            commands::complexity(&ctx).await?;
        }

        Commands::Hymns { group } => {
            tracing::info!(group = %group, "Starting hymns command");
            commands::hymns(&ctx, group).await?;
        }

        Commands::Verses { group, hymn } => {
            tracing::info!(group = %group, hymn = %hymn, "Starting verses command");
            commands::verses(&ctx, group, hymn).await?;
        }

        Commands::Cultural { category } => {
            tracing::info!(category = ?category, "Starting cultural command");
            commands::cultural(&ctx, category).await?;
        }
    }

    tracing::info!("samhita completed successfully");
    Ok(())
}

fn setup_tracing(format: &str, level: &str, verbose: bool) -> Result<()> {
    let env_filter = if verbose {
        tracing_subscriber::EnvFilter::new("samhita=debug,info")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(format!("samhita={level},warn")))
    };

    // stdout carries the chart JSON
    match format {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(std::io::stderr),
                )
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .pretty()
                        .with_writer(std::io::stderr),
                )
                .init();
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_id_in_range() {
        let cli = Cli::try_parse_from(["samhita", "hymns", "--group", "10"]).unwrap();
        assert!(matches!(cli.command, Commands::Hymns { group: 10 }));

        let cli = Cli::try_parse_from(["samhita", "verses", "-g", "1", "--hymn", "3"]).unwrap();
        assert!(matches!(cli.command, Commands::Verses { group: 1, hymn: 3 }));
    }

    #[test]
    fn test_group_id_out_of_range_rejected() {
        assert!(Cli::try_parse_from(["samhita", "hymns", "--group", "0"]).is_err());
        assert!(Cli::try_parse_from(["samhita", "hymns", "--group", "11"]).is_err());
        assert!(Cli::try_parse_from(["samhita", "verses", "--group", "99", "--hymn", "1"]).is_err());
    }
}
