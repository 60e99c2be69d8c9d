use anyhow::Context;
use cdb_scraper::app::extract_use_case::{ExtractUseCase, OutputFormat};
use cdb_scraper::config::Config;
use cdb_scraper::constants::{AGENCY_NAME, TIMEZONE};
use cdb_scraper::observability::init_logging;
use cdb_scraper::MeetingExtractor;
use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "cdb_scraper")]
#[command(about = "Illinois Capital Development Board meeting extractor")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract meeting records from a saved board-meetings page
    Extract {
        /// HTML file previously fetched from the board-meetings page
        #[arg(long)]
        input: PathBuf,
        /// URL recorded as each meeting's source (defaults to $CDB_SOURCE_URL or the board page)
        #[arg(long)]
        source_url: Option<String>,
        /// TOML config file (defaults to $CDB_CONFIG)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Print one indented JSON array instead of JSON lines
        #[arg(long)]
        pretty: bool,
    },
    /// Print the effective configuration
    ShowConfig {
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn load_config(path: Option<PathBuf>) -> anyhow::Result<Config> {
    let config = match path {
        Some(path) => Config::load(&path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::from_env().context("loading config from environment")?,
    };
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let _log_guard = init_logging();

    let cli = Cli::parse();

    match cli.command {
        Commands::Extract {
            input,
            source_url,
            config,
            pretty,
        } => {
            let config = load_config(config)?;
            let source_url = source_url.unwrap_or_else(|| config.source_url.clone());

            let body = fs::read_to_string(&input)
                .with_context(|| format!("reading {}", input.display()))?;
            info!(input = %input.display(), bytes = body.len(), "Loaded page");

            let extractor = MeetingExtractor::from_config(&config)?;
            info!(
                canary = %extractor.config().canary_token,
                keywords = ?extractor.config().time_note_keywords,
                "Extractor configured"
            );
            let use_case = ExtractUseCase::new(extractor);
            let format = if pretty {
                OutputFormat::PrettyArray
            } else {
                OutputFormat::JsonLines
            };

            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            match use_case.run(&source_url, &body, format, &mut out) {
                Ok(records) => {
                    info!(meetings = records.len(), "Extraction complete");
                }
                Err(e) => {
                    error!(kind = e.kind(), "Extraction failed: {}", e);
                    return Err(e.into());
                }
            }
        }
        Commands::ShowConfig { config } => {
            let config = load_config(config)?;
            println!("# {} ({})", AGENCY_NAME, TIMEZONE);
            println!("scraper_name = {:?}", config.scraper_name);
            println!("source_url = {:?}", config.source_url);
            println!("canary_token = {:?}", config.extractor.canary_token);
            println!("description_strip = {:?}", config.extractor.description_strip);
            println!("time_note_keywords = {:?}", config.extractor.time_note_keywords);
        }
    }

    Ok(())
}
