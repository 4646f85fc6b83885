//! Timeline CLI - inspect scale-aligned buckets from the command line

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use serde::Serialize;
use tabled::{Table, Tabled};
use timeline_core::{BucketZone, DomainError, Scale, TimeEncoder, TimelineConfig};
use tracing::{debug, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_LOG_FILTER: &str = "timeline=info,timeline_core=info";

#[derive(Parser)]
#[command(name = "timeline")]
#[command(about = "Scale-aligned time buckets", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Zone whose wall clock aligns buckets (utc, local, +09:00)
    #[arg(long, global = true, env = "TIMELINE_ZONE")]
    zone: Option<BucketZone>,

    /// strftime layout for printed times
    #[arg(long, global = true, env = "TIMELINE_OUTPUT_FORMAT")]
    format: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start of the bucket containing TIME
    Begin {
        /// Time, e.g. "2020-01-01 00:05:10.000" or RFC 3339
        time: String,

        /// Bucket width: milliseconds or 250ms, 6s, 3m, 2h, 1d
        #[arg(short, long)]
        scale: String,
    },

    /// Exclusive end of the bucket containing TIME
    End {
        /// Time, e.g. "2020-01-01 00:05:10.000" or RFC 3339
        time: String,

        /// Bucket width: milliseconds or 250ms, 6s, 3m, 2h, 1d
        #[arg(short, long)]
        scale: String,
    },

    /// Both bounds of the bucket containing TIME
    Bucket {
        /// Time, e.g. "2020-01-01 00:05:10.000" or RFC 3339
        time: String,

        /// Bucket width: milliseconds or 250ms, 6s, 3m, 2h, 1d
        #[arg(short, long)]
        scale: String,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Milliseconds from START to END
    Diff { start: String, end: String },

    /// Check whether SCALE evenly divides a day
    CheckScale {
        #[arg(allow_hyphen_values = true)]
        scale: String,
    },
}

#[derive(Serialize, Tabled)]
struct BucketRow {
    begin: String,
    end: String,
    scale: String,
    zone: String,
}

fn init_logging() {
    let log_format = std::env::var("TIMELINE_LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().pretty().with_writer(std::io::stderr))
                .init();
        }
    }
}

fn load_config(cli: &Cli) -> Result<TimelineConfig> {
    let mut config = TimelineConfig::from_env().context("Invalid TIMELINE_* environment")?;
    if let Some(zone) = cli.zone {
        config.zone = zone;
    }
    if let Some(format) = &cli.format {
        config.output_format = format.clone();
    }
    debug!(zone = %config.zone, format = %config.output_format, "Loaded configuration");
    Ok(config)
}

fn parse_scale(raw: &str) -> Result<Scale> {
    raw.parse::<Scale>()
        .with_context(|| format!("Unusable scale {:?}", raw))
}

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let timeline = config.timeline();
    let codec = config.text_codec();

    match &cli.command {
        Commands::Begin { time, scale } => {
            let scale = parse_scale(scale)?;
            let begin = timeline
                .begin_time(time, scale.as_millis(), &codec)
                .with_context(|| format!("Failed to compute bucket start for {:?}", time))?;
            println!("{}", begin);
        }

        Commands::End { time, scale } => {
            let scale = parse_scale(scale)?;
            let end = timeline
                .end_time(time, scale.as_millis(), &codec)
                .with_context(|| format!("Failed to compute bucket end for {:?}", time))?;
            println!("{}", end);
        }

        Commands::Bucket { time, scale, json } => {
            let scale = parse_scale(scale)?;
            let bucket = timeline
                .bucket(time, scale.as_millis(), &codec)
                .with_context(|| format!("Failed to compute bucket for {:?}", time))?;

            let row = BucketRow {
                begin: codec.encode(bucket.begin)?,
                end: codec.encode(bucket.end)?,
                scale: scale.to_string(),
                zone: timeline.zone().to_string(),
            };

            if *json {
                println!("{}", serde_json::to_string_pretty(&row)?);
            } else {
                println!("{}", Table::new(vec![row]));
            }
        }

        Commands::Diff { start, end } => {
            let diff = timeline_core::diff_time_with(start, end, &codec)
                .context("Failed to parse times")?;
            println!("{}", diff);
        }

        Commands::CheckScale { scale } => check_scale(scale)?,
    }

    Ok(())
}

fn check_scale(raw: &str) -> Result<()> {
    match raw.parse::<Scale>() {
        Ok(scale) => {
            info!(scale = %scale, "Scale accepted");
            println!(
                "{} {} ({} ms, {} buckets per day)",
                "✓".green().bold(),
                scale,
                scale.as_millis(),
                scale.buckets_per_day()
            );
            Ok(())
        }
        Err(DomainError::InvalidScale(ms)) => {
            println!(
                "{} {} ms does not evenly divide a day",
                "✗".red().bold(),
                ms
            );
            anyhow::bail!("scale {} is not available", ms)
        }
        Err(e) => Err(e).context("Unreadable scale"),
    }
}
