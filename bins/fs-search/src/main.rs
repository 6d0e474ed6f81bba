//! fs-search: CLI tool for fuzzy catalog search.

mod output;

use anyhow::{anyhow, bail, Context};
use clap::{Parser, Subcommand};
use foodshare_fuzzy::catalog::{field_values, parse_catalog, rank_json_matches};
use foodshare_fuzzy::{edit_distance, field_score, fuzzy_match, similarity, SearchConfig};
use output::{format_match, Status};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "fs-search")]
#[command(about = "Fuzzy search over JSON catalogs")]
#[command(version)]
struct Cli {
    /// Search config file (TOML); defaults to .foodshare-search.toml if present
    #[arg(long, global = true)]
    config: Option<String>,

    /// Log level used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show edit distance and similarity of two strings
    Distance {
        /// First string
        a: String,
        /// Second string
        b: String,
    },
    /// Check whether a query fuzzily matches a text (exit code 1 if not)
    Match {
        /// Search query
        query: String,
        /// Text to match against
        target: String,
        /// Minimum similarity (defaults to the profile or config default)
        #[arg(long)]
        threshold: Option<f64>,
        /// Search profile supplying the threshold
        #[arg(long)]
        profile: Option<String>,
    },
    /// Rank items of a JSON catalog file
    Rank {
        /// JSON file holding an array of objects
        catalog: PathBuf,
        /// Search query
        query: String,
        /// Search profile supplying fields and threshold
        #[arg(long)]
        profile: Option<String>,
        /// Field key or dotted path to search (repeatable)
        #[arg(long = "field")]
        fields: Vec<String>,
        /// Minimum item score
        #[arg(long)]
        threshold: Option<f64>,
        /// Show at most this many results
        #[arg(long)]
        limit: Option<usize>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List configured search profiles
    Profiles,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level)?;

    let config = SearchConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Distance { a, b } => {
            println!("Distance: {}", edit_distance(&a, &b));
            println!("Similarity: {:.3}", similarity(&a, &b));
        }

        Commands::Match { query, target, threshold, profile } => {
            let threshold = threshold
                .unwrap_or_else(|| config.threshold_for(profile.as_deref()).value());
            let score = field_score(&query, &target);

            if fuzzy_match(&query, &target, threshold)? {
                Status::success(&format!(
                    "'{}' matches '{}' (score {:.3}{})",
                    query,
                    target,
                    score.score,
                    if score.exact { ", exact" } else { "" }
                ));
            } else {
                Status::error(&format!(
                    "'{}' does not match '{}' (score {:.3} < {})",
                    query, target, score.score, threshold
                ));
                std::process::exit(1);
            }
        }

        Commands::Rank { catalog, query, profile, fields, threshold, limit, json } => {
            let selected = match profile.as_deref() {
                Some(name) => Some(
                    config
                        .profile(name)
                        .ok_or_else(|| anyhow!("Unknown search profile '{}'", name))?,
                ),
                None => None,
            };

            let fields = if !fields.is_empty() {
                fields
            } else if let Some(p) = selected {
                p.fields.clone()
            } else {
                bail!("No fields to search: pass --field or --profile");
            };

            let threshold = threshold.unwrap_or_else(|| match selected {
                Some(p) => p.threshold.value(),
                None => config.default_threshold.value(),
            });

            let content = std::fs::read_to_string(&catalog)
                .with_context(|| format!("Failed to read catalog {}", catalog.display()))?;
            let items = parse_catalog(&content)?;

            let mut matches = rank_json_matches(&items, &query, &fields, threshold)?;
            if let Some(max) = limit {
                matches.truncate(max);
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&matches)?);
            } else {
                if query.trim().is_empty() {
                    Status::header(&format!("All items ({} of {})", matches.len(), items.len()));
                } else {
                    Status::header(&format!("{} matches for '{}'", matches.len(), query));
                }
                for m in &matches {
                    let label = field_values(m.item, &fields)
                        .into_iter()
                        .flatten()
                        .next()
                        .map(String::from)
                        .unwrap_or_else(|| m.item.to_string());
                    println!("{}", format_match(m.score, m.exact_match, &label));
                }
            }
        }

        Commands::Profiles => {
            if let Some(path) = &config.path {
                Status::info(&format!("Config: {}", path));
            }
            println!("default: threshold {}", config.default_threshold.value());
            for (name, profile) in &config.profiles {
                println!(
                    "{}: threshold {}, fields {}",
                    name,
                    profile.threshold.value(),
                    profile.fields.join(", ")
                );
            }
        }
    }

    Ok(())
}

/// Install a compact stderr subscriber; RUST_LOG overrides `level`.
fn init_logging(level: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false).compact());

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow!("Failed to set tracing subscriber: {}", e))
}
