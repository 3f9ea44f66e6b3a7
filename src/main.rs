use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, warn};

use capsule_analytics::config::Config;
use capsule_analytics::engagement::Activity;
use capsule_analytics::engine::AnalyticsEngine;
use capsule_analytics::output::terminal;
use capsule_analytics::sentiment::distribution::DEFAULT_BINS;

/// Capsule analytics: sentiment, moderation, similarity, topic extraction
/// and engagement over plain-text input.
///
/// Documents are read one per non-empty line, from a file or from stdin.
#[derive(Parser)]
#[command(name = "capsule-analytics", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Where documents come from, plus the output format.
#[derive(Args)]
struct Input {
    /// Document file, one document per line (stdin when omitted or "-")
    file: Option<PathBuf>,

    /// Print JSON instead of colored text
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Polarity, subjectivity and assessment for each document
    Sentiment {
        #[command(flatten)]
        input: Input,
    },

    /// Toxicity score, flagged words and status for each document
    Moderate {
        #[command(flatten)]
        input: Input,
    },

    /// Rank documents by similarity to a source text
    Similar {
        /// The text to compare every document against
        #[arg(long)]
        source: String,

        #[command(flatten)]
        input: Input,
    },

    /// The most central topic terms of the corpus
    Topics {
        /// How many terms to show (default: ANALYTICS_TOPIC_LIMIT or 5)
        #[arg(long)]
        limit: Option<usize>,

        #[command(flatten)]
        input: Input,
    },

    /// The most frequent words of the corpus
    TopWords {
        /// How many words to show (default: ANALYTICS_MAX_WORDS or 50)
        #[arg(long)]
        max_words: Option<usize>,

        #[command(flatten)]
        input: Input,
    },

    /// Top words plus trending topics in one report
    Trends {
        /// How many words to show (default: ANALYTICS_MAX_WORDS or 50)
        #[arg(long)]
        max_words: Option<usize>,

        #[command(flatten)]
        input: Input,
    },

    /// Themes and similar documents for one user's documents
    Recommend {
        /// The user's own documents, one per line
        #[arg(long)]
        user: PathBuf,

        #[command(flatten)]
        input: Input,
    },

    /// Histogram of document polarity over [-1, 1]
    Distribution {
        /// Number of equal-width bins
        #[arg(long, default_value_t = DEFAULT_BINS)]
        bins: usize,

        #[command(flatten)]
        input: Input,
    },

    /// Hourly, daily and weekday activity counts.
    /// Input lines are "<RFC 3339 timestamp> <activity type>".
    Engagement {
        #[command(flatten)]
        input: Input,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so JSON output on stdout stays clean
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("capsule_analytics=warn")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;
    let engine = AnalyticsEngine::new(config.engine_config())
        .context("Failed to build the analytics engine")?;

    match cli.command {
        Commands::Sentiment { input } => {
            let docs = read_documents(input.file.as_deref())?;
            let results = engine.sentiment_batch(&docs);
            if input.json {
                print_json(&results)?;
            } else {
                terminal::display_sentiment(&docs, &results);
            }
        }

        Commands::Moderate { input } => {
            let docs = read_documents(input.file.as_deref())?;
            let results: Vec<_> = docs.iter().map(|d| engine.moderation(d)).collect();
            if input.json {
                print_json(&results)?;
            } else {
                terminal::display_moderation(&docs, &results);
            }
        }

        Commands::Similar { source, input } => {
            let docs = read_documents(input.file.as_deref())?;
            let ranked = engine.similarity_scores(&source, &docs);
            if input.json {
                print_json(&ranked)?;
            } else {
                terminal::display_similar(&source, &docs, &ranked);
            }
        }

        Commands::Topics { limit, input } => {
            let docs = read_documents(input.file.as_deref())?;
            let topics = engine.topic_scores(&docs, limit.unwrap_or(engine.topic_limit()))?;
            if input.json {
                print_json(&topics)?;
            } else {
                terminal::display_topics(&topics);
            }
        }

        Commands::TopWords { max_words, input } => {
            let docs = read_documents(input.file.as_deref())?;
            let counts =
                engine.document_topics(&docs, max_words.unwrap_or(engine.max_words()));
            if input.json {
                print_json(&counts)?;
            } else {
                terminal::display_word_counts(&counts);
            }
        }

        Commands::Trends { max_words, input } => {
            let docs = read_documents(input.file.as_deref())?;
            let report = engine.trend_report(&docs, max_words.unwrap_or(engine.max_words()))?;
            if input.json {
                print_json(&report)?;
            } else {
                terminal::display_trend_report(&report);
            }
        }

        Commands::Recommend { user, input } => {
            if input.file.as_deref().map_or(true, is_stdin) && is_stdin(&user) {
                anyhow::bail!(
                    "Both --user and the corpus would come from stdin.\n\
                     Pass the corpus as a file argument."
                );
            }
            let user_docs = read_documents(Some(user.as_path()))?;
            let all_docs = read_documents(input.file.as_deref())?;
            let rec = engine.recommend(&user_docs, &all_docs)?;
            if input.json {
                print_json(&rec)?;
            } else {
                terminal::display_recommendation(&rec, &all_docs);
            }
        }

        Commands::Distribution { bins, input } => {
            let docs = read_documents(input.file.as_deref())?;
            let hist = engine.sentiment_distribution(&docs, bins)?;
            if input.json {
                print_json(&hist)?;
            } else {
                terminal::display_histogram(&hist);
            }
        }

        Commands::Engagement { input } => {
            let lines = read_documents(input.file.as_deref())?;
            let activities = lines
                .iter()
                .enumerate()
                .map(|(i, line)| {
                    Activity::parse_line(line)
                        .with_context(|| format!("Bad activity record #{}", i + 1))
                })
                .collect::<Result<Vec<_>>>()?;
            let report = engine.engagement(&activities)?;
            if input.json {
                print_json(&report)?;
            } else {
                terminal::display_engagement(&report);
            }
        }
    }

    Ok(())
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

/// Read documents, one per non-empty line, from a file or stdin.
fn read_documents(path: Option<&Path>) -> Result<Vec<String>> {
    let raw = match path {
        Some(p) if !is_stdin(p) => std::fs::read_to_string(p)
            .with_context(|| format!("Failed to read documents from {}", p.display()))?,
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read documents from stdin")?;
            buf
        }
    };

    let docs: Vec<String> = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    if docs.is_empty() {
        warn!("No documents in input");
    } else {
        debug!(documents = docs.len(), "Read documents");
    }
    Ok(docs)
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
