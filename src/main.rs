//! CLI entry point for the score ranker.
//!
//! Ranks a local score table directly, or goes through the storage
//! directory the way uploads and downloads do.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use score_ranker::config::Config;
use score_ranker::storage::Storage;
use score_ranker::table;
use std::ffi::OsStr;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "score_ranker")]
#[command(about = "Adds sum, average and rank columns to a student score CSV", long_about = None)]
struct Cli {
    /// Directory for uploaded and processed files (overrides STORAGE_PATH)
    #[arg(long, global = true, value_name = "DIR")]
    storage_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank a local CSV file
    Process {
        /// CSV file with 名前, 年齢, 国語, 数学 and 英語 columns
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Where to write the ranked CSV (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Store a CSV file and write its ranked copy as processed_<name>
    Upload {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Copy a stored file out of the storage directory
    Download {
        #[arg(value_name = "FILE_NAME")]
        file_name: String,

        /// Destination path (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    let config = Config::from_env();
    let _file_guard = init_logging(&config.log_file_path);

    let cli = Cli::parse();
    let storage_dir = cli.storage_dir.unwrap_or(config.storage_path);

    match cli.command {
        Commands::Process { input, output } => {
            let reader = BufReader::new(
                File::open(&input).with_context(|| format!("opening {}", input.display()))?,
            );
            let count = match &output {
                Some(path) => {
                    let file = File::create(path)
                        .with_context(|| format!("creating {}", path.display()))?;
                    table::process(reader, BufWriter::new(file))?
                }
                None => table::process(reader, io::stdout().lock())?,
            };
            info!(input = %input.display(), records = count, "Scores ranked");
        }
        Commands::Upload { file } => {
            let file_name = file
                .file_name()
                .and_then(OsStr::to_str)
                .with_context(|| format!("{} has no usable file name", file.display()))?
                .to_string();
            let bytes =
                std::fs::read(&file).with_context(|| format!("reading {}", file.display()))?;

            let storage = Storage::open(storage_dir)?;
            let receipt = storage.upload(&file_name, &bytes)?;
            println!("{}", serde_json::to_string_pretty(&receipt)?);
        }
        Commands::Download { file_name, output } => {
            let storage = Storage::open(storage_dir)?;
            let bytes = storage.download(&file_name)?;
            match output {
                Some(path) => {
                    std::fs::write(&path, &bytes)
                        .with_context(|| format!("writing {}", path.display()))?;
                    info!(file_name = %file_name, dest = %path.display(), "File downloaded");
                }
                None => {
                    let mut stdout = io::stdout().lock();
                    stdout.write_all(&bytes)?;
                    stdout.flush()?;
                }
            }
        }
    }

    Ok(())
}

/// Logging setup: colored stderr + JSON rolling log file.
///
/// The returned guard flushes the file writer when dropped.
fn init_logging(log_file_path: &Path) -> tracing_appender::non_blocking::WorkerGuard {
    let log_dir = log_file_path.parent().unwrap_or(Path::new("logs"));
    let log_file_name = log_file_path
        .file_name()
        .unwrap_or(OsStr::new("score_ranker.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(io::stderr)
        .with_filter(env_filter("RUST_LOG", "info"));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(env_filter("RUST_LOG_JSON", "debug"));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    debug!(log_file = %log_file_path.display(), "Logging initialized");
    file_guard
}

fn env_filter(var: &str, default: &str) -> EnvFilter {
    EnvFilter::try_from_env(var).unwrap_or_else(|_| EnvFilter::new(default))
}
