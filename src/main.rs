//! nest-replay: feed a captured Nest event stream through the mapper and log
//! every handler callback.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{eyre, Result, WrapErr};
use tracing::info;

use nest_stream::adapters::TracingHandler;
use nest_stream::config::ReplayConfig;
use nest_stream::logging::init_tracing;
use nest_stream::replay::replay;

#[derive(Parser)]
#[command(author, version, about = "Replay a captured Nest event stream", long_about = None)]
struct Cli {
    /// Transcript file in text/event-stream format (default: stdin)
    input: Option<PathBuf>,

    /// Log filter directive, overrides NEST_STREAM_LOG
    #[arg(long)]
    log: Option<String>,

    /// Emit JSON logs, overrides NEST_STREAM_JSON_LOGS
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let mut config = ReplayConfig::from_env();
    if let Some(input) = cli.input {
        config = config.with_input(input);
    }
    if let Some(filter) = cli.log {
        config = config.with_log_filter(filter);
    }
    if cli.json {
        config = config.with_json_logs(true);
    }

    init_tracing(&config).map_err(|e| eyre!("Failed to initialise logging: {}", e))?;

    let reader: Box<dyn BufRead> = match &config.input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).wrap_err_with(|| format!("Failed to open {}", path.display()))?,
        )),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let summary = replay(reader, &TracingHandler::new()).wrap_err("Failed to read transcript")?;

    info!(
        events = summary.events,
        dispatched = summary.dispatched,
        ignored = summary.ignored,
        failures = summary.failures.len(),
        "Replay finished"
    );

    if summary.failures.is_empty() {
        Ok(())
    } else {
        Err(eyre!(
            "{} of {} events failed to parse",
            summary.failures.len(),
            summary.events
        ))
    }
}
