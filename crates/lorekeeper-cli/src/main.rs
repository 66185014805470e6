//! Lorekeeper console harness.
//!
//! Wires the advisory controller to the real clock, timer, and filesystem,
//! loads the documents named on the command line, and feeds it gameplay
//! events read as JSON lines from stdin. Advisory text is printed as it
//! becomes ready; a progress summary is printed once stdin closes and the
//! queue drains.
//!
//! ```text
//! lorekeeper [--primary <path>] [--topic <id>=<path>]... < events.jsonl
//! ```

use std::error::Error;
use std::io::BufRead;
use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

use lorekeeper_advisor::config::AdvisorConfig;
use lorekeeper_advisor::controller::{AdvisorDeps, AdvisoryController};
use lorekeeper_advisor::scheduler::TokioScheduler;
use lorekeeper_core::clock::SystemClock;
use lorekeeper_core::event::AdvisoryEvent;
use lorekeeper_core::reader::FsReader;

mod catalog;
mod observer;

/// Documents named on the command line.
#[derive(Debug, Default)]
struct CliArgs {
    primary: Option<String>,
    topics: Vec<(String, String)>,
}

fn parse_args(args: &[String]) -> Result<CliArgs, String> {
    let mut parsed = CliArgs::default();
    let mut iter = args.iter();
    while let Some(flag) = iter.next() {
        match flag.as_str() {
            "--primary" => {
                let path = iter
                    .next()
                    .ok_or_else(|| "--primary requires a path".to_owned())?;
                parsed.primary = Some(path.clone());
            }
            "--topic" => {
                let pair = iter
                    .next()
                    .ok_or_else(|| "--topic requires <id>=<path>".to_owned())?;
                let (id, path) = pair
                    .split_once('=')
                    .ok_or_else(|| format!("--topic expects <id>=<path>, got {pair}"))?;
                parsed.topics.push((id.to_owned(), path.to_owned()));
            }
            other => return Err(format!("unrecognized argument: {other}")),
        }
    }
    Ok(parsed)
}

/// Reads a timing override in milliseconds from the environment.
fn env_duration(name: &str, default: Duration) -> Result<Duration, String> {
    match std::env::var(name) {
        Ok(value) => value
            .parse::<u64>()
            .map(Duration::from_millis)
            .map_err(|e| format!("{name} must be milliseconds: {e}")),
        Err(_) => Ok(default),
    }
}

fn config_from_env() -> Result<AdvisorConfig, String> {
    let defaults = AdvisorConfig::default();
    Ok(AdvisorConfig {
        event_timeout: env_duration("LOREKEEPER_EVENT_TIMEOUT_MS", defaults.event_timeout)?,
        ack_delay: env_duration("LOREKEEPER_ACK_DELAY_MS", defaults.ack_delay)?,
        recovery_delay: env_duration("LOREKEEPER_RECOVERY_DELAY_MS", defaults.recovery_delay)?,
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = parse_args(&std::env::args().skip(1).collect::<Vec<_>>())?;
    let config = config_from_env()?;

    let controller = AdvisoryController::spawn(
        config,
        AdvisorDeps {
            clock: Arc::new(SystemClock),
            scheduler: Arc::new(TokioScheduler),
            reader: Arc::new(FsReader),
            translator: Arc::new(catalog::CatalogTranslator::english()),
            observers: vec![Arc::new(observer::ConsoleObserver) as _],
        },
    );

    if let Some(path) = &args.primary {
        controller.load_primary_document(path.as_str());
    }
    for (topic_id, path) in &args.topics {
        controller.load_topic_document(topic_id.as_str(), path.as_str());
    }

    let mut submitted: u64 = 0;
    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match AdvisoryEvent::from_json(&line) {
            Ok(event) => {
                controller.handle_event(event);
                submitted += 1;
            }
            Err(error) => tracing::warn!(%error, "skipping undecodable event line"),
        }
    }

    // Every submitted event ends up either displayed or counted as an
    // error; wait for the whole queue to settle before summarizing.
    loop {
        let progress = controller.progress().await;
        if progress.events_processed + progress.errors_count >= submitted {
            println!("{}", serde_json::to_string_pretty(&progress)?);
            break;
        }
        tokio::time::sleep(Duration::from_millis(100)).await;
    }

    Ok(())
}
