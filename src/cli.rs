use std::path::PathBuf;

use chrono::NaiveDateTime;
use clap::Parser;

use crate::club::clock::parse_instant;

/// Terminal front end for the WiCyS UAlberta student chapter.
#[derive(Debug, Clone, Parser)]
#[command(name = "club-tui", version, about)]
pub struct Args {
    /// Events catalog (JSON). Overrides `events` in config.toml.
    #[arg(long, value_name = "PATH")]
    pub events: Option<PathBuf>,

    /// Pretend the current time is this instant, e.g. "2025-03-06 18:00".
    #[arg(long, value_name = "INSTANT", value_parser = parse_now)]
    pub now: Option<NaiveDateTime>,

    /// Print upcoming and past events to stdout instead of starting the UI.
    #[arg(long)]
    pub list: bool,

    /// Theme preset (wicys, light, mono). Overrides config.toml.
    #[arg(long, value_name = "NAME")]
    pub theme: Option<String>,

    /// Directory for log files.
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Log at debug level.
    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_now(value: &str) -> Result<NaiveDateTime, String> {
    parse_instant(value).ok_or_else(|| {
        format!(
            "expected YYYY-MM-DD, YYYY-MM-DD HH:MM or YYYY-MM-DDTHH:MM[:SS], got {:?}",
            value
        )
    })
}
