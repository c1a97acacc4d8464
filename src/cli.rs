//! Command-line interface of the watcher, built on clap.
//!
//! A single subcommand-less invocation: pick the source page(s) with
//! `--source`, render notifications locally with `--dry-run`.

use std::fmt;

use clap::{Parser, ValueEnum};

/// Watches the Underworld player pages and announces job rebirths.
#[derive(Debug, Parser)]
#[command(name = "jobwatch", version, about)]
pub struct Cli {
    /// Which page(s) to scrape this run.
    #[arg(long, value_enum, default_value_t = Source::Online)]
    pub source: Source,

    /// Print notifications to the console instead of posting to the webhook.
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// Print the run report when the run completes.
    #[arg(long, short, default_value_t = false)]
    pub verbose: bool,
}

/// Scrape origin(s) for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Source {
    /// The "currently online" roster on the front page.
    Online,
    /// The top-100 ranking page.
    Ranking,
    /// Both pages; ranking data wins for players appearing on both.
    Both,
}

impl Source {
    pub fn wants_online(self) -> bool {
        matches!(self, Source::Online | Source::Both)
    }

    pub fn wants_ranking(self) -> bool {
        matches!(self, Source::Ranking | Source::Both)
    }

    /// Stamp recorded in the snapshot's `last_run_source` field.
    pub fn as_str(self) -> &'static str {
        match self {
            Source::Online => "online",
            Source::Ranking => "ranking",
            Source::Both => "both",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
