use std::fmt;
use std::time::Duration;

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::time::sleep;

use crate::cli::Source;
use crate::diff::{self, Transition};
use crate::notify::{WebhookNotifier, build_message};
use crate::quotes::QuoteSource;
use crate::roster::{self, Roster};
use crate::scrape::{ONLINE_LAYOUT, PageClient, RANKING_LAYOUT, TableLayout, extract};
use crate::state::{Snapshot, StateStore};
use crate::ui::RunProgress;

/// The phases of one watch run, in execution order.
///
/// Strictly sequential: a run either walks all seven or aborts during
/// FETCH. Everything after FETCH is local and cannot fail the run short of
/// the filesystem rejecting the final PERSIST.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunPhase {
    Fetch,
    Extract,
    Merge,
    Diff,
    Notify,
    Reconcile,
    Persist,
}

impl fmt::Display for RunPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunPhase::Fetch => write!(f, "FETCH"),
            RunPhase::Extract => write!(f, "EXTRACT"),
            RunPhase::Merge => write!(f, "MERGE"),
            RunPhase::Diff => write!(f, "DIFF"),
            RunPhase::Notify => write!(f, "NOTIFY"),
            RunPhase::Reconcile => write!(f, "RECONCILE"),
            RunPhase::Persist => write!(f, "PERSIST"),
        }
    }
}

/// Structured summary of a completed run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub source: String,
    pub phases: Vec<RunPhase>,
    pub players_seen: usize,
    pub transitions: Vec<Transition>,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
    pub duration_ms: i64,
}

/// Drives one fetch → extract → merge → diff → notify → reconcile → persist
/// cycle against the previous snapshot.
pub struct RunOrchestrator<Q: QuoteSource> {
    pub client: PageClient,
    pub store: StateStore,
    pub notifier: WebhookNotifier,
    pub quotes: Q,
    /// Pause between successive webhook deliveries.
    pub notify_delay: Duration,
    /// Render notifications locally instead of posting them.
    pub dry_run: bool,
}

impl<Q: QuoteSource> RunOrchestrator<Q> {
    /// Execute one run. A fetch failure aborts before any notification or
    /// persistence; webhook failures are logged and skipped.
    pub async fn run(&self, source: Source, progress: &RunProgress) -> Result<RunReport> {
        let started_at = Utc::now();
        let mut phases = Vec::new();
        let enter = |phase: RunPhase| {
            progress.phase(phase);
            phase
        };

        let snapshot = self.store.load()?;

        phases.push(enter(RunPhase::Fetch));
        let mut pages: Vec<(String, TableLayout)> = Vec::new();
        if source.wants_online() {
            pages.push((self.client.fetch_online().await?, ONLINE_LAYOUT));
        }
        if source.wants_ranking() {
            pages.push((self.client.fetch_ranking().await?, RANKING_LAYOUT));
        }

        phases.push(enter(RunPhase::Extract));
        let rosters: Vec<Roster> = pages
            .iter()
            .map(|(html, layout)| extract(html, *layout))
            .collect();

        // Fold left-to-right: online first, so ranking data wins under
        // `--source both`.
        phases.push(enter(RunPhase::Merge));
        let mut current = Roster::new();
        for scraped in &rosters {
            current = roster::merge(&current, scraped);
        }

        phases.push(enter(RunPhase::Diff));
        let transitions = diff::changes(&snapshot.players, &current);

        phases.push(enter(RunPhase::Notify));
        for (i, transition) in transitions.iter().enumerate() {
            let quote = self.quotes.pick();
            let message = build_message(
                quote.as_deref(),
                &transition.player,
                &transition.old_code,
                &transition.new_code,
            );
            if !self.dry_run {
                self.notifier.send(&message).await;
            }
            progress.notified(&message);
            if i + 1 < transitions.len() {
                sleep(self.notify_delay).await;
            }
        }

        phases.push(enter(RunPhase::Reconcile));
        let next = Snapshot {
            players: roster::reconcile(&snapshot.players, &current),
            last_run_source: source.as_str().to_string(),
        };

        phases.push(enter(RunPhase::Persist));
        self.store.save(&next)?;

        let completed_at = Utc::now();
        Ok(RunReport {
            source: source.as_str().to_string(),
            phases,
            players_seen: current.len(),
            transitions,
            started_at,
            completed_at,
            duration_ms: (completed_at - started_at).num_milliseconds(),
        })
    }
}
