mod cli;
mod config;
mod diff;
mod jobs;
mod notify;
mod orchestrator;
mod quotes;
mod roster;
mod scrape;
mod state;
mod ui;

use std::time::Duration;

use anyhow::Result;
use clap::Parser;

use cli::Cli;
use config::WatchConfig;
use notify::WebhookNotifier;
use orchestrator::RunOrchestrator;
use quotes::QuoteFile;
use scrape::PageClient;
use state::StateStore;
use ui::RunProgress;

// One invocation, one fully sequential run.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = WatchConfig::load()?;

    let webhook_url = (!config.webhook_url.is_empty()).then(|| config.webhook_url.clone());
    let orchestrator = RunOrchestrator {
        client: PageClient::new(
            config.online_url.clone(),
            config.ranking_url.clone(),
            Duration::from_secs(config.fetch_timeout_secs),
        ),
        store: StateStore::new(&config.state_path),
        notifier: WebhookNotifier::new(webhook_url, Duration::from_secs(config.webhook_timeout_secs)),
        quotes: QuoteFile::new(&config.quotes_path),
        notify_delay: Duration::from_millis(config.notify_delay_ms),
        dry_run: cli.dry_run,
    };

    let progress = RunProgress::start(cli.source.as_str());
    match orchestrator.run(cli.source, &progress).await {
        Ok(report) => {
            progress.finish(report.transitions.len());
            if cli.verbose {
                progress.print_report(&report);
            }
            Ok(())
        }
        Err(err) => {
            progress.failed(&err);
            std::process::exit(1);
        }
    }
}
