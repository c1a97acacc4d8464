//! Terminal output for a watch run: spinner and colored status lines.
//!
//! Uses `indicatif` for the phase spinner and `console` for styling.
//! [`RunProgress`] follows one run from FETCH through PERSIST.

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::orchestrator::{RunPhase, RunReport};

/// Visual progress indicator for one watch run.
pub struct RunProgress {
    pb: ProgressBar,
    green: Style,
    red: Style,
    cyan: Style,
}

impl RunProgress {
    /// Start the spinner for a run against the given source set.
    pub fn start(source: &str) -> Self {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .expect("invalid template"),
        );
        pb.set_message(format!("watching {source}"));
        pb.enable_steady_tick(std::time::Duration::from_millis(100));

        Self {
            pb,
            green: Style::new().green().bold(),
            red: Style::new().red().bold(),
            cyan: Style::new().cyan(),
        }
    }

    /// Reflect the phase the orchestrator just entered.
    pub fn phase(&self, phase: RunPhase) {
        self.pb.set_message(format!("{phase}"));
    }

    /// Print one rendered notification above the spinner.
    pub fn notified(&self, message: &str) {
        self.pb
            .println(format!("  {} {message}", self.cyan.apply_to("›")));
    }

    /// Finish the spinner and summarize the run.
    pub fn finish(&self, transitions: usize) {
        self.pb.finish_and_clear();
        match transitions {
            0 => println!("  {} No rebirths detected", self.green.apply_to("✓")),
            1 => println!("  {} 1 rebirth announced", self.green.apply_to("✓")),
            n => println!("  {} {n} rebirths announced", self.green.apply_to("✓")),
        }
    }

    /// Finish the spinner after a fatal error.
    pub fn failed(&self, err: &anyhow::Error) {
        self.pb.finish_and_clear();
        eprintln!("  {} Run aborted: {err:#}", self.red.apply_to("✗"));
    }

    /// Print the run report formatted as JSON.
    pub fn print_report(&self, report: &RunReport) {
        println!();
        println!("{}", self.green.apply_to("─── Run Report ───"));
        println!(
            "{}",
            serde_json::to_string_pretty(report).unwrap_or_default()
        );
    }
}

/// Yellow diagnostic line on stderr. Recoverable problems only; fatal
/// errors go through [`RunProgress::failed`].
pub fn warn(message: &str) {
    eprintln!("  {} {message}", Style::new().yellow().apply_to("!"));
}
