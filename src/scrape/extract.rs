//! Turns a scraped HTML document into a roster.
//!
//! Pure transform, no network or file I/O. Both source pages render their
//! players as table rows; they differ only in which cells hold the name and
//! the job icon, captured by [`TableLayout`].

use std::sync::OnceLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::jobs;
use crate::roster::Roster;

/// Where a source page keeps its name and job-icon cells.
#[derive(Debug, Clone, Copy)]
pub struct TableLayout {
    /// Rows with fewer cells than this are skipped.
    pub min_cells: usize,
    /// Zero-based index of the cell holding the player name.
    pub name_cell: usize,
    /// Zero-based index of the cell holding the job icon.
    pub icon_cell: usize,
}

/// Front-page "currently online" table: name first, job icon third.
pub const ONLINE_LAYOUT: TableLayout = TableLayout {
    min_cells: 3,
    name_cell: 0,
    icon_cell: 2,
};

/// Top-100 ranking table: rank, then name, then level, then job icon.
pub const RANKING_LAYOUT: TableLayout = TableLayout {
    min_cells: 4,
    name_cell: 1,
    icon_cell: 3,
};

fn tbody_selector() -> &'static Selector {
    static SELECTOR: OnceLock<Selector> = OnceLock::new();
    SELECTOR.get_or_init(|| Selector::parse("tbody").expect("invalid selector"))
}

fn row_selector() -> &'static Selector {
    static SELECTOR: OnceLock<Selector> = OnceLock::new();
    SELECTOR.get_or_init(|| Selector::parse("tr").expect("invalid selector"))
}

fn cell_selector() -> &'static Selector {
    static SELECTOR: OnceLock<Selector> = OnceLock::new();
    SELECTOR.get_or_init(|| Selector::parse("td").expect("invalid selector"))
}

fn img_selector() -> &'static Selector {
    static SELECTOR: OnceLock<Selector> = OnceLock::new();
    SELECTOR.get_or_init(|| Selector::parse("img").expect("invalid selector"))
}

/// Pull the 3-digit job code out of an icon path like `.../icons/221.jpg`.
fn job_code_from_src(src: &str) -> Option<String> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"/(\d{3})\.jpg").expect("invalid pattern"));
    re.captures(src).map(|caps| caps[1].to_string())
}

/// One row's cells → optional (name, code) entry.
///
/// Rows that are too short, lack a job icon, carry an icon path without a
/// 3-digit code, or name a code outside the registry contribute nothing.
fn row_entry(cells: &[ElementRef<'_>], layout: TableLayout) -> Option<(String, String)> {
    if cells.len() < layout.min_cells {
        return None;
    }
    let name = cells[layout.name_cell]
        .text()
        .collect::<String>()
        .trim()
        .to_string();
    let icon = cells[layout.icon_cell].select(img_selector()).next()?;
    let code = job_code_from_src(icon.value().attr("src").unwrap_or_default())?;
    if !jobs::is_known(&code) {
        return None;
    }
    Some((name, code))
}

/// Extract a name → job-code roster from one source page.
///
/// A later row for a name already seen overwrites its code in place; the
/// name keeps its first-seen position.
pub fn extract(html: &str, layout: TableLayout) -> Roster {
    let document = Html::parse_document(html);
    let mut roster = Roster::new();
    for body in document.select(tbody_selector()) {
        for row in body.select(row_selector()) {
            let cells: Vec<ElementRef<'_>> = row.select(cell_selector()).collect();
            if let Some((name, code)) = row_entry(&cells, layout) {
                roster.insert(name, code);
            }
        }
    }
    roster
}
