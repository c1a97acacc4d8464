//! The roster: player name → job code, in first-seen order.

use indexmap::IndexMap;

/// Player names are the identity key; there is no separate player id.
/// Insertion order is part of the contract: notifications fire in the
/// order players were first encountered during the scrape.
pub type Roster = IndexMap<String, String>;

/// Union of both rosters; `b` wins where a name appears in both.
///
/// Shared names keep the position they already had in `a`, so a ranking
/// scrape can override a roster scrape's codes without reshuffling the
/// notification order.
pub fn merge(a: &Roster, b: &Roster) -> Roster {
    let mut out = a.clone();
    for (name, code) in b {
        out.insert(name.clone(), code.clone());
    }
    out
}

/// Overlay the freshly scraped roster onto the previously persisted one.
///
/// Names missing from the current scrape keep their last-known code; the
/// persisted roster only grows or updates, never shrinks.
pub fn reconcile(previous: &Roster, current: &Roster) -> Roster {
    merge(previous, current)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster(entries: &[(&str, &str)]) -> Roster {
        entries
            .iter()
            .map(|(n, c)| (n.to_string(), c.to_string()))
            .collect()
    }

    #[test]
    fn merge_is_right_biased() {
        let a = roster(&[("Dave", "220")]);
        let b = roster(&[("Dave", "221")]);
        let merged = merge(&a, &b);
        assert_eq!(merged.get("Dave").map(String::as_str), Some("221"));
    }

    #[test]
    fn merge_keeps_keys_unique_to_either_side() {
        let a = roster(&[("Alice", "220"), ("Bob", "120")]);
        let b = roster(&[("Carol", "320")]);
        let merged = merge(&a, &b);
        assert_eq!(merged.len(), 3);
        assert_eq!(merged.get("Alice").map(String::as_str), Some("220"));
        assert_eq!(merged.get("Carol").map(String::as_str), Some("320"));
    }

    #[test]
    fn merge_keeps_left_positions_for_shared_names() {
        let a = roster(&[("Alice", "220"), ("Bob", "120")]);
        let b = roster(&[("Bob", "121"), ("Carol", "320")]);
        let merged = merge(&a, &b);
        let names: Vec<&str> = merged.keys().map(String::as_str).collect();
        assert_eq!(names, ["Alice", "Bob", "Carol"]);
        assert_eq!(merged.get("Bob").map(String::as_str), Some("121"));
    }

    #[test]
    fn reconcile_retains_players_missing_from_current() {
        let previous = roster(&[("Carol", "320")]);
        let current = roster(&[]);
        let next = reconcile(&previous, &current);
        assert_eq!(next.get("Carol").map(String::as_str), Some("320"));
    }

    #[test]
    fn reconcile_overlays_current_values() {
        let previous = roster(&[("Alice", "220"), ("Bob", "120")]);
        let current = roster(&[("Alice", "221")]);
        let next = reconcile(&previous, &current);
        assert_eq!(next.get("Alice").map(String::as_str), Some("221"));
        assert_eq!(next.get("Bob").map(String::as_str), Some("120"));
        assert_eq!(next.len(), 2);
    }
}
