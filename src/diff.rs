use serde::{Deserialize, Serialize};

use crate::jobs;
use crate::roster::Roster;

/// A detected job change for one player between two runs.
///
/// Ephemeral: consumed by the notifier and the run report, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    pub player: String,
    pub old_code: String,
    pub new_code: String,
}

/// Compare the freshly scraped roster against the previous snapshot.
///
/// A change is only reported when the player was seen before, the code
/// actually differs, and both codes are registry members. A first sighting
/// emits nothing; there is no old job to compare. The extractor already
/// filters to registry codes, so the membership check only bites on legacy
/// codes left in an old snapshot.
///
/// Emitted order follows `current`'s insertion order.
pub fn changes(before: &Roster, current: &Roster) -> Vec<Transition> {
    let mut out = Vec::new();
    for (name, new_code) in current {
        let Some(old_code) = before.get(name) else {
            continue;
        };
        if old_code == new_code {
            continue;
        }
        if jobs::is_known(old_code) && jobs::is_known(new_code) {
            out.push(Transition {
                player: name.clone(),
                old_code: old_code.clone(),
                new_code: new_code.clone(),
            });
        }
    }
    out
}
