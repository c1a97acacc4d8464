//! The job registry: the fixed allow-list of rebirth job codes.
//!
//! Only codes listed here are ever reported. Anything else scraped off the
//! site (event classes, retired codes) is treated as noise and dropped at
//! extraction time.

/// Progression family a job code belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobLine {
    Templar,
    Berserker,
    Overlord,
}

/// Code, display name, progression line.
const JOBS: &[(&str, &str, JobLine)] = &[
    ("220", "Templar", JobLine::Templar),
    ("224", "Master Breeder", JobLine::Templar),
    ("221", "Mercenary", JobLine::Templar),
    ("223", "Oracle", JobLine::Templar),
    ("222", "Cardinal", JobLine::Templar),
    ("120", "Berserker", JobLine::Berserker),
    ("121", "Marksman", JobLine::Berserker),
    ("124", "Beast Master", JobLine::Berserker),
    ("123", "War Kahuna", JobLine::Berserker),
    ("122", "Magus", JobLine::Berserker),
    ("324", "Overlord", JobLine::Overlord),
    ("320", "Slayer", JobLine::Overlord),
    ("321", "Deadeye", JobLine::Overlord),
    ("322", "Void Mage", JobLine::Overlord),
    ("323", "Corruptor", JobLine::Overlord),
];

/// Display name for a job code, if the code is in the registry.
pub fn display_name(code: &str) -> Option<&'static str> {
    JOBS.iter()
        .find(|(c, _, _)| *c == code)
        .map(|(_, name, _)| *name)
}

/// Whether a scraped code is one the watcher tracks.
pub fn is_known(code: &str) -> bool {
    display_name(code).is_some()
}

/// Progression line for a code, if known.
#[allow(dead_code)]
pub fn line_of(code: &str) -> Option<JobLine> {
    JOBS.iter()
        .find(|(c, _, _)| *c == code)
        .map(|(_, _, line)| *line)
}
