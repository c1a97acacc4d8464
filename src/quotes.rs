//! Decorative text prepended to notifications.

use std::fs;
use std::path::PathBuf;

use rand::seq::SliceRandom;

/// Supplies an optional flourish for a notification.
pub trait QuoteSource {
    /// One candidate, or `None` when no decoration is available.
    fn pick(&self) -> Option<String>;
}

/// Newline-delimited quote file. Blank lines are ignored; one of the
/// remaining lines is chosen uniformly at random per call. A missing or
/// empty file simply yields no decoration.
pub struct QuoteFile {
    path: PathBuf,
}

impl QuoteFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl QuoteSource for QuoteFile {
    fn pick(&self) -> Option<String> {
        let contents = fs::read_to_string(&self.path).ok()?;
        let lines: Vec<&str> = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        lines.choose(&mut rand::thread_rng()).map(|l| l.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_yields_none() {
        let quotes = QuoteFile::new("does/not/exist.txt");
        assert_eq!(quotes.pick(), None);
    }

    #[test]
    fn empty_file_yields_none() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("quotes.txt");
        fs::write(&path, "\n   \n\t\n").unwrap();
        assert_eq!(QuoteFile::new(&path).pick(), None);
    }

    #[test]
    fn blank_lines_are_skipped() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("quotes.txt");
        fs::write(&path, "\n\n  The wheel turns.  \n\n").unwrap();
        assert_eq!(QuoteFile::new(&path).pick().as_deref(), Some("The wheel turns."));
    }

    #[test]
    fn picks_one_of_the_lines() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("quotes.txt");
        fs::write(&path, "first\nsecond\nthird\n").unwrap();
        let picked = QuoteFile::new(&path).pick().unwrap();
        assert!(["first", "second", "third"].contains(&picked.as_str()));
    }
}
