//! Persistent ranked scoreboard.
//!
//! Stored as plain text, one `<rank>. <name> - <score>` line per entry,
//! highest score first.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::error::ScoreboardError;

pub const MAX_ENTRIES: usize = 100;
pub const MAX_NAME_LEN: usize = 12;
const EMPTY_PLACEHOLDER: &str = "No scores yet";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreEntry {
    pub rank: usize,
    pub name: String,
    pub score: u32,
}

pub struct Scoreboard {
    entries: Vec<ScoreEntry>,
    path: PathBuf,
}

impl Scoreboard {
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            entries: Vec::new(),
            path: path.into(),
        }
    }

    /// Read the scoreboard at `path`. A missing or corrupt file yields an
    /// empty board.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let mut board = Self::empty(path);
        match Self::read_file(&board.path) {
            Ok(entries) => {
                info!("loaded {} scores from {}", entries.len(), board.path.display());
                board.entries = entries;
            }
            Err(ScoreboardError::Io { source, .. }) if source.kind() == io::ErrorKind::NotFound => {}
            Err(err) => warn!("{err}; starting with an empty scoreboard"),
        }
        board.rerank();
        board
    }

    fn read_file(path: &Path) -> Result<Vec<ScoreEntry>, ScoreboardError> {
        let text = fs::read_to_string(path).map_err(|source| ScoreboardError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    /// Parse scoreboard text. Blank lines and the empty-board placeholder are
    /// skipped; anything past [`MAX_ENTRIES`] is ignored.
    pub fn parse(text: &str) -> Result<Vec<ScoreEntry>, ScoreboardError> {
        let mut entries = Vec::new();
        for (index, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line == EMPTY_PLACEHOLDER {
                continue;
            }
            if entries.len() == MAX_ENTRIES {
                break;
            }
            let malformed = || ScoreboardError::Parse {
                line: index + 1,
                content: raw.to_string(),
            };
            let (rank, rest) = line.split_once(". ").ok_or_else(malformed)?;
            let (name, score) = rest.rsplit_once(" - ").ok_or_else(malformed)?;
            entries.push(ScoreEntry {
                rank: rank.trim().parse().map_err(|_| malformed())?,
                name: name.to_string(),
                score: score.trim().parse().map_err(|_| malformed())?,
            });
        }
        Ok(entries)
    }

    pub fn to_text(&self) -> String {
        if self.entries.is_empty() {
            return format!("{EMPTY_PLACEHOLDER}\n");
        }
        self.entries
            .iter()
            .map(|e| format!("{}. {} - {}\n", e.rank, e.name, e.score))
            .collect()
    }

    pub fn save(&self) -> Result<(), ScoreboardError> {
        let io_err = |source: io::Error| ScoreboardError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(io_err)?;
        }
        fs::write(&self.path, self.to_text()).map_err(io_err)?;
        info!("saved {} scores to {}", self.entries.len(), self.path.display());
        Ok(())
    }

    /// Insert a score, keeping the board sorted. Ties rank below earlier
    /// entries. When full, the lowest entry makes room only for a strictly
    /// better score. Returns the new entry's rank if it made the board.
    pub fn add_score(&mut self, name: &str, score: u32) -> Option<usize> {
        let name: String = name.chars().take(MAX_NAME_LEN).collect();
        let name = if name.trim().is_empty() { "???".to_string() } else { name };

        if self.entries.len() >= MAX_ENTRIES {
            match self.entries.last() {
                Some(lowest) if score > lowest.score => {
                    self.entries.pop();
                }
                _ => return None,
            }
        }
        let at = self
            .entries
            .iter()
            .position(|e| score > e.score)
            .unwrap_or(self.entries.len());
        self.entries.insert(at, ScoreEntry { rank: 0, name, score });
        self.rerank();
        Some(at + 1)
    }

    fn rerank(&mut self) {
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        for (i, e) in self.entries.iter_mut().enumerate() {
            e.rank = i + 1;
        }
    }

    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    pub fn high_score(&self) -> u32 {
        self.entries.first().map_or(0, |e| e.score)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_with_separators() {
        let entries = Scoreboard::parse("1. A - B - 300\n2. ZED - 10\n").unwrap();
        assert_eq!(entries[0].name, "A - B");
        assert_eq!(entries[0].score, 300);
        assert_eq!(entries[1].rank, 2);
    }

    #[test]
    fn placeholder_parses_as_empty() {
        assert!(Scoreboard::parse("No scores yet\n").unwrap().is_empty());
    }

    #[test]
    fn malformed_line_is_reported() {
        let err = Scoreboard::parse("1. OK - 5\ngarbage\n").unwrap_err();
        assert!(matches!(err, ScoreboardError::Parse { line: 2, .. }));
    }

    #[test]
    fn scores_are_ranked_descending_with_stable_ties() {
        let mut board = Scoreboard::empty("unused.txt");
        board.add_score("LOW", 10);
        board.add_score("HIGH", 500);
        assert_eq!(board.add_score("TIE", 10), Some(3));
        let names: Vec<&str> = board.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["HIGH", "LOW", "TIE"]);
        assert_eq!(board.high_score(), 500);
    }

    #[test]
    fn full_board_only_takes_better_scores() {
        let mut board = Scoreboard::empty("unused.txt");
        for i in 0..MAX_ENTRIES {
            board.add_score("P", 100 + i as u32);
        }
        assert_eq!(board.add_score("MEH", 100), None);
        assert_eq!(board.add_score("NEW", 150), Some(MAX_ENTRIES - 49));
        assert_eq!(board.entries().len(), MAX_ENTRIES);
        assert_eq!(board.entries().last().unwrap().score, 101);
    }

    #[test]
    fn long_names_are_truncated() {
        let mut board = Scoreboard::empty("unused.txt");
        board.add_score("ABCDEFGHIJKLMNOP", 1);
        assert_eq!(board.entries()[0].name, "ABCDEFGHIJKL");
    }

    #[test]
    fn empty_board_writes_placeholder() {
        assert_eq!(Scoreboard::empty("unused.txt").to_text(), "No scores yet\n");
    }
}
