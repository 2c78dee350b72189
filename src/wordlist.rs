use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::info;

use crate::error::{CrackError, Result};

/// A dictionary hit: the matched value and its 1-based position in the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryMatch {
    pub rank: usize,
    pub value: String,
}

/// Scan `candidates` in order for an exact, case-sensitive match against
/// `target`. Returns the first occurrence with its 1-based rank, or None.
pub fn match_dictionary(target: &str, candidates: &[String]) -> Option<DictionaryMatch> {
    candidates
        .iter()
        .position(|candidate| candidate == target)
        .map(|i| DictionaryMatch {
            rank: i + 1,
            value: candidates[i].clone(),
        })
}

/// Wordlist loader - reads candidate passwords from a line-oriented file
pub struct WordlistLoader;

impl WordlistLoader {
    /// Load an entire wordlist, one candidate per line.
    ///
    /// Only line terminators are stripped; interior whitespace and empty
    /// lines are kept, since matching is exact byte equality and trimming
    /// would shift ranks.
    pub fn load(path: &str) -> Result<Vec<String>> {
        Self::load_limited(path, usize::MAX)
    }

    /// Load at most `limit` lines from a wordlist.
    pub fn load_limited(path: &str, limit: usize) -> Result<Vec<String>> {
        if !Path::new(path).exists() {
            return Err(CrackError::Wordlist(format!("file does not exist: {}", path)));
        }

        let file = File::open(path)
            .map_err(|e| CrackError::Wordlist(format!("failed to open {}: {}", path, e)))?;

        let reader = BufReader::new(file);
        let mut lines = Vec::new();

        for line in reader.lines().take(limit) {
            let mut line = line?;
            if line.ends_with('\r') {
                line.pop();
            }
            lines.push(line);
        }

        info!("Loaded {} candidates from {}", lines.len(), path);
        Ok(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_wordlist(dir: &TempDir, name: &str, content: &str) -> String {
        let path = dir.path().join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_match_found_with_rank() {
        let candidates: Vec<String> = ["abc", "hello", "xyz"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let hit = match_dictionary("hello", &candidates).unwrap();
        assert_eq!(hit.rank, 2);
        assert_eq!(hit.value, "hello");
    }

    #[test]
    fn test_match_first_occurrence_wins() {
        let candidates: Vec<String> = ["dup", "other", "dup"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        assert_eq!(match_dictionary("dup", &candidates).unwrap().rank, 1);
    }

    #[test]
    fn test_match_empty_candidates() {
        assert_eq!(match_dictionary("zzz", &[]), None);
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let candidates = vec!["Hello".to_string()];
        assert_eq!(match_dictionary("hello", &candidates), None);
    }

    #[test]
    fn test_match_empty_target() {
        let candidates = vec!["a".to_string(), "".to_string()];
        assert_eq!(match_dictionary("", &candidates).unwrap().rank, 2);
    }

    #[test]
    fn test_load_preserves_order_and_blanks() {
        let dir = TempDir::new().unwrap();
        let path = write_wordlist(&dir, "words.txt", "first\n\n  padded \nlast\n");

        let words = WordlistLoader::load(&path).unwrap();
        assert_eq!(words, vec!["first", "", "  padded ", "last"]);
    }

    #[test]
    fn test_load_strips_crlf() {
        let dir = TempDir::new().unwrap();
        let path = write_wordlist(&dir, "crlf.txt", "one\r\ntwo\r\n");

        let words = WordlistLoader::load(&path).unwrap();
        assert_eq!(words, vec!["one", "two"]);
    }

    #[test]
    fn test_load_limited() {
        let dir = TempDir::new().unwrap();
        let path = write_wordlist(&dir, "big.txt", "a\nb\nc\nd\n");

        let words = WordlistLoader::load_limited(&path, 2).unwrap();
        assert_eq!(words, vec!["a", "b"]);
    }

    #[test]
    fn test_load_missing_file_is_distinct_error() {
        let err = WordlistLoader::load("definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, CrackError::Wordlist(_)));
        assert!(err.to_string().contains("does not exist"));
    }
}
