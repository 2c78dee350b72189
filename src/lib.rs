// lib.rs - Password Recovery Library
// Dictionary matching with brute-force fallback

pub mod alphabet;
pub mod config;
pub mod search;
pub mod stats;
pub mod wordlist;

// Re-exports for convenience
pub use alphabet::{Alphabet, CandidateIter};
pub use config::Config;
pub use search::{brute_force, BruteForcer, SearchOutcome};
pub use stats::Statistics;
pub use wordlist::{match_dictionary, DictionaryMatch, WordlistLoader};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Error types
pub mod error {
    use thiserror::Error;

    #[derive(Error, Debug)]
    pub enum CrackError {
        #[error("Configuration error: {0}")]
        Config(String),

        #[error("Wordlist unavailable: {0}")]
        Wordlist(String),

        #[error("IO error: {0}")]
        Io(#[from] std::io::Error),
    }

    pub type Result<T> = std::result::Result<T, CrackError>;
}

/// Utilities module
pub mod utils {

    /// Format number with thousands separator
    pub fn format_number(n: u64) -> String {
        let s = n.to_string();
        let mut result = String::new();
        for (i, c) in s.chars().rev().enumerate() {
            if i > 0 && i % 3 == 0 {
                result.push(',');
            }
            result.push(c);
        }
        result.chars().rev().collect()
    }

    /// Format duration in human-readable format
    pub fn format_duration(seconds: f64) -> String {
        if seconds < 60.0 {
            format!("{:.1}s", seconds)
        } else if seconds < 3600.0 {
            format!("{:.1}m", seconds / 60.0)
        } else if seconds < 86400.0 {
            format!("{:.1}h", seconds / 3600.0)
        } else {
            format!("{:.1}d", seconds / 86400.0)
        }
    }

    /// Estimate time remaining for an in-flight search
    pub fn estimate_remaining(checked: u64, total: u64, rate: f64) -> String {
        if rate <= 0.0 {
            return "Unknown".to_string();
        }

        let remaining = total.saturating_sub(checked) as f64;
        format_duration(remaining / rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(utils::format_number(7), "7");
        assert_eq!(utils::format_number(1000), "1,000");
        assert_eq!(utils::format_number(1234567), "1,234,567");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(utils::format_duration(30.0), "30.0s");
        assert_eq!(utils::format_duration(120.0), "2.0m");
        assert_eq!(utils::format_duration(7200.0), "2.0h");
    }

    #[test]
    fn test_estimate_remaining() {
        assert_eq!(utils::estimate_remaining(0, 100, 0.0), "Unknown");
        assert_eq!(utils::estimate_remaining(50, 100, 10.0), "5.0s");
        assert_eq!(utils::estimate_remaining(200, 100, 10.0), "0.0s");
    }
}
