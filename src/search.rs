use std::sync::atomic::{AtomicBool, Ordering};

use crate::alphabet::{Alphabet, CandidateIter};

/// Result of a brute-force run. `attempts` is the number of candidates
/// generated before the run ended; on a match it is the 1-based ordinal of
/// the matching candidate under the fixed enumeration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Found { attempts: u64 },
    Exhausted { attempts: u64 },
    Cancelled { attempts: u64 },
}

impl SearchOutcome {
    pub fn attempts(&self) -> u64 {
        match self {
            SearchOutcome::Found { attempts }
            | SearchOutcome::Exhausted { attempts }
            | SearchOutcome::Cancelled { attempts } => *attempts,
        }
    }
}

/// Exhaustive searcher over a fixed-length candidate space.
///
/// Enumeration is sequential and blocking; every call owns its own attempt
/// counter, so repeated runs with the same inputs report the same count.
pub struct BruteForcer {
    alphabet: Alphabet,
    length: usize,
}

impl BruteForcer {
    pub fn new(length: usize, use_digits: bool, use_symbols: bool) -> Self {
        Self::from_alphabet(Alphabet::build(use_digits, use_symbols), length)
    }

    pub fn from_alphabet(alphabet: Alphabet, length: usize) -> Self {
        Self { alphabet, length }
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Total candidates this searcher will generate, saturating at u64::MAX.
    pub fn space_size(&self) -> u64 {
        self.alphabet.space_size(self.length)
    }

    /// The underlying candidate generator, for callers that want to drive
    /// enumeration themselves (timeouts, custom polling).
    pub fn candidates(&self) -> CandidateIter<'_> {
        self.alphabet.candidates(self.length)
    }

    /// Run the search to completion.
    pub fn run(&self, target: &str) -> SearchOutcome {
        self.run_with(target, None, |_| {})
    }

    /// Run the search with an optional cancellation flag and a per-attempt
    /// progress hook.
    ///
    /// The flag is polled once per candidate, before that candidate is
    /// counted, so a match reports the same attempt number as an
    /// uncancelled run would.
    pub fn run_with(
        &self,
        target: &str,
        cancel: Option<&AtomicBool>,
        mut on_attempt: impl FnMut(u64),
    ) -> SearchOutcome {
        let mut attempts: u64 = 0;

        for candidate in self.candidates() {
            if let Some(flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    return SearchOutcome::Cancelled { attempts };
                }
            }

            attempts += 1;
            on_attempt(attempts);

            if candidate == target {
                return SearchOutcome::Found { attempts };
            }
        }

        SearchOutcome::Exhausted { attempts }
    }
}

/// Enumerate all length-`length` strings over the configured alphabet and
/// return the 1-based attempt count at which `target` was generated, or
/// None once the space is exhausted without a match.
pub fn brute_force(target: &str, length: usize, use_digits: bool, use_symbols: bool) -> Option<u64> {
    match BruteForcer::new(length, use_digits, use_symbols).run(target) {
        SearchOutcome::Found { attempts } => Some(attempts),
        _ => None,
    }
}
