use std::fmt;

/// The 26 lowercase ASCII letters, always included.
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";

/// The 10 ASCII digits, included when the digits flag is set.
pub const DIGITS: &str = "0123456789";

/// The 32 ASCII punctuation characters, included when the symbols flag is set.
pub const PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Ordered, deduplicated character set used to generate candidates.
///
/// Construction order is fixed (lowercase, then digits, then punctuation),
/// so the enumeration order and the attempt counts derived from it are
/// stable across runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<char>,
}

impl Alphabet {
    /// Build the alphabet from the two feature flags.
    pub fn build(use_digits: bool, use_symbols: bool) -> Self {
        fn push_unique(set: &str, chars: &mut Vec<char>) {
            for c in set.chars() {
                if !chars.contains(&c) {
                    chars.push(c);
                }
            }
        }

        let mut chars: Vec<char> = Vec::with_capacity(68);

        push_unique(LOWERCASE, &mut chars);
        if use_digits {
            push_unique(DIGITS, &mut chars);
        }
        if use_symbols {
            push_unique(PUNCTUATION, &mut chars);
        }

        Self { chars }
    }

    /// Number of characters in the alphabet.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Characters in enumeration order.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Position of a character within the alphabet, if present.
    pub fn index_of(&self, c: char) -> Option<usize> {
        self.chars.iter().position(|&a| a == c)
    }

    /// True if every character of `s` belongs to the alphabet.
    pub fn contains_str(&self, s: &str) -> bool {
        s.chars().all(|c| self.index_of(c).is_some())
    }

    /// Total number of length-`length` candidates, saturating at u64::MAX.
    pub fn space_size(&self, length: usize) -> u64 {
        let base = self.chars.len() as u64;
        match u32::try_from(length) {
            Ok(exp) => base.checked_pow(exp).unwrap_or(u64::MAX),
            Err(_) => u64::MAX,
        }
    }

    /// 1-based lexicographic index of `candidate` within `alphabet^len`,
    /// where `len` is the candidate's own length. This is exactly the
    /// attempt count enumeration would report for it. Returns None if any
    /// character falls outside the alphabet; saturates on overflow.
    pub fn rank_of(&self, candidate: &str) -> Option<u64> {
        let base = self.chars.len() as u64;
        let mut index: u64 = 0;

        for c in candidate.chars() {
            let pos = self.index_of(c)? as u64;
            index = index.saturating_mul(base).saturating_add(pos);
        }

        Some(index.saturating_add(1))
    }

    /// Iterator over all length-`length` candidates in enumeration order.
    pub fn candidates(&self, length: usize) -> CandidateIter<'_> {
        CandidateIter {
            chars: &self.chars,
            indices: vec![0; length],
            done: self.chars.is_empty() && length > 0,
        }
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.chars {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

/// Restartable candidate generator: produces all fixed-length strings over
/// the alphabet, rightmost position advancing fastest (odometer order).
/// Length 0 yields exactly one candidate, the empty string.
pub struct CandidateIter<'a> {
    chars: &'a [char],
    indices: Vec<usize>,
    done: bool,
}

impl Iterator for CandidateIter<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.done {
            return None;
        }

        let candidate: String = self.indices.iter().map(|&i| self.chars[i]).collect();

        // Advance the odometer; wrapping the leftmost digit exhausts the space.
        let mut pos = self.indices.len();
        loop {
            if pos == 0 {
                self.done = true;
                break;
            }
            pos -= 1;
            self.indices[pos] += 1;
            if self.indices[pos] < self.chars.len() {
                break;
            }
            self.indices[pos] = 0;
        }

        Some(candidate)
    }
}
