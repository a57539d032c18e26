//! Brute-force candidate generation
//!
//! Enumerates every string over a fixed alphabet for each length in an
//! inclusive range: ascending length first, lexicographic in alphabet order
//! within a length. The cursor is a plain odometer (one index per position,
//! last position ticking fastest), so no part of the sequence is ever
//! materialized and the source costs a handful of words of memory even for
//! candidate spaces in the trillions.

/// Default character set: ASCII letters followed by digits.
pub const DEFAULT_CHARSET: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Lazy generator over `alphabet^length` for `length` in `min_len..=max_len`.
///
/// Single-pass and forward-only; restarting means constructing a new
/// instance. An empty alphabet yields nothing regardless of the length
/// range, as does `min_len > max_len`.
pub struct BruteForce {
    alphabet: Vec<char>,
    min_len: usize,
    max_len: usize,
    /// One alphabet index per position of the current word; its length is
    /// the current candidate length.
    odometer: Vec<usize>,
    done: bool,
}

impl BruteForce {
    pub fn new(charset: &str, min_len: usize, max_len: usize) -> Self {
        let alphabet: Vec<char> = charset.chars().collect();
        let done = alphabet.is_empty() || min_len > max_len;
        Self {
            alphabet,
            min_len,
            max_len,
            odometer: vec![0; min_len],
            done,
        }
    }

    /// Closed-form size of the candidate space: `Σ A^L` for `L` in
    /// `min_len..=max_len`. `None` when the sum overflows `u64`, in which
    /// case progress is rendered indeterminately.
    pub fn total(&self) -> Option<u64> {
        if self.alphabet.is_empty() || self.min_len > self.max_len {
            return Some(0);
        }
        let base = self.alphabet.len() as u64;
        let mut sum: u64 = 0;
        for len in self.min_len..=self.max_len {
            let count = base.checked_pow(u32::try_from(len).ok()?)?;
            sum = sum.checked_add(count)?;
        }
        Some(sum)
    }

    fn advance(&mut self) {
        for slot in self.odometer.iter_mut().rev() {
            *slot += 1;
            if *slot < self.alphabet.len() {
                return;
            }
            *slot = 0;
        }
        // Carried out of every position: step up to the next length
        if self.odometer.len() >= self.max_len {
            self.done = true;
        } else {
            self.odometer = vec![0; self.odometer.len() + 1];
        }
    }
}

impl Iterator for BruteForce {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.done {
            return None;
        }
        let word: String = self.odometer.iter().map(|&i| self.alphabet[i]).collect();
        self.advance();
        Some(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_enumerates_full_space_exactly_once() {
        let words: Vec<String> = BruteForce::new("abc", 1, 3).collect();
        // 3 + 9 + 27
        assert_eq!(words.len(), 39);
        let distinct: HashSet<&String> = words.iter().collect();
        assert_eq!(distinct.len(), 39);
    }

    #[test]
    fn test_ascending_length_lexicographic_order() {
        let words: Vec<String> = BruteForce::new("ab", 1, 2).collect();
        assert_eq!(words, vec!["a", "b", "aa", "ab", "ba", "bb"]);
    }

    #[test]
    fn test_enumeration_is_deterministic() {
        let first: Vec<String> = BruteForce::new("xyz", 1, 3).collect();
        let second: Vec<String> = BruteForce::new("xyz", 1, 3).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_alphabet_yields_nothing() {
        assert_eq!(BruteForce::new("", 1, 5).count(), 0);
    }

    #[test]
    fn test_inverted_range_yields_nothing() {
        assert_eq!(BruteForce::new("abc", 3, 1).count(), 0);
    }

    #[test]
    fn test_single_length_range() {
        let words: Vec<String> = BruteForce::new("01", 2, 2).collect();
        assert_eq!(words, vec!["00", "01", "10", "11"]);
    }

    #[test]
    fn test_total_matches_enumeration() {
        let source = BruteForce::new("abcd", 1, 3);
        let total = source.total().unwrap();
        assert_eq!(total, 4 + 16 + 64);
        assert_eq!(BruteForce::new("abcd", 1, 3).count() as u64, total);
    }

    #[test]
    fn test_total_of_empty_spaces_is_zero() {
        assert_eq!(BruteForce::new("", 1, 3).total(), Some(0));
        assert_eq!(BruteForce::new("abc", 5, 2).total(), Some(0));
    }

    #[test]
    fn test_total_overflow_is_unknown() {
        let source = BruteForce::new(DEFAULT_CHARSET, 1, 64);
        assert_eq!(source.total(), None);
    }
}
