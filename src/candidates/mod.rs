//! Candidate password sources
//!
//! A candidate source is any single-pass `Iterator<Item = String>`. The
//! scheduler's control loop is the only consumer; workers never touch the
//! cursor. Two sources are provided: [`BruteForce`] enumerates every string
//! over an alphabet for a range of lengths, and [`Wordlist`] streams
//! non-blank lines from a file.

pub mod brute;
pub mod wordlist;

pub use brute::{BruteForce, DEFAULT_CHARSET};
pub use wordlist::{Wordlist, count_candidates};
