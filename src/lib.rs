//! # Lockpick - Parallel password search for protected PDFs
//!
//! Lockpick runs many candidate passwords against a locked PDF at once,
//! stopping at the first one that opens it. Candidates come from either a
//! wordlist file or an on-the-fly brute-force generator; checks run on a
//! fixed pool of workers behind a bounded sliding window, so even an
//! astronomically large candidate space never costs more than a handful of
//! in-flight checks worth of memory.
//!
//! ## Quick Start
//!
//! ```bash
//! # Try every word in a list
//! lockpick secret.pdf --wordlist rockyou.txt
//!
//! # Brute-force digits of length 4 to 6, 8 workers, known total
//! lockpick secret.pdf --generate --charset 0123456789 \
//!     --min-len 4 --max-len 6 --workers 8 --count
//! ```

pub mod candidates;
pub mod cli;
pub mod search;
pub mod unlock;

pub use cli::{Cli, Output};
pub use search::{Oracle, Outcome, ProgressSink, SearchResult, search};

/// Result type alias for Lockpick operations
pub type Result<T> = anyhow::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
