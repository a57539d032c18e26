//! Terminal output for Lockpick
//!
//! Styled, quiet-aware status messages plus the indicatif-backed progress
//! sink the scheduler reports into: a bar when the candidate total is known,
//! a counting spinner when it is not.

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::search::ProgressSink;

/// Output handler for consistent CLI formatting
pub struct Output {
    verbose: bool,
    quiet: bool,
}

impl Output {
    /// Create a new output handler
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", style("✔").green(), message);
        }
    }

    /// Print an error message
    pub fn error(&self, message: &str) {
        // Errors are always shown, even in quiet mode
        eprintln!("{} {}", style("✖").red(), message);
    }

    /// Print a warning message
    pub fn warning(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", style("⚠").yellow(), message);
        }
    }

    /// Print an info message
    pub fn info(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", style("ℹ").blue(), message);
        }
    }

    /// Print a verbose message (only if verbose mode is enabled)
    pub fn verbose(&self, message: &str) {
        if self.verbose {
            println!("{} {}", style("ℹ").dim(), style(message).dim());
        }
    }
}

/// Per-completion progress display. The total estimate is fixed at
/// construction; `None` renders indeterminately.
pub struct SearchProgress {
    bar: ProgressBar,
}

impl SearchProgress {
    pub fn new(total: Option<u64>, quiet: bool) -> Self {
        let bar = if quiet {
            ProgressBar::hidden()
        } else {
            match total {
                Some(len) => {
                    let pb = ProgressBar::new(len);
                    pb.set_style(
                        ProgressStyle::default_bar()
                            .template(
                                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
                            )
                            .unwrap()
                            .progress_chars("#>-"),
                    );
                    pb.set_message("passwords");
                    pb
                }
                None => {
                    let pb = ProgressBar::new_spinner();
                    pb.set_style(
                        ProgressStyle::default_spinner()
                            .template("{spinner:.green} {pos} passwords tried ({per_sec})")
                            .unwrap(),
                    );
                    pb
                }
            }
        };
        Self { bar }
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl ProgressSink for SearchProgress {
    fn update(&mut self, completed: u64) {
        self.bar.set_position(completed);
    }
}
