//! Command-line interface for Lockpick
//!
//! Argument parsing via clap, configuration validation, and the wiring from
//! parsed arguments to a candidate source, the PDF oracle, and the search
//! scheduler. Exit codes: 0 when the password is found, 1 when the candidate
//! source is exhausted without a match, 2 for configuration errors reported
//! before any search starts.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Result, bail};
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod output;

pub use output::{Output, SearchProgress};

use crate::candidates::{BruteForce, DEFAULT_CHARSET, Wordlist, count_candidates};
use crate::search::{self, SearchResult};
use crate::unlock::PdfOracle;

/// Lockpick - parallel password search for protected PDFs
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the password-protected PDF file
    #[arg(value_name = "PDF")]
    pub pdf: PathBuf,

    /// Wordlist file with one candidate password per line
    #[arg(short, long, value_name = "FILE", conflicts_with = "generate")]
    pub wordlist: Option<PathBuf>,

    /// Generate candidate passwords on the fly instead of reading a wordlist
    #[arg(short, long)]
    pub generate: bool,

    /// Characters to build generated candidates from
    #[arg(long, env = "LOCKPICK_CHARSET", default_value = DEFAULT_CHARSET)]
    pub charset: String,

    /// Minimum generated password length
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    pub min_len: u64,

    /// Maximum generated password length
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u64).range(1..))]
    pub max_len: u64,

    /// Number of parallel workers
    #[arg(
        short = 'j',
        long,
        env = "LOCKPICK_WORKERS",
        default_value_t = 4,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub workers: u64,

    /// Count the total candidate space first for a complete progress bar
    #[arg(long)]
    pub count: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable quiet output (bare password on stdout, errors only otherwise)
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Execute the search described by the parsed arguments
    pub fn run(self) -> Result<ExitCode> {
        init_tracing();
        let output = Output::new(self.verbose, self.quiet);

        if !self.pdf.is_file() {
            bail!("PDF file not found: {}", self.pdf.display());
        }

        let (source, total) = self.build_source(&output)?;

        output.verbose(&format!(
            "searching with {} workers{}",
            self.workers,
            match total {
                Some(t) => format!(", {t} candidates"),
                None => String::new(),
            }
        ));

        let oracle = PdfOracle::new(self.pdf.clone());
        let mut progress = SearchProgress::new(total, self.quiet);
        let result = search::search(source, oracle, self.workers as usize, &mut progress);
        progress.finish();

        match result {
            SearchResult::Found(password) => {
                if self.quiet {
                    println!("{password}");
                } else {
                    output.success(&format!("Password found: {password}"));
                }
                Ok(ExitCode::SUCCESS)
            }
            SearchResult::Exhausted { errors } => {
                if errors > 0 {
                    output.warning(&format!(
                        "{errors} check(s) failed for reasons other than a wrong password and may be false negatives"
                    ));
                }
                output.error("password not found: candidate source exhausted");
                Ok(ExitCode::FAILURE)
            }
        }
    }

    /// Resolve the selected candidate source and, if requested, its total
    /// size (a pre-pass for wordlists, closed-form for generation).
    fn build_source(&self, output: &Output) -> Result<(Box<dyn Iterator<Item = String>>, Option<u64>)> {
        if self.generate {
            let brute = BruteForce::new(
                &self.charset,
                self.min_len as usize,
                self.max_len as usize,
            );
            let total = if self.count {
                let total = brute.total();
                if total.is_none() {
                    output.warning("candidate space too large to count, progress will be indeterminate");
                }
                total
            } else {
                None
            };
            Ok((Box::new(brute), total))
        } else if let Some(path) = &self.wordlist {
            if !path.is_file() {
                bail!("wordlist file not found: {}", path.display());
            }
            let total = if self.count {
                output.verbose("counting wordlist candidates");
                Some(count_candidates(path)?)
            } else {
                None
            };
            Ok((Box::new(Wordlist::open(path)?), total))
        } else {
            bail!("either --wordlist or --generate must be specified");
        }
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}
