//! PDF unlocking oracle
//!
//! One open attempt per candidate via the `pdf` crate. A rejected password
//! maps to `NoMatch`; anything else that goes wrong while opening (corrupt
//! cross-reference table, truncated file, IO error) maps to `Error` so the
//! scheduler keeps searching instead of aborting.

use std::path::PathBuf;

use pdf::error::PdfError;
use pdf::file::FileOptions;

use crate::search::{Oracle, Outcome};

pub struct PdfOracle {
    path: PathBuf,
}

impl PdfOracle {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl Oracle for PdfOracle {
    fn check(&self, candidate: &str) -> Outcome {
        match FileOptions::cached()
            .password(candidate.as_bytes())
            .open(&self.path)
        {
            Ok(_) => Outcome::Match(candidate.to_string()),
            Err(PdfError::InvalidPassword) => Outcome::NoMatch,
            Err(e) => Outcome::Error(e.to_string()),
        }
    }
}
