//! Wordlist candidate streaming
//!
//! Streams one candidate per non-blank line of a text file, in file order,
//! with surrounding whitespace trimmed. Decoding is permissive: bytes that
//! are not valid UTF-8 are dropped from the line rather than failing the
//! read or substituting replacement characters. The source is single-pass;
//! once the underlying handle is exhausted a fresh instance must reopen it.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};

/// Line-streaming candidate source over a wordlist file.
pub struct Wordlist {
    reader: BufReader<File>,
    buf: Vec<u8>,
}

impl Wordlist {
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("failed to open wordlist {}", path.display()))?;
        Ok(Self {
            reader: BufReader::new(file),
            buf: Vec::new(),
        })
    }
}

impl Iterator for Wordlist {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            self.buf.clear();
            match self.reader.read_until(b'\n', &mut self.buf) {
                Ok(0) => return None,
                Ok(_) => {
                    let line = decode_dropping_invalid(&self.buf);
                    let candidate = line.trim();
                    if !candidate.is_empty() {
                        return Some(candidate.to_string());
                    }
                }
                Err(e) => {
                    // An IO error mid-stream ends the source early
                    tracing::warn!(error = %e, "wordlist read failed, treating as exhausted");
                    return None;
                }
            }
        }
    }
}

/// Count of candidates the streaming pass would yield. A full, independent
/// traversal of the file; used to obtain a known progress denominator.
pub fn count_candidates(path: &Path) -> Result<u64> {
    Ok(Wordlist::open(path)?.count() as u64)
}

/// Decode UTF-8, skipping over undecodable byte sequences entirely.
fn decode_dropping_invalid(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    let mut rest = bytes;
    while !rest.is_empty() {
        match std::str::from_utf8(rest) {
            Ok(s) => {
                out.push_str(s);
                break;
            }
            Err(e) => {
                let valid = e.valid_up_to();
                if let Ok(s) = std::str::from_utf8(&rest[..valid]) {
                    out.push_str(s);
                }
                let skip = valid + e.error_len().unwrap_or(rest.len() - valid);
                rest = &rest[skip..];
            }
        }
    }
    out
}
