//! Job-file parsing.
//!
//! A job file is line-oriented. Whitespace inside a record is stripped
//! before interpretation, and blank records are skipped:
//!
//! 1. the first record is seed A;
//! 2. following all-digit records are insertion indices for A, up to the
//!    first non-digit record, which is seed B;
//! 3. following all-digit records are insertion indices for B, terminated by
//!    end of input — a non-digit record here is a fatal parse error.
//!
//! Seeds are validated against the strict `{A,C,G,T}` alphabet after
//! parsing; an invalid seed byte is fatal.

use std::fs;
use std::path::Path;

use log::debug;
use sepia_core::{Result, SepiaError};
use sepia_seq::{expand, DnaSeq};

/// A parsed job: two seeds plus their insertion index lists.
#[derive(Debug, Clone)]
pub struct Job {
    pub seed_a: DnaSeq,
    pub indices_a: Vec<usize>,
    pub seed_b: DnaSeq,
    pub indices_b: Vec<usize>,
}

impl Job {
    /// Read and parse a job file.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read, a parse error for a
    /// malformed record, or an invalid-input error for a non-DNA seed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            SepiaError::Io(std::io::Error::new(
                e.kind(),
                format!("{}: {}", path.display(), e),
            ))
        })?;
        Self::parse(&content)
    }

    /// Parse job-file content.
    pub fn parse(content: &str) -> Result<Self> {
        let mut records = content.lines().map(strip_whitespace);

        let seed_a_raw = records
            .next()
            .ok_or_else(|| SepiaError::Parse("job file is empty".into()))?;

        let mut indices_a = Vec::new();
        let mut seed_b_raw = String::new();
        for record in records.by_ref() {
            if record.is_empty() {
                continue;
            }
            if is_all_digits(&record) {
                indices_a.push(parse_index(&record)?);
            } else {
                seed_b_raw = record;
                break;
            }
        }

        let mut indices_b = Vec::new();
        for record in records {
            if record.is_empty() {
                continue;
            }
            if is_all_digits(&record) {
                indices_b.push(parse_index(&record)?);
            } else {
                return Err(SepiaError::Parse(format!(
                    "unexpected non-numeric record '{record}' after the second seed"
                )));
            }
        }

        let seed_a = DnaSeq::new(&seed_a_raw)?;
        let seed_b = DnaSeq::new(&seed_b_raw)?;
        debug!(
            "parsed job: seed A {} bp with {} indices, seed B {} bp with {} indices",
            seed_a.len(),
            indices_a.len(),
            seed_b.len(),
            indices_b.len()
        );

        Ok(Self {
            seed_a,
            indices_a,
            seed_b,
            indices_b,
        })
    }

    /// Expand both seeds into the full strings to align.
    pub fn generate(&self) -> (DnaSeq, DnaSeq) {
        let a = expand(&self.seed_a, &self.indices_a);
        let b = expand(&self.seed_b, &self.indices_b);
        debug!("generated strings: {} bp and {} bp", a.len(), b.len());
        (a, b)
    }
}

fn strip_whitespace(line: &str) -> String {
    line.chars().filter(|c| !c.is_whitespace()).collect()
}

fn is_all_digits(record: &str) -> bool {
    !record.is_empty() && record.bytes().all(|b| b.is_ascii_digit())
}

fn parse_index(record: &str) -> Result<usize> {
    record
        .parse::<usize>()
        .map_err(|e| SepiaError::Parse(format!("bad insertion index '{record}': {e}")))
}
