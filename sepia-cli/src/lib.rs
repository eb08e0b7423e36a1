//! Command-line driver for the Sepia pipeline.
//!
//! Reads a job file (two seed strings with their insertion index lists),
//! expands both seeds by self-insertion, computes a minimum-cost global
//! alignment, and writes a five-line report: cost, aligned A, aligned B,
//! elapsed milliseconds, and peak-RSS delta in kilobytes.

use std::time::Instant;

use log::debug;
use sepia_align::{align, PenaltyModel};
use sepia_core::resource::peak_rss_kb;
use sepia_core::Result;

pub mod cli;
pub mod job;
pub mod report;

pub use cli::{AlignerKind, Cli};
pub use job::Job;
pub use report::Report;

/// Run a full job: parse, expand, align, write the report.
///
/// # Errors
///
/// Fails on unreadable input, a malformed job file, a non-DNA seed, or an
/// unwritable output path. All failures abort before the report is written.
pub fn run(cli: &Cli) -> Result<()> {
    let job = Job::from_path(&cli.input)?;

    let rss_before = peak_rss_kb()?;
    let start = Instant::now();

    let (a, b) = job.generate();
    let alignment = align(&a, &b, cli.aligner.strategy(), &PenaltyModel::reference())?;

    let elapsed_ms = start.elapsed().as_secs_f64() * 1e3;
    let rss_after = peak_rss_kb()?;
    debug!(
        "aligned {} x {} bp: cost {} in {elapsed_ms:.3} ms",
        a.len(),
        b.len(),
        alignment.cost
    );

    Report {
        alignment,
        elapsed_ms,
        memory_delta_kb: rss_after - rss_before,
    }
    .write_to(&cli.output)
}
