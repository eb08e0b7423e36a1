//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use sepia_align::Strategy;

/// Which aligner implementation the run uses.
#[derive(ValueEnum, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignerKind {
    /// Full O(m·n) matrix with deterministic traceback.
    #[default]
    Full,
    /// Hirschberg divide-and-conquer in linear space.
    Linear,
}

impl AlignerKind {
    pub fn strategy(&self) -> Strategy {
        match self {
            AlignerKind::Full => Strategy::FullMatrix,
            AlignerKind::Linear => Strategy::LinearSpace,
        }
    }
}

/// Expand two seed strings from a job file and globally align the results.
///
/// Writes five lines to OUTPUT: alignment cost, aligned string A, aligned
/// string B, elapsed milliseconds, and peak-RSS delta in KB.
#[derive(Parser, Debug)]
#[command(about, disable_version_flag(true))]
pub struct Cli {
    /// Job file: seed A, its insertion indices, seed B, its insertion indices.
    pub input: PathBuf,

    /// Path the five-line report is written to.
    pub output: PathBuf,

    /// The aligner to use.
    #[arg(long, value_enum, default_value = "full")]
    pub aligner: AlignerKind,
}
