//! Minimum-cost global alignment for the Sepia sequence toolkit.
//!
//! Provides pairwise global alignment under a fixed substitution table and a
//! linear gap penalty, minimizing total cost. Two implementations share one
//! contract:
//!
//! - [`needleman_wunsch`] — full O(m·n) matrix with a deterministic traceback
//!   (diagonal preferred over a gap in A, preferred over a gap in B)
//! - [`hirschberg`] — O(m+n) space divide-and-conquer; same minimum cost,
//!   equal-cost ties at split points may resolve differently
//!
//! # Quick start
//!
//! ```
//! use sepia_align::{needleman_wunsch, PenaltyModel};
//!
//! let model = PenaltyModel::reference();
//! let aln = needleman_wunsch(b"AG", b"AA", &model).unwrap();
//! assert_eq!(aln.cost, 48); // one A=A match plus one G/A substitution
//! assert_eq!(aln.aligned_a, b"AG");
//! assert_eq!(aln.aligned_b, b"AA");
//! ```

pub mod hirschberg;
pub mod needleman_wunsch;
pub mod scoring;
pub mod types;

pub use hirschberg::hirschberg;
pub use needleman_wunsch::needleman_wunsch;
pub use scoring::PenaltyModel;
pub use types::{Alignment, Strategy, GAP};

use sepia_core::Result;

/// Convenience function: align two sequences with the chosen strategy.
///
/// Dispatches to [`needleman_wunsch`] for [`Strategy::FullMatrix`] or
/// [`hirschberg`] for [`Strategy::LinearSpace`].
///
/// # Errors
///
/// Returns an error if either sequence contains a byte outside `{A,C,G,T}`.
pub fn align(a: &[u8], b: &[u8], strategy: Strategy, model: &PenaltyModel) -> Result<Alignment> {
    match strategy {
        Strategy::FullMatrix => needleman_wunsch(a, b, model),
        Strategy::LinearSpace => hirschberg(a, b, model),
    }
}
