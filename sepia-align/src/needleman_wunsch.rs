//! Needleman-Wunsch global alignment minimizing total penalty.
//!
//! The cost matrix is the classic weighted edit-distance recurrence over an
//! `(m+1)×(n+1)` grid:
//!
//! - `cost[i][0] = i·gap`, `cost[0][j] = j·gap`
//! - `cost[i][j] = min(diag + sub(a[i-1], b[j-1]), left + gap, up + gap)`
//!
//! Traceback walks from `(m, n)` back to `(0, 0)`, preferring the diagonal
//! move, then the horizontal move (gap in A), then the vertical move (gap in
//! B). The priority order is fixed so that equal-cost alignments always
//! resolve to the same output.

use log::debug;
use sepia_core::Result;

use crate::scoring::{encode, PenaltyModel};
use crate::types::{Alignment, GAP};

/// Globally align `a` and `b`, returning the minimum cost and one optimal
/// aligned pair.
///
/// Empty inputs are legal; aligning two empty sequences costs zero. The
/// aligned output preserves the case of the input bytes.
///
/// # Errors
///
/// Returns an error if either sequence contains a byte outside `{A,C,G,T}`
/// (case-insensitive); the inputs are checked before any matrix is built.
///
/// # Example
///
/// ```
/// use sepia_align::{needleman_wunsch, PenaltyModel};
///
/// let aln = needleman_wunsch(b"A", b"", &PenaltyModel::reference()).unwrap();
/// assert_eq!(aln.cost, 30);
/// assert_eq!(aln.aligned_a, b"A");
/// assert_eq!(aln.aligned_b, b"_");
/// ```
pub fn needleman_wunsch(a: &[u8], b: &[u8], model: &PenaltyModel) -> Result<Alignment> {
    let ea = encode(a)?;
    let eb = encode(b)?;
    let (m, n) = (ea.len(), eb.len());
    let gap = model.gap();
    debug!("filling {}x{} cost matrix", m + 1, n + 1);

    let cols = n + 1;
    let idx = |i: usize, j: usize| -> usize { i * cols + j };

    let mut dp = vec![0u32; (m + 1) * cols];
    for i in 1..=m {
        dp[idx(i, 0)] = i as u32 * gap;
    }
    for j in 1..=n {
        dp[idx(0, j)] = j as u32 * gap;
    }

    for i in 1..=m {
        for j in 1..=n {
            let sub = model.sub_indexed(ea[i - 1] as usize, eb[j - 1] as usize);
            dp[idx(i, j)] = (dp[idx(i - 1, j - 1)] + sub)
                .min(dp[idx(i, j - 1)] + gap)
                .min(dp[idx(i - 1, j)] + gap);
        }
    }

    // Traceback from (m, n); pairs are built back-to-front and reversed.
    let mut aligned_a = Vec::with_capacity(m + n);
    let mut aligned_b = Vec::with_capacity(m + n);
    let (mut i, mut j) = (m, n);
    while i > 0 || j > 0 {
        let here = dp[idx(i, j)];
        if i > 0
            && j > 0
            && here == dp[idx(i - 1, j - 1)] + model.sub_indexed(ea[i - 1] as usize, eb[j - 1] as usize)
        {
            aligned_a.push(a[i - 1]);
            aligned_b.push(b[j - 1]);
            i -= 1;
            j -= 1;
        } else if j > 0 && here == dp[idx(i, j - 1)] + gap {
            aligned_a.push(GAP);
            aligned_b.push(b[j - 1]);
            j -= 1;
        } else {
            aligned_a.push(a[i - 1]);
            aligned_b.push(GAP);
            i -= 1;
        }
    }
    aligned_a.reverse();
    aligned_b.reverse();

    Ok(Alignment {
        cost: dp[idx(m, n)],
        aligned_a,
        aligned_b,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn model() -> PenaltyModel {
        PenaltyModel::reference()
    }

    fn nw(a: &[u8], b: &[u8]) -> Alignment {
        needleman_wunsch(a, b, &model()).unwrap()
    }

    #[test]
    fn identical_sequences_cost_zero() {
        let aln = nw(b"ACGT", b"ACGT");
        assert_eq!(aln.cost, 0);
        assert_eq!(aln.aligned_a, b"ACGT");
        assert_eq!(aln.aligned_b, b"ACGT");
    }

    #[test]
    fn both_empty() {
        let aln = nw(b"", b"");
        assert_eq!(aln.cost, 0);
        assert!(aln.aligned_a.is_empty());
        assert!(aln.aligned_b.is_empty());
    }

    #[test]
    fn one_base_against_empty() {
        let aln = nw(b"A", b"");
        assert_eq!(aln.cost, 30);
        assert_eq!(aln.aligned_a, b"A");
        assert_eq!(aln.aligned_b, b"_");

        let aln = nw(b"", b"A");
        assert_eq!(aln.cost, 30);
        assert_eq!(aln.aligned_a, b"_");
        assert_eq!(aln.aligned_b, b"A");
    }

    #[test]
    fn cheap_substitution_beats_gaps() {
        // sub(G, A) = 48 < two gaps = 60, so the diagonal is taken.
        let aln = nw(b"AG", b"AA");
        assert_eq!(aln.cost, 48);
        assert_eq!(aln.aligned_a, b"AG");
        assert_eq!(aln.aligned_b, b"AA");
    }

    #[test]
    fn expensive_substitution_loses_to_gaps() {
        // sub(G, C) = 118 > two gaps = 60, so the G and C are both gapped.
        let aln = nw(b"AG", b"AC");
        assert_eq!(aln.cost, 60);
        assert_eq!(aln.aligned_a, b"AG_");
        assert_eq!(aln.aligned_b, b"A_C");
    }

    #[test]
    fn tie_prefers_gap_in_a_before_gap_in_b() {
        // "A" vs "C": sub = 110, two gaps = 60. Horizontal and vertical tie
        // at (1,1); the fixed order takes the horizontal move first, so the
        // gap in A appears at the end of the walk (last column of output).
        let aln = nw(b"A", b"C");
        assert_eq!(aln.cost, 60);
        assert_eq!(aln.aligned_a, b"A_");
        assert_eq!(aln.aligned_b, b"_C");
    }

    #[test]
    fn preserves_input_case_in_output() {
        let aln = needleman_wunsch(b"acgt", b"ACGT", &model()).unwrap();
        assert_eq!(aln.cost, 0);
        assert_eq!(aln.stripped_a(), b"acgt");
    }

    #[test]
    fn rejects_out_of_alphabet_bytes() {
        assert!(needleman_wunsch(b"ACNT", b"ACGT", &model()).is_err());
        assert!(needleman_wunsch(b"ACGT", b"AC-T", &model()).is_err());
    }

    proptest! {
        #[test]
        fn self_alignment_is_free(a in "[ACGT]{0,24}") {
            let aln = nw(a.as_bytes(), a.as_bytes());
            prop_assert_eq!(aln.cost, 0);
            prop_assert_eq!(aln.gap_columns(), 0);
        }

        #[test]
        fn cost_is_symmetric(a in "[ACGT]{0,16}", b in "[ACGT]{0,16}") {
            prop_assert_eq!(nw(a.as_bytes(), b.as_bytes()).cost, nw(b.as_bytes(), a.as_bytes()).cost);
        }

        #[test]
        fn all_gap_alignment_bounds_cost(a in "[ACGT]{0,16}", b in "[ACGT]{0,16}") {
            let aln = nw(a.as_bytes(), b.as_bytes());
            prop_assert!(aln.cost <= 30 * (a.len() + b.len()) as u32);
        }

        #[test]
        fn round_trip_and_equal_lengths(a in "[ACGT]{0,16}", b in "[ACGT]{0,16}") {
            let aln = nw(a.as_bytes(), b.as_bytes());
            prop_assert_eq!(aln.aligned_a.len(), aln.aligned_b.len());
            prop_assert_eq!(aln.stripped_a(), a.as_bytes());
            prop_assert_eq!(aln.stripped_b(), b.as_bytes());
        }

        #[test]
        fn no_double_gap_columns(a in "[ACGT]{0,12}", b in "[ACGT]{0,12}") {
            let aln = nw(a.as_bytes(), b.as_bytes());
            for (x, y) in aln.aligned_a.iter().zip(&aln.aligned_b) {
                prop_assert!(!(*x == GAP && *y == GAP));
            }
        }
    }
}
