//! Hirschberg divide-and-conquer alignment in linear space.
//!
//! Computes the same minimum cost as [`needleman_wunsch`] while only ever
//! materializing two rows of the cost matrix. The first sequence is split at
//! its midpoint; forward and reverse cost rows locate the column where an
//! optimal path crosses the midline, and the two halves recurse. Base cases
//! (either side length ≤ 1) fall back to the full-matrix aligner.
//!
//! Equal-cost ties at split points may resolve differently from the
//! full-matrix traceback, so the full aligner remains the reference for
//! byte-exact output.

use log::debug;
use sepia_core::{Result, SepiaError};

use crate::needleman_wunsch::needleman_wunsch;
use crate::scoring::{encode, PenaltyModel};
use crate::types::{Alignment, GAP};

/// Globally align `a` and `b` in O(m+n) space.
///
/// # Errors
///
/// Returns an error if either sequence contains a byte outside `{A,C,G,T}`.
pub fn hirschberg(a: &[u8], b: &[u8], model: &PenaltyModel) -> Result<Alignment> {
    // Validate both inputs up front so the recursion can assume clean bytes.
    encode(a)?;
    encode(b)?;
    debug!("linear-space alignment of {} x {} bases", a.len(), b.len());

    let (aligned_a, aligned_b) = split_align(a, b, model)?;
    let cost = alignment_cost(&aligned_a, &aligned_b, model)?;
    Ok(Alignment {
        cost,
        aligned_a,
        aligned_b,
    })
}

fn split_align(a: &[u8], b: &[u8], model: &PenaltyModel) -> Result<(Vec<u8>, Vec<u8>)> {
    if a.is_empty() {
        return Ok((vec![GAP; b.len()], b.to_vec()));
    }
    if b.is_empty() {
        return Ok((a.to_vec(), vec![GAP; a.len()]));
    }
    if a.len() == 1 || b.len() == 1 {
        let aln = needleman_wunsch(a, b, model)?;
        return Ok((aln.aligned_a, aln.aligned_b));
    }

    let mid = a.len() / 2;
    let fwd = last_cost_row(&a[..mid], b, model)?;

    let a_rev: Vec<u8> = a[mid..].iter().rev().copied().collect();
    let b_rev: Vec<u8> = b.iter().rev().copied().collect();
    let bwd = last_cost_row(&a_rev, &b_rev, model)?;

    // First column minimizing the combined cost of both halves.
    let n = b.len();
    let mut split = 0;
    let mut best = u32::MAX;
    for j in 0..=n {
        let total = fwd[j] + bwd[n - j];
        if total < best {
            best = total;
            split = j;
        }
    }

    let (mut aligned_a, mut aligned_b) = split_align(&a[..mid], &b[..split], model)?;
    let (tail_a, tail_b) = split_align(&a[mid..], &b[split..], model)?;
    aligned_a.extend_from_slice(&tail_a);
    aligned_b.extend_from_slice(&tail_b);
    Ok((aligned_a, aligned_b))
}

/// Last row of the cost matrix for `a` vs `b`, using two rolling rows.
fn last_cost_row(a: &[u8], b: &[u8], model: &PenaltyModel) -> Result<Vec<u32>> {
    let ea = encode(a)?;
    let eb = encode(b)?;
    let gap = model.gap();
    let n = eb.len();

    let mut prev: Vec<u32> = (0..=n as u32).map(|j| j * gap).collect();
    let mut curr = vec![0u32; n + 1];

    for i in 1..=ea.len() {
        curr[0] = i as u32 * gap;
        for j in 1..=n {
            let sub = model.sub_indexed(ea[i - 1] as usize, eb[j - 1] as usize);
            curr[j] = (prev[j - 1] + sub)
                .min(curr[j - 1] + gap)
                .min(prev[j] + gap);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    Ok(prev)
}

/// Total penalty of an already-built aligned pair.
fn alignment_cost(aligned_a: &[u8], aligned_b: &[u8], model: &PenaltyModel) -> Result<u32> {
    let mut cost = 0u32;
    for (&x, &y) in aligned_a.iter().zip(aligned_b) {
        cost += if x == GAP || y == GAP {
            model.gap()
        } else {
            model.sub(x, y).ok_or_else(|| {
                SepiaError::InvalidInput(format!(
                    "aligned pair contains non-DNA byte '{}'",
                    x as char
                ))
            })?
        };
    }
    Ok(cost)
}
