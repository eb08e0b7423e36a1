//! Self-insertion string expansion.
//!
//! A seed string grows by repeatedly splicing the *entire current string*
//! into itself: applying index `k` to the current string `cur` produces
//! `cur[..k] ++ cur ++ cur[k..]`, doubling the length. Indices are consumed
//! strictly in input order and are always interpreted against the
//! already-grown string, so `expand(seed, [a, b])` is in general different
//! from `expand(seed, [b, a])`.

use log::warn;

use crate::DnaSeq;

/// Expand a seed by a list of self-insertion indices.
///
/// Each index `k` must satisfy `k <= cur.len() - 1` for the current string
/// `cur`; an out-of-range index is skipped with a warning and does not
/// contribute to growth. Applying `r` in-range indices yields a string of
/// length `seed.len() * 2^r`.
///
/// # Example
///
/// ```
/// use sepia_seq::{expand, DnaSeq};
///
/// let seed = DnaSeq::new("A").unwrap();
/// assert_eq!(expand(&seed, &[0, 1]).as_bytes(), b"AAAA");
/// ```
pub fn expand(seed: &DnaSeq, indices: &[usize]) -> DnaSeq {
    let mut cur: Vec<u8> = seed.as_bytes().to_vec();
    for (record, &k) in indices.iter().enumerate() {
        if cur.is_empty() || k > cur.len() - 1 {
            warn!(
                "insertion index {k} (record {record}) out of range for string of length {}, skipping",
                cur.len()
            );
            continue;
        }
        let mut next = Vec::with_capacity(cur.len() * 2);
        next.extend_from_slice(&cur[..k]);
        next.extend_from_slice(&cur);
        next.extend_from_slice(&cur[k..]);
        cur = next;
    }
    DnaSeq::from_validated(cur)
}
