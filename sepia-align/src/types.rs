//! Core types for alignment results.

use core::fmt;

/// Gap marker used in aligned output.
pub const GAP: u8 = b'_';

/// Which aligner implementation to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Full O(m·n) matrix with deterministic traceback.
    #[default]
    FullMatrix,
    /// Hirschberg divide-and-conquer in O(m+n) space.
    LinearSpace,
}

/// The result of a global pairwise alignment.
///
/// The two aligned sequences have equal length; [`GAP`] marks an inserted or
/// deleted position. Removing gap markers from `aligned_a` reconstructs the
/// original first input exactly, likewise for `aligned_b`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Alignment {
    /// Total penalty of the alignment.
    pub cost: u32,
    /// First input with gaps spliced in.
    pub aligned_a: Vec<u8>,
    /// Second input with gaps spliced in.
    pub aligned_b: Vec<u8>,
}

impl Alignment {
    /// Number of alignment columns.
    pub fn len(&self) -> usize {
        self.aligned_a.len()
    }

    /// Whether the alignment has no columns.
    pub fn is_empty(&self) -> bool {
        self.aligned_a.is_empty()
    }

    /// Number of columns pairing two identical bases.
    pub fn matches(&self) -> usize {
        self.aligned_a
            .iter()
            .zip(&self.aligned_b)
            .filter(|(x, y)| x == y && **x != GAP)
            .count()
    }

    /// Number of columns containing a gap on either side.
    pub fn gap_columns(&self) -> usize {
        self.aligned_a
            .iter()
            .zip(&self.aligned_b)
            .filter(|(x, y)| **x == GAP || **y == GAP)
            .count()
    }

    /// First input with gap markers removed.
    pub fn stripped_a(&self) -> Vec<u8> {
        self.aligned_a.iter().copied().filter(|&b| b != GAP).collect()
    }

    /// Second input with gap markers removed.
    pub fn stripped_b(&self) -> Vec<u8> {
        self.aligned_b.iter().copied().filter(|&b| b != GAP).collect()
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let a = std::str::from_utf8(&self.aligned_a).unwrap_or("???");
        let b = std::str::from_utf8(&self.aligned_b).unwrap_or("???");
        writeln!(f, "{}", self.cost)?;
        writeln!(f, "{a}")?;
        write!(f, "{b}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Alignment {
        Alignment {
            cost: 60,
            aligned_a: b"AG_".to_vec(),
            aligned_b: b"A_C".to_vec(),
        }
    }

    #[test]
    fn column_accounting() {
        let aln = sample();
        assert_eq!(aln.len(), 3);
        assert_eq!(aln.matches(), 1);
        assert_eq!(aln.gap_columns(), 2);
    }

    #[test]
    fn stripping_gaps_recovers_inputs() {
        let aln = sample();
        assert_eq!(aln.stripped_a(), b"AG");
        assert_eq!(aln.stripped_b(), b"AC");
    }

    #[test]
    fn display_is_three_lines() {
        let text = sample().to_string();
        assert_eq!(text, "60\nAG_\nA_C");
    }
}
