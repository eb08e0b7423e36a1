//! Penalty model for minimum-cost global alignment.
//!
//! Costs are penalties: zero for a match, positive for a substitution or a
//! gap, and the aligner minimizes their sum. The closed four-letter alphabet
//! maps to indices `A=0, C=1, G=2, T=3`, so the substitution table is a fixed
//! 4×4 array rather than an associative lookup.

use sepia_core::{Result, SepiaError};

/// Number of bases in the alphabet.
pub const ALPHABET_SIZE: usize = 4;

/// Map an input byte to its base index (`A=0, C=1, G=2, T=3`).
///
/// Case-insensitive. Returns `None` for bytes outside the alphabet.
#[inline]
pub fn base_index(b: u8) -> Option<usize> {
    match b.to_ascii_uppercase() {
        b'A' => Some(0),
        b'C' => Some(1),
        b'G' => Some(2),
        b'T' => Some(3),
        _ => None,
    }
}

/// A substitution table plus linear gap penalty.
///
/// The table must be symmetric with a zero diagonal; the gap penalty must be
/// positive. Use [`PenaltyModel::reference`] for the fixed model the Sepia
/// pipeline ships with.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PenaltyModel {
    gap: u32,
    sub: [[u32; ALPHABET_SIZE]; ALPHABET_SIZE],
}

impl PenaltyModel {
    /// Create a penalty model from a gap penalty and substitution table.
    ///
    /// # Errors
    ///
    /// Returns an error if `gap` is zero, the table's diagonal is nonzero,
    /// or the table is not symmetric.
    pub fn new(gap: u32, sub: [[u32; ALPHABET_SIZE]; ALPHABET_SIZE]) -> Result<Self> {
        if gap == 0 {
            return Err(SepiaError::InvalidInput(
                "gap penalty must be positive".into(),
            ));
        }
        for i in 0..ALPHABET_SIZE {
            if sub[i][i] != 0 {
                return Err(SepiaError::InvalidInput(format!(
                    "substitution table diagonal must be zero (entry {i},{i} is {})",
                    sub[i][i]
                )));
            }
            for j in 0..i {
                if sub[i][j] != sub[j][i] {
                    return Err(SepiaError::InvalidInput(format!(
                        "substitution table must be symmetric (entries {i},{j} and {j},{i} differ)"
                    )));
                }
            }
        }
        Ok(Self { gap, sub })
    }

    /// The reference model: gap penalty 30 and the fixed DNA substitution
    /// table (`A/C=110, A/G=48, A/T=94, C/G=118, C/T=48, G/T=110`).
    pub fn reference() -> Self {
        Self {
            gap: 30,
            sub: [
                //  A    C    G    T
                [0, 110, 48, 94],
                [110, 0, 118, 48],
                [48, 118, 0, 110],
                [94, 48, 110, 0],
            ],
        }
    }

    /// Penalty per inserted or deleted base.
    #[inline]
    pub fn gap(&self) -> u32 {
        self.gap
    }

    /// Substitution penalty for two base indices.
    #[inline]
    pub fn sub_indexed(&self, ia: usize, ib: usize) -> u32 {
        self.sub[ia][ib]
    }

    /// Substitution penalty for a pair of bytes. Case-insensitive.
    ///
    /// Returns `None` if either byte is outside the alphabet.
    pub fn sub(&self, a: u8, b: u8) -> Option<u32> {
        Some(self.sub[base_index(a)?][base_index(b)?])
    }
}

impl Default for PenaltyModel {
    fn default() -> Self {
        Self::reference()
    }
}

/// Map a sequence to base indices, failing fast on the first invalid byte.
pub(crate) fn encode(seq: &[u8]) -> Result<Vec<u8>> {
    seq.iter()
        .enumerate()
        .map(|(i, &b)| {
            base_index(b)
                .map(|ix| ix as u8)
                .ok_or_else(|| {
                    SepiaError::InvalidInput(format!(
                        "byte '{}' (0x{:02X}) at position {} is outside the DNA alphabet",
                        b as char, b, i
                    ))
                })
        })
        .collect()
}
