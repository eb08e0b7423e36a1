//! Validated DNA sequence type.
//!
//! [`DnaSeq`] is a newtype over `Vec<u8>` restricted to the four-letter
//! alphabet `{A,C,G,T}`. Construction uppercases and validates every byte, so
//! the inner data is always uppercase and `Deref<Target=[u8]>`/`as_bytes()`
//! are safe to hand to downstream `&[u8]` APIs.

use std::fmt;
use std::ops::Deref;

use sepia_core::{Result, SepiaError};

/// Whether a byte (assumed already uppercased) is a valid base.
#[inline]
pub fn is_dna_base(b: u8) -> bool {
    matches!(b, b'A' | b'C' | b'G' | b'T')
}

/// A validated DNA sequence. The inner bytes are always uppercase `ACGT`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct DnaSeq {
    data: Vec<u8>,
}

impl DnaSeq {
    /// Create a new sequence from raw bytes.
    ///
    /// Input is uppercased, then every byte is checked against the alphabet.
    /// The empty sequence is valid.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first byte that is not in `{A,C,G,T}`
    /// after uppercasing.
    pub fn new(bytes: impl AsRef<[u8]>) -> Result<Self> {
        let data: Vec<u8> = bytes
            .as_ref()
            .iter()
            .map(|b| b.to_ascii_uppercase())
            .collect();
        for (i, &b) in data.iter().enumerate() {
            if !is_dna_base(b) {
                return Err(SepiaError::InvalidInput(format!(
                    "invalid DNA byte '{}' (0x{:02X}) at position {}",
                    b as char, b, i
                )));
            }
        }
        Ok(Self { data })
    }

    /// Create a sequence from pre-validated bytes, skipping validation.
    ///
    /// Caller must guarantee all bytes are uppercase `ACGT`.
    pub(crate) fn from_validated(data: Vec<u8>) -> Self {
        Self { data }
    }

    /// The sequence as a byte slice.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consume the sequence and return the inner byte vector.
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Number of bases.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the sequence has no bases.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl Deref for DnaSeq {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.data
    }
}

impl AsRef<[u8]> for DnaSeq {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl fmt::Debug for DnaSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = std::str::from_utf8(&self.data).unwrap_or("???");
        write!(f, "DnaSeq(\"{s}\")")
    }
}

impl fmt::Display for DnaSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = std::str::from_utf8(&self.data).unwrap_or("???");
        f.write_str(s)
    }
}
