//! DNA sequences and deterministic self-insertion expansion.
//!
//! `sepia-seq` provides the input side of the Sepia pipeline:
//!
//! - [`DnaSeq`] — a validated, always-uppercase sequence over the strict
//!   `{A,C,G,T}` alphabet
//! - [`expand`] — grows a short seed into a full string by repeatedly
//!   splicing the current string into itself at a list of positions
//!
//! # Quick start
//!
//! ```
//! use sepia_seq::{expand, DnaSeq};
//!
//! let seed = DnaSeq::new("AC").unwrap();
//! let full = expand(&seed, &[1]);
//! assert_eq!(full.as_bytes(), b"AACC");
//! ```

pub mod expand;
pub mod seq;

pub use expand::expand;
pub use seq::DnaSeq;
