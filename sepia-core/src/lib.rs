//! Shared primitives for the Sepia sequence toolkit.
//!
//! `sepia-core` provides the foundation that the other Sepia crates build on:
//!
//! - **Error types** — [`SepiaError`] and [`Result`] for structured error handling
//! - **Resource measurement** — peak resident set size of the running process,
//!   used for the diagnostic memory-delta report line

pub mod error;
pub mod resource;

pub use error::{Result, SepiaError};
