//! Training corpus builders.
//!
//! Two strategies produce the plain text file consumed by
//! `char-gen-core`:
//! - `faq`: one cleaned column of a CSV export, one row per line
//! - `advent`: puzzle descriptions scraped from adventofcode.com

/// CSV column extraction.
pub mod faq;

/// Puzzle page download and cleanup.
pub mod advent;

/// Error types for both strategies.
pub mod error;

/// Corpus file writing.
pub mod io;

pub use error::CorpusError;
