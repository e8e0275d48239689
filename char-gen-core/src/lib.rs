//! Character-level n-gram text generation library.
//!
//! This crate provides:
//! - Training of a fixed-order character model from a text corpus
//! - A read-only frequency table of next-character distributions
//! - Top-k and uniform sampling of the next character
//! - Sliding-window text generation
//!
//! The library only emits events through the `log` facade; installing a
//! logger is left to the caller.

/// Language model, frequency table and sampling logic.
pub mod model;

/// Error types returned by training and generation.
pub mod error;

/// Corpus loading helpers.
///
/// Not exposed
pub(crate) mod io;

pub use error::ModelError;
pub use model::language_model::{DEFAULT_LENGTH, LanguageModel, PAD_CHAR};
pub use model::sampling::SamplingMode;
