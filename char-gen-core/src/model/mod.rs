//! Top-level module for the character model.
//!
//! This module provides:
//! - Per-history next-character counts (`Distribution`)
//! - The read-only table of all histories (`FrequencyTable`)
//! - Next-character sampling strategies (`SamplingMode`)
//! - Training and generation (`LanguageModel`)

/// Training from a corpus and sliding-window generation.
pub mod language_model;

/// Mapping from fixed-length histories to their distributions.
///
/// Entries are created while training only; afterwards lookups
/// never create anything.
pub mod frequency_table;

/// Next-character counts for a single history, with a cached total.
pub mod distribution;

/// Uniform and top-k next-character sampling.
pub mod sampling;
