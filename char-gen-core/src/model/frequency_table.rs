use std::collections::HashMap;

use indicatif::ProgressBar;

use super::distribution::Distribution;

/// Table of every history observed during training.
///
/// The `FrequencyTable` maps each history of exactly `order` characters
/// to the `Distribution` of characters that followed it.
///
/// # Responsibilities
/// - Create distributions on first observation (training only)
/// - Cache per-distribution totals once the scan is over
/// - Answer read-only lookups during generation
///
/// # Invariants
/// - Every key has exactly `order` characters
/// - Every stored distribution has at least one observation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrequencyTable {
	/// Length of every history key
	order: usize,

	/// Mapping from a history to its distribution
	entries: HashMap<String, Distribution>,
}

impl FrequencyTable {
	/// Creates an empty table for histories of `order` characters.
	pub(crate) fn new(order: usize) -> Self {
		Self { order, entries: HashMap::new() }
	}

	/// Returns the distribution for `history`, creating it if needed.
	///
	/// Only used while training.
	pub(crate) fn entry_mut(&mut self, history: String) -> &mut Distribution {
		debug_assert_eq!(history.chars().count(), self.order);
		self.entries
			.entry(history)
			.or_insert_with_key(|key| Distribution::new(key))
	}

	/// Caches the total of every distribution.
	pub(crate) fn compute_totals(&mut self, progress: &ProgressBar) {
		progress.set_length(self.entries.len() as u64);
		progress.set_position(0);
		for distribution in self.entries.values_mut() {
			distribution.compute_total();
			progress.inc(1);
		}
	}

	/// Length of the histories used as keys.
	pub fn order(&self) -> usize {
		self.order
	}

	/// Looks up the distribution observed after `history`.
	///
	/// Returns `None` if the history never appeared in the corpus.
	pub fn get(&self, history: &str) -> Option<&Distribution> {
		self.entries.get(history)
	}

	/// Number of distinct histories.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Iterates over `(history, distribution)` pairs in arbitrary order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &Distribution)> {
		self.entries.iter().map(|(k, v)| (k.as_str(), v))
	}
}
