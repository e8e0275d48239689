use std::collections::BTreeMap;

/// Next-character distribution for one history.
///
/// A `Distribution` corresponds to a fixed `order`-character prefix
/// (`history`) and stores how many times each character followed it in
/// the training corpus.
///
/// Conceptually, this is a node in a Markov chain where outgoing edges
/// are weighted by their number of observations.
///
/// ## Invariants
/// - Each stored count is strictly positive
/// - After training, `total` equals the sum of all counts
/// - Counts are ordered by character, so iteration is deterministic
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Distribution {
	/// History this distribution belongs to.
	history: String,
	/// Occurrences of each next character.
	/// Example: { 'a' => 3, 'e' => 42 }
	counts: BTreeMap<char, usize>,
	/// Sum of `counts`, cached once training is done.
	total: usize,
}

impl Distribution {
	/// Creates a new empty distribution for the given history.
	pub(crate) fn new(history: &str) -> Self {
		Self {
			history: history.to_owned(),
			counts: BTreeMap::new(),
			total: 0,
		}
	}

	/// Records one occurrence of `next_char` after this history.
	pub(crate) fn add_occurrence(&mut self, next_char: char) {
		*self.counts.entry(next_char).or_insert(0) += 1;
	}

	/// Caches the sum of all counts.
	pub(crate) fn compute_total(&mut self) {
		self.total = self.counts.values().sum();
	}

	/// History this distribution was observed after.
	pub fn history(&self) -> &str {
		&self.history
	}

	/// Number of times `next_char` followed the history (0 if never).
	pub fn count(&self, next_char: char) -> usize {
		self.counts.get(&next_char).copied().unwrap_or(0)
	}

	/// Total number of observations for the history.
	pub fn total(&self) -> usize {
		self.total
	}

	/// Number of distinct next characters.
	pub fn len(&self) -> usize {
		self.counts.len()
	}

	pub fn is_empty(&self) -> bool {
		self.counts.is_empty()
	}

	/// Iterates over `(character, count)` pairs in character order.
	pub fn iter(&self) -> impl Iterator<Item = (char, usize)> + '_ {
		self.counts.iter().map(|(c, n)| (*c, *n))
	}

	/// Returns at most `k` entries ranked by descending count.
	///
	/// Equal counts are ranked by ascending character.
	pub fn most_common(&self, k: usize) -> Vec<(char, usize)> {
		let mut ranked: Vec<(char, usize)> = self.iter().collect();
		// Stable sort keeps the character order among ties
		ranked.sort_by(|a, b| b.1.cmp(&a.1));
		ranked.truncate(k);
		ranked
	}
}
