use rand::Rng;
use rand::seq::IndexedRandom;

use super::distribution::Distribution;
use crate::error::ModelError;

/// Number of candidates kept by `SamplingMode::TopK`.
pub const TOP_K: usize = 3;

/// Strategy used to pick the next character from a distribution.
///
/// # Variants
/// - `Uniform`: any character that was observed at least once, all with
///   the same probability, whatever their counts.
/// - `TopK`: one of the `TOP_K` most frequent characters, all with the
///   same probability. Ties on the last rank go to the lowest character.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SamplingMode {
	Uniform,
	#[default]
	TopK,
}

/// Samples one character from `distribution`.
///
/// # Errors
/// Returns `ModelError::EmptyDistribution` if nothing was ever observed
/// after the distribution's history.
pub fn sample_character<R: Rng + ?Sized>(
	distribution: &Distribution,
	mode: SamplingMode,
	rng: &mut R,
) -> Result<char, ModelError> {
	let candidates: Vec<char> = match mode {
		SamplingMode::Uniform => distribution.iter().map(|(c, _)| c).collect(),
		SamplingMode::TopK => distribution.most_common(TOP_K).into_iter().map(|(c, _)| c).collect(),
	};

	candidates
		.choose(rng)
		.copied()
		.ok_or_else(|| ModelError::EmptyDistribution { history: distribution.history().to_owned() })
}
