use std::collections::VecDeque;
use std::iter;
use std::path::Path;

use indicatif::ProgressBar;
use log::{debug, info, warn};
use rand::Rng;

use super::frequency_table::FrequencyTable;
use super::sampling::{SamplingMode, sample_character};
use crate::error::ModelError;
use crate::io::read_corpus;

/// Character used to pad the beginning of the corpus and the initial
/// generation window.
pub const PAD_CHAR: char = '`';

/// Number of characters generated when the caller has no preference.
pub const DEFAULT_LENGTH: usize = 5_000;

/// A trained character-level model of fixed order.
///
/// Maps every history of `order` characters seen in the corpus to the
/// characters that followed it, e.g. `"spea"` → `{'k': 9, 'r': 1}` lets
/// the model generate either `"speak"` or `"spear"`.
///
/// Training happens during construction and the model is immutable
/// afterwards, so a single instance can serve any number of generation
/// calls, from any thread.
#[derive(Clone, Debug)]
pub struct LanguageModel {
	order: usize,
	table: FrequencyTable,
}

impl LanguageModel {
	/// Trains a model of the given `order` on the file at `filepath`.
	///
	/// # Errors
	/// - `ModelError::CorpusNotFound` if `filepath` is not a file.
	/// - `ModelError::CorpusRead` if the file cannot be read as UTF-8.
	///
	/// # Panics
	/// Panics if `order` is 0.
	pub fn new<P: AsRef<Path>>(order: usize, filepath: P) -> Result<Self, ModelError> {
		Self::new_with_progress(order, filepath, &ProgressBar::hidden())
	}

	/// Same as [`LanguageModel::new`], reporting the scan and the total
	/// computation on `progress`.
	///
	/// The bar length is reset at the start of each phase.
	pub fn new_with_progress<P: AsRef<Path>>(
		order: usize,
		filepath: P,
		progress: &ProgressBar,
	) -> Result<Self, ModelError> {
		assert!(order >= 1, "order must be >= 1");
		let path = filepath.as_ref();
		info!("Training a {}-gram model from '{}'", order, path.display());

		let text = read_corpus(path)?;
		Ok(Self::train(order, &text, progress))
	}

	/// Trains a model of the given `order` on an in-memory corpus.
	///
	/// # Panics
	/// Panics if `order` is 0.
	pub fn from_text(order: usize, text: &str) -> Self {
		assert!(order >= 1, "order must be >= 1");
		Self::train(order, text, &ProgressBar::hidden())
	}

	/// Scans the padded corpus once, then caches every total.
	fn train(order: usize, text: &str, progress: &ProgressBar) -> Self {
		if text.contains(PAD_CHAR) {
			warn!("Corpus contains the pad character {PAD_CHAR:?}; padded histories may mix with real text");
		}

		let padded: Vec<char> = iter::repeat_n(PAD_CHAR, order).chain(text.chars()).collect();
		info!("Training the model on {} characters...", padded.len() - order);

		let mut table = FrequencyTable::new(order);
		progress.set_message("scanning");
		progress.set_length((padded.len() - order) as u64);
		progress.set_position(0);
		for window in padded.windows(order + 1) {
			let history: String = window[..order].iter().collect();
			table.entry_mut(history).add_occurrence(window[order]);
			progress.inc(1);
		}
		debug!("Scan complete: {} distinct histories", table.len());

		info!("Computing total counts...");
		progress.set_message("totals");
		table.compute_totals(progress);
		progress.finish_and_clear();

		info!("Training complete.");
		Self { order, table }
	}

	/// Length of the history window.
	pub fn order(&self) -> usize {
		self.order
	}

	/// Read-only access to the trained frequency table.
	pub fn table(&self) -> &FrequencyTable {
		&self.table
	}

	/// Generates `length` characters with top-k sampling and the
	/// thread-local random generator.
	///
	/// # Errors
	/// See [`LanguageModel::generate_with`].
	pub fn generate(&self, length: usize) -> Result<String, ModelError> {
		self.generate_with(length, SamplingMode::default(), &mut rand::rng())
	}

	/// Generates exactly `length` characters.
	///
	/// Starts from a window of `order` pad characters; after each sample
	/// the oldest character leaves the window and the sampled one enters.
	/// Pass a seeded `rng` for reproducible output.
	///
	/// # Errors
	/// Returns `ModelError::DeadEnd` when the current window was never
	/// followed by anything in the corpus (empty corpus, or a window only
	/// seen at its very end). The error carries the text generated so far.
	pub fn generate_with<R: Rng + ?Sized>(
		&self,
		length: usize,
		mode: SamplingMode,
		rng: &mut R,
	) -> Result<String, ModelError> {
		info!("Generating text...");
		let mut window: VecDeque<char> = iter::repeat_n(PAD_CHAR, self.order).collect();
		let mut text = String::with_capacity(length);

		for _ in 0..length {
			let history: String = window.iter().collect();
			let Some(distribution) = self.table.get(&history) else {
				return Err(ModelError::DeadEnd { history, partial: text });
			};

			let c = sample_character(distribution, mode, rng)?;
			window.pop_front();
			window.push_back(c);
			text.push(c);
		}

		Ok(text)
	}
}
