use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while training a model or generating text.
#[derive(Error, Debug)]
pub enum ModelError {
	/// The corpus path does not resolve to a file.
	#[error("File '{}' not found. Model cannot be trained.", .path.display())]
	CorpusNotFound { path: PathBuf },

	/// The corpus exists but could not be read as UTF-8 text.
	#[error("Failed to read corpus '{}': {source}", .path.display())]
	CorpusRead {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	/// A distribution with no observed characters was sampled.
	#[error("No character was ever observed after history {history:?}")]
	EmptyDistribution { history: String },

	/// Generation reached a history absent from the frequency table.
	///
	/// `partial` holds everything generated before the dead end.
	#[error("Generation stopped after {} characters: history {history:?} is not in the frequency table", .partial.chars().count())]
	DeadEnd { history: String, partial: String },
}
