use thiserror::Error;

/// Errors produced while building a corpus.
#[derive(Error, Debug)]
pub enum CorpusError {
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	#[error("CSV error: {0}")]
	Csv(#[from] csv::Error),

	#[error("HTTP error: {0}")]
	Http(#[from] reqwest::Error),

	/// A page did not contain one of the literal markers delimiting its text.
	#[error("Marker {marker:?} not found in {url}")]
	MarkerNotFound { marker: &'static str, url: String },

	/// The CSV header row lacks a required column.
	#[error("Column {column:?} not found in the CSV header")]
	MissingColumn { column: &'static str },
}
