use std::io::Read;
use std::path::Path;

use log::{info, warn};
use serde::Deserialize;

use crate::error::CorpusError;
use crate::io::write_corpus;

/// Default location of the FAQ export.
pub const DEFAULT_INPUT: &str = "data/faq.csv";

/// Default location of the FAQ corpus.
pub const DEFAULT_OUTPUT: &str = "data/faq.txt";

/// Column holding the cleaned answers.
pub const ANSWER_COLUMN: &str = "answer_clean";

/// The only column used from the FAQ export. Other columns are ignored.
#[derive(Debug, Deserialize)]
struct FaqRow {
	answer_clean: Option<String>,
}

/// Reads the `answer_clean` column of a CSV document with a header row.
///
/// Rows with an empty answer are skipped.
///
/// # Errors
/// `CorpusError::MissingColumn` if the header has no `answer_clean` column.
///
/// Note: the FAQ mixes several languages, they are all kept.
pub fn extract_answers<R: Read>(reader: R) -> Result<Vec<String>, CorpusError> {
	let mut csv_reader = csv::Reader::from_reader(reader);
	if !csv_reader.headers()?.iter().any(|name| name == ANSWER_COLUMN) {
		return Err(CorpusError::MissingColumn { column: ANSWER_COLUMN });
	}

	let mut answers = Vec::new();
	let mut skipped = 0;

	for row in csv_reader.deserialize::<FaqRow>() {
		match row?.answer_clean {
			Some(answer) if !answer.is_empty() => answers.push(answer),
			_ => skipped += 1,
		}
	}

	if skipped > 0 {
		warn!("Skipped {} rows without an answer", skipped);
	}
	Ok(answers)
}

/// Builds the FAQ corpus: one answer per line.
///
/// Returns the number of characters written.
pub fn build_faq_corpus<PI, PO>(input: PI, output: PO) -> Result<usize, CorpusError>
where
	PI: AsRef<Path>,
	PO: AsRef<Path>,
{
	info!("Reading FAQ answers from '{}'", input.as_ref().display());
	let file = std::fs::File::open(input)?;
	let answers = extract_answers(file)?;
	write_corpus(output, &answers)
}
