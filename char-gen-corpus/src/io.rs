use std::fs;
use std::path::Path;

use log::info;

use crate::error::CorpusError;

/// Joins `texts` with newlines and writes them to `output`.
///
/// Missing parent directories are created. Returns the number of
/// characters written.
pub fn write_corpus<P: AsRef<Path>>(output: P, texts: &[String]) -> Result<usize, CorpusError> {
	let output = output.as_ref();
	if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
		fs::create_dir_all(parent)?;
	}

	let corpus = texts.join("\n");
	fs::write(output, &corpus)?;

	let size = corpus.chars().count();
	info!("Wrote {} texts ({} characters) to '{}'", texts.len(), size, output.display());
	Ok(size)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn joins_with_newlines_and_creates_parents() {
		let dir = tempfile::tempdir().unwrap();
		let output = dir.path().join("data").join("faq.txt");

		let size = write_corpus(&output, &["first".to_owned(), "second".to_owned()]).unwrap();

		assert_eq!(fs::read_to_string(&output).unwrap(), "first\nsecond");
		assert_eq!(size, 12);
	}

	#[test]
	fn no_texts_writes_empty_file() {
		let dir = tempfile::tempdir().unwrap();
		let output = dir.path().join("empty.txt");

		assert_eq!(write_corpus(&output, &[]).unwrap(), 0);
		assert_eq!(fs::read_to_string(&output).unwrap(), "");
	}
}
