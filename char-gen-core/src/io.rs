use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::ModelError;

/// Reads a whole corpus file into memory.
///
/// A missing file (or a path that is not a file) is reported as
/// `ModelError::CorpusNotFound`, every other failure as `CorpusRead`.
pub(crate) fn read_corpus<P: AsRef<Path>>(filepath: P) -> Result<String, ModelError> {
	let path = filepath.as_ref();
	if !path.is_file() {
		return Err(ModelError::CorpusNotFound { path: path.to_path_buf() });
	}

	fs::read_to_string(path).map_err(|source| match source.kind() {
		ErrorKind::NotFound => ModelError::CorpusNotFound { path: path.to_path_buf() },
		_ => ModelError::CorpusRead { path: path.to_path_buf(), source },
	})
}
