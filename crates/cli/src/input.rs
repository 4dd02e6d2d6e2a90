// Copyright 2025 Irreducible Inc.

use std::{
	fs, io,
	path::{Path, PathBuf},
};

use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum InputError {
	#[error("file not found: {}", path.display())]
	NotFound { path: PathBuf },
	#[error("cannot read {}: {source}", path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
	#[error(transparent)]
	Hash(#[from] fips256_hash::Error),
}

/// Reads the whole file as raw bytes.
pub fn read_input(path: &Path) -> Result<Vec<u8>, InputError> {
	let bytes = fs::read(path).map_err(|source| match source.kind() {
		io::ErrorKind::NotFound => InputError::NotFound {
			path: path.to_path_buf(),
		},
		_ => InputError::Io {
			path: path.to_path_buf(),
			source,
		},
	})?;
	debug!(path = %path.display(), len = bytes.len(), "input read");
	Ok(bytes)
}
