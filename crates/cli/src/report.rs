// Copyright 2025 Irreducible Inc.

use std::{
	io::{self, Write},
	path::{Path, PathBuf},
	process::ExitCode,
};

use fips256_hash::{hash, Digest};
use rayon::prelude::*;
use tracing::instrument;

use crate::{
	args::Args,
	input::{read_input, InputError},
};

/// Outcome of hashing one input file.
#[derive(Debug)]
pub struct FileDigest {
	pub path: PathBuf,
	pub digest: Result<Digest, InputError>,
}

/// Reads and hashes every file, keeping argument order.
///
/// Each file is read and hashed in one step and its bytes are dropped before the step ends, so a
/// serial run holds one input at a time. Unreadable files are reported per entry and don't stop
/// the others. Unless `serial` is set the files are processed in parallel on the rayon pool, one
/// driver per file.
pub fn hash_files(paths: &[PathBuf], serial: bool) -> Vec<FileDigest> {
	hash_files_with(paths, serial, read_input)
}

/// [`hash_files`] with a caller-supplied reader.
#[instrument(skip_all, fields(n_files = paths.len(), serial = serial))]
pub fn hash_files_with<R, B>(paths: &[PathBuf], serial: bool, read: R) -> Vec<FileDigest>
where
	R: Fn(&Path) -> Result<B, InputError> + Sync,
	B: AsRef<[u8]>,
{
	let hash_one = |path: &PathBuf| {
		let digest = read(path).and_then(|input| Ok(hash(input.as_ref())?));
		FileDigest {
			path: path.clone(),
			digest,
		}
	};

	if serial {
		paths.iter().map(hash_one).collect()
	} else {
		paths.par_iter().map(hash_one).collect()
	}
}

/// Counts of a finished [`run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
	pub hashed: usize,
	pub failed: usize,
}

impl RunSummary {
	pub fn is_success(&self) -> bool {
		self.failed == 0
	}

	/// Failure when any input could not be hashed.
	pub fn exit_code(&self) -> ExitCode {
		if self.is_success() {
			ExitCode::SUCCESS
		} else {
			ExitCode::FAILURE
		}
	}
}

/// Hashes the files named by `args`, writing digest lines to `out` and errors to `err`.
pub fn run(args: &Args, out: &mut impl Write, err: &mut impl Write) -> io::Result<RunSummary> {
	let multiple = args.files.len() > 1;
	let mut summary = RunSummary {
		hashed: 0,
		failed: 0,
	};
	for file in hash_files(&args.files, args.serial()) {
		match file.digest {
			Ok(digest) => {
				writeln!(out, "{}", render(&file.path, &digest, multiple, args.hex_only))?;
				summary.hashed += 1;
			}
			Err(error) => {
				writeln!(err, "Error: {error}")?;
				summary.failed += 1;
			}
		}
	}
	Ok(summary)
}

/// Formats one output line.
///
/// A lone file prints as `SHA-256 Hash: <hex>`; with several files each line names its path.
pub fn render(path: &Path, digest: &Digest, multiple: bool, hex_only: bool) -> String {
	if hex_only {
		digest.to_hex()
	} else if multiple {
		format!("SHA-256 Hash ({}): {digest}", path.display())
	} else {
		format!("SHA-256 Hash: {digest}")
	}
}
