// Copyright 2025 Irreducible Inc.

use std::path::PathBuf;

use clap::Parser;
use fips256_utils::env::boolean_env_flag_set;

/// Environment flag with the same effect as `--serial`.
pub const SERIAL_ENV_FLAG: &str = "FIPS256_SERIAL";

/// Input file hashed when no paths are given.
///
/// Stands in for the single fixed file a bare invocation reads; any path works on the command
/// line, so the name itself carries no meaning.
pub const DEFAULT_INPUT: &str = "input.txt";

/// Print the SHA-256 digest of each input file.
#[derive(Debug, Parser)]
#[command(name = "fips256sum", version)]
pub struct Args {
	/// Files to hash.
	#[arg(default_value = DEFAULT_INPUT)]
	pub files: Vec<PathBuf>,
	/// Print only the hex digest, one per line.
	#[arg(long)]
	pub hex_only: bool,
	/// Hash files one after another on the current thread.
	#[arg(long)]
	pub serial: bool,
}

impl Args {
	/// `--serial`, or the `FIPS256_SERIAL` environment flag.
	pub fn serial(&self) -> bool {
		self.serial || boolean_env_flag_set(SERIAL_ENV_FLAG)
	}
}
