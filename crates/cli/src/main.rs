// Copyright 2025 Irreducible Inc.

use std::{io, process::ExitCode};

use anyhow::{anyhow, Result};
use clap::Parser;
use fips256_cli::{run, Args};
use fips256_utils::{rayon::adjust_thread_pool, tracing::init_tracing};

fn main() -> Result<ExitCode> {
	let args = Args::parse();

	init_tracing();
	adjust_thread_pool(args.serial())
		.as_ref()
		.map_err(|err| anyhow!("failed to init thread pool: {err}"))?;

	let summary = run(&args, &mut io::stdout().lock(), &mut io::stderr().lock())?;
	Ok(summary.exit_code())
}
