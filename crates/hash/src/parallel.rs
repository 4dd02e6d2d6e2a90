// Copyright 2025 Irreducible Inc.

use rayon::prelude::*;
use tracing::instrument;

use crate::{digest::Digest, driver::hash, error::Error};

/// Hashes each input independently, in parallel on the rayon pool.
///
/// Every input gets its own driver and state. Results are in input order.
#[instrument(skip_all, level = "debug", fields(n_inputs = inputs.len()))]
pub fn hash_batch<T>(inputs: &[T]) -> Vec<Result<Digest, Error>>
where
	T: AsRef<[u8]> + Sync,
{
	inputs
		.par_iter()
		.map(|input| hash(input.as_ref()))
		.collect()
}
