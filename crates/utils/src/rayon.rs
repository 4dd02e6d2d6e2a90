// Copyright 2025 Irreducible Inc.

use std::{env, sync::OnceLock};

/// Configures the global rayon pool for batch hashing.
///
/// When `serial` is requested, or `RAYON_NUM_THREADS` is set to 1, the global pool is built with a
/// single thread and `use_current_thread`, so batch work runs on the caller's thread and log
/// output stays in input order. Otherwise the pool is left to rayon's defaults.
///
/// NOTE: rayon allows the global pool to be built only once. The first call decides; later calls
/// return the cached outcome regardless of their argument. The result is returned by reference
/// because `ThreadPoolBuildError` doesn't implement `Clone`.
pub fn adjust_thread_pool(serial: bool) -> &'static Result<(), rayon::ThreadPoolBuildError> {
	static ONCE_GUARD: OnceLock<Result<(), rayon::ThreadPoolBuildError>> = OnceLock::new();

	ONCE_GUARD.get_or_init(|| {
		let single_thread = serial || matches!(env::var("RAYON_NUM_THREADS"), Ok(v) if v == "1");
		if single_thread {
			tracing::debug!("using a single-threaded rayon pool");
			rayon::ThreadPoolBuilder::new()
				.num_threads(1)
				.use_current_thread()
				.build_global()
		} else {
			Ok(())
		}
	})
}
