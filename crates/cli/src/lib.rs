// Copyright 2025 Irreducible Inc.

//! File-hashing front end for `fips256_hash`.

pub mod args;
pub mod input;
pub mod report;

pub use args::Args;
pub use input::{read_input, InputError};
pub use report::{hash_files, hash_files_with, render, run, FileDigest, RunSummary};
