// Copyright 2025 Irreducible Inc.

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("input of {len} bytes does not fit in the 64-bit message length field")]
	InputTooLarge { len: usize },
	#[error("hasher is already finalized; construct a new one to hash another message")]
	AlreadyFinalized,
	#[error("digest must be {expected} bytes, got {len}")]
	InvalidDigestLength { expected: usize, len: usize },
	#[error("invalid hex digest: {0}")]
	InvalidHex(#[from] hex::FromHexError),
}
