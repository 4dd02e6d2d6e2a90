// Copyright 2025 Irreducible Inc.

use std::{fmt, str::FromStr};

use crate::{compression::State, constants::DIGEST_BYTES, error::Error};

/// A SHA-256 digest: the final state as eight big-endian words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digest([u8; DIGEST_BYTES]);

impl Digest {
	pub const fn new(bytes: [u8; DIGEST_BYTES]) -> Self {
		Self(bytes)
	}

	pub const fn as_bytes(&self) -> &[u8; DIGEST_BYTES] {
		&self.0
	}

	pub const fn into_bytes(self) -> [u8; DIGEST_BYTES] {
		self.0
	}

	/// 64 lowercase hex characters, most significant nibble first.
	pub fn to_hex(&self) -> String {
		hex::encode(self.0)
	}
}

impl From<State> for Digest {
	fn from(state: State) -> Self {
		Self(state.to_be_bytes())
	}
}

impl From<Digest> for [u8; DIGEST_BYTES] {
	fn from(digest: Digest) -> Self {
		digest.0
	}
}

impl AsRef<[u8]> for Digest {
	fn as_ref(&self) -> &[u8] {
		&self.0
	}
}

impl fmt::LowerHex for Digest {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.pad_integral(true, "0x", &self.to_hex())
	}
}

impl fmt::Display for Digest {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.pad(&self.to_hex())
	}
}

impl FromStr for Digest {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let bytes = hex::decode(s)?;
		let len = bytes.len();
		let bytes = <[u8; DIGEST_BYTES]>::try_from(bytes).map_err(|_| Error::InvalidDigestLength {
			expected: DIGEST_BYTES,
			len,
		})?;
		Ok(Self(bytes))
	}
}
