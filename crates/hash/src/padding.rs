// Copyright 2025 Irreducible Inc.

//! Message padding, FIPS 180-4 section 5.1.1.
//!
//! The message is followed by a single `1` bit, then `0` bits up to 448 mod 512, then the original
//! length in bits as a 64-bit big-endian integer. Messages here are always whole bytes, so the `1`
//! bit is the byte `0x80`.

use tracing::instrument;

use crate::{compression::Block, constants::BLOCK_BYTES, error::Error};

/// Bytes taken by the trailing length field.
const LENGTH_FIELD_BYTES: usize = 8;

/// Padding terminator: a single set bit followed by seven zero bits.
const TERMINATOR: u8 = 0x80;

/// A message padded to a whole number of blocks.
///
/// Holds the blocks in message order; the byte length is always a multiple of [`BLOCK_BYTES`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaddedMessage {
	blocks: Vec<Block>,
	message_len: usize,
}

impl PaddedMessage {
	/// The blocks of the padded message, in order.
	pub fn blocks(&self) -> &[Block] {
		&self.blocks
	}

	/// Number of blocks.
	pub fn n_blocks(&self) -> usize {
		self.blocks.len()
	}

	/// The padded message as one contiguous byte slice.
	pub fn as_bytes(&self) -> &[u8] {
		self.blocks.as_flattened()
	}

	/// Length of the padded message in bytes.
	pub fn len(&self) -> usize {
		self.blocks.len() * BLOCK_BYTES
	}

	/// Always `false`: even the empty message pads to one block.
	pub fn is_empty(&self) -> bool {
		self.blocks.is_empty()
	}

	/// Length of the unpadded message in bytes.
	pub fn message_len(&self) -> usize {
		self.message_len
	}
}

/// Length of a `len`-byte message in bits, as written into the length field.
///
/// Fails with [`Error::InputTooLarge`] when the bit length does not fit in 64 bits. The length is
/// never wrapped.
pub fn message_bit_length(len: usize) -> Result<u64, Error> {
	u64::try_from(len)
		.ok()
		.and_then(|len| len.checked_mul(8))
		.ok_or(Error::InputTooLarge { len })
}

/// Number of blocks a `len`-byte message pads to.
///
/// Equals `ceil((8 * len + 65) / 512)`: the terminator and the length field need nine free bytes,
/// which a block only has when fewer than 56 message bytes spill into it.
pub fn block_count(len: usize) -> usize {
	let tail = len % BLOCK_BYTES;
	let extra = if tail + 1 + LENGTH_FIELD_BYTES > BLOCK_BYTES {
		2
	} else {
		1
	};
	len / BLOCK_BYTES + extra
}

/// Pads `message` to a whole number of blocks.
#[instrument(skip_all, level = "debug", fields(len = message.len()))]
pub fn pad(message: &[u8]) -> Result<PaddedMessage, Error> {
	let bit_len = message_bit_length(message.len())?;

	let mut blocks = vec![[0u8; BLOCK_BYTES]; block_count(message.len())];
	let bytes = blocks.as_flattened_mut();
	let length_offset = bytes.len() - LENGTH_FIELD_BYTES;

	bytes[..message.len()].copy_from_slice(message);
	bytes[message.len()] = TERMINATOR;
	bytes[length_offset..].copy_from_slice(&bit_len.to_be_bytes());

	Ok(PaddedMessage {
		blocks,
		message_len: message.len(),
	})
}
