// Copyright 2025 Irreducible Inc.

use tracing::{debug, instrument, trace};

use crate::{
	compression::{compress, State},
	digest::Digest,
	error::Error,
	padding::{pad, PaddedMessage},
};

/// Observable phase of a [`Sha256Driver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
	/// State holds the initial hash value; the message is not padded yet.
	Init,
	/// Next step pads the whole message.
	Padding,
	/// Next step compresses block `block_index`.
	Absorbing { block_index: usize },
	/// All blocks absorbed. Terminal.
	Finalized,
}

#[derive(Debug, Clone)]
enum Stage {
	Init,
	Padding,
	Absorbing {
		padded: PaddedMessage,
		block_index: usize,
	},
	Finalized,
}

/// Drives one SHA-256 computation over an in-memory message.
///
/// The driver owns its chaining state; nothing is shared between instances, so independent drivers
/// can run on separate threads. Blocks are absorbed strictly in order since each compression
/// consumes the previous output state.
///
/// A driver yields exactly one digest. Stepping or finalizing again fails with
/// [`Error::AlreadyFinalized`]; hashing another message needs a new driver.
#[derive(Debug, Clone)]
pub struct Sha256Driver<'a> {
	message: &'a [u8],
	state: State,
	stage: Stage,
	digest_emitted: bool,
}

impl<'a> Sha256Driver<'a> {
	pub fn new(message: &'a [u8]) -> Self {
		Self {
			message,
			state: State::initial(),
			stage: Stage::Init,
			digest_emitted: false,
		}
	}

	pub fn phase(&self) -> Phase {
		match &self.stage {
			Stage::Init => Phase::Init,
			Stage::Padding => Phase::Padding,
			Stage::Absorbing { block_index, .. } => Phase::Absorbing {
				block_index: *block_index,
			},
			Stage::Finalized => Phase::Finalized,
		}
	}

	/// The current chaining state.
	pub fn state(&self) -> &State {
		&self.state
	}

	/// Performs a single transition and returns the phase entered.
	pub fn advance(&mut self) -> Result<Phase, Error> {
		match &mut self.stage {
			Stage::Init => self.stage = Stage::Padding,
			Stage::Padding => {
				let padded = pad(self.message)?;
				debug!(n_blocks = padded.n_blocks(), "message padded");
				self.stage = Stage::Absorbing {
					padded,
					block_index: 0,
				};
			}
			Stage::Absorbing {
				padded,
				block_index,
			} => {
				self.state = compress(self.state, &padded.blocks()[*block_index]);
				trace!(block_index = *block_index, "block absorbed");

				*block_index += 1;
				if *block_index == padded.n_blocks() {
					self.stage = Stage::Finalized;
				}
			}
			Stage::Finalized => return Err(Error::AlreadyFinalized),
		}
		Ok(self.phase())
	}

	/// Runs the remaining transitions and serializes the final state.
	#[instrument(skip_all, level = "debug", fields(len = self.message.len()))]
	pub fn finalize(&mut self) -> Result<Digest, Error> {
		if self.digest_emitted {
			return Err(Error::AlreadyFinalized);
		}
		while self.phase() != Phase::Finalized {
			self.advance()?;
		}
		self.digest_emitted = true;
		Ok(Digest::from(self.state))
	}
}

/// Computes the SHA-256 digest of `input`.
///
/// Every call starts from the standard initial state. Fails only with [`Error::InputTooLarge`],
/// which no in-memory input reaches on current targets.
pub fn hash(input: &[u8]) -> Result<Digest, Error> {
	Sha256Driver::new(input).finalize()
}
