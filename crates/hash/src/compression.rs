// Copyright 2025 Irreducible Inc.

//! The SHA-256 compression function, FIPS 180-4 section 6.2.2.
//!
//! All arithmetic is on `u32` modulo 2^32; wrapping is the defined semantics.

use crate::constants::{BLOCK_BYTES, IV, K, ROUNDS, STATE_WORDS};

/// One 512-bit message block.
pub type Block = [u8; BLOCK_BYTES];

/// The 64 expanded message words for one block.
pub type MessageSchedule = [u32; ROUNDS];

/// The eight-word chaining state `a..h`.
///
/// A plain value: each hash computation owns its own copy and [`compress`] returns a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct State([u32; STATE_WORDS]);

impl State {
	/// The standard initial hash value.
	pub const fn initial() -> Self {
		Self(IV)
	}

	pub const fn from_words(words: [u32; STATE_WORDS]) -> Self {
		Self(words)
	}

	pub const fn words(&self) -> &[u32; STATE_WORDS] {
		&self.0
	}

	/// Serializes the state as eight big-endian words.
	pub fn to_be_bytes(&self) -> [u8; 4 * STATE_WORDS] {
		let mut out = [0u8; 4 * STATE_WORDS];
		for (chunk, word) in out.chunks_exact_mut(4).zip(self.0) {
			chunk.copy_from_slice(&word.to_be_bytes());
		}
		out
	}
}

impl Default for State {
	fn default() -> Self {
		Self::initial()
	}
}

#[inline]
pub fn ch(x: u32, y: u32, z: u32) -> u32 {
	(x & y) ^ (!x & z)
}

#[inline]
pub fn maj(x: u32, y: u32, z: u32) -> u32 {
	(x & y) ^ (x & z) ^ (y & z)
}

/// Σ0, applied to `a` in every round.
#[inline]
pub fn big_sigma0(x: u32) -> u32 {
	x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
}

/// Σ1, applied to `e` in every round.
#[inline]
pub fn big_sigma1(x: u32) -> u32 {
	x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
}

/// σ0, used in schedule expansion.
#[inline]
pub fn small_sigma0(x: u32) -> u32 {
	x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

/// σ1, used in schedule expansion.
#[inline]
pub fn small_sigma1(x: u32) -> u32 {
	x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

/// Expands a block into its 64-word message schedule.
pub fn message_schedule(block: &Block) -> MessageSchedule {
	let mut w = [0u32; ROUNDS];
	for (word, bytes) in w.iter_mut().zip(block.chunks_exact(4)) {
		*word = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
	}
	for i in 16..ROUNDS {
		w[i] = small_sigma1(w[i - 2])
			.wrapping_add(w[i - 7])
			.wrapping_add(small_sigma0(w[i - 15]))
			.wrapping_add(w[i - 16]);
	}
	w
}

/// Mixes one block into `state`, returning the next chaining state.
pub fn compress(state: State, block: &Block) -> State {
	let w = message_schedule(block);
	let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = state.0;

	for (&k, &w_i) in K.iter().zip(&w) {
		let t1 = h
			.wrapping_add(big_sigma1(e))
			.wrapping_add(ch(e, f, g))
			.wrapping_add(k)
			.wrapping_add(w_i);
		let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));
		h = g;
		g = f;
		f = e;
		e = d.wrapping_add(t1);
		d = c;
		c = b;
		b = a;
		a = t1.wrapping_add(t2);
	}

	let mixed = [a, b, c, d, e, f, g, h];
	let mut next = state.0;
	for (word, mixed) in next.iter_mut().zip(mixed) {
		*word = word.wrapping_add(mixed);
	}
	State(next)
}
