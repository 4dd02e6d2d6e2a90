// Copyright 2025 Irreducible Inc.

//! SHA-256 as specified in FIPS 180-4.
//!
//! The message is padded to whole 512-bit blocks ([`padding`]), each block is mixed into an
//! eight-word state by the compression function ([`compression`]), and the [`driver`] sequences
//! the two and serializes the final state to a big-endian [`Digest`].
//!
//! ```
//! let digest = fips256_hash::hash(b"abc").unwrap();
//! assert_eq!(
//! 	digest.to_hex(),
//! 	"ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
//! );
//! ```

pub mod compression;
pub mod constants;
pub mod digest;
pub mod driver;
pub mod error;
pub mod padding;
pub mod parallel;

pub use compression::{compress, Block, State};
pub use digest::Digest;
pub use driver::{hash, Phase, Sha256Driver};
pub use error::Error;
pub use padding::{pad, PaddedMessage};
pub use parallel::hash_batch;
