// Copyright 2025 Irreducible Inc.

use std::{collections::HashSet, thread};

use fips256_hash::{
	hash, hash_batch,
	padding::{block_count, pad},
	Digest, Sha256Driver,
};
use hex_literal::hex;
use proptest::prelude::*;
use rand::{rngs::StdRng, RngCore, SeedableRng};
use sha2::Digest as _;

fn digest_bytes(input: &[u8]) -> [u8; 32] {
	hash(input).unwrap().into_bytes()
}

#[test]
fn test_empty_input() {
	let expected = hex!("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855");
	assert_eq!(digest_bytes(b""), expected);
}

#[test]
fn test_abc() {
	let expected = hex!("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad");
	assert_eq!(digest_bytes(b"abc"), expected);
	assert_eq!(
		hash(b"abc").unwrap().to_hex(),
		"ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
	);
}

#[test]
fn test_two_block_vector() {
	// 448-bit message from FIPS 180-4 appendix; the padding spills into a second block
	let expected = hex!("248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1");
	assert_eq!(
		digest_bytes(b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq"),
		expected
	);
}

#[test]
fn test_simple_sentences() {
	assert_eq!(
		digest_bytes(b"The quick brown fox jumps over the lazy dog"),
		hex!("d7a8fbb307d7809469ca9abcb0082e4f8d5651e46d3cdb762d02d0bf37c9e592")
	);
	assert_eq!(
		digest_bytes(b"The quick brown fox jumps over the lazy dog."),
		hex!("ef537f25c895bfa782526529a9b63d97aa631564d5d789c2b765448c8635fb6c")
	);
}

#[test]
fn test_one_million_a() {
	let input = vec![b'a'; 1_000_000];
	let expected = hex!("cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0");
	assert_eq!(digest_bytes(&input), expected);
}

#[test]
fn test_padding_boundaries() {
	let cases = [
		(55, 1, hex!("9f4390f8d30c2dd92ec9f095b65e2b9ae9b0a925a5258e241c9f1e910f734318")),
		(56, 2, hex!("b35439a4ac6f0948b6d6f9e3c6af0f5f590ce20f1bde7090ef7970686ec6738a")),
		(63, 2, hex!("7d3e74a05d7db15bce4ad9ec0658ea98e3f06eeecf16b4c6fff2da457ddc2f34")),
		(64, 2, hex!("ffe054fe7ae0cb6dc65c3af9b61d5209f439851db43d0ba5997337df154668eb")),
		(119, 2, hex!("31eba51c313a5c08226adf18d4a359cfdfd8d2e816b13f4af952f7ea6584dcfb")),
		(120, 3, hex!("2f3d335432c70b580af0e8e1b3674a7c020d683aa5f73aaaedfdc55af904c21c")),
	];

	for (len, n_blocks, expected) in cases {
		let input = vec![b'a'; len];
		let padded = pad(&input).unwrap();
		assert_eq!(padded.n_blocks(), n_blocks, "len {len}");
		assert_eq!(padded.len() * 8, 512 * n_blocks, "len {len}");
		assert_eq!(digest_bytes(&input), expected, "len {len}");
	}
}

#[test]
fn test_independent_drivers_agree() {
	let input = b"determinism across driver instances";
	let first = Sha256Driver::new(input).finalize().unwrap();
	let second = Sha256Driver::new(input).finalize().unwrap();
	assert_eq!(first, second);
	assert_eq!(first, hash(input).unwrap());
}

#[test]
fn test_single_bit_flips_are_distinct() {
	let mut rng = StdRng::seed_from_u64(0);
	for len in [1usize, 3, 55, 56, 64, 119] {
		let mut base = vec![0u8; len];
		rng.fill_bytes(&mut base);

		let mut seen = HashSet::new();
		assert!(seen.insert(hash(&base).unwrap()));
		for bit in 0..8 * len {
			let mut flipped = base.clone();
			flipped[bit / 8] ^= 1 << (bit % 8);
			assert!(seen.insert(hash(&flipped).unwrap()), "collision at len {len} bit {bit}");
		}
	}
}

#[test]
fn test_trailing_zero_bytes_change_digest() {
	let digests: HashSet<Digest> = (0..130)
		.map(|len| hash(&vec![0u8; len]).unwrap())
		.collect();
	assert_eq!(digests.len(), 130);
}

#[test]
fn test_concurrent_drivers_are_isolated() {
	let vectors: [(&[u8], [u8; 32]); 4] = [
		(b"", hex!("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855")),
		(b"abc", hex!("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad")),
		(
			b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq",
			hex!("248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1"),
		),
		(
			b"The quick brown fox jumps over the lazy dog",
			hex!("d7a8fbb307d7809469ca9abcb0082e4f8d5651e46d3cdb762d02d0bf37c9e592"),
		),
	];

	thread::scope(|s| {
		let handles: Vec<_> = (0..32)
			.map(|i| {
				let (input, expected) = vectors[i % vectors.len()];
				s.spawn(move || {
					for _ in 0..50 {
						assert_eq!(digest_bytes(input), expected);
					}
				})
			})
			.collect();
		for handle in handles {
			handle.join().unwrap();
		}
	});
}

#[test]
fn test_hash_batch_matches_known_vectors() {
	let inputs: [&[u8]; 3] = [b"", b"abc", b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq"];
	let digests: Vec<[u8; 32]> = hash_batch(&inputs)
		.into_iter()
		.map(|digest| digest.unwrap().into_bytes())
		.collect();
	assert_eq!(
		digests,
		vec![
			hex!("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"),
			hex!("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"),
			hex!("248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1"),
		]
	);
}

proptest! {
	#[test]
	fn test_sha256_vs_reference(
		input in prop::collection::vec(any::<u8>(), 0..=2048),
	) {
		let expected: [u8; 32] = sha2::Sha256::digest(&input).into();
		prop_assert_eq!(digest_bytes(&input), expected);
	}

	#[test]
	fn test_padding_invariants(
		input in prop::collection::vec(any::<u8>(), 0..=512),
	) {
		let padded = pad(&input).unwrap();
		let bytes = padded.as_bytes();
		let bit_len = 8 * input.len();

		prop_assert_eq!(bytes.len() % 64, 0);
		prop_assert!(bytes.len() * 8 >= bit_len + 65);
		prop_assert!(bytes.len() - input.len() >= 9);
		prop_assert!(bytes.len() - input.len() <= 72);
		prop_assert_eq!(&bytes[..input.len()], &input[..]);
		prop_assert_eq!(bytes[input.len()], 0x80);
		prop_assert_eq!(&bytes[bytes.len() - 8..], &(bit_len as u64).to_be_bytes()[..]);
		prop_assert_eq!(padded.n_blocks(), (bit_len + 65).div_ceil(512));
		prop_assert_eq!(padded.n_blocks(), block_count(input.len()));
	}

	#[test]
	fn test_hex_round_trip(input in prop::collection::vec(any::<u8>(), 0..=256)) {
		let digest = hash(&input).unwrap();
		prop_assert_eq!(digest.to_hex().parse::<Digest>().unwrap(), digest);
	}
}
