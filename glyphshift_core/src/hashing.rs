use log::trace;
use sha2::{Digest, Sha512};

use crate::rounds::RoundExecutor;

/// Hex-encoded SHA-512 digest of `input`'s UTF-8 bytes.
pub fn sha512_hex(input: &str) -> String {
    let digest = Sha512::digest(input.as_bytes());
    hex::encode(digest)
}

/// Hashes `input`, then hashes each hex digest again, `rounds` times in total.
pub fn hash_chain(input: &str, rounds: usize) -> String {
    let mut current = input.to_owned();
    for round in 0..rounds {
        current = sha512_hex(&current);
        trace!("hash round={}", round + 1);
    }
    current
}

/// Alternates a rotation round with a SHA-512 digest of its output.
///
/// After each rotation the digest of the rotated string becomes the next
/// round's input while `hashes_taken <= hash_rounds`. Once that gate closes
/// the input stays pinned to the last digest, so every remaining round
/// rotates that same digest once. The result is the output of the final
/// rotation round, never a bare digest.
pub fn rotate_and_hash(
    input: &str,
    executor: &RoundExecutor,
    shift_rounds: usize,
    hash_rounds: usize,
) -> String {
    let mut working = input.to_owned();
    let mut rotated = input.to_owned();
    let mut hashes_taken = 0usize;
    for round in 0..shift_rounds {
        rotated = executor.apply_round(&working);
        if hashes_taken <= hash_rounds {
            working = sha512_hex(&rotated);
            hashes_taken += 1;
        }
        trace!(
            "mix round={} hashes_taken={} len={}",
            round + 1,
            hashes_taken,
            rotated.len()
        );
    }
    rotated
}
