//! Deterministic, alphabet-aware string rotation with optional SHA-512 mixing.
//!
//! Strings are rotated character by character inside cyclic alphabets
//! (digits, letters, hex letters, printable ASCII) for a configured number
//! of rounds, optionally interleaved with hex-encoded SHA-512 digests.
//! There is no key and the shift space is tiny: this is a string-mangling
//! primitive and **not** a cipher.

pub mod alphabet;
pub mod charset;
pub mod config;
pub mod engine;
pub mod error;
pub mod hashing;
pub mod preset;
pub mod rounds;
pub mod versioning;

pub use crate::alphabet::{RotationAlphabet, RotationParams, effective_offset};
pub use crate::charset::{CharsetMode, validate};
pub use crate::config::{Config, ConfigBuilder, ConfigOption};
pub use crate::engine::{ShiftEngine, ascii_rotate, hash_only, hex_rotate, mix};
pub use crate::error::{ConfigError, ShiftError};
pub use crate::hashing::{hash_chain, rotate_and_hash, sha512_hex};
pub use crate::preset::{ObfuscationLevel, level_preset};
pub use crate::rounds::RoundExecutor;
pub use crate::versioning::*;
