use log::debug;

use crate::alphabet::RotationAlphabet;
use crate::charset::{CharsetMode, validate};
use crate::config::Config;
use crate::error::ShiftError;
use crate::hashing::{hash_chain, rotate_and_hash};
use crate::rounds::RoundExecutor;

/// Entry point for the four string operations. Each call validates the
/// input charset and the round counts it needs before doing any work.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShiftEngine {
    config: Config,
}

impl ShiftEngine {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Rotates letters and digits; spaces become `'x'` unless ignored.
    pub fn ascii_rotate(&self, input: &str) -> Result<String, ShiftError> {
        validate(CharsetMode::Ascii, input)?;
        let rounds = self.shift_rounds()?;
        let executor = RoundExecutor::from_config(RotationAlphabet::Ascii, &self.config);
        debug!(
            "ascii_rotate len={} shift={} rounds={}",
            input.len(),
            self.config.shift,
            rounds
        );
        Ok(executor.run(input, rounds))
    }

    /// Rotates a hex string, optionally keeping it hex-valid.
    pub fn hex_rotate(&self, input: &str) -> Result<String, ShiftError> {
        validate(CharsetMode::Hex, input)?;
        let rounds = self.shift_rounds()?;
        let alphabet = RotationAlphabet::for_hex(self.config.restrict_hash_shift);
        let executor = RoundExecutor::from_config(alphabet, &self.config);
        debug!(
            "hex_rotate len={} shift={} rounds={} alphabet={:?}",
            input.len(),
            self.config.shift,
            rounds,
            alphabet
        );
        Ok(executor.run(input, rounds))
    }

    pub fn rotate_and_hash(&self, input: &str) -> Result<String, ShiftError> {
        validate(CharsetMode::Generic, input)?;
        let shift_rounds = self.shift_rounds()?;
        let hash_rounds = self.hash_rounds()?;
        let executor = RoundExecutor::from_config(RotationAlphabet::Generic, &self.config);
        debug!(
            "rotate_and_hash len={} shift={} shift_rounds={} hash_rounds={}",
            input.len(),
            self.config.shift,
            shift_rounds,
            hash_rounds
        );
        Ok(rotate_and_hash(input, &executor, shift_rounds, hash_rounds))
    }

    pub fn hash_only(&self, input: &str) -> Result<String, ShiftError> {
        validate(CharsetMode::Generic, input)?;
        let rounds = self.hash_rounds()?;
        debug!("hash_only len={} rounds={}", input.len(), rounds);
        Ok(hash_chain(input, rounds))
    }

    fn shift_rounds(&self) -> Result<usize, ShiftError> {
        self.config.check_shift_rounds()?;
        Ok(self.config.shift_rounds as usize)
    }

    fn hash_rounds(&self) -> Result<usize, ShiftError> {
        self.config.check_hash_rounds()?;
        Ok(self.config.hash_rounds as usize)
    }
}

impl From<Config> for ShiftEngine {
    fn from(config: Config) -> Self {
        Self::new(config)
    }
}

pub fn ascii_rotate(config: &Config, input: &str) -> Result<String, ShiftError> {
    ShiftEngine::new(*config).ascii_rotate(input)
}

pub fn hex_rotate(config: &Config, input: &str) -> Result<String, ShiftError> {
    ShiftEngine::new(*config).hex_rotate(input)
}

pub fn mix(config: &Config, input: &str) -> Result<String, ShiftError> {
    ShiftEngine::new(*config).rotate_and_hash(input)
}

pub fn hash_only(config: &Config, input: &str) -> Result<String, ShiftError> {
    ShiftEngine::new(*config).hash_only(input)
}
