use log::trace;
use rayon::prelude::*;

use crate::alphabet::{RotationAlphabet, RotationParams};
use crate::config::{Config, DEFAULT_PARALLEL_THRESHOLD};

/// Applies one alphabet to every position of a string, round after round.
///
/// Positions inside a round are independent, so long strings fan out across
/// the rayon pool with each result written to its own slot. A round's output
/// is fully assembled before the next round reads it.
#[derive(Clone, Copy, Debug)]
pub struct RoundExecutor {
    alphabet: RotationAlphabet,
    params: RotationParams,
    parallel_threshold: usize,
}

impl RoundExecutor {
    pub fn new(alphabet: RotationAlphabet, params: RotationParams) -> Self {
        Self {
            alphabet,
            params,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    pub fn from_config(alphabet: RotationAlphabet, config: &Config) -> Self {
        Self::new(alphabet, RotationParams::from(config))
            .with_parallel_threshold(config.parallel_threshold)
    }

    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    pub fn apply_round(&self, input: &str) -> String {
        let chars: Vec<char> = input.chars().collect();
        let mut output = vec!['\0'; chars.len()];
        let alphabet = self.alphabet;
        let params = self.params;
        if chars.len() < self.parallel_threshold {
            for (position, (slot, &ch)) in output.iter_mut().zip(&chars).enumerate() {
                *slot = alphabet.rotate(ch, params, position);
            }
        } else {
            output
                .par_iter_mut()
                .zip(chars.par_iter())
                .enumerate()
                .for_each(|(position, (slot, &ch))| {
                    *slot = alphabet.rotate(ch, params, position);
                });
        }
        output.into_iter().collect()
    }

    /// Runs `rounds` sequential rounds; zero rounds returns the input as is.
    pub fn run(&self, input: &str, rounds: usize) -> String {
        let mut working = input.to_owned();
        for round in 0..rounds {
            working = self.apply_round(&working);
            trace!(
                "rotation round={} alphabet={:?} len={}",
                round + 1,
                self.alphabet,
                working.len()
            );
        }
        working
    }
}
