use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ConfigError;
use crate::versioning::{CONFIG_VERSION, check_config_version};

pub const DEFAULT_SHIFT: i32 = 3;
pub const DEFAULT_SHIFT_ROUNDS: i32 = 3;
pub const DEFAULT_HASH_ROUNDS: i32 = 3;
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 64;

/// Settings consumed by every engine operation. Fixed once built.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    pub shift: i32,
    pub shift_rounds: i32,
    pub hash_rounds: i32,
    /// Odd positions rotate toward non-positive offsets.
    pub alternate: bool,
    /// Keep literal spaces instead of substituting or rotating them.
    pub ignore_space: bool,
    /// Hex rotation stays inside hex-valid characters.
    pub restrict_hash_shift: bool,
    /// Strings shorter than this rotate on the calling thread.
    pub parallel_threshold: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            shift: DEFAULT_SHIFT,
            shift_rounds: DEFAULT_SHIFT_ROUNDS,
            hash_rounds: DEFAULT_HASH_ROUNDS,
            alternate: false,
            ignore_space: false,
            restrict_hash_shift: false,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

/// One named override applied on top of the defaults.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigOption {
    Shift(i32),
    Alternate(bool),
    ShiftRounds(i32),
    HashRounds(i32),
    IgnoreSpace(bool),
    RestrictHashShift(bool),
    ParallelThreshold(usize),
}

impl ConfigOption {
    fn apply(self, config: &mut Config) {
        match self {
            ConfigOption::Shift(value) => config.shift = value,
            ConfigOption::Alternate(value) => config.alternate = value,
            ConfigOption::ShiftRounds(value) => config.shift_rounds = value,
            ConfigOption::HashRounds(value) => config.hash_rounds = value,
            ConfigOption::IgnoreSpace(value) => config.ignore_space = value,
            ConfigOption::RestrictHashShift(value) => config.restrict_hash_shift = value,
            ConfigOption::ParallelThreshold(value) => config.parallel_threshold = value,
        }
    }
}

impl Config {
    /// Applies `options` in order onto the defaults; later options win.
    pub fn with_options<I>(options: I) -> Self
    where
        I: IntoIterator<Item = ConfigOption>,
    {
        let mut config = Self::default();
        for option in options {
            option.apply(&mut config);
        }
        config
    }

    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    pub fn check_shift_rounds(&self) -> Result<(), ConfigError> {
        if self.shift_rounds <= 0 {
            return Err(ConfigError::MissingShiftRounds {
                found: self.shift_rounds,
            });
        }
        Ok(())
    }

    pub fn check_hash_rounds(&self) -> Result<(), ConfigError> {
        if self.hash_rounds <= 0 {
            return Err(ConfigError::MissingHashRounds {
                found: self.hash_rounds,
            });
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    pub fn with_shift(mut self, shift: i32) -> Self {
        self.config.shift = shift;
        self
    }

    pub fn with_alternate(mut self, alternate: bool) -> Self {
        self.config.alternate = alternate;
        self
    }

    pub fn with_shift_rounds(mut self, rounds: i32) -> Self {
        self.config.shift_rounds = rounds;
        self
    }

    pub fn with_hash_rounds(mut self, rounds: i32) -> Self {
        self.config.hash_rounds = rounds;
        self
    }

    pub fn with_ignore_space(mut self, ignore: bool) -> Self {
        self.config.ignore_space = ignore;
        self
    }

    pub fn with_restrict_hash_shift(mut self, restrict: bool) -> Self {
        self.config.restrict_hash_shift = restrict;
        self
    }

    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.config.parallel_threshold = threshold;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

impl Serialize for Config {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Config", 8)?;
        state.serialize_field("version", &CONFIG_VERSION)?;
        state.serialize_field("shift", &self.shift)?;
        state.serialize_field("shift_rounds", &self.shift_rounds)?;
        state.serialize_field("hash_rounds", &self.hash_rounds)?;
        state.serialize_field("alternate", &self.alternate)?;
        state.serialize_field("ignore_space", &self.ignore_space)?;
        state.serialize_field("restrict_hash_shift", &self.restrict_hash_shift)?;
        state.serialize_field("parallel_threshold", &self.parallel_threshold)?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for Config {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(deny_unknown_fields)]
        struct Helper {
            version: u16,
            shift: Option<i32>,
            shift_rounds: Option<i32>,
            hash_rounds: Option<i32>,
            alternate: Option<bool>,
            ignore_space: Option<bool>,
            restrict_hash_shift: Option<bool>,
            parallel_threshold: Option<usize>,
        }
        let helper = Helper::deserialize(deserializer)?;
        check_config_version::<D::Error>(helper.version)?;
        let defaults = Config::default();
        Ok(Self {
            shift: helper.shift.unwrap_or(defaults.shift),
            shift_rounds: helper.shift_rounds.unwrap_or(defaults.shift_rounds),
            hash_rounds: helper.hash_rounds.unwrap_or(defaults.hash_rounds),
            alternate: helper.alternate.unwrap_or(defaults.alternate),
            ignore_space: helper.ignore_space.unwrap_or(defaults.ignore_space),
            restrict_hash_shift: helper
                .restrict_hash_shift
                .unwrap_or(defaults.restrict_hash_shift),
            parallel_threshold: helper
                .parallel_threshold
                .unwrap_or(defaults.parallel_threshold),
        })
    }
}
