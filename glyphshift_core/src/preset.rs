use crate::config::{Config, ConfigBuilder};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObfuscationLevel {
    Light,
    Standard,
    Heavy,
}

pub fn level_preset(level: ObfuscationLevel) -> Config {
    match level {
        ObfuscationLevel::Light => ConfigBuilder::new()
            .with_shift(1)
            .with_shift_rounds(1)
            .with_hash_rounds(1)
            .build(),
        ObfuscationLevel::Standard => Config::default(),
        ObfuscationLevel::Heavy => ConfigBuilder::new()
            .with_shift(7)
            .with_shift_rounds(9)
            .with_hash_rounds(9)
            .with_alternate(true)
            .build(),
    }
}

impl ObfuscationLevel {
    pub fn preset(self) -> Config {
        level_preset(self)
    }
}
