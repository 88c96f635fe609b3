//! Format revision of serialized settings.

use serde::de::Error as DeError;

pub const CONFIG_VERSION: u16 = 1;

/// Rejects settings written by a different format revision.
pub fn check_config_version<E: DeError>(found: u16) -> Result<(), E> {
    if found == CONFIG_VERSION {
        return Ok(());
    }
    Err(E::custom(format_args!(
        "unsupported config format revision {found}; this build reads revision {CONFIG_VERSION}"
    )))
}
