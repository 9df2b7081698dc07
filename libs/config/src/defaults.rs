//! Configuration defaults
//!
//! Values used when neither the config file nor the environment sets them.

/// Config file read when no path is given; missing is fine
pub const DEFAULT_CONFIG_PATH: &str = "~/.config/emvqr/config.toml";

/// Environment override prefix, e.g. `EMVQR_LOG_LEVEL`
pub const ENV_PREFIX: &str = "EMVQR";

/// Separator between nested keys, e.g. `EMVQR_DECODER__ENFORCE_CRC`
pub const ENV_SEPARATOR: &str = "__";

/// Log filter when neither `RUST_LOG` nor the config sets one
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Pretty-print JSON output unless told otherwise
pub const DEFAULT_PRETTY_OUTPUT: bool = true;
