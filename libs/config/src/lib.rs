//! # EMV QR Tool Configuration
//!
//! Layered configuration for tools that embed the codec: defaults, then an
//! optional TOML file, then `EMVQR_`-prefixed environment variables.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use qr_config::ToolConfig;
//!
//! let config = ToolConfig::load(None)?;
//! let decoder = codec::EmvDecoder::new(config.decoder.clone());
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ```toml
//! log_level = "info"
//!
//! [output]
//! pretty = false
//!
//! [decoder]
//! enforce_crc = true
//! max_nesting_depth = 2
//! ```

pub mod defaults;
pub mod tool_config;

// Re-export commonly used types
pub use defaults::*;
pub use tool_config::{default_config_path, expand_path, load_config, OutputSettings, ToolConfig};
