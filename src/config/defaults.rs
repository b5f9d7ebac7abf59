//! Default configuration constants used across the system.

/// Default log directive for this crate.
pub const DEFAULT_LOG_DIRECTIVE: &str = "media_constraints=info";

/// Default config file name written by `config init`.
pub const DEFAULT_CONFIG_FILE: &str = "media-constraints.json";
