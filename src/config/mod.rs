//! Configuration loading and parsing for typograph.
//!
//! This module handles:
//! - TOML config file parsing
//! - Inline rule validation
//! - Nearest-file discovery and the user config fallback

pub mod discover;
pub mod parser;
pub mod types;

pub use discover::{NO_USER_CONFIG_ENV, discover_config, user_config_path};
pub use parser::{parse_config_file, parse_config_str};
pub use types::{Config, Entry, InlineRule, LoadedConfig};
