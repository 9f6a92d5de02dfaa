use crate::config::parser::parse_config_file;
use crate::config::types::LoadedConfig;
use crate::error::{Result, TypographError};
use std::path::{Path, PathBuf};

/// Environment variable that, if truthy, skips the ~/.typograph.toml lookup.
/// Useful for CI environments and hermetic tests.
pub const NO_USER_CONFIG_ENV: &str = "TYPOGRAPH_NO_USER_CONFIG";

/// Discover and load the effective config file.
///
/// The lookup order is:
/// 1. Start from `start_dir` and look for `.typograph.toml`
/// 2. Continue up the directory tree; the nearest file wins
/// 3. Fall back to ~/.typograph.toml (unless disabled via env var)
///
/// Returns `None` when no config file exists anywhere; callers then run
/// with the built-in defaults.
pub fn discover_config(start_dir: &Path) -> Result<Option<LoadedConfig>> {
	let mut current_dir = start_dir.to_path_buf();

	// Walk up the directory tree
	loop {
		let config_path = current_dir.join(".typograph.toml");

		if config_path.exists() {
			let config = parse_config_file(&config_path)?;
			log::debug!("using config from {}", config_path.display());
			return Ok(Some(LoadedConfig {
				config,
				path: config_path,
			}));
		}

		// Move to parent directory
		if let Some(parent) = current_dir.parent() {
			current_dir = parent.to_path_buf();
		} else {
			break;
		}
	}

	load_user_config()
}

/// Load the user's ~/.typograph.toml if it exists and isn't disabled.
fn load_user_config() -> Result<Option<LoadedConfig>> {
	if is_env_truthy(NO_USER_CONFIG_ENV) {
		return Ok(None);
	}

	let user_config_path = user_config_path()?;

	if user_config_path.exists() {
		let config = parse_config_file(&user_config_path)?;
		Ok(Some(LoadedConfig {
			config,
			path: user_config_path,
		}))
	} else {
		Ok(None)
	}
}

/// Check if an environment variable is set to a truthy value.
fn is_env_truthy(var_name: &str) -> bool {
	match std::env::var(var_name) {
		Ok(value) => {
			let lower = value.to_lowercase();
			!value.is_empty() && lower != "0" && lower != "false" && lower != "no"
		}
		Err(_) => false,
	}
}

/// Get the path to the user's config file.
pub fn user_config_path() -> Result<PathBuf> {
	let home_dir = dirs::home_dir().ok_or(TypographError::HomeDirectoryNotFound)?;
	Ok(home_dir.join(".typograph.toml"))
}
