use std::path::PathBuf;

/// Library-level structured errors for typograph.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// The CLI binary wraps these with `anyhow` for rich context chains.
#[derive(Debug, thiserror::Error)]
pub enum TypographError {
	#[error("Failed to read config file: {path}")]
	ConfigReadError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse config file: {path}")]
	ConfigParseError {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("Invalid regex pattern in rule: {pattern}")]
	InvalidPattern {
		pattern: String,
		#[source]
		source: regex::Error,
	},

	#[error("Mutually exclusive options: {option1} and {option2}")]
	MutuallyExclusive { option1: String, option2: String },

	#[error("Rule has no pattern: set either `from` (literal) or `pattern` (regex)")]
	MissingPattern,

	#[error("Replace range {start}..{end} is invalid for a document of {len} bytes")]
	InvalidRange {
		start: usize,
		end: usize,
		len: usize,
	},

	#[error("Host transaction failed: {reason}")]
	Transaction { reason: String },

	#[error("Failed to resolve home directory")]
	HomeDirectoryNotFound,
}

/// Result type alias using TypographError.
pub type Result<T> = std::result::Result<T, TypographError>;
