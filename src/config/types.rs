use serde::Deserialize;
use std::path::PathBuf;

/// Top-level configuration from a `.typograph.toml` file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
	/// Base rule set. `None` means "all built-in groups"; an explicit empty
	/// list means no base rules at all.
	#[serde(default)]
	pub include: Option<Vec<Entry>>,

	/// User additions, appended after `include` in order.
	#[serde(default)]
	pub extra: Vec<Entry>,

	/// Names to drop from the final set. A name here can be a whole group
	/// or an individual rule a group would expand into.
	#[serde(default)]
	pub remove: Vec<String>,
}

/// One entry of `include`/`extra`: either the name of a built-in rule or
/// group, or an inline custom rule.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Entry {
	Name(String),
	Rule(InlineRule),
}

/// An inline custom rule.
///
/// Exactly one of `from`/`pattern` must be set. `pattern` is expected to
/// carry an end-of-input anchor (`$`); this is not validated, an unanchored
/// pattern silently matches at the wrong position.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InlineRule {
	/// Literal suffix to match (mutually exclusive with pattern).
	pub from: Option<String>,

	/// End-anchored regex to match (mutually exclusive with from).
	pub pattern: Option<String>,

	/// Replacement text. For regex rules, `$1`, `$2`, ... expand to the
	/// corresponding capture groups of the matched text.
	pub to: String,
}

/// A loaded configuration with its source path for debugging/display.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
	/// The parsed configuration.
	pub config: Config,

	/// The path this config was loaded from.
	pub path: PathBuf,
}

impl InlineRule {
	/// Validate that exactly one of the mutually exclusive pattern fields is set.
	pub fn validate(&self) -> Result<(), crate::error::TypographError> {
		match (&self.from, &self.pattern) {
			(Some(_), Some(_)) => Err(crate::error::TypographError::MutuallyExclusive {
				option1: "from".to_string(),
				option2: "pattern".to_string(),
			}),
			(None, None) => Err(crate::error::TypographError::MissingPattern),
			_ => Ok(()),
		}
	}
}

impl Config {
	/// Validate all inline rules in this config.
	pub fn validate(&self) -> Result<(), crate::error::TypographError> {
		let entries = self.include.iter().flatten().chain(self.extra.iter());
		for entry in entries {
			if let Entry::Rule(rule) = entry {
				rule.validate()?;
			}
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::TypographError;

	fn literal_rule(from: &str, to: &str) -> InlineRule {
		InlineRule {
			from: Some(from.to_string()),
			pattern: None,
			to: to.to_string(),
		}
	}

	#[test]
	fn test_validate_literal_rule() {
		assert!(literal_rule("(c)", "©").validate().is_ok());
	}

	#[test]
	fn test_validate_regex_rule() {
		let rule = InlineRule {
			from: None,
			pattern: Some(r"(\d)x$".to_string()),
			to: "$1×".to_string(),
		};
		assert!(rule.validate().is_ok());
	}

	#[test]
	fn test_validate_both_patterns_set() {
		let rule = InlineRule {
			from: Some("(c)".to_string()),
			pattern: Some(r"\(c\)$".to_string()),
			to: "©".to_string(),
		};
		match rule.validate().unwrap_err() {
			TypographError::MutuallyExclusive { option1, option2 } => {
				assert_eq!(option1, "from");
				assert_eq!(option2, "pattern");
			}
			_ => panic!("Expected MutuallyExclusive error"),
		}
	}

	#[test]
	fn test_validate_no_pattern_set() {
		let rule = InlineRule {
			from: None,
			pattern: None,
			to: "©".to_string(),
		};
		assert!(matches!(
			rule.validate().unwrap_err(),
			TypographError::MissingPattern
		));
	}

	#[test]
	fn test_config_validate_checks_include_and_extra() {
		let bad = InlineRule {
			from: None,
			pattern: None,
			to: "x".to_string(),
		};

		let config = Config {
			include: Some(vec![Entry::Name("symbols".to_string())]),
			extra: vec![Entry::Rule(bad)],
			remove: vec![],
		};
		assert!(config.validate().is_err());
	}

	#[test]
	fn test_default_config_is_valid() {
		assert!(Config::default().validate().is_ok());
		assert!(Config::default().include.is_none());
	}
}
