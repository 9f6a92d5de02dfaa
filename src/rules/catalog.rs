use crate::config::types::InlineRule;

/// An uncompiled pattern, discriminated explicitly rather than by runtime
/// type inspection.
#[derive(Debug, Clone, PartialEq)]
pub enum PatternSpec {
	/// Matches when the probe text ends with this exact string.
	Literal(String),

	/// A regex expected to carry an end-of-input anchor (`$`). Patterns
	/// without the anchor can match a correct substring at the wrong
	/// position; that is an authoring error, not validated here.
	Regex(String),
}

/// A single transformation: pattern plus replacement.
///
/// `name` is `Some` for catalog rules (so groups and `remove` can reference
/// them) and `None` for anonymous inline rules from user config.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleSpec {
	pub name: Option<String>,
	pub from: PatternSpec,
	pub to: String,
}

impl RuleSpec {
	/// Build an anonymous rule from an inline config entry.
	///
	/// Call `InlineRule::validate` first; when both fields are somehow set,
	/// the literal `from` wins.
	pub fn from_inline(rule: &InlineRule) -> Self {
		let from = match (&rule.from, &rule.pattern) {
			(Some(literal), _) => PatternSpec::Literal(literal.clone()),
			(None, Some(pattern)) => PatternSpec::Regex(pattern.clone()),
			(None, None) => PatternSpec::Literal(String::new()),
		};

		RuleSpec {
			name: None,
			from,
			to: rule.to.clone(),
		}
	}
}

/// The immutable table of built-in rules and group memberships.
///
/// The catalog is plain data passed into resolution; there is no process-wide
/// mutable state. `Catalog::builtin()` builds the default table.
#[derive(Debug, Clone)]
pub struct Catalog {
	rules: Vec<RuleSpec>,
	groups: Vec<(String, Vec<String>)>,
}

/// Group names of the default `include`, in application order.
pub const DEFAULT_GROUPS: [&str; 4] = ["symbols", "mathematical", "typography", "quotes"];

fn literal(name: &str, from: &str, to: &str) -> RuleSpec {
	RuleSpec {
		name: Some(name.to_string()),
		from: PatternSpec::Literal(from.to_string()),
		to: to.to_string(),
	}
}

fn regex(name: &str, pattern: &str, to: &str) -> RuleSpec {
	RuleSpec {
		name: Some(name.to_string()),
		from: PatternSpec::Regex(pattern.to_string()),
		to: to.to_string(),
	}
}

impl Catalog {
	/// The built-in rule catalog.
	pub fn builtin() -> Self {
		let rules = vec![
			// Symbols
			literal("copyright", "(c)", "©"),
			literal("trademark", "(tm)", "™"),
			literal("registered_trademark", "(r)", "®"),
			// Mathematical: fractions keep the preceding boundary so "11/2"
			// stays untouched while "a 1/2" converts.
			regex("one_half", r"(^|[^/a-zA-Z0-9])(1/2)$", "$1½"),
			regex("one_third", r"(^|[^/a-zA-Z0-9])(1/3)$", "$1⅓"),
			regex("two_thirds", r"(^|[^/a-zA-Z0-9])(2/3)$", "$1⅔"),
			regex("one_forth", r"(^|[^/a-zA-Z0-9])(1/4)$", "$1¼"),
			regex("three_quarters", r"(^|[^/a-zA-Z0-9])(3/4)$", "$1¾"),
			literal("less_then_or_equal", "<=", "≤"),
			literal("greater_then_or_equal", ">=", "≥"),
			literal("not_equal", "!=", "≠"),
			literal("arrow_left", "<-", "←"),
			// TODO: '->' currently yields '≠', duplicating not_equal; the
			// expected glyph is '→'. Kept as-is until the intent is confirmed.
			literal("arrow_right", "->", "≠"),
			// Typography
			literal("horizontal_ellipsis", "...", "…"),
			regex("en_dash", r"(^| )(--)$", "$1–"),
			regex("em_dash", r"(^| )(---)$", "$1—"),
			// Quotes: capture the boundary, the straight quotes, and the
			// quoted span; replacements keep the boundary and the span.
			regex("quotes_primary", r#"(^|\s)(")([^"]*)(")$"#, "$1“$3”"),
			regex("quotes_secondary", r"(^|\s)(')([^']*)(')$", "$1‘$3’"),
			regex("quotes_primary_en_gb", r"(^|\s)(')([^']*)(')$", "$1‘$3’"),
			regex("quotes_secondary_en_gb", r#"(^|\s)(")([^"]*)(")$"#, "$1“$3”"),
			regex("quotes_primary_pl", r#"(^|\s)(")([^"]*)(")$"#, "$1„$3”"),
			regex("quotes_secondary_pl", r"(^|\s)(')([^']*)(')$", "$1‚$3’"),
		];

		let group = |name: &str, members: &[&str]| {
			(
				name.to_string(),
				members.iter().map(|m| m.to_string()).collect(),
			)
		};

		let groups = vec![
			group("symbols", &["copyright", "trademark", "registered_trademark"]),
			group(
				"mathematical",
				&[
					"one_half",
					"one_third",
					"two_thirds",
					"one_forth",
					"three_quarters",
					"less_then_or_equal",
					"greater_then_or_equal",
					"not_equal",
					"arrow_left",
					"arrow_right",
				],
			),
			group("typography", &["horizontal_ellipsis", "en_dash", "em_dash"]),
			group("quotes", &["quotes_primary", "quotes_secondary"]),
		];

		Catalog { rules, groups }
	}

	/// Look up a built-in rule by name.
	pub fn rule(&self, name: &str) -> Option<&RuleSpec> {
		self.rules
			.iter()
			.find(|rule| rule.name.as_deref() == Some(name))
	}

	/// Look up a group's member rule names, in the group's fixed order.
	pub fn group(&self, name: &str) -> Option<&[String]> {
		self.groups
			.iter()
			.find(|(group_name, _)| group_name == name)
			.map(|(_, members)| members.as_slice())
	}

	/// All built-in rules, in catalog order.
	pub fn rules(&self) -> &[RuleSpec] {
		&self.rules
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_rule_lookup() {
		let catalog = Catalog::builtin();
		let rule = catalog.rule("copyright").unwrap();

		assert_eq!(rule.from, PatternSpec::Literal("(c)".to_string()));
		assert_eq!(rule.to, "©");
		assert!(catalog.rule("no_such_rule").is_none());
	}

	#[test]
	fn test_mathematical_group_member_order() {
		let catalog = Catalog::builtin();
		let members = catalog.group("mathematical").unwrap();

		assert_eq!(
			members,
			[
				"one_half",
				"one_third",
				"two_thirds",
				"one_forth",
				"three_quarters",
				"less_then_or_equal",
				"greater_then_or_equal",
				"not_equal",
				"arrow_left",
				"arrow_right",
			]
		);
	}

	#[test]
	fn test_every_group_member_is_a_rule() {
		let catalog = Catalog::builtin();

		for group_name in DEFAULT_GROUPS {
			let members = catalog.group(group_name).unwrap();
			for member in members {
				assert!(
					catalog.rule(member).is_some(),
					"group {} references unknown rule {}",
					group_name,
					member
				);
			}
		}
	}

	#[test]
	fn test_locale_quote_variants_are_named_rules_outside_groups() {
		let catalog = Catalog::builtin();

		for name in [
			"quotes_primary_en_gb",
			"quotes_secondary_en_gb",
			"quotes_primary_pl",
			"quotes_secondary_pl",
		] {
			assert!(catalog.rule(name).is_some());
		}
		assert_eq!(
			catalog.group("quotes").unwrap(),
			["quotes_primary", "quotes_secondary"]
		);
	}

	#[test]
	fn test_from_inline_prefers_literal() {
		let inline = InlineRule {
			from: Some("(deg)".to_string()),
			pattern: None,
			to: "°".to_string(),
		};
		let spec = RuleSpec::from_inline(&inline);

		assert!(spec.name.is_none());
		assert_eq!(spec.from, PatternSpec::Literal("(deg)".to_string()));
	}
}
