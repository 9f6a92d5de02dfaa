use crate::error::{Result, TypographError};
use crate::rules::catalog::{PatternSpec, RuleSpec};
use crate::rules::resolve::ResolvedEntry;
use crate::rules::rewriter::render_template;
use regex::Regex;

/// A compiled pattern, ready for matching against probe text.
#[derive(Debug, Clone)]
pub enum Pattern {
	/// Matches when the probe ends with this exact string.
	Literal(String),

	/// An end-anchored regex evaluated against the whole probe.
	Anchored(Regex),
}

/// A compiled rule ready for matching.
#[derive(Debug, Clone)]
pub struct CompiledRule {
	/// Catalog name, `None` for inline customs.
	pub name: Option<String>,

	/// The compiled pattern.
	pub pattern: Pattern,

	/// Replacement text or back-reference template.
	pub to: String,
}

/// The outcome of one rule matching one probe. Ephemeral: produced inside a
/// single change notification and consumed immediately.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleMatch {
	/// The matched text (for literals, the literal itself; for regexes, the
	/// full match including any captured boundary).
	pub matched: String,

	/// The rendered replacement.
	pub replacement: String,
}

impl CompiledRule {
	/// Compile a resolved rule spec.
	pub fn compile(spec: &RuleSpec) -> Result<Self> {
		let pattern = match &spec.from {
			PatternSpec::Literal(literal) => Pattern::Literal(literal.clone()),
			PatternSpec::Regex(pattern) => Pattern::Anchored(compile_regex(pattern)?),
		};

		Ok(CompiledRule {
			name: spec.name.clone(),
			pattern,
			to: spec.to.clone(),
		})
	}

	/// Test this rule against the end of `probe`.
	///
	/// A probe shorter than the pattern requires simply fails to match; a
	/// match never extends past the probe text.
	pub fn match_end(&self, probe: &str) -> Option<RuleMatch> {
		match &self.pattern {
			Pattern::Literal(literal) => {
				if !literal.is_empty() && probe.ends_with(literal.as_str()) {
					// Literal replacements are taken verbatim; `$` stays `$`.
					Some(RuleMatch {
						matched: literal.clone(),
						replacement: self.to.clone(),
					})
				} else {
					None
				}
			}
			Pattern::Anchored(regex) => {
				let caps = regex.captures(probe)?;
				let full = caps.get(0)?;
				Some(RuleMatch {
					matched: full.as_str().to_string(),
					replacement: render_template(&caps, &self.to),
				})
			}
		}
	}
}

/// Compile a regex pattern string.
fn compile_regex(pattern: &str) -> Result<Regex> {
	Regex::new(pattern).map_err(|source| TypographError::InvalidPattern {
		pattern: pattern.to_string(),
		source,
	})
}

/// Compile a resolved rule list.
///
/// `Unknown` entries carry no pattern and are skipped; the surviving rules
/// keep their registry order.
pub fn compile_rules(entries: &[ResolvedEntry]) -> Result<Vec<CompiledRule>> {
	let mut rules = Vec::with_capacity(entries.len());

	for entry in entries {
		match entry {
			ResolvedEntry::Rule(spec) => rules.push(CompiledRule::compile(spec)?),
			ResolvedEntry::Unknown(name) => {
				log::debug!("skipping unknown transformation {:?}", name);
			}
		}
	}

	Ok(rules)
}

/// Find the first rule matching the end of `probe`, in registry order.
///
/// First match wins: later rules are not evaluated even if they would also
/// match, so registry order is a semantic tie-break, not cosmetic.
pub fn find_matching_rule<'a>(
	rules: &'a [CompiledRule],
	probe: &str,
) -> Option<(&'a CompiledRule, RuleMatch)> {
	rules
		.iter()
		.find_map(|rule| rule.match_end(probe).map(|found| (rule, found)))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::rules::catalog::Catalog;

	fn compile_literal(from: &str, to: &str) -> CompiledRule {
		CompiledRule::compile(&RuleSpec {
			name: None,
			from: PatternSpec::Literal(from.to_string()),
			to: to.to_string(),
		})
		.unwrap()
	}

	fn compile_pattern(pattern: &str, to: &str) -> CompiledRule {
		CompiledRule::compile(&RuleSpec {
			name: None,
			from: PatternSpec::Regex(pattern.to_string()),
			to: to.to_string(),
		})
		.unwrap()
	}

	#[test]
	fn test_compile_invalid_regex() {
		let result = CompiledRule::compile(&RuleSpec {
			name: None,
			from: PatternSpec::Regex("[invalid".to_string()),
			to: "x".to_string(),
		});

		match result.unwrap_err() {
			TypographError::InvalidPattern { pattern, .. } => {
				assert_eq!(pattern, "[invalid");
			}
			_ => panic!("Expected InvalidPattern error"),
		}
	}

	#[test]
	fn test_literal_matches_only_at_probe_end() {
		let rule = compile_literal("(c)", "©");

		let found = rule.match_end("Copyright (c)").unwrap();
		assert_eq!(found.matched, "(c)");
		assert_eq!(found.replacement, "©");

		// Trailing character after the literal: no match.
		assert!(rule.match_end("Copyright (c) ").is_none());
	}

	#[test]
	fn test_literal_ignores_probe_shorter_than_pattern() {
		let rule = compile_literal("---", "—");

		assert!(rule.match_end("--").is_none());
		assert!(rule.match_end("").is_none());
	}

	#[test]
	fn test_literal_replacement_is_verbatim() {
		let rule = compile_literal("(usd)", "$1");

		let found = rule.match_end("price (usd)").unwrap();
		assert_eq!(found.replacement, "$1");
	}

	#[test]
	fn test_anchored_regex_match_with_captures() {
		let rule = compile_pattern(r#"(^|\s)(")([^"]*)(")$"#, "$1“$3”");

		let found = rule.match_end(r#"He said "hello""#).unwrap();
		assert_eq!(found.matched, r#" "hello""#);
		assert_eq!(found.replacement, " “hello”");
	}

	#[test]
	fn test_anchored_regex_at_probe_start() {
		let rule = compile_pattern(r#"(^|\s)(")([^"]*)(")$"#, "$1“$3”");

		let found = rule.match_end(r#""hi""#).unwrap();
		assert_eq!(found.matched, r#""hi""#);
		assert_eq!(found.replacement, "“hi”");
	}

	#[test]
	fn test_anchored_regex_no_match_away_from_end() {
		let rule = compile_pattern(r"(^| )(--)$", "$1–");

		assert!(rule.match_end("a -- b").is_none());
	}

	#[test]
	fn test_first_match_wins() {
		let rules = vec![compile_literal("!=", "≠"), compile_literal("=", "=")];

		let (rule, found) = find_matching_rule(&rules, "a !=").unwrap();
		assert!(std::ptr::eq(rule, &rules[0]));
		assert_eq!(found.replacement, "≠");
	}

	#[test]
	fn test_find_matching_rule_respects_registry_order() {
		// Both rules match "---"; the earlier one wins.
		let rules = vec![compile_literal("--", "–"), compile_literal("---", "—")];

		let (_, found) = find_matching_rule(&rules, "x ---").unwrap();
		assert_eq!(found.replacement, "–");
	}

	#[test]
	fn test_find_matching_rule_no_match() {
		let rules = vec![compile_literal("(c)", "©")];

		assert!(find_matching_rule(&rules, "plain text").is_none());
	}

	#[test]
	fn test_compile_rules_skips_unknown_entries() {
		let entries = vec![
			ResolvedEntry::Unknown("interrobang".to_string()),
			ResolvedEntry::Rule(RuleSpec {
				name: Some("copyright".to_string()),
				from: PatternSpec::Literal("(c)".to_string()),
				to: "©".to_string(),
			}),
		];

		let rules = compile_rules(&entries).unwrap();
		assert_eq!(rules.len(), 1);
		assert_eq!(rules[0].name.as_deref(), Some("copyright"));
	}

	#[test]
	fn test_builtin_catalog_compiles() {
		let catalog = Catalog::builtin();
		for spec in catalog.rules() {
			assert!(
				CompiledRule::compile(spec).is_ok(),
				"builtin rule {:?} failed to compile",
				spec.name
			);
		}
	}

	#[test]
	fn test_fraction_requires_boundary() {
		let catalog = Catalog::builtin();
		let rule = CompiledRule::compile(catalog.rule("one_half").unwrap()).unwrap();

		assert!(rule.match_end("11/2").is_none());

		let found = rule.match_end("a 1/2").unwrap();
		assert_eq!(found.matched, " 1/2");
		assert_eq!(found.replacement, " ½");

		let found = rule.match_end("1/2").unwrap();
		assert_eq!(found.replacement, "½");
	}
}
