//! The streaming matcher: glue between change notifications and rules.
//!
//! A `TransformWatcher` holds the compiled rule list and, for each change
//! notification, probes the text preceding the cursor, evaluates every rule
//! in registry order, and on the first match issues exactly one atomic
//! replace through the host. There is no state carried across notifications;
//! every call runs to completion before returning to the host.

use crate::config::types::Config;
use crate::error::Result;
use crate::host::EditorHost;
use crate::rules::catalog::Catalog;
use crate::rules::matcher::{CompiledRule, compile_rules, find_matching_rule};
use crate::rules::resolve::resolve;

/// How many characters of context before the cursor are probed by default.
/// Matches are suffix-anchored, so this only needs to cover the longest text
/// a rule can consume (for quotes, the whole quoted span).
pub const DEFAULT_LOOKBACK: usize = 256;

/// A transformation applied by one change notification.
#[derive(Debug, Clone, PartialEq)]
pub struct AppliedTransform {
	/// Name of the rule that fired, `None` for inline customs.
	pub rule: Option<String>,

	/// The text that was matched and replaced.
	pub matched: String,

	/// The text it was replaced with.
	pub replacement: String,

	/// Replaced byte range `start..end`; `end` is the cursor at match time.
	pub start: usize,
	pub end: usize,
}

/// Watches text changes near the cursor and applies the first matching rule.
#[derive(Debug, Clone)]
pub struct TransformWatcher {
	rules: Vec<CompiledRule>,
	lookback: usize,
}

impl TransformWatcher {
	/// A watcher over an explicit compiled rule list.
	pub fn new(rules: Vec<CompiledRule>) -> Self {
		TransformWatcher {
			rules,
			lookback: DEFAULT_LOOKBACK,
		}
	}

	/// Resolve and compile `config` against the built-in catalog.
	pub fn from_config(config: &Config) -> Result<Self> {
		Self::with_catalog(config, &Catalog::builtin())
	}

	/// Resolve and compile `config` against a caller-provided catalog.
	pub fn with_catalog(config: &Config, catalog: &Catalog) -> Result<Self> {
		let entries = resolve(config, catalog);
		let rules = compile_rules(&entries)?;
		Ok(Self::new(rules))
	}

	/// Override the probe lookback bound.
	pub fn with_lookback(mut self, max_chars: usize) -> Self {
		self.lookback = max_chars;
		self
	}

	/// The active rules, in evaluation order.
	pub fn rules(&self) -> &[CompiledRule] {
		&self.rules
	}

	/// Handle one text-change notification from the host.
	///
	/// The host calls this only for data changes at the text end nearest the
	/// cursor. Rules are evaluated in registry order and the first match
	/// wins; on a match the `matched.len()` bytes immediately before the
	/// cursor are replaced in a single atomic batch, carrying the attribute
	/// snapshot taken at the moment of replacement. Without a match this is
	/// a no-op returning `Ok(None)`.
	///
	/// A batch failure propagates unchanged; the host rolls back, the
	/// original text stays intact, and no retry is attempted.
	pub fn on_text_changed(&self, host: &mut dyn EditorHost) -> Result<Option<AppliedTransform>> {
		let cursor = host.cursor_offset();
		let probe = host.text_before_cursor(self.lookback);

		let Some((rule, found)) = find_matching_rule(&self.rules, &probe) else {
			return Ok(None);
		};

		let attributes = host.attributes_at_cursor();
		let start = cursor - found.matched.len();

		host.run_atomic(&mut |batch| {
			batch.replace_range(start, cursor, &found.replacement, &attributes)
		})?;

		log::debug!(
			"applied {:?}: {:?} -> {:?}",
			rule.name,
			found.matched,
			found.replacement
		);

		Ok(Some(AppliedTransform {
			rule: rule.name.clone(),
			matched: found.matched,
			replacement: found.replacement,
			start,
			end: cursor,
		}))
	}
}
