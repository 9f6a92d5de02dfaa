use crate::config::types::{Config, Entry};
use crate::rules::catalog::{Catalog, DEFAULT_GROUPS, RuleSpec};
use std::collections::HashSet;

/// One entry of the resolved rule list.
///
/// Names found in neither the catalog nor inline pass through as `Unknown`
/// instead of raising an error; this keeps configs forward-compatible with
/// rules a newer catalog may know about. Unknown entries are skipped when
/// the list is compiled.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedEntry {
	Rule(RuleSpec),
	Unknown(String),
}

impl ResolvedEntry {
	/// The entry's name, if it has one.
	pub fn name(&self) -> Option<&str> {
		match self {
			ResolvedEntry::Rule(rule) => rule.name.as_deref(),
			ResolvedEntry::Unknown(name) => Some(name),
		}
	}
}

/// Resolve a configuration into the effective ordered rule list.
///
/// Precedence is `include` then `extra`, then `remove`. Removal is applied
/// twice: once to the raw entries (so a whole group can be dropped by name)
/// and once after group expansion (so a single member a group pulled in can
/// be dropped too). Names are deduplicated keeping the first occurrence;
/// inline rules are structurally distinct and never deduplicated.
///
/// Pure function of its inputs: identical `config` and `catalog` always
/// yield the identical ordered output.
pub fn resolve(config: &Config, catalog: &Catalog) -> Vec<ResolvedEntry> {
	let include = config.include.clone().unwrap_or_else(default_include);

	let is_not_removed = |entry: &Entry| match entry {
		Entry::Name(name) => !config.remove.iter().any(|removed| removed == name),
		Entry::Rule(_) => true,
	};

	let raw: Vec<Entry> = include
		.into_iter()
		.chain(config.extra.iter().cloned())
		.filter(|entry| is_not_removed(entry))
		.collect();

	expand_groups_and_dedupe(raw, catalog)
		.into_iter()
		// Re-filter: a removal may target a rule that a group expanded into.
		.filter(|entry| is_not_removed(entry))
		.map(|entry| materialize(entry, catalog))
		.collect()
}

/// The default `include`: every built-in group, in fixed order.
fn default_include() -> Vec<Entry> {
	DEFAULT_GROUPS
		.iter()
		.map(|group| Entry::Name(group.to_string()))
		.collect()
}

/// Expand group names to their members and drop duplicate names, keeping
/// first-occurrence order.
fn expand_groups_and_dedupe(entries: Vec<Entry>, catalog: &Catalog) -> Vec<Entry> {
	let mut seen: HashSet<String> = HashSet::new();
	let mut expanded = Vec::new();

	for entry in entries {
		match entry {
			Entry::Name(name) => {
				if let Some(members) = catalog.group(&name) {
					for member in members {
						if seen.insert(member.clone()) {
							expanded.push(Entry::Name(member.clone()));
						}
					}
				} else if seen.insert(name.clone()) {
					expanded.push(Entry::Name(name));
				}
			}
			// Inline rules have no identity to deduplicate on.
			Entry::Rule(_) => expanded.push(entry),
		}
	}

	expanded
}

fn materialize(entry: Entry, catalog: &Catalog) -> ResolvedEntry {
	match entry {
		Entry::Name(name) => match catalog.rule(&name) {
			Some(rule) => ResolvedEntry::Rule(rule.clone()),
			None => {
				log::debug!("unknown transformation name {:?}, passing through", name);
				ResolvedEntry::Unknown(name)
			}
		},
		Entry::Rule(inline) => ResolvedEntry::Rule(RuleSpec::from_inline(&inline)),
	}
}
