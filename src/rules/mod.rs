//! Rule resolution and matching for typograph.
//!
//! This module handles:
//! - The built-in rule catalog and its fixed groups
//! - Resolving include/extra/remove configuration into an ordered rule list
//! - Suffix and anchored-regex matching with first-match-wins semantics
//! - Back-reference template rendering for replacements

pub mod catalog;
pub mod matcher;
pub mod resolve;
pub mod rewriter;

pub use catalog::{Catalog, DEFAULT_GROUPS, PatternSpec, RuleSpec};
pub use matcher::{CompiledRule, Pattern, RuleMatch, compile_rules, find_matching_rule};
pub use resolve::{ResolvedEntry, resolve};
pub use rewriter::render_template;
