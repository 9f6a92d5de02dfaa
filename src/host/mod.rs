//! The boundary to the hosting editor.
//!
//! The matcher never owns a document model. It consumes a small surface from
//! the host: the text immediately preceding the cursor, the cursor offset,
//! a snapshot of the formatting attributes at the cursor, and a transactional
//! way to replace a range. `TextBuffer` is a minimal in-memory host used by
//! tests and the CLI driver.

pub mod buffer;

use crate::error::Result;
use std::collections::HashMap;

pub use buffer::TextBuffer;

/// Snapshot of the formatting attributes active at the cursor. Opaque to the
/// matcher; it is captured before a replace and handed back through
/// `DocumentBatch::replace_range` unchanged.
pub type AttributeSet = HashMap<String, String>;

/// Mutation surface available inside an atomic batch.
pub trait DocumentBatch {
	/// Replace the byte range `start..end` with `text`, carrying the given
	/// attribute snapshot. The single mutating primitive the matcher uses.
	fn replace_range(
		&mut self,
		start: usize,
		end: usize,
		text: &str,
		attributes: &AttributeSet,
	) -> Result<()>;
}

/// What the matcher needs from a hosting editor.
///
/// All offsets are byte offsets into UTF-8 text. Implementations decide what
/// a "node" is; for a plain buffer the whole document is one node.
pub trait EditorHost {
	/// Byte offset of the cursor within the document.
	fn cursor_offset(&self) -> usize;

	/// Text of the node holding the cursor, up to the cursor, bounded to the
	/// last `max_chars` characters. Must end exactly at the cursor.
	///
	/// Note: for anchored patterns the window start acts as a line-start
	/// boundary, so the bound should be generous enough that truncation never
	/// lands inside text a rule could match.
	fn text_before_cursor(&self, max_chars: usize) -> String;

	/// Formatting attributes active at the cursor.
	fn attributes_at_cursor(&self) -> AttributeSet;

	/// Execute `mutate` as one undoable, atomic unit.
	///
	/// If `mutate` returns an error the implementation must roll back any
	/// partial mutation before propagating it; a delete without its insert
	/// must never be observable.
	fn run_atomic(
		&mut self,
		mutate: &mut dyn FnMut(&mut dyn DocumentBatch) -> Result<()>,
	) -> Result<()>;
}
