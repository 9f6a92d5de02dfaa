use crate::error::{Result, TypographError};
use crate::host::{AttributeSet, DocumentBatch, EditorHost};
use crate::watch::TransformWatcher;

/// Minimal in-memory editor host: a plain `String` document with a byte
/// cursor and an attribute snapshot.
///
/// The buffer carries no formatting of its own, so attribute snapshots are
/// accepted and dropped on replace; what it does model faithfully is the
/// transactional contract, rolling the document back when a batch fails.
#[derive(Debug, Clone, Default)]
pub struct TextBuffer {
	text: String,
	cursor: usize,
	attributes: AttributeSet,
}

impl TextBuffer {
	/// An empty buffer with the cursor at offset 0.
	pub fn new() -> Self {
		Self::default()
	}

	/// A buffer holding `text`, cursor at the end.
	pub fn from_text(text: &str) -> Self {
		TextBuffer {
			text: text.to_string(),
			cursor: text.len(),
			attributes: AttributeSet::new(),
		}
	}

	/// The document text.
	pub fn text(&self) -> &str {
		&self.text
	}

	/// The cursor byte offset.
	pub fn cursor(&self) -> usize {
		self.cursor
	}

	/// Set a formatting attribute reported for the cursor position.
	pub fn set_attribute(&mut self, key: &str, value: &str) {
		self.attributes.insert(key.to_string(), value.to_string());
	}

	/// Insert one character at the cursor and advance past it.
	pub fn insert_char(&mut self, ch: char) {
		self.text.insert(self.cursor, ch);
		self.cursor += ch.len_utf8();
	}

	/// Feed `input` one character at a time, re-checking transformations
	/// after each insertion, the way a host delivers per-keystroke change
	/// events. An applied replacement is itself a data change near the
	/// cursor, so evaluation repeats until the text settles (chained
	/// transformations). A rule whose replacement re-matches its own pattern
	/// will not settle; nothing guards against that.
	pub fn type_text(&mut self, watcher: &TransformWatcher, input: &str) -> Result<()> {
		for ch in input.chars() {
			self.insert_char(ch);
			while watcher.on_text_changed(self)?.is_some() {}
		}
		Ok(())
	}

	fn replace_impl(&mut self, start: usize, end: usize, new_text: &str) -> Result<()> {
		let len = self.text.len();
		let valid = start <= end
			&& end <= len
			&& self.text.is_char_boundary(start)
			&& self.text.is_char_boundary(end);
		if !valid {
			return Err(TypographError::InvalidRange { start, end, len });
		}

		self.text.replace_range(start..end, new_text);

		// Keep the cursor pinned to the same logical position.
		if self.cursor >= end {
			self.cursor = self.cursor - (end - start) + new_text.len();
		} else if self.cursor > start {
			self.cursor = start + new_text.len();
		}
		Ok(())
	}
}

struct BufferBatch<'a> {
	buffer: &'a mut TextBuffer,
}

impl DocumentBatch for BufferBatch<'_> {
	fn replace_range(
		&mut self,
		start: usize,
		end: usize,
		text: &str,
		_attributes: &AttributeSet,
	) -> Result<()> {
		// Plain text host: the attribute snapshot has nowhere to go.
		self.buffer.replace_impl(start, end, text)
	}
}

impl EditorHost for TextBuffer {
	fn cursor_offset(&self) -> usize {
		self.cursor
	}

	fn text_before_cursor(&self, max_chars: usize) -> String {
		let before = &self.text[..self.cursor];
		let skip = before.chars().count().saturating_sub(max_chars);
		before.chars().skip(skip).collect()
	}

	fn attributes_at_cursor(&self) -> AttributeSet {
		self.attributes.clone()
	}

	fn run_atomic(
		&mut self,
		mutate: &mut dyn FnMut(&mut dyn DocumentBatch) -> Result<()>,
	) -> Result<()> {
		let snapshot_text = self.text.clone();
		let snapshot_cursor = self.cursor;

		let result = {
			let mut batch = BufferBatch { buffer: self };
			mutate(&mut batch)
		};

		if let Err(err) = result {
			// Roll back so no partial replace is observable.
			self.text = snapshot_text;
			self.cursor = snapshot_cursor;
			return Err(err);
		}
		Ok(())
	}
}
