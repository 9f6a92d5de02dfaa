//! Typograph - streaming typographic text transformations.
//!
//! This library provides the core functionality for typograph, including:
//! - A catalog of built-in transformations (symbols, fractions, dashes, quotes)
//! - Configuration resolution with include/extra/remove and named groups
//! - Suffix and anchored-regex matching with first-match-wins semantics
//! - A streaming watcher that applies the match as one atomic replace
//!   through a small host-editor interface
//!
//! # Example
//!
//! ```
//! use typograph::config::Config;
//! use typograph::host::TextBuffer;
//! use typograph::watch::TransformWatcher;
//!
//! let watcher = TransformWatcher::from_config(&Config::default()).unwrap();
//! let mut buffer = TextBuffer::new();
//!
//! buffer.type_text(&watcher, "(c) 2026 -- draft").unwrap();
//! assert_eq!(buffer.text(), "© 2026 – draft");
//! ```

pub mod config;
pub mod error;
pub mod host;
pub mod rules;
pub mod watch;

pub use error::{Result, TypographError};
