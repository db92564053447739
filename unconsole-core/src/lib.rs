//! Console-statement removal for source buffers
//!
//! This crate provides the host-independent half of unconsole: given the
//! text of a document, find every line containing a console-logging call
//! (`console.log`, `console.error`, `console.warn`, `console.debug`) and
//! describe the whole-line deletions that strip them.
//!
//! # Architecture
//!
//! - `patterns`: the fixed statement classes and their compiled regexes
//! - `remove`: line scanning, deletion spans, and span application
//!
//! # Design Principles
//!
//! - **Stateless**: all functions operate on borrowed source text and
//!   return fresh edit descriptions; nothing is retained across calls
//! - **Reusable**: not tied to any editor protocol — usable from an LSP
//!   server, a CLI, or anything else that owns a text buffer
//! - **Line-local**: matching is per physical line. A call whose
//!   arguments span several physical lines loses only the line containing
//!   the call token. This mirrors the behavior users expect from
//!   regex-based strippers and is deliberate.
//!
//! # Usage
//!
//! ```rust
//! use unconsole_core::remove::{apply_deletions, remove_matching_lines};
//! use unconsole_core::StatementKind;
//!
//! let source = "a();\nconsole.log('x');\nb();\n";
//! let spans = remove_matching_lines(source, StatementKind::Log.pattern());
//! assert_eq!(apply_deletions(source, &spans), "a();\nb();\n");
//! ```

pub mod patterns;
pub mod remove;

// Test support (available in tests and as dev-dependency)
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use patterns::StatementKind;
pub use remove::{apply_deletions, remove_matching_lines, removed_line_count, DeletionSpan};
