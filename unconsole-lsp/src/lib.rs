//! Language Server Protocol (LSP) implementation for unconsole
//!
//! This crate is the server half of unconsole: it exposes the
//! console-statement removal commands to any LSP-compatible editor
//! (VSCode, Neovim, Emacs, Sublime, etc.) and keeps the open-document
//! state those commands operate on. The removal logic itself lives in
//! unconsole-core and knows nothing about the protocol.
//!
//! Command Surface
//!
//! Five commands, registered through workspace/executeCommand. Each is
//! a fixed parameterization of the same whole-line deletion routine:
//!
//!   1. extension.removeConsoleLog
//!   2. extension.removeConsoleError
//!   3. extension.removeConsoleWarn
//!   4. extension.removeConsoleDebug
//!   5. extension.removeAllConsoleStatements
//!
//! The client adapter passes the active document's URI as the first
//! argument. The server computes the deletions and sends them back as
//! one workspace/applyEdit, so the whole removal is a single undoable
//! step in the editor. A missing argument, an unopened document, or a
//! pattern that matches nothing is a silent no-op — not an error.
//!
//! Architecture
//!
//! LSP Layer (tower-lsp):
//!   - JSON-RPC communication, handshaking, request routing
//!
//! Server Layer (this crate):
//!   - Implements LanguageServer trait
//!   - Tracks open documents (full-sync snapshots)
//!   - Dispatches commands through the static command table
//!   - Thin; the deletion semantics live in unconsole-core
//!
//! Core Layer (unconsole-core):
//!   - Statement patterns, line scanning, deletion spans
//!   - Stateless, protocol-free, densely unit-tested
//!
//! Error Handling and Robustness
//!
//! - No unwrap()/expect() in production code paths; failures return
//!   Result and are propagated or degrade to a no-op.
//! - Unknown commands are rejected with a JSON-RPC invalid-request
//!   error; everything else the client can throw at the server (bad
//!   URIs, malformed arguments, unopened documents) degrades silently.
//! - A workspace/applyEdit the host declines is logged and left alone;
//!   the host already surfaced it, so the server neither retries nor
//!   invents its own error message.
//! - The proptest suite in tests/ fuzzes executeCommand and didOpen
//!   with arbitrary input to keep the server panic-free.
//!
//! Usage
//!
//! Library:
//!   ```rust,ignore
//!   use tower_lsp::{LspService, Server};
//!   use unconsole_lsp::UnconsoleLanguageServer;
//!
//!   #[tokio::main]
//!   async fn main() {
//!       let stdin = tokio::io::stdin();
//!       let stdout = tokio::io::stdout();
//!       let (service, socket) = LspService::new(UnconsoleLanguageServer::new);
//!       Server::new(stdin, stdout, socket).serve(service).await;
//!   }
//!   ```
//!
//! Binary:
//!   $ unconsole-lsp
//!   Starts the language server on stdin/stdout for editor
//!   integration. `unconsole-lsp strip FILE` runs the same removal
//!   offline, without an editor attached.

pub mod features;
pub mod server;

pub use server::UnconsoleLanguageServer;
