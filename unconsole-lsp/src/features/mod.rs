// LSP-facing command table; the line scanning itself lives in unconsole-core.
pub mod commands;
