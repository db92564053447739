use unconsole_core::remove::{remove_matching_lines, DeletionSpan};
use unconsole_core::StatementKind;

pub const COMMAND_REMOVE_LOG: &str = "extension.removeConsoleLog";
pub const COMMAND_REMOVE_ERROR: &str = "extension.removeConsoleError";
pub const COMMAND_REMOVE_WARN: &str = "extension.removeConsoleWarn";
pub const COMMAND_REMOVE_DEBUG: &str = "extension.removeConsoleDebug";
pub const COMMAND_REMOVE_ALL: &str = "extension.removeAllConsoleStatements";

/// Command table: stable identifier to the statement class it removes.
///
/// The five commands differ only in their pattern, so registration and
/// dispatch both iterate this table instead of carrying per-command
/// bodies.
pub const COMMANDS: [(&str, StatementKind); 5] = [
    (COMMAND_REMOVE_LOG, StatementKind::Log),
    (COMMAND_REMOVE_ERROR, StatementKind::Error),
    (COMMAND_REMOVE_WARN, StatementKind::Warn),
    (COMMAND_REMOVE_DEBUG, StatementKind::Debug),
    (COMMAND_REMOVE_ALL, StatementKind::All),
];

pub fn statement_kind(command: &str) -> Option<StatementKind> {
    COMMANDS
        .iter()
        .find(|(id, _)| *id == command)
        .map(|(_, kind)| *kind)
}

/// Command identifiers for capability registration.
pub fn command_ids() -> Vec<String> {
    COMMANDS.iter().map(|(id, _)| (*id).to_string()).collect()
}

/// Compute the deletions `command` performs on `source`.
///
/// Returns `None` for commands outside the table; an empty vector means
/// the pattern matched nothing and the caller should not edit anything.
pub fn removal_spans(command: &str, source: &str) -> Option<Vec<DeletionSpan>> {
    let kind = statement_kind(command)?;
    Some(remove_matching_lines(source, kind.pattern()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use unconsole_core::apply_deletions;
    use unconsole_core::test_support::sample_source;

    #[test]
    fn table_covers_all_five_commands() {
        assert_eq!(command_ids().len(), 5);
        assert_eq!(statement_kind(COMMAND_REMOVE_LOG), Some(StatementKind::Log));
        assert_eq!(
            statement_kind(COMMAND_REMOVE_ALL),
            Some(StatementKind::All)
        );
        assert_eq!(statement_kind("extension.removeConsoleInfo"), None);
    }

    #[test]
    fn remove_log_deletes_only_log_lines() {
        let source = sample_source();
        let spans = removal_spans(COMMAND_REMOVE_LOG, source).unwrap();
        let stripped = apply_deletions(source, &spans);
        assert!(!stripped.contains("console.log"));
        assert!(stripped.contains("console.error"));
        assert!(stripped.contains("console.warn"));
        assert!(stripped.contains("console.debug"));
        assert!(stripped.contains("return a + b;"));
    }

    #[test]
    fn remove_all_deletes_every_console_line() {
        let source = sample_source();
        let spans = removal_spans(COMMAND_REMOVE_ALL, source).unwrap();
        let stripped = apply_deletions(source, &spans);
        assert!(!stripped.contains("console."));
        assert!(stripped.contains("function add(a, b) {"));
        assert!(stripped.contains("function report(err) {"));
    }

    #[test]
    fn unknown_command_yields_none() {
        assert!(removal_spans("lex.export", sample_source()).is_none());
    }

    #[test]
    fn clean_source_yields_empty_spans() {
        let spans = removal_spans(COMMAND_REMOVE_ALL, "fn main() {}\n").unwrap();
        assert!(spans.is_empty());
    }
}
