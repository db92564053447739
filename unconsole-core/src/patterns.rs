use regex::Regex;
use std::sync::OnceLock;

/// The statement classes the remover understands.
///
/// The per-kind fragments are plain substring regexes; only [`All`] is
/// word-bounded. The asymmetry is intentional and matches how each kind
/// behaves on its own.
///
/// [`All`]: StatementKind::All
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatementKind {
    Log,
    Error,
    Warn,
    Debug,
    All,
}

impl StatementKind {
    pub const VARIANTS: [StatementKind; 5] = [
        StatementKind::Log,
        StatementKind::Error,
        StatementKind::Warn,
        StatementKind::Debug,
        StatementKind::All,
    ];

    /// Regex fragment identifying one statement of this kind on a line.
    pub fn pattern_source(self) -> &'static str {
        match self {
            StatementKind::Log => r"console\.log",
            StatementKind::Error => r"console\.error",
            StatementKind::Warn => r"console\.warn",
            StatementKind::Debug => r"console\.debug",
            StatementKind::All => r"\bconsole\.(log|warn|error|debug)\b",
        }
    }

    /// Compiled pattern for this kind, built once per process.
    pub fn pattern(self) -> &'static Regex {
        static PATTERNS: OnceLock<[Regex; 5]> = OnceLock::new();
        let patterns = PATTERNS.get_or_init(|| {
            StatementKind::VARIANTS.map(|kind| {
                // Hard-coded literals above; compilation is covered by tests.
                Regex::new(kind.pattern_source()).expect("statement pattern compiles")
            })
        });
        &patterns[self.index()]
    }

    /// Kind name as used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            StatementKind::Log => "log",
            StatementKind::Error => "error",
            StatementKind::Warn => "warn",
            StatementKind::Debug => "debug",
            StatementKind::All => "all",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        StatementKind::VARIANTS
            .into_iter()
            .find(|kind| kind.name() == name)
    }

    fn index(self) -> usize {
        match self {
            StatementKind::Log => 0,
            StatementKind::Error => 1,
            StatementKind::Warn => 2,
            StatementKind::Debug => 3,
            StatementKind::All => 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_patterns_compile() {
        for kind in StatementKind::VARIANTS {
            assert!(Regex::new(kind.pattern_source()).is_ok(), "{kind:?}");
        }
    }

    #[test]
    fn per_kind_patterns_match_their_calls() {
        assert!(StatementKind::Log.pattern().is_match("console.log('x');"));
        assert!(StatementKind::Error.pattern().is_match("  console.error(err)"));
        assert!(StatementKind::Warn.pattern().is_match("console.warn('w')"));
        assert!(StatementKind::Debug.pattern().is_match("console.debug('d')"));
        assert!(!StatementKind::Log.pattern().is_match("console.error('x')"));
    }

    #[test]
    fn combined_pattern_matches_every_kind() {
        for line in [
            "console.log('a')",
            "console.warn('b')",
            "console.error('c')",
            "console.debug('d')",
        ] {
            assert!(StatementKind::All.pattern().is_match(line), "{line}");
        }
        assert!(!StatementKind::All.pattern().is_match("console.info('i')"));
    }

    #[test]
    fn combined_pattern_is_word_bounded_but_per_kind_are_not() {
        // Only the combined fragment carries \b anchors.
        assert!(!StatementKind::All.pattern().is_match("myconsole.log('x')"));
        assert!(StatementKind::Log.pattern().is_match("myconsole.log('x')"));
    }

    #[test]
    fn kind_names_round_trip() {
        for kind in StatementKind::VARIANTS {
            assert_eq!(StatementKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(StatementKind::from_name("info"), None);
    }
}
