/// Small JavaScript fixture exercising every statement kind.
///
/// Line layout matters to the tests: each console call sits on its own
/// line surrounded by code that must survive removal.
pub fn sample_source() -> &'static str {
    concat!(
        "function add(a, b) {\n",
        "  console.log('adding', a, b);\n",
        "  return a + b;\n",
        "}\n",
        "\n",
        "console.debug('module loaded');\n",
        "\n",
        "function report(err) {\n",
        "  console.error(err);\n",
        "  console.warn('recovering');\n",
        "  return null;\n",
        "}\n",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remove::remove_matching_lines;
    use crate::StatementKind;

    #[test]
    fn fixture_contains_every_statement_kind() {
        for kind in [
            StatementKind::Log,
            StatementKind::Error,
            StatementKind::Warn,
            StatementKind::Debug,
        ] {
            assert_eq!(
                remove_matching_lines(sample_source(), kind.pattern()).len(),
                1,
                "{kind:?}"
            );
        }
    }
}
