use regex::Regex;
use std::ops::Range;

/// Whole-line deletion expressed as byte offsets over the original text.
///
/// A span covers one or more complete physical lines including their
/// terminators. Spans produced by [`remove_matching_lines`] are ordered by
/// position and never overlap, so the whole set can be applied as a single
/// composite edit without recomputing offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletionSpan {
    pub start: usize,
    pub end: usize,
    /// Number of physical lines covered.
    pub lines: usize,
}

impl DeletionSpan {
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Scan every line of `source` and mark lines matching `pattern` for
/// deletion.
///
/// The match input is the line content without its terminator; the
/// resulting span includes the terminator, so deleting the span removes
/// the line entirely. Adjacent matched lines coalesce into one span. A
/// final line without a terminator is covered up to the end of the text.
pub fn remove_matching_lines(source: &str, pattern: &Regex) -> Vec<DeletionSpan> {
    let mut spans: Vec<DeletionSpan> = Vec::new();
    let mut line_start = 0;
    while line_start < source.len() {
        let line_end = match source[line_start..].find('\n') {
            Some(idx) => line_start + idx + 1,
            None => source.len(),
        };
        let content = source[line_start..line_end]
            .strip_suffix('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .unwrap_or(&source[line_start..line_end]);
        if pattern.is_match(content) {
            match spans.last_mut() {
                Some(last) if last.end == line_start => {
                    last.end = line_end;
                    last.lines += 1;
                }
                _ => spans.push(DeletionSpan {
                    start: line_start,
                    end: line_end,
                    lines: 1,
                }),
            }
        }
        line_start = line_end;
    }
    spans
}

/// Apply deletions produced by [`remove_matching_lines`] to `source`.
///
/// Spans must be position-ordered and non-overlapping.
pub fn apply_deletions(source: &str, spans: &[DeletionSpan]) -> String {
    let mut result = String::with_capacity(source.len());
    let mut cursor = 0;
    for span in spans {
        result.push_str(&source[cursor..span.start]);
        cursor = span.end;
    }
    result.push_str(&source[cursor..]);
    result
}

/// Total physical lines covered by `spans`.
pub fn removed_line_count(spans: &[DeletionSpan]) -> usize {
    spans.iter().map(|span| span.lines).sum()
}
