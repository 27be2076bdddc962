//! Unit tests for the diagnostic conversion and aggregation pipeline.

use rstest::rstest;
use text_size::TextSize;

use crate::base::LineIndex;

use super::raw::{RawDiagnostic, RawFixItEdit, RawRange, RawSeverity};
use super::{Diagnostic, DiagnosticAggregator, DiagnosticConverter, FixIt, Severity};

fn collect(records: Vec<RawDiagnostic>) -> Vec<Diagnostic> {
    let line_index = LineIndex::new("let x = (1 + 2\nlet y = 3;;\n");
    let converter = DiagnosticConverter::new(Some("demo.lr"), &line_index);
    let mut out = Vec::new();
    let mut sink = |diag: Diagnostic| out.push(diag);
    let mut aggregator = DiagnosticAggregator::new(converter, &mut sink);
    for record in records {
        aggregator.consume(record);
    }
    aggregator.finish();
    out
}

#[test]
fn notes_attach_to_the_preceding_diagnostic() {
    let out = collect(vec![
        RawDiagnostic::new(RawSeverity::ERROR, 14, "unclosed parenthesis"),
        RawDiagnostic::new(RawSeverity::NOTE, 8, "opening parenthesis here"),
        RawDiagnostic::new(RawSeverity::NOTE, 14, "statement ends here"),
        RawDiagnostic::new(RawSeverity::WARNING, 25, "redundant ';'"),
    ]);

    assert_eq!(out.len(), 2);
    assert_eq!(out[0].severity, Severity::Error);
    assert_eq!(out[0].notes.len(), 2);
    assert_eq!(out[0].notes[0].message, "opening parenthesis here");
    assert_eq!(out[0].notes[1].message, "statement ends here");
    assert_eq!(out[1].severity, Severity::Warning);
    assert!(out[1].notes.is_empty());
}

#[test]
fn trailing_diagnostic_is_flushed_on_finish() {
    let out = collect(vec![RawDiagnostic::new(RawSeverity::ERROR, 0, "boom")]);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].message, "boom");
}

#[test]
fn empty_stream_emits_nothing() {
    assert!(collect(Vec::new()).is_empty());
}

#[test]
#[should_panic(expected = "no preceding error or warning")]
fn leading_note_is_a_contract_violation() {
    collect(vec![RawDiagnostic::new(RawSeverity::NOTE, 0, "orphan note")]);
}

#[test]
#[should_panic(expected = "unknown diagnostic severity tag")]
fn unknown_severity_tag_is_fatal() {
    collect(vec![RawDiagnostic::new(RawSeverity(42), 0, "mystery")]);
}

#[test]
fn locations_resolve_through_the_line_index() {
    let out = collect(vec![
        RawDiagnostic::new(RawSeverity::ERROR, 19, "x").with_highlight(RawRange::new(15, 5)),
    ]);
    let loc = &out[0].location;
    assert_eq!(loc.offset, TextSize::new(19));
    assert_eq!(loc.line_col.unwrap().line, 1);
    assert_eq!(loc.line_col.unwrap().col, 4);
    assert_eq!(loc.file.as_deref(), Some("demo.lr"));
    assert_eq!(out[0].highlights.len(), 1);
    assert_eq!(out[0].highlights[0].len(), TextSize::new(5));
}

#[rstest]
#[case(RawRange::new(10, 0), "x", true, false)]
#[case(RawRange::new(10, 5), "", false, true)]
#[case(RawRange::new(10, 5), "ab", false, false)]
fn fixit_classification(
    #[case] range: RawRange,
    #[case] text: &str,
    #[case] insert: bool,
    #[case] remove: bool,
) {
    let line_index = LineIndex::new("0123456789abcdefghij");
    let converter = DiagnosticConverter::new(None, &line_index);

    match converter.fixit(RawFixItEdit::new(range, text)) {
        FixIt::Insert { at, text } => {
            assert!(insert);
            assert_eq!(at.offset, TextSize::new(10));
            assert_eq!(text, "x");
        }
        FixIt::Remove { range } => {
            assert!(remove);
            assert_eq!(range.start().offset, TextSize::new(10));
            assert_eq!(range.end().offset, TextSize::new(15));
        }
        FixIt::Replace { range, text } => {
            assert!(!insert && !remove);
            assert_eq!(range.start().offset, TextSize::new(10));
            assert_eq!(range.end().offset, TextSize::new(15));
            assert_eq!(text, "ab");
        }
    }
}
