//! The layout compatibility check gates every foreign engine: a mismatched
//! engine is rejected up front and never invoked.

use laurel::ParserError;
use laurel::engine::{GreenElement, LAYOUT_FINGERPRINT, ParseEngine, ParseSession};

/// An engine built against a different boundary layout. Invoking it at all
/// would be a driver bug.
struct StaleEngine;

impl ParseEngine for StaleEngine {
    fn layout_fingerprint(&self) -> u64 {
        LAYOUT_FINGERPRINT.wrapping_add(1)
    }

    fn parse(&self, _: &str, _: &mut ParseSession<'_>) -> Option<GreenElement> {
        panic!("a mismatched engine must never be invoked");
    }
}

#[test]
fn test_mismatched_engine_is_rejected_before_parsing() {
    let err = laurel::parse_with(&StaleEngine, "let x = 1", None, None, None).unwrap_err();
    match err {
        ParserError::CompatibilityMismatch { expected, actual } => {
            assert_eq!(expected, LAYOUT_FINGERPRINT);
            assert_eq!(actual, LAYOUT_FINGERPRINT.wrapping_add(1));
        }
        other => panic!("expected CompatibilityMismatch, got {other:?}"),
    }
}

#[test]
fn test_mismatch_is_not_sticky() {
    // A failed check must not poison the process for a good engine.
    let _ = laurel::parse_with(&StaleEngine, "", None, None, None);
    assert!(laurel::parse("let x = 1", None, None, None).is_ok());
}

#[test]
fn test_matching_engine_passes_repeatedly() {
    for _ in 0..3 {
        assert!(laurel::parse("let x = 1", None, None, None).is_ok());
    }
}
