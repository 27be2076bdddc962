//! One-time engine/layer compatibility check.
//!
//! The record shapes crossing the engine boundary must stay structurally
//! stable across engine versions. Each engine reports the fingerprint of the
//! layout it was built against; the driver compares it to this layer's own
//! before the engine is ever invoked, and caches a success so the check runs
//! once per process.

use std::mem::{align_of, size_of};
use std::sync::OnceLock;

use crate::diagnostics::raw::{RawDiagnostic, RawFixItEdit, RawRange};

use super::{ParseEngine, RawNode};

/// FNV-1a over the sizes and alignments of every boundary record type.
const fn fingerprint(inputs: &[usize]) -> u64 {
    let mut hash = 0xcbf2_9ce4_8422_2325u64;
    let mut i = 0;
    while i < inputs.len() {
        hash ^= inputs[i] as u64;
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
        i += 1;
    }
    hash
}

/// The layout fingerprint of this layer's boundary records.
pub const LAYOUT_FINGERPRINT: u64 = fingerprint(&[
    size_of::<RawNode<'static>>(),
    align_of::<RawNode<'static>>(),
    size_of::<RawDiagnostic>(),
    align_of::<RawDiagnostic>(),
    size_of::<RawFixItEdit>(),
    size_of::<RawRange>(),
]);

/// Fingerprint that passed verification, set at most once per process.
static VERIFIED: OnceLock<u64> = OnceLock::new();

/// Check the engine's reported layout against this layer's expectation.
///
/// A success is cached process-wide, so repeated parses skip the comparison.
/// A failure is not cached: a process that first saw a mismatched engine can
/// still succeed with a correct one later.
pub fn verify_compatibility(engine: &dyn ParseEngine) -> Result<(), (u64, u64)> {
    let actual = engine.layout_fingerprint();
    if VERIFIED.get() == Some(&actual) {
        return Ok(());
    }
    if actual == LAYOUT_FINGERPRINT {
        let _ = VERIFIED.set(actual);
        tracing::debug!(fingerprint = format_args!("{actual:#018x}"), "engine compatibility verified");
        Ok(())
    } else {
        Err((LAYOUT_FINGERPRINT, actual))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{GreenElement, ParseSession};

    struct GoodEngine;

    impl ParseEngine for GoodEngine {
        fn layout_fingerprint(&self) -> u64 {
            LAYOUT_FINGERPRINT
        }

        fn parse(&self, _: &str, _: &mut ParseSession<'_>) -> Option<GreenElement> {
            None
        }
    }

    struct StaleEngine;

    impl ParseEngine for StaleEngine {
        fn layout_fingerprint(&self) -> u64 {
            LAYOUT_FINGERPRINT ^ 0xdead_beef
        }

        fn parse(&self, _: &str, _: &mut ParseSession<'_>) -> Option<GreenElement> {
            unreachable!("a mismatched engine must never be invoked")
        }
    }

    #[test]
    fn matching_fingerprint_passes() {
        assert!(verify_compatibility(&GoodEngine).is_ok());
        // Second call takes the cached path.
        assert!(verify_compatibility(&GoodEngine).is_ok());
    }

    #[test]
    fn mismatched_fingerprint_fails_with_both_values() {
        let (expected, actual) = verify_compatibility(&StaleEngine).unwrap_err();
        assert_eq!(expected, LAYOUT_FINGERPRINT);
        assert_eq!(actual, LAYOUT_FINGERPRINT ^ 0xdead_beef);
    }
}
