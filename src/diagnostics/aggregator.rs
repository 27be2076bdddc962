//! Look-behind aggregation of the raw diagnostic stream.
//!
//! The engine streams records in source order with notes always immediately
//! following the error or warning they annotate. Grouping therefore needs a
//! single pending slot, not a buffer: O(1) memory per diagnostic.

use std::mem;

use super::convert::DiagnosticConverter;
use super::diagnostic::{Diagnostic, Note, Severity};
use super::raw::{RawDiagnostic, RawSeverity};

/// Aggregation state: either nothing pending, or the most recent non-note
/// record together with the notes observed since.
enum State {
    Idle,
    Pending { diag: Diagnostic, notes: Vec<Note> },
}

/// Groups trailing note records under the diagnostic they annotate.
///
/// Finalized diagnostics are handed to the sink as soon as the next non-note
/// record arrives, or on [`finish`](Self::finish) when the stream ends.
///
/// Each parse gets its own aggregator; instances are never shared.
pub struct DiagnosticAggregator<'a> {
    converter: DiagnosticConverter<'a>,
    sink: &'a mut dyn FnMut(Diagnostic),
    state: State,
}

impl<'a> DiagnosticAggregator<'a> {
    pub fn new(converter: DiagnosticConverter<'a>, sink: &'a mut dyn FnMut(Diagnostic)) -> Self {
        Self {
            converter,
            sink,
            state: State::Idle,
        }
    }

    /// Consume one raw record from the engine.
    ///
    /// # Panics
    /// Panics on a note with no preceding diagnostic, and on a severity tag
    /// outside the known set. Both can only happen when the engine violates
    /// its ordering contract; failing fast beats silently dropping them.
    pub fn consume(&mut self, raw: RawDiagnostic) {
        if raw.severity == RawSeverity::NOTE {
            match &mut self.state {
                State::Pending { notes, .. } => notes.push(self.converter.note(raw)),
                State::Idle => panic!("note diagnostic with no preceding error or warning"),
            }
            return;
        }

        let severity = match raw.severity {
            RawSeverity::ERROR => Severity::Error,
            RawSeverity::WARNING => Severity::Warning,
            RawSeverity(tag) => panic!("unknown diagnostic severity tag {tag}"),
        };

        let note = self.converter.note(raw);
        let diag = Diagnostic {
            severity,
            message: note.message,
            location: note.location,
            highlights: note.highlights,
            fixits: note.fixits,
            notes: Vec::new(),
        };

        let previous = mem::replace(
            &mut self.state,
            State::Pending {
                diag,
                notes: Vec::new(),
            },
        );
        self.emit(previous);
    }

    /// Flush the pending diagnostic, if any, and return to idle.
    pub fn finish(&mut self) {
        let previous = mem::replace(&mut self.state, State::Idle);
        self.emit(previous);
    }

    fn emit(&mut self, state: State) {
        if let State::Pending { mut diag, notes } = state {
            diag.notes = notes;
            (self.sink)(diag);
        }
    }
}
