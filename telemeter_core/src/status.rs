//! Outcome of one control-loop tick.

use crate::error::TelemeterError;
use crate::message::Report;
use crate::window::Sample;

/// What a single tick did. `warm` is false while the window still contains
/// boot-time zero fill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// Sampled and filtered; no transmission was due.
    Sampled {
        sample: Sample,
        median: Sample,
        /// Raw fixed-point FIR accumulator (divide by 32768 for units/s).
        derivative: i64,
        warm: bool,
    },
    /// A report was due and the link accepted the frame.
    Reported { report: Report, warm: bool },
    /// A report was due but the link did not accept the frame; the next
    /// scheduled instant is the retry point.
    SendFailed {
        report: Report,
        warm: bool,
        error: TelemeterError,
    },
}
