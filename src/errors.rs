use thiserror::Error;

/// Error taxonomy of the gesture pipeline.
///
/// `DegenerateInput` and `MalformedLandmarks` are recoverable per-frame
/// conditions; `EmptyHistory` indicates a broken orchestrator invariant
/// (a vote was requested before anything was pushed).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HgrError {
    #[error("degenerate landmark set: all points coincide with the wrist anchor")]
    DegenerateInput,

    #[error("gesture history is empty")]
    EmptyHistory,

    #[error("expected {expected} landmarks, got {actual}")]
    MalformedLandmarks { expected: usize, actual: usize },
}
