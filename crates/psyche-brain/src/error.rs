use thiserror::Error;

/// Faults the decision core reports.
///
/// Missing appraisal data and out-of-range numbers are deliberately absent: the first falls back
/// to the derived appraisal, the second is clamped where it is read.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BrainError {
    /// The event offered zero choices. Malformed content; the caller skips the event.
    #[error("no candidate choices to select from")]
    NoCandidates,

    /// A persisted brain profile has a field of the wrong shape.
    #[error("malformed brain profile: {0}")]
    MalformedProfile(String),
}

pub type Result<T> = std::result::Result<T, BrainError>;
