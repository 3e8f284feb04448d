use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum GridError {
    #[error("Grid size must be at least 1, got {0}.")]
    InvalidSize(usize),
    #[error("Live percentage must be within [0, 100], got {0}.")]
    InvalidProbability(f64),
    #[error("Malformed pattern at line {line}: {reason}.")]
    MalformedPattern { line: usize, reason: String },
}
