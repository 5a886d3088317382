use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Raw input could not be turned into actions at all (bad file, missing
    /// columns, non-numeric fields). Individual untradeable rows are dropped
    /// during validation instead and never reach this.
    #[error("invalid input: {0}")]
    Validation(String),

    #[error("precision must be non-negative, got {0}")]
    InvalidPrecision(i32),

    /// The requested exact computation exceeds a safety threshold. Callers
    /// can recover by picking a cheaper strategy or reducing precision.
    #[error("input too large for exact solving: {0}")]
    IntractableInput(String),
}
