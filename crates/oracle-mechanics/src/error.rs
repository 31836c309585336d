//! Error types for the draw engines.

/// Errors that can occur while reducing or drawing.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MechError {
    /// Nothing was left to reduce after filtering the input.
    #[error("empty input: {0}")]
    EmptyInput(String),

    /// A date string could not be read as `YYYY-MM-DD`.
    #[error("malformed date '{0}': expected YYYY-MM-DD")]
    MalformedDate(String),

    /// A time string could not be read as `HH:MM` or `HH:MM:SS`.
    #[error("malformed time '{0}': expected HH:MM")]
    MalformedTime(String),

    /// More entities were requested than the catalog holds.
    #[error("cannot draw {requested} from a catalog of {available}")]
    DrawTooLarge {
        /// How many were asked for.
        requested: usize,
        /// Catalog length.
        available: usize,
    },

    /// A probability outside [0, 1].
    #[error("invalid probability: {0}")]
    InvalidProbability(f64),

    /// A coin sum outside 6..=9.
    #[error("invalid line sum: {0} (expected 6-9)")]
    InvalidLineSum(u8),
}

/// Convenience result type for draw operations.
pub type MechResult<T> = Result<T, MechError>;
