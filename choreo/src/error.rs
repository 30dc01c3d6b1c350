//! Error type for choreography construction and configuration.

/// Rejected construction or configuration of a choreography piece.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChoreoError {
    /// A rotation needs at least one item to rotate through.
    #[error("cannot rotate through an empty list")]
    EmptyRotation,

    /// A manual selection pointed past the end of the list.
    #[error("index {index} is out of range for {len} items")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of items in the rotation.
        len: usize,
    },

    /// A period, delay or duration that must be positive was zero.
    #[error("{what} must be greater than zero")]
    ZeroDuration {
        /// Which setting was zero.
        what: &'static str,
    },

    /// The loader would never advance.
    #[error("loader step must be between 1 and 100, got {0}")]
    InvalidStep(u8),
}
