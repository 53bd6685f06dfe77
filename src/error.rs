use thiserror::Error;

/// Errors returned by [`BitStore`](crate::BitStore) operations.
///
/// A failing call never leaves the store partially modified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A bit index was not below the store's capacity.
    #[error("bit index {index} out of range for capacity {capacity}")]
    IndexOutOfRange {
        /// The rejected bit index.
        index: usize,
        /// Number of addressable bits.
        capacity: usize,
    },

    /// Two operands (or a word buffer and a capacity) disagree on the number
    /// of backing words.
    #[error("word count mismatch: expected {expected}, found {found}")]
    SizeMismatch {
        /// Word count of the receiver.
        expected: usize,
        /// Word count of the other operand.
        found: usize,
    },

    /// A store was requested with zero bits.
    #[error("capacity must be greater than zero")]
    ZeroCapacity,
}

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;
