use thiserror::Error;

/// Raised by [`CheckedRing`](crate::CheckedRing) when an index fails the
/// range test. Storage and cursors are left untouched.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("index {index} is out of range")]
pub struct IndexError<I> {
    /// The rejected position.
    pub index: I,
}

/// Construction failures.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapacityError {
    /// Capacity or storage length is not positive.
    #[error("ring capacity must be positive")]
    Zero,

    /// Storage length does not fit the index type.
    #[error("storage of {len} slots does not fit the index type")]
    TooLarge {
        /// Length of the rejected storage.
        len: usize,
    },
}
