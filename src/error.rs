use thiserror::Error;

/// Error types for [`crate::BlockDeque`] operations.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum DequeError {
    /// Index is beyond the current deque length
    #[error("Index out of bounds: index {index} is beyond deque length {length}")]
    IndexOutOfBounds {
        /// Index that was accessed
        index: usize,
        /// Current length of the deque
        length: usize,
    },
    /// The operation needs at least one element
    #[error("Deque is empty")]
    Empty,
    /// The allocator refused a block or block-index allocation
    #[error("Allocation failed: could not allocate {blocks} blocks")]
    AllocationFailed {
        /// Number of blocks (or block-index entries) requested
        blocks: usize,
    },
    /// Element or block arithmetic does not fit in `usize`
    #[error("Capacity overflow")]
    CapacityOverflow,
}
