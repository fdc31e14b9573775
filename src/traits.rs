//! Common traits and error types for indexed heaps
//!
//! An indexed heap stores at most one entry per element id drawn from a fixed
//! universe `[0, universe_size)`. Inserting an id that is already present is a
//! decrease-key request, so the same entry point covers both "add" and
//! "lower the priority in place".
//!
//! [`IndexedHeap`] is implemented by the binomial
//! [`PriorityQueue`](crate::queue::PriorityQueue) and by the array-based
//! [`IndexedBinaryHeap`](crate::simple_binary::IndexedBinaryHeap) baseline.

use std::fmt;

/// Error type for indexed heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    /// The element id lies outside `[0, universe_size)`
    OutOfRange {
        /// The rejected element id
        element: usize,
        /// The universe size the heap was built with
        universe_size: usize,
    },
    /// An update tried to raise the priority of a present element
    PriorityIncreaseRejected {
        /// The element whose update was rejected
        element: usize,
    },
}

impl fmt::Display for QueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueueError::OutOfRange {
                element,
                universe_size,
            } => {
                write!(
                    f,
                    "element {element} is outside the universe [0, {universe_size})"
                )
            }
            QueueError::PriorityIncreaseRejected { element } => {
                write!(
                    f,
                    "new priority for element {element} is greater than its current priority"
                )
            }
        }
    }
}

impl std::error::Error for QueueError {}

/// Min-priority queue over a dense, fixed universe of element ids
///
/// # Example
///
/// ```rust
/// use indexed_binomial_heap::IndexedHeap;
/// use indexed_binomial_heap::queue::PriorityQueue;
///
/// let mut queue: PriorityQueue<u32> = IndexedHeap::with_universe(4);
/// queue.insert(2, 40).unwrap();
/// queue.insert(3, 10).unwrap();
/// queue.insert(2, 5).unwrap(); // decrease-key
///
/// assert_eq!(queue.peek_min(), Some(2));
/// assert_eq!(queue.extract_min(), Some(2));
/// assert_eq!(queue.extract_min(), Some(3));
/// assert_eq!(queue.extract_min(), None);
/// ```
pub trait IndexedHeap<P: Ord> {
    /// Creates an empty heap accepting ids in `[0, universe_size)`
    fn with_universe(universe_size: usize) -> Self;

    /// Size of the id universe fixed at construction
    fn universe_size(&self) -> usize;

    /// Number of elements currently present
    fn len(&self) -> usize;

    /// Returns true if no element is present
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if `element` is currently present
    fn contains(&self, element: usize) -> bool;

    /// Inserts `element` with `priority`, or lowers its priority if present
    ///
    /// # Errors
    /// - [`QueueError::OutOfRange`] if `element >= universe_size`
    /// - [`QueueError::PriorityIncreaseRejected`] if `element` is present
    ///   with a priority strictly less than `priority`
    ///
    /// On error the heap is left unchanged. An equal priority is accepted.
    fn insert(&mut self, element: usize, priority: P) -> Result<(), QueueError>;

    /// Returns the element with the minimum priority without removing it
    fn peek_min(&self) -> Option<usize>;

    /// Removes and returns the element with the minimum priority
    fn extract_min(&mut self) -> Option<usize>;
}
