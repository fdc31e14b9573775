//! Addressable binomial-heap priority queue over a dense id universe
//!
//! [`PriorityQueue`] owns one binomial forest and a lookup table with one
//! slot per element id. An id maps to a node exactly when it is present, and
//! the mapped node's `element` always equals the id.
//!
//! | Operation       | Complexity |
//! |-----------------|------------|
//! | `insert` (new)  | O(log n)   |
//! | `insert` (decrease-key) | O(log n) |
//! | `peek_min`      | O(log n)   |
//! | `extract_min`   | O(log n)   |
//! | `contains`, `priority` | O(1) |
//!
//! # Example
//!
//! ```rust
//! use indexed_binomial_heap::queue::PriorityQueue;
//! use indexed_binomial_heap::QueueError;
//!
//! let mut queue = PriorityQueue::new(3);
//! queue.insert(0, 30).unwrap();
//! queue.insert(1, 20).unwrap();
//! queue.insert(2, 10).unwrap();
//! assert_eq!(queue.peek_min(), Some(2));
//!
//! // Re-inserting a present id lowers its priority in place
//! queue.insert(0, 5).unwrap();
//! assert_eq!(queue.peek_min(), Some(0));
//!
//! // Raising it is rejected
//! assert_eq!(
//!     queue.insert(0, 50),
//!     Err(QueueError::PriorityIncreaseRejected { element: 0 })
//! );
//!
//! assert_eq!(queue.extract_min(), Some(0));
//! assert_eq!(queue.extract_min(), Some(2));
//! assert_eq!(queue.extract_min(), Some(1));
//! assert_eq!(queue.extract_min(), None);
//! ```

use log::{debug, trace};

use crate::forest::{Forest, StructureViolation};
use crate::storage::{Node, NodeArena, NodeKey};
use crate::traits::{IndexedHeap, QueueError};

/// Binomial-heap priority queue over element ids `[0, universe_size)`
///
/// Not synchronized: a queue shared between threads needs an external lock
/// around the whole instance.
#[derive(Debug, Clone)]
pub struct PriorityQueue<P> {
    nodes: NodeArena<P>,
    forest: Forest,
    /// Element id -> node currently holding that id
    lookup: Vec<Option<NodeKey>>,
}

impl<P: Ord> PriorityQueue<P> {
    /// Creates an empty queue accepting ids in `[0, universe_size)`
    pub fn new(universe_size: usize) -> Self {
        Self {
            nodes: NodeArena::default(),
            forest: Forest::default(),
            lookup: vec![None; universe_size],
        }
    }

    /// Size of the id universe fixed at construction
    pub fn universe_size(&self) -> usize {
        self.lookup.len()
    }

    /// Number of elements the queue can hold without reallocating node
    /// storage. Grows with the element count, not the universe size.
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Number of elements currently present
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if no element is present
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 0
    }

    /// Returns true if `element` is present. Out-of-range ids are never
    /// present.
    pub fn contains(&self, element: usize) -> bool {
        matches!(self.lookup.get(element), Some(Some(_)))
    }

    /// Current priority of `element`, if present
    pub fn priority(&self, element: usize) -> Option<&P> {
        let key = (*self.lookup.get(element)?)?;
        Some(&self.nodes[key].priority)
    }

    /// Number of binomial trees in the forest (the number of set bits in
    /// `len()`)
    pub fn tree_count(&self) -> usize {
        self.forest.roots().len()
    }

    /// Inserts `element` with `priority`, or lowers its priority if present
    ///
    /// **Time Complexity**: O(log n)
    ///
    /// A new id becomes a single-node tree which is merged into the forest
    /// like adding 1 to a binary number. A present id takes the decrease-key
    /// path: the new priority is written and bubbled up its tree.
    ///
    /// # Errors
    /// - [`QueueError::OutOfRange`] if `element >= universe_size()`
    /// - [`QueueError::PriorityIncreaseRejected`] if `element` is present
    ///   and `priority` is greater than its current priority
    ///
    /// The queue is unchanged when an error is returned.
    pub fn insert(&mut self, element: usize, priority: P) -> Result<(), QueueError> {
        let universe_size = self.universe_size();
        let slot = self
            .lookup
            .get(element)
            .copied()
            .ok_or(QueueError::OutOfRange {
                element,
                universe_size,
            })?;

        if let Some(key) = slot {
            trace!("decrease-key for element {element}");
            return self
                .nodes
                .update_priority(key, priority, &mut self.lookup)
                .inspect_err(|err| debug!("rejected update: {err}"));
        }

        trace!("inserting element {element}");
        let key = self.nodes.insert(Node::singleton(element, priority));
        self.lookup[element] = Some(key);
        self.forest.merge(Forest::singleton(key), &mut self.nodes);
        Ok(())
    }

    /// Returns the element with the minimum priority without removing it
    ///
    /// Among equal priorities the choice is unspecified and may differ
    /// between calls separated by other operations.
    pub fn peek_min(&self) -> Option<usize> {
        self.peek_min_entry().map(|(element, _)| element)
    }

    /// Returns the minimum element together with its priority
    pub fn peek_min_entry(&self) -> Option<(usize, &P)> {
        let key = self.forest.peek_min(&self.nodes)?;
        let node = &self.nodes[key];
        Some((node.element, &node.priority))
    }

    /// Removes and returns the element with the minimum priority
    ///
    /// Returns `None` on an empty queue. Always removes the element that
    /// [`peek_min`](Self::peek_min) reports.
    pub fn extract_min(&mut self) -> Option<usize> {
        self.extract_min_entry().map(|(element, _)| element)
    }

    /// Removes the minimum element and returns it with its priority
    pub fn extract_min_entry(&mut self) -> Option<(usize, P)> {
        let (element, priority) = self.forest.extract_min(&mut self.nodes)?;
        self.lookup[element] = None;
        trace!("extracted element {element}");
        Some((element, priority))
    }

    /// Removes every element. The universe size is kept.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.forest.clear();
        self.lookup.fill(None);
    }

    /// Checks every structural invariant of the forest and the lookup table
    ///
    /// Intended for tests and debugging; runs in O(n + universe_size).
    ///
    /// # Errors
    /// The first [`StructureViolation`] found.
    pub fn verify_structure(&self) -> Result<(), StructureViolation> {
        let reachable = self.forest.verify(&self.nodes)?;
        if reachable != self.nodes.len() {
            return Err(StructureViolation::CountMismatch {
                reachable,
                stored: self.nodes.len(),
            });
        }

        for (element, slot) in self.lookup.iter().enumerate() {
            if let Some(key) = *slot {
                match self.nodes.get(key) {
                    Some(node) if node.element == element => {}
                    _ => return Err(StructureViolation::LookupMismatch { element }),
                }
            }
        }

        for (key, node) in self.nodes.iter() {
            if self.lookup.get(node.element).copied().flatten() != Some(key) {
                return Err(StructureViolation::LookupMismatch {
                    element: node.element,
                });
            }
        }

        Ok(())
    }
}

impl<P: Ord> IndexedHeap<P> for PriorityQueue<P> {
    fn with_universe(universe_size: usize) -> Self {
        Self::new(universe_size)
    }

    fn universe_size(&self) -> usize {
        PriorityQueue::universe_size(self)
    }

    fn len(&self) -> usize {
        PriorityQueue::len(self)
    }

    fn contains(&self, element: usize) -> bool {
        PriorityQueue::contains(self, element)
    }

    fn insert(&mut self, element: usize, priority: P) -> Result<(), QueueError> {
        PriorityQueue::insert(self, element, priority)
    }

    fn peek_min(&self) -> Option<usize> {
        PriorityQueue::peek_min(self)
    }

    fn extract_min(&mut self) -> Option<usize> {
        PriorityQueue::extract_min(self)
    }
}
