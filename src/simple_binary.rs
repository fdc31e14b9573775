//! Indexed binary heap baseline
//!
//! A straightforward array-backed binary min-heap with a dense id → position
//! table. It implements [`IndexedHeap`] with exactly the same contract as
//! [`PriorityQueue`](crate::queue::PriorityQueue), which makes it a convenient
//! oracle for differential tests and a baseline for benchmarks.
//!
//! # Time Complexity
//!
//! | Operation     | Complexity |
//! |---------------|------------|
//! | `insert`      | O(log n)   |
//! | `extract_min` | O(log n)   |
//! | `peek_min`    | O(1)       |
//!
//! # Example
//!
//! ```rust
//! use indexed_binomial_heap::IndexedHeap;
//! use indexed_binomial_heap::simple_binary::IndexedBinaryHeap;
//!
//! let mut heap = IndexedBinaryHeap::with_universe(3);
//! heap.insert(0, 3).unwrap();
//! heap.insert(1, 1).unwrap();
//! heap.insert(2, 2).unwrap();
//!
//! assert_eq!(heap.peek_min(), Some(1));
//! assert_eq!(heap.extract_min(), Some(1));
//! assert_eq!(heap.extract_min(), Some(2));
//! assert_eq!(heap.extract_min(), Some(0));
//! assert_eq!(heap.extract_min(), None);
//! ```

use crate::traits::{IndexedHeap, QueueError};

/// A binary min-heap addressed by element id
#[derive(Debug, Clone)]
pub struct IndexedBinaryHeap<P> {
    /// The heap data stored as a vector of (priority, element) pairs
    data: Vec<(P, usize)>,
    /// Element id -> index into `data`
    positions: Vec<Option<usize>>,
}

impl<P: Ord> IndexedHeap<P> for IndexedBinaryHeap<P> {
    fn with_universe(universe_size: usize) -> Self {
        Self {
            data: Vec::new(),
            positions: vec![None; universe_size],
        }
    }

    fn universe_size(&self) -> usize {
        self.positions.len()
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn contains(&self, element: usize) -> bool {
        matches!(self.positions.get(element), Some(Some(_)))
    }

    fn insert(&mut self, element: usize, priority: P) -> Result<(), QueueError> {
        let universe_size = self.positions.len();
        let slot = self
            .positions
            .get(element)
            .copied()
            .ok_or(QueueError::OutOfRange {
                element,
                universe_size,
            })?;

        match slot {
            Some(index) => {
                if priority > self.data[index].0 {
                    return Err(QueueError::PriorityIncreaseRejected { element });
                }
                self.data[index].0 = priority;
                self.sift_up(index);
            }
            None => {
                self.data.push((priority, element));
                let index = self.data.len() - 1;
                self.positions[element] = Some(index);
                self.sift_up(index);
            }
        }
        Ok(())
    }

    fn peek_min(&self) -> Option<usize> {
        self.data.first().map(|&(_, element)| element)
    }

    fn extract_min(&mut self) -> Option<usize> {
        if self.data.is_empty() {
            return None;
        }

        let last_idx = self.data.len() - 1;
        self.swap(0, last_idx);
        let (_, element) = self.data.pop()?;
        self.positions[element] = None;

        if !self.data.is_empty() {
            self.sift_down(0);
        }

        Some(element)
    }
}

impl<P: Ord> IndexedBinaryHeap<P> {
    /// Swap two slots and keep the position table in sync
    fn swap(&mut self, a: usize, b: usize) {
        self.data.swap(a, b);
        self.positions[self.data[a].1] = Some(a);
        self.positions[self.data[b].1] = Some(b);
    }

    /// Move element at index up to maintain heap property
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.data[index].0 < self.data[parent].0 {
                self.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move element at index down to maintain heap property
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut smallest = index;

            if left < len && self.data[left].0 < self.data[smallest].0 {
                smallest = left;
            }
            if right < len && self.data[right].0 < self.data[smallest].0 {
                smallest = right;
            }

            if smallest != index {
                self.swap(index, smallest);
                index = smallest;
            } else {
                break;
            }
        }
    }
}
