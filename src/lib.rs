//! Addressable binomial-heap priority queue
//!
//! This crate provides a min-priority queue over a fixed, dense universe of
//! element ids `[0, universe_size)` with in-place decrease-key, as used by
//! discrete-event and admission schedulers or by graph searches over integer
//! node ids.
//!
//! # Features
//!
//! - **Binomial Priority Queue** ([`queue::PriorityQueue`]): O(log n) insert,
//!   peek-min, extract-min and decrease-key. Inserting an id that is already
//!   present lowers its priority; raising it is rejected.
//! - **Indexed Binary Heap** ([`simple_binary::IndexedBinaryHeap`]): array
//!   baseline with the same contract
//! - **Dijkstra** ([`shortest_path::dijkstra`]): shortest paths generic over
//!   any [`IndexedHeap`]
//!
//! # Example
//!
//! ```rust
//! use indexed_binomial_heap::queue::PriorityQueue;
//!
//! let mut queue = PriorityQueue::new(3);
//! queue.insert(0, 30).unwrap();
//! queue.insert(1, 20).unwrap();
//! queue.insert(2, 10).unwrap();
//! queue.insert(0, 5).unwrap();
//!
//! assert_eq!(queue.extract_min(), Some(0));
//! assert_eq!(queue.extract_min(), Some(2));
//! assert_eq!(queue.extract_min(), Some(1));
//! assert_eq!(queue.extract_min(), None);
//! ```

mod forest;
mod node;
pub mod order;
pub mod queue;
pub mod shortest_path;
pub mod simple_binary;
mod storage;
pub mod traits;

pub use forest::StructureViolation;
pub use queue::PriorityQueue;
pub use traits::{IndexedHeap, QueueError};
