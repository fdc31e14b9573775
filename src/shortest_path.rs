//! Dijkstra's shortest paths over a dense node universe
//!
//! Node ids are `0..adjacency.len()`, which is exactly the id universe an
//! [`IndexedHeap`] is built over. Relaxing an edge re-inserts the target with
//! its new tentative distance, which the heap turns into a decrease-key when
//! the target is already queued.
//!
//! # Example
//!
//! ```rust
//! use indexed_binomial_heap::queue::PriorityQueue;
//! use indexed_binomial_heap::shortest_path::dijkstra;
//!
//! //   0 --4--> 1
//! //   |        ^
//! //   1        1
//! //   v        |
//! //   2 --1--> 3
//! let graph: Vec<Vec<(usize, u32)>> = vec![
//!     vec![(1, 4), (2, 1)],
//!     vec![],
//!     vec![(3, 1)],
//!     vec![(1, 1)],
//! ];
//!
//! let distances = dijkstra::<u32, PriorityQueue<u32>>(&graph, 0).unwrap();
//! assert_eq!(distances, vec![Some(0), Some(3), Some(1), Some(2)]);
//! ```

use std::ops::Add;

use crate::traits::{IndexedHeap, QueueError};

/// Trait for types that can be used as edge weights and distances.
///
/// `Default` supplies the zero distance of the source.
pub trait Cost: Ord + Copy + Add<Output = Self> + Default {}

impl<T> Cost for T where T: Ord + Copy + Add<Output = Self> + Default {}

/// Computes the distance from `source` to every node
///
/// `adjacency[u]` lists the `(v, weight)` edges leaving `u`. Weights must be
/// non-negative. Unreachable nodes get `None`.
///
/// # Errors
/// [`QueueError::OutOfRange`] if `source` or any edge target is not a node of
/// the graph.
pub fn dijkstra<C, H>(
    adjacency: &[Vec<(usize, C)>],
    source: usize,
) -> Result<Vec<Option<C>>, QueueError>
where
    C: Cost,
    H: IndexedHeap<C>,
{
    let node_count = adjacency.len();
    let mut heap = H::with_universe(node_count);
    let mut distance: Vec<Option<C>> = vec![None; node_count];
    let mut settled = vec![false; node_count];

    heap.insert(source, C::default())?;
    distance[source] = Some(C::default());

    while let Some(node) = heap.extract_min() {
        settled[node] = true;
        let Some(base) = distance[node] else {
            continue;
        };

        for &(target, weight) in &adjacency[node] {
            let settled_target = settled.get(target).copied().ok_or(QueueError::OutOfRange {
                element: target,
                universe_size: node_count,
            })?;
            if settled_target {
                continue;
            }

            let candidate = base + weight;
            if distance[target].map_or(true, |current| candidate < current) {
                distance[target] = Some(candidate);
                heap.insert(target, candidate)?;
            }
        }
    }

    Ok(distance)
}
