//! Scenario and edge-case tests for the binomial priority queue
//!
//! Each helper is generic over [`IndexedHeap`] so the same scenario runs
//! against both the binomial queue and the binary baseline.

use indexed_binomial_heap::simple_binary::IndexedBinaryHeap;
use indexed_binomial_heap::{IndexedHeap, PriorityQueue, QueueError};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Empty heap behaves correctly
fn test_empty_heap<H: IndexedHeap<i32>>(universe_size: usize) {
    let mut heap = H::with_universe(universe_size);
    assert!(heap.is_empty());
    assert_eq!(heap.len(), 0);
    assert_eq!(heap.universe_size(), universe_size);
    assert_eq!(heap.peek_min(), None);
    assert_eq!(heap.extract_min(), None);
    assert_eq!(heap.extract_min(), None);
}

/// The documented update-priority scenario over a universe of 3
fn test_update_priority_scenario<H: IndexedHeap<i32>>() {
    let mut heap = H::with_universe(3);

    heap.insert(0, 30).unwrap();
    assert_eq!(heap.peek_min(), Some(0));
    heap.insert(1, 20).unwrap();
    assert_eq!(heap.peek_min(), Some(1));
    heap.insert(2, 10).unwrap();
    assert_eq!(heap.peek_min(), Some(2));

    heap.insert(0, 5).unwrap();
    assert_eq!(heap.extract_min(), Some(0));

    heap.insert(0, 5).unwrap();
    assert_eq!(heap.peek_min(), Some(0));

    heap.insert(2, 0).unwrap();
    assert_eq!(heap.extract_min(), Some(2));
    assert_eq!(heap.extract_min(), Some(0));
    assert_eq!(heap.extract_min(), Some(1));
    assert_eq!(heap.extract_min(), None);
}

/// Increase is rejected and leaves state unchanged; equal is a no-op
fn test_priority_increase_rejected<H: IndexedHeap<i32>>() {
    let mut heap = H::with_universe(4);
    heap.insert(0, 10).unwrap();
    heap.insert(1, 20).unwrap();
    heap.insert(2, 30).unwrap();

    assert_eq!(
        heap.insert(0, 25),
        Err(QueueError::PriorityIncreaseRejected { element: 0 })
    );
    assert_eq!(heap.len(), 3);
    assert_eq!(heap.peek_min(), Some(0));

    assert!(heap.insert(1, 20).is_ok());
    assert_eq!(heap.len(), 3);

    assert_eq!(heap.extract_min(), Some(0));
    assert_eq!(heap.extract_min(), Some(1));
    assert_eq!(heap.extract_min(), Some(2));
}

/// Out-of-range ids fail fast without touching the heap
fn test_out_of_range<H: IndexedHeap<i32>>() {
    let mut heap = H::with_universe(3);
    heap.insert(1, 5).unwrap();

    for element in [3, 4, usize::MAX] {
        assert_eq!(
            heap.insert(element, 0),
            Err(QueueError::OutOfRange {
                element,
                universe_size: 3
            })
        );
    }
    assert_eq!(heap.len(), 1);
    assert_eq!(heap.peek_min(), Some(1));
    assert!(!heap.contains(3));
}

/// Peek followed by extract returns the same element
fn test_peek_then_extract<H: IndexedHeap<i32>>() {
    let mut heap = H::with_universe(64);
    for element in 0..64 {
        heap.insert(element, ((element * 37) % 64) as i32).unwrap();
    }
    while let Some(peeked) = heap.peek_min() {
        assert_eq!(heap.extract_min(), Some(peeked));
    }
    assert!(heap.is_empty());
}

/// Re-adding an extracted id starts fresh
fn test_reinsert_after_extract<H: IndexedHeap<i32>>() {
    let mut heap = H::with_universe(2);
    heap.insert(0, 1).unwrap();
    heap.insert(1, 2).unwrap();
    assert_eq!(heap.extract_min(), Some(0));
    assert!(!heap.contains(0));

    // A larger priority is fine: the id is no longer present
    heap.insert(0, 100).unwrap();
    assert!(heap.contains(0));
    assert_eq!(heap.extract_min(), Some(1));
    assert_eq!(heap.extract_min(), Some(0));
}

#[test]
fn test_binomial_empty() {
    init_logging();
    test_empty_heap::<PriorityQueue<i32>>(0);
    test_empty_heap::<PriorityQueue<i32>>(1);
    test_empty_heap::<PriorityQueue<i32>>(1000);
}

#[test]
fn test_binomial_update_priority_scenario() {
    init_logging();
    test_update_priority_scenario::<PriorityQueue<i32>>();
}

#[test]
fn test_binomial_priority_increase_rejected() {
    init_logging();
    test_priority_increase_rejected::<PriorityQueue<i32>>();
}

#[test]
fn test_binomial_out_of_range() {
    init_logging();
    test_out_of_range::<PriorityQueue<i32>>();
}

#[test]
fn test_binomial_peek_then_extract() {
    test_peek_then_extract::<PriorityQueue<i32>>();
}

#[test]
fn test_binomial_reinsert_after_extract() {
    test_reinsert_after_extract::<PriorityQueue<i32>>();
}

#[test]
fn test_binary_empty() {
    test_empty_heap::<IndexedBinaryHeap<i32>>(0);
    test_empty_heap::<IndexedBinaryHeap<i32>>(10);
}

#[test]
fn test_binary_update_priority_scenario() {
    test_update_priority_scenario::<IndexedBinaryHeap<i32>>();
}

#[test]
fn test_binary_priority_increase_rejected() {
    test_priority_increase_rejected::<IndexedBinaryHeap<i32>>();
}

#[test]
fn test_binary_out_of_range() {
    test_out_of_range::<IndexedBinaryHeap<i32>>();
}

#[test]
fn test_binary_peek_then_extract() {
    test_peek_then_extract::<IndexedBinaryHeap<i32>>();
}

#[test]
fn test_binary_reinsert_after_extract() {
    test_reinsert_after_extract::<IndexedBinaryHeap<i32>>();
}

// Binomial-specific structure checks

#[test]
fn test_tree_count_tracks_binary_representation() {
    init_logging();
    let mut queue = PriorityQueue::new(256);
    for element in 0..256 {
        queue.insert(element, (255 - element) as i64).unwrap();
        assert_eq!(queue.tree_count(), queue.len().count_ones() as usize);
    }
    for _ in 0..256 {
        queue.extract_min();
        assert_eq!(queue.tree_count(), queue.len().count_ones() as usize);
        assert!(queue.verify_structure().is_ok());
    }
}

#[test]
fn test_entries_report_priorities() {
    let mut queue = PriorityQueue::new(4);
    queue.insert(3, "delta").unwrap();
    queue.insert(1, "bravo").unwrap();
    queue.insert(2, "charlie").unwrap();

    assert_eq!(queue.peek_min_entry(), Some((1, &"bravo")));
    assert_eq!(queue.priority(3), Some(&"delta"));
    queue.insert(3, "alpha").unwrap();
    assert_eq!(queue.extract_min_entry(), Some((3, "alpha")));
    assert_eq!(queue.extract_min_entry(), Some((1, "bravo")));
    assert_eq!(queue.extract_min_entry(), Some((2, "charlie")));
    assert_eq!(queue.extract_min_entry(), None);
}

#[test]
fn test_equal_priorities_all_extracted() {
    let mut queue = PriorityQueue::new(16);
    for element in 0..16 {
        queue.insert(element, 7u8).unwrap();
    }
    let mut seen: Vec<usize> = std::iter::from_fn(|| queue.extract_min()).collect();
    seen.sort_unstable();
    assert_eq!(seen, (0..16).collect::<Vec<_>>());
}

#[test]
fn test_error_display() {
    let out = QueueError::OutOfRange {
        element: 9,
        universe_size: 3,
    };
    assert_eq!(out.to_string(), "element 9 is outside the universe [0, 3)");

    let increase = QueueError::PriorityIncreaseRejected { element: 2 };
    assert!(increase.to_string().contains("element 2"));

    let boxed: Box<dyn std::error::Error> = Box::new(increase);
    assert!(boxed.source().is_none());
}
