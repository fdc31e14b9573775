//! Order type for binomial trees.
//!
//! The order of a binomial tree is the number of children of its root. A tree
//! of order k holds exactly 2ᵏ nodes, so the largest order that can occur is
//! bounded by `log₂(n)`.
//!
//! `u8` covers orders up to 255, i.e. trees of 2²⁵⁵ nodes, which is far beyond
//! anything that fits in memory. Using `u8` instead of `usize` keeps the node
//! struct small.

/// Order (rank) of a binomial tree: the number of children of its root.
pub type Order = u8;

/// Maximum representable order.
pub const MAX_ORDER: Order = u8::MAX;

/// Increment an order, panicking on overflow.
///
/// # Panics
///
/// Panics if `order == MAX_ORDER`. Reaching this requires a forest of more
/// than 2²⁵⁵ elements, so it can only happen through a structural bug.
///
/// # Example
///
/// ```rust
/// use indexed_binomial_heap::order::{checked_increment, Order};
///
/// let order: Order = 3;
/// assert_eq!(checked_increment(order), 4);
/// ```
#[inline]
pub fn checked_increment(order: Order) -> Order {
    order
        .checked_add(1)
        .expect("order overflow: a binomial tree of order 255 already holds 2²⁵⁵ nodes")
}

/// Number of nodes in a binomial tree of the given order (2ᵏ).
///
/// Saturates at `usize::MAX` for orders at or beyond the pointer width.
///
/// ```rust
/// use indexed_binomial_heap::order::tree_size;
///
/// assert_eq!(tree_size(0), 1);
/// assert_eq!(tree_size(4), 16);
/// ```
#[inline]
pub fn tree_size(order: Order) -> usize {
    1usize.checked_shl(u32::from(order)).unwrap_or(usize::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_increment() {
        assert_eq!(checked_increment(0), 1);
        assert_eq!(checked_increment(63), 64);
        assert_eq!(checked_increment(254), 255);
    }

    #[test]
    #[should_panic(expected = "order overflow")]
    fn test_checked_increment_overflow() {
        checked_increment(MAX_ORDER);
    }

    #[test]
    fn test_tree_size() {
        assert_eq!(tree_size(0), 1);
        assert_eq!(tree_size(1), 2);
        assert_eq!(tree_size(10), 1024);
        assert_eq!(tree_size(200), usize::MAX);
    }

    #[test]
    fn test_order_is_one_byte() {
        assert_eq!(std::mem::size_of::<Order>(), 1);
    }
}
