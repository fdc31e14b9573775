//! Binomial tree primitives
//!
//! **Binomial Tree Bₖ**: Recursively defined:
//! - B₀ is a single node
//! - Bₖ is formed by linking two B_{k-1} trees
//! - Bₖ has exactly 2ᵏ nodes and its root has children of orders 0, 1, ..., k-1
//!
//! The primitives here operate on a [`NodeArena`]:
//! - [`combine`](NodeArena::combine): link two trees of equal order
//! - [`decompose`](NodeArena::decompose): remove a root, releasing its children
//!   as an order-ascending forest
//! - [`update_priority`](NodeArena::update_priority): decrease-key by bubbling
//!   the payload upward, keeping the id lookup table in sync
//!
//! **Linking rule**: the root with the smaller priority becomes the parent; on
//! equal priorities the root holding the smaller element id wins. Every tree
//! is therefore heap-ordered at all times, and the minimum of a forest is
//! always one of its roots.

use std::cmp::Ordering;
use std::mem;

use crate::forest::Forest;
use crate::order::checked_increment;
use crate::storage::{NodeArena, NodeKey};
use crate::traits::QueueError;

impl<P: Ord> NodeArena<P> {
    /// Returns true if `a` should become the parent when linked with `b`
    fn precedes(&self, a: NodeKey, b: NodeKey) -> bool {
        let (a, b) = (&self[a], &self[b]);
        match a.priority.cmp(&b.priority) {
            Ordering::Less => true,
            Ordering::Greater => false,
            Ordering::Equal => a.element < b.element,
        }
    }

    /// Links two trees of equal order k into one tree of order k+1
    ///
    /// **Time Complexity**: O(1)
    ///
    /// The losing root is appended as the new last child of the winner, so
    /// the winner's children stay sorted by ascending order (the new child
    /// has order k, all existing children have orders 0..k).
    pub(crate) fn combine(&mut self, a: NodeKey, b: NodeKey) -> NodeKey {
        debug_assert_eq!(
            self[a].order,
            self[b].order,
            "combine requires equal orders"
        );

        let (parent, child) = if self.precedes(a, b) { (a, b) } else { (b, a) };

        self[child].parent = Some(parent);

        let parent_node = &mut self[parent];
        parent_node.children.push(child);
        parent_node.order = checked_increment(parent_node.order);

        parent
    }

    /// Removes a root from the arena and returns its payload plus its
    /// children as a forest
    ///
    /// **Time Complexity**: O(order)
    ///
    /// Children were appended in increasing order by [`combine`](Self::combine),
    /// so they already satisfy the forest's order-ascending invariant.
    ///
    /// # Panics
    ///
    /// Panics if `root` is not live in this arena.
    pub(crate) fn decompose(&mut self, root: NodeKey) -> (usize, P, Forest) {
        let node = self
            .remove(root)
            .expect("decompose called with a key that is not in the arena");
        debug_assert!(node.parent.is_none(), "decompose called on a non-root");

        for &child in &node.children {
            self[child].parent = None;
        }

        let children = Forest::from_roots(node.children.into_vec());
        (node.element, node.priority, children)
    }

    /// Lowers the priority stored at `key` and restores heap order
    ///
    /// **Time Complexity**: O(log n)
    ///
    /// **Algorithm**:
    /// 1. Reject the update if `priority` is greater than the current value
    /// 2. Store the new priority
    /// 3. While the parent holds a greater priority, swap the (priority,
    ///    element) payloads of node and parent and rewrite both lookup
    ///    entries, then continue from the parent
    ///
    /// The tree shape never changes; only payloads move. An equal priority is
    /// written and the loop exits immediately.
    ///
    /// # Errors
    /// [`QueueError::PriorityIncreaseRejected`] if `priority` is strictly
    /// greater than the current priority. Nothing is modified in that case.
    pub(crate) fn update_priority(
        &mut self,
        key: NodeKey,
        priority: P,
        lookup: &mut [Option<NodeKey>],
    ) -> Result<(), QueueError> {
        let node = &mut self[key];
        if priority > node.priority {
            return Err(QueueError::PriorityIncreaseRejected {
                element: node.element,
            });
        }
        node.priority = priority;

        let mut current = key;
        while let Some(parent) = self[current].parent {
            if self[parent].priority <= self[current].priority {
                break;
            }

            let (child_node, parent_node) = self
                .get_pair_mut(current, parent)
                .expect("a node and its parent are distinct live nodes");
            mem::swap(&mut child_node.priority, &mut parent_node.priority);
            mem::swap(&mut child_node.element, &mut parent_node.element);

            lookup[child_node.element] = Some(current);
            lookup[parent_node.element] = Some(parent);

            current = parent;
        }

        Ok(())
    }
}
