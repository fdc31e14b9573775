//! Arena storage for binomial tree nodes
//!
//! Nodes live in a [`SlotMap`] and refer to each other through generational
//! [`NodeKey`]s. Ownership flows down the trees (a parent's `children` vector
//! and a forest's root vector hold the keys); the `parent` key is a
//! non-owning back-reference that is only followed upward by decrease-key.
//!
//! Sibling order is positional: a root's successor is the next entry of the
//! forest's root vector, a child's successor is the next entry of its
//! parent's `children`.

use std::ops::{Index, IndexMut};

use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;

use crate::order::Order;

new_key_type! {
    /// Stable index of a node in a [`NodeArena`]
    pub struct NodeKey;
}

/// Inline capacity of a node's children list. Trees up to order 8 (256 nodes)
/// never spill to the heap.
pub(crate) const INLINE_CHILDREN: usize = 8;

/// Children of a node, ordered by strictly increasing order `0..order`
pub(crate) type Children = SmallVec<[NodeKey; INLINE_CHILDREN]>;

/// A binomial tree node
///
/// `priority` and `element` form the payload and move between positions
/// during decrease-key; `order`, `parent` and `children` describe the shape
/// and only change when trees are combined or decomposed.
#[derive(Debug, Clone)]
pub(crate) struct Node<P> {
    pub(crate) priority: P,
    pub(crate) element: usize,
    /// Number of children. A tree of order k has 2ᵏ nodes.
    pub(crate) order: Order,
    /// Back-reference to the parent (None for roots)
    pub(crate) parent: Option<NodeKey>,
    pub(crate) children: Children,
}

impl<P> Node<P> {
    /// A fresh order-0 tree
    pub(crate) fn singleton(element: usize, priority: P) -> Self {
        Node {
            priority,
            element,
            order: 0,
            parent: None,
            children: Children::new(),
        }
    }
}

/// Slot-map arena owning every node of one queue
#[derive(Debug, Clone)]
pub(crate) struct NodeArena<P> {
    nodes: SlotMap<NodeKey, Node<P>>,
}

impl<P> Default for NodeArena<P> {
    fn default() -> Self {
        Self {
            nodes: SlotMap::with_key(),
        }
    }
}

impl<P> NodeArena<P> {
    pub(crate) fn insert(&mut self, node: Node<P>) -> NodeKey {
        self.nodes.insert(node)
    }

    pub(crate) fn remove(&mut self, key: NodeKey) -> Option<Node<P>> {
        self.nodes.remove(key)
    }

    pub(crate) fn get(&self, key: NodeKey) -> Option<&Node<P>> {
        self.nodes.get(key)
    }

    /// Mutable access to two distinct live nodes at once
    pub(crate) fn get_pair_mut(
        &mut self,
        a: NodeKey,
        b: NodeKey,
    ) -> Option<(&mut Node<P>, &mut Node<P>)> {
        self.nodes
            .get_disjoint_mut([a, b])
            .map(|[first, second]| (first, second))
    }

    /// Number of nodes the arena can hold without reallocating
    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (NodeKey, &Node<P>)> {
        self.nodes.iter()
    }
}

/// Indexing panics on a stale key; callers only index keys reachable from the
/// forest or the lookup table, which are always live.
impl<P> Index<NodeKey> for NodeArena<P> {
    type Output = Node<P>;

    fn index(&self, key: NodeKey) -> &Node<P> {
        &self.nodes[key]
    }
}

impl<P> IndexMut<NodeKey> for NodeArena<P> {
    fn index_mut(&mut self, key: NodeKey) -> &mut Node<P> {
        &mut self.nodes[key]
    }
}
