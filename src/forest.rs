//! Binomial forests
//!
//! A forest is a list of heap-ordered binomial trees sorted by strictly
//! increasing order, with at most one tree per order. This is analogous to
//! the binary representation of the element count n: a tree of order k is
//! present exactly when bit k of n is set.
//!
//! **Key Operations**:
//! - **Merge**: O(log n) - walk both root lists like binary addition with a
//!   single carry slot
//! - **Peek-min**: O(log n) - scan the roots
//! - **Extract-min**: O(log n) - splice out the minimum root, decompose it,
//!   merge its children back

use std::fmt;
use std::iter::Peekable;
use std::mem;

use crate::order::{tree_size, Order};
use crate::storage::{NodeArena, NodeKey};

/// Order-ascending list of binomial tree roots
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Forest {
    roots: Vec<NodeKey>,
}

impl Forest {
    /// Wraps a single tree
    pub(crate) fn singleton(root: NodeKey) -> Self {
        Forest { roots: vec![root] }
    }

    /// Wraps roots that are already sorted by strictly increasing order
    pub(crate) fn from_roots(roots: Vec<NodeKey>) -> Self {
        Forest { roots }
    }

    pub(crate) fn roots(&self) -> &[NodeKey] {
        &self.roots
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.roots.clear();
    }

    /// Merges `other` into this forest
    ///
    /// **Time Complexity**: O(log n)
    ///
    /// **Algorithm**: Both root lists are consumed in lock-step, always taking
    /// the head with the smaller order. Each tree is offered to a single
    /// carry slot:
    /// - empty slot: the tree becomes the carry
    /// - carry of smaller order: the carry is final, emit it; the tree
    ///   becomes the carry
    /// - carry of equal order: combine them; the result (order + 1) is the
    ///   new carry
    /// - carry of greater order: the tree is final, emit it
    ///
    /// The last case arises when both inputs hold a tree of order k and a
    /// carry of order k arrives from below: two of the three combine into
    /// order k+1 and the third is emitted as-is. Nodes are conserved and
    /// emitted orders are strictly increasing.
    pub(crate) fn merge<P: Ord>(&mut self, other: Forest, arena: &mut NodeArena<P>) {
        if other.is_empty() {
            return;
        }
        if self.is_empty() {
            self.roots = other.roots;
            return;
        }

        let capacity = self.roots.len() + other.roots.len();
        let mut left = mem::take(&mut self.roots).into_iter().peekable();
        let mut right = other.roots.into_iter().peekable();
        let mut merged = Vec::with_capacity(capacity);
        let mut carry: Option<NodeKey> = None;

        while let Some(tree) = next_lowest(&mut left, &mut right, arena) {
            debug_assert!(arena[tree].parent.is_none());
            carry = match carry {
                None => Some(tree),
                Some(c) => {
                    let (carry_order, tree_order) = (arena[c].order, arena[tree].order);
                    if carry_order < tree_order {
                        merged.push(c);
                        Some(tree)
                    } else if carry_order == tree_order {
                        Some(arena.combine(c, tree))
                    } else {
                        merged.push(tree);
                        Some(c)
                    }
                }
            };
        }

        merged.extend(carry);
        self.roots = merged;
    }

    /// Returns the root holding the minimum priority
    ///
    /// **Time Complexity**: O(log n)
    ///
    /// Ties go to the first root in list order.
    pub(crate) fn peek_min<P: Ord>(&self, arena: &NodeArena<P>) -> Option<NodeKey> {
        self.min_position(arena).map(|idx| self.roots[idx])
    }

    /// Removes the minimum element and returns its `(element, priority)`
    ///
    /// **Time Complexity**: O(log n)
    ///
    /// **Algorithm**:
    /// 1. Locate the minimum root as in [`peek_min`](Self::peek_min)
    /// 2. Splice it out of the root list (the rest stays sorted and distinct)
    /// 3. Decompose it: the root's node is freed and its children, orders
    ///    0..k-1, form a valid forest on their own
    /// 4. Merge the children back
    pub(crate) fn extract_min<P: Ord>(&mut self, arena: &mut NodeArena<P>) -> Option<(usize, P)> {
        let idx = self.min_position(arena)?;
        let root = self.roots.remove(idx);

        let (element, priority, children) = arena.decompose(root);
        self.merge(children, arena);

        Some((element, priority))
    }

    fn min_position<P: Ord>(&self, arena: &NodeArena<P>) -> Option<usize> {
        let mut min: Option<(usize, &P)> = None;
        for (idx, &root) in self.roots.iter().enumerate() {
            let priority = &arena[root].priority;
            match min {
                Some((_, best)) if best <= priority => {}
                _ => min = Some((idx, priority)),
            }
        }
        min.map(|(idx, _)| idx)
    }

    /// Checks every structural invariant and returns the node count
    ///
    /// - roots are parentless and sorted by strictly increasing order
    /// - every node has `order == children.len()` and its i-th child has
    ///   order i
    /// - every child links back to its parent
    /// - parent priority <= child priority
    /// - an order-k subtree holds exactly 2ᵏ nodes
    pub(crate) fn verify<P: Ord>(&self, arena: &NodeArena<P>) -> Result<usize, StructureViolation> {
        let mut previous: Option<Order> = None;
        let mut total = 0usize;

        for &root in &self.roots {
            let node = arena.get(root).ok_or(StructureViolation::DanglingKey)?;
            if node.parent.is_some() {
                return Err(StructureViolation::RootHasParent {
                    element: node.element,
                });
            }
            if let Some(prev) = previous {
                if prev >= node.order {
                    return Err(StructureViolation::RootOrdersNotAscending {
                        previous: prev,
                        next: node.order,
                    });
                }
            }
            previous = Some(node.order);

            let size = verify_tree(root, arena)?;
            if size != tree_size(node.order) {
                return Err(StructureViolation::TreeSizeMismatch {
                    element: node.element,
                    order: node.order,
                    size,
                });
            }
            total += size;
        }

        Ok(total)
    }
}

/// Pops whichever head has the smaller order (left wins ties)
fn next_lowest<P, I>(
    left: &mut Peekable<I>,
    right: &mut Peekable<I>,
    arena: &NodeArena<P>,
) -> Option<NodeKey>
where
    I: Iterator<Item = NodeKey>,
{
    match (left.peek(), right.peek()) {
        (Some(&a), Some(&b)) => {
            if arena[a].order <= arena[b].order {
                left.next()
            } else {
                right.next()
            }
        }
        (Some(_), None) => left.next(),
        (None, _) => right.next(),
    }
}

/// Walks one tree without recursion, returning its node count
fn verify_tree<P: Ord>(root: NodeKey, arena: &NodeArena<P>) -> Result<usize, StructureViolation> {
    let mut stack = vec![root];
    let mut count = 0usize;

    while let Some(key) = stack.pop() {
        let node = arena.get(key).ok_or(StructureViolation::DanglingKey)?;
        count += 1;

        if usize::from(node.order) != node.children.len() {
            return Err(StructureViolation::OrderMismatch {
                element: node.element,
                order: node.order,
                children: node.children.len(),
            });
        }

        for (expected, &child_key) in node.children.iter().enumerate() {
            let child = arena
                .get(child_key)
                .ok_or(StructureViolation::DanglingKey)?;
            if usize::from(child.order) != expected {
                return Err(StructureViolation::ChildOrderMismatch {
                    parent: node.element,
                    child: child.element,
                });
            }
            if child.parent != Some(key) {
                return Err(StructureViolation::BrokenParentLink {
                    element: child.element,
                });
            }
            if child.priority < node.priority {
                return Err(StructureViolation::HeapOrder {
                    parent: node.element,
                    child: child.element,
                });
            }
            stack.push(child_key);
        }
    }

    Ok(count)
}

/// A broken structural invariant found by [`PriorityQueue::verify_structure`]
///
/// [`PriorityQueue::verify_structure`]: crate::queue::PriorityQueue::verify_structure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructureViolation {
    /// A key reachable from the structure is not live in the arena
    DanglingKey,
    /// A forest root has a parent link
    RootHasParent { element: usize },
    /// Two consecutive roots are not in strictly increasing order
    RootOrdersNotAscending { previous: Order, next: Order },
    /// A node's order differs from its number of children
    OrderMismatch {
        element: usize,
        order: Order,
        children: usize,
    },
    /// The i-th child of a node does not have order i
    ChildOrderMismatch { parent: usize, child: usize },
    /// A child does not point back at its parent
    BrokenParentLink { element: usize },
    /// A child has a smaller priority than its parent
    HeapOrder { parent: usize, child: usize },
    /// An order-k tree does not hold 2ᵏ nodes
    TreeSizeMismatch {
        element: usize,
        order: Order,
        size: usize,
    },
    /// The lookup entry for an id does not point at the node holding it
    LookupMismatch { element: usize },
    /// Nodes reachable from the forest differ from the number stored
    CountMismatch { reachable: usize, stored: usize },
}

impl fmt::Display for StructureViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructureViolation::DanglingKey => write!(f, "dangling node key"),
            StructureViolation::RootHasParent { element } => {
                write!(f, "root holding element {element} has a parent")
            }
            StructureViolation::RootOrdersNotAscending { previous, next } => {
                write!(f, "root of order {next} follows root of order {previous}")
            }
            StructureViolation::OrderMismatch {
                element,
                order,
                children,
            } => write!(
                f,
                "node holding element {element} has order {order} but {children} children"
            ),
            StructureViolation::ChildOrderMismatch { parent, child } => write!(
                f,
                "child {child} of {parent} is out of order in its children list"
            ),
            StructureViolation::BrokenParentLink { element } => write!(
                f,
                "node holding element {element} does not link to its parent"
            ),
            StructureViolation::HeapOrder { parent, child } => write!(
                f,
                "child {child} has a smaller priority than parent {parent}"
            ),
            StructureViolation::TreeSizeMismatch {
                element,
                order,
                size,
            } => write!(
                f,
                "tree rooted at element {element} has order {order} but {size} nodes"
            ),
            StructureViolation::LookupMismatch { element } => {
                write!(f, "lookup entry for element {element} is stale")
            }
            StructureViolation::CountMismatch { reachable, stored } => write!(
                f,
                "{reachable} nodes reachable from the forest but {stored} stored"
            ),
        }
    }
}

impl std::error::Error for StructureViolation {}
