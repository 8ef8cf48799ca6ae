use super::*;
use crate::comparator::Comparator;
use crate::error::{Result, TreeError};
use std::cmp::Ordering;
use tracing::trace;

/// A B-tree node. Leaves hold keys only, internal nodes hold `len() + 1` children
/// and use their keys as separators: every key under `children[i]` compares less than
/// or equal to `keys[i]` and every key under `children[i + 1]` compares greater
#[derive(Debug, Clone)]
pub struct Node<T> {
    keys: Vec<T>,
    children: Option<Vec<Box<Node<T>>>>,
    degree: usize,
}

/// Most keys a node holds once an insertion completes
fn max_keys(degree: usize) -> usize {
    degree.saturating_mul(2)
}

/// Slots reserved up front for a node's keys: room for the transient overflow, bounded so
/// that a huge degree costs nothing until the keys actually arrive
fn preallocated(degree: usize) -> usize {
    max_keys(degree).saturating_add(1).min(MAX_PREALLOCATED_KEYS)
}

impl<T> Node<T> {
    /// Build an empty leaf
    pub(super) fn new_leaf(degree: usize) -> Self {
        Node {
            keys: Vec::with_capacity(preallocated(degree)),
            children: None,
            degree,
        }
    }

    /// Build a root with a single separator above two subtrees
    pub(super) fn with_children(degree: usize, median: T, left: Node<T>, right: Node<T>) -> Self {
        let mut keys = Vec::with_capacity(preallocated(degree));
        keys.push(median);
        let mut children = Vec::with_capacity(preallocated(degree) + 1);
        children.push(Box::new(left));
        children.push(Box::new(right));
        Node {
            keys,
            children: Some(children),
            degree,
        }
    }

    /// Return the number of keys in this node
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Return the keys of this node, in ascending order
    pub fn keys(&self) -> &[T] {
        &self.keys
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Return whether the node is a leaf
    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// Return the child at the given index, if this is an internal node and the index is
    /// in bounds
    pub fn child(&self, index: usize) -> Option<&Node<T>> {
        self.children
            .as_ref()
            .and_then(|children| children.get(index))
            .map(|child| &**child)
    }

    /// Iterate over the children of this node (nothing for a leaf)
    pub fn children(&self) -> impl Iterator<Item = &Node<T>> + '_ {
        self.children.iter().flatten().map(|child| &**child)
    }

    /// Return the index of the first key greater than or equal to `value`, or `len()` if
    /// `value` is greater than every key. This is both the slot to check for an exact match
    /// and the child to descend into
    pub(super) fn position<C: Comparator<T>>(&self, value: &T, comparator: &C) -> usize {
        self.keys
            .partition_point(|key| comparator.compare(value, key) == Ordering::Greater)
    }

    /// Look for `value` starting at this node. Return the node holding an equal key, be it
    /// a leaf or an internal node
    pub(super) fn search<C: Comparator<T>>(&self, value: &T, comparator: &C) -> Option<&Node<T>> {
        let mut node = self;
        loop {
            let index = node.position(value, comparator);
            if let Some(key) = node.keys.get(index) {
                if comparator.compare(value, key) == Ordering::Equal {
                    return Some(node);
                }
            }
            match &node.children {
                None => return None,
                Some(children) => node = &*children[index],
            }
        }
    }

    /// Insert `value` into this leaf.
    /// When the leaf overflows, it is split and the median and new right leaf are returned
    pub(super) fn insert_leaf<C: Comparator<T>>(
        &mut self,
        value: T,
        comparator: &C,
    ) -> InsertResult<T> {
        let index = self.position(&value, comparator);
        self.insert_key(index, value, None);
        self.resolve_overflow()
    }

    /// Recursive insertion into the subtree rooted at this internal node.
    /// A split bubbling up from the child is absorbed here; when that overflows this node
    /// too, it is split in turn and the median and new right node are returned
    pub(super) fn insert_node<C: Comparator<T>>(
        &mut self,
        value: T,
        comparator: &C,
    ) -> InsertResult<T> {
        let index = self.position(&value, comparator);
        let child_result = match &mut self.children {
            Some(children) => {
                let child = &mut children[index];
                if child.is_leaf() {
                    child.insert_leaf(value, comparator)
                } else {
                    child.insert_node(value, comparator)
                }
            }
            None => unreachable!("insert_node called on a leaf"),
        };

        match child_result {
            InsertResult::Inserted => InsertResult::Inserted,
            InsertResult::PendingSplit(median, right) => {
                self.insert_key(index, median, Some(right));
                self.resolve_overflow()
            }
        }
    }

    /// Insert `key` at `index`, and `right_child` right after it for an internal node
    fn insert_key(&mut self, index: usize, key: T, right_child: Option<Node<T>>) {
        assert!(index <= self.keys.len());

        // If this is a leaf node no child can be inserted.
        // Conversely, in an internal node a child must be inserted
        assert_eq!(self.children.is_none(), right_child.is_none());

        self.keys.insert(index, key);
        if let (Some(children), Some(child)) = (&mut self.children, right_child) {
            children.insert(index + 1, Box::new(child));
        }
    }

    /// Split the node if it went over `2d` keys
    fn resolve_overflow(&mut self) -> InsertResult<T> {
        if self.keys.len() <= max_keys(self.degree) {
            return InsertResult::Inserted;
        }
        let (median, right) = self.split();
        InsertResult::PendingSplit(median, right)
    }

    /// Split an overflowing node (`2d + 1` keys) into (left, median, right).
    /// Self keeps the lower `d` keys and `d + 1` children, the median leaves the node and
    /// the new right sibling takes the upper `d` keys and `d + 1` children
    fn split(&mut self) -> (T, Node<T>) {
        let degree = self.degree;
        debug_assert_eq!(self.keys.len(), max_keys(degree) + 1);

        let mut right_keys = self.keys.split_off(degree);
        let median = right_keys.remove(0);
        let right_children = self
            .children
            .as_mut()
            .map(|children| children.split_off(degree + 1));

        trace!(
            leaf = right_children.is_none(),
            promoted = degree,
            left_len = self.keys.len(),
            right_len = right_keys.len(),
            "node split"
        );

        let right = Node {
            keys: right_keys,
            children: right_children,
            degree,
        };
        (median, right)
    }

    /// Verify the structure of the subtree rooted at this node.
    /// `lower` and `upper` are the separators bounding it in its parent, `slot` its
    /// position among the parent's children and `leaf_depth` the depth of the first leaf
    /// seen so far
    pub(super) fn check<C: Comparator<T>>(
        &self,
        comparator: &C,
        depth: usize,
        slot: usize,
        lower: Option<&T>,
        upper: Option<&T>,
        leaf_depth: &mut Option<usize>,
    ) -> Result<()> {
        let min = if depth == 0 { 1 } else { self.degree };
        let max = max_keys(self.degree);
        if self.keys.len() < min || self.keys.len() > max {
            return Err(TreeError::Occupancy {
                depth,
                len: self.keys.len(),
                min,
                max,
            });
        }

        for (index, pair) in self.keys.windows(2).enumerate() {
            if comparator.compare(&pair[0], &pair[1]) == Ordering::Greater {
                return Err(TreeError::KeysOutOfOrder {
                    depth,
                    index: index + 1,
                });
            }
        }

        // Equal keys may end up on both sides of a separator, so bounds are inclusive
        let below = lower.map_or(false, |lower| {
            comparator.compare(&self.keys[0], lower) == Ordering::Less
        });
        let above = upper.map_or(false, |upper| {
            comparator.compare(&self.keys[self.keys.len() - 1], upper) == Ordering::Greater
        });
        if below || above {
            return Err(TreeError::SeparatorViolation {
                depth: depth - 1,
                child: slot,
            });
        }

        match &self.children {
            None => match *leaf_depth {
                None => *leaf_depth = Some(depth),
                Some(expected) if expected != depth => {
                    return Err(TreeError::UnevenLeafDepth {
                        expected,
                        found: depth,
                    })
                }
                Some(_) => {}
            },
            Some(children) => {
                if children.len() != self.keys.len() + 1 {
                    return Err(TreeError::ChildCount {
                        depth,
                        keys: self.keys.len(),
                        children: children.len(),
                    });
                }
                for (i, child) in children.iter().enumerate() {
                    let child_lower = if i == 0 { lower } else { Some(&self.keys[i - 1]) };
                    let child_upper = self.keys.get(i).or(upper);
                    child.check(
                        comparator,
                        depth + 1,
                        i,
                        child_lower,
                        child_upper,
                        leaf_depth,
                    )?;
                }
            }
        }

        Ok(())
    }
}
