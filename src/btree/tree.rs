use super::node::Node;
use super::*;
use crate::comparator::{Comparator, NaturalOrder};
use crate::error::{Result, TreeError};
use crate::DEFAULT_DEGREE;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct BTree<T, C = NaturalOrder> {
    root: Option<Node<T>>,
    degree: usize,
    comparator: C,
    len: usize,
}

impl<T: Ord> BTree<T> {
    /// Create a new empty tree ordered by `T: Ord`, whose nodes hold between `degree` and
    /// `2 * degree` keys.
    /// Panics if `degree` is zero
    pub fn new(degree: usize) -> Self {
        BTree::with_comparator(degree, NaturalOrder)
    }

    /// Like `new`, but reject an invalid degree instead of panicking
    pub fn try_new(degree: usize) -> Result<Self> {
        BTree::try_with_comparator(degree, NaturalOrder)
    }
}

impl<T, C: Comparator<T>> BTree<T, C> {
    /// Create a new empty tree ordered by `comparator`.
    /// Panics if `degree` is zero
    pub fn with_comparator(degree: usize, comparator: C) -> Self {
        assert!(degree > 0, "Invalid degree {}: must be at least 1", degree);
        BTree {
            root: None,
            degree,
            comparator,
            len: 0,
        }
    }

    pub fn try_with_comparator(degree: usize, comparator: C) -> Result<Self> {
        if degree == 0 {
            return Err(TreeError::InvalidDegree(degree));
        }
        Ok(BTree::with_comparator(degree, comparator))
    }

    /// Insert a new value into the tree.
    /// Values comparing equal to existing ones are kept, placed to their left
    pub fn insert(&mut self, value: T) {
        let degree = self.degree;
        let root = self.root.get_or_insert_with(|| Node::new_leaf(degree));
        let insert_result = if root.is_leaf() {
            root.insert_leaf(value, &self.comparator)
        } else {
            root.insert_node(value, &self.comparator)
        };
        self.handle_insert_result(insert_result);
    }

    /// Return the node holding a key equal to `value`, if any
    pub fn search(&self, value: &T) -> Option<&Node<T>> {
        self.root
            .as_ref()
            .and_then(|root| root.search(value, &self.comparator))
    }

    pub fn contains(&self, value: &T) -> bool {
        self.search(value).is_some()
    }

    /// Return the total number of values inserted in the tree
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Return the number of levels in the tree: 0 when empty, 1 when the root is a leaf
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut node = self.root.as_ref();
        while let Some(current) = node {
            height += 1;
            node = current.child(0);
        }
        height
    }

    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_ref()
    }

    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Walk the whole tree and verify its structural invariants: sorted keys, node
    /// occupancy, separator bounds, child counts and leaves at equal depth
    pub fn check_invariants(&self) -> Result<()> {
        match &self.root {
            None => Ok(()),
            Some(root) => root.check(&self.comparator, 0, 0, None, None, &mut None),
        }
    }

    /// Handle the result of an insertion
    fn handle_insert_result(&mut self, insert_result: InsertResult<T>) {
        self.len += 1;
        if let InsertResult::PendingSplit(median, right) = insert_result {
            // Splitting reached the root: build a new root above the two halves
            if let Some(prev_root) = self.root.take() {
                self.root = Some(Node::with_children(self.degree, median, prev_root, right));
                debug!(height = self.height(), len = self.len, "root split");
            }
        }
    }
}

impl<T: Ord> Default for BTree<T> {
    fn default() -> Self {
        BTree::new(DEFAULT_DEGREE)
    }
}

impl<T, C: Comparator<T>> Extend<T> for BTree<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> std::iter::FromIterator<T> for BTree<T> {
    /// Create a tree with the default degree from an iterator
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = BTree::default();
        tree.extend(iter);
        tree
    }
}
