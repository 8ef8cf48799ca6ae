use super::node::{self, Link};
use crate::comparator::{Comparator, NaturalOrder};
use crate::error::Result;

#[derive(Debug, Clone)]
pub struct AvlTree<T, C = NaturalOrder> {
    root: Link<T>,
    comparator: C,
    len: usize,
}

impl<T: Ord> AvlTree<T> {
    /// Create a new empty tree ordered by `T: Ord`
    pub fn new() -> Self {
        AvlTree::with_comparator(NaturalOrder)
    }
}

impl<T, C: Comparator<T>> AvlTree<T, C> {
    pub fn with_comparator(comparator: C) -> Self {
        AvlTree {
            root: None,
            comparator,
            len: 0,
        }
    }

    /// Insert a new value, rebalancing on the way back up.
    /// Values comparing equal to existing ones are kept
    pub fn insert(&mut self, value: T) {
        let root = self.root.take();
        self.root = Some(node::insert(root, value, &self.comparator));
        self.len += 1;
    }

    /// Return the stored value comparing equal to `value`, if any
    pub fn search(&self, value: &T) -> Option<&T> {
        node::search(&self.root, value, &self.comparator)
    }

    pub fn contains(&self, value: &T) -> bool {
        self.search(value).is_some()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Return the number of levels in the tree: 0 when empty, 1 for a single node
    pub fn height(&self) -> usize {
        node::height(&self.root)
    }

    pub fn root_value(&self) -> Option<&T> {
        self.root.as_ref().map(|root| &root.value)
    }

    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Walk the whole tree and verify ordering, cached heights and the balance condition
    pub fn check_invariants(&self) -> Result<()> {
        node::check(&self.root, &self.comparator, 0, None, None).map(|_height| ())
    }
}

impl<T: Ord> Default for AvlTree<T> {
    fn default() -> Self {
        AvlTree::new()
    }
}

impl<T, C: Comparator<T>> Extend<T> for AvlTree<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> std::iter::FromIterator<T> for AvlTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = AvlTree::new();
        tree.extend(iter);
        tree
    }
}
