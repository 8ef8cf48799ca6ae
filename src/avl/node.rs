use crate::comparator::Comparator;
use crate::error::{Result, TreeError};
use std::cmp::Ordering;
use tracing::trace;

pub(super) type Link<T> = Option<Box<AvlNode<T>>>;

#[derive(Debug, Clone)]
pub(super) struct AvlNode<T> {
    pub(super) value: T,
    height: usize,
    left: Link<T>,
    right: Link<T>,
}

/// Height of a subtree, 0 for an empty one
pub(super) fn height<T>(link: &Link<T>) -> usize {
    link.as_ref().map_or(0, |node| node.height)
}

impl<T> AvlNode<T> {
    fn new(value: T) -> Self {
        AvlNode {
            value,
            height: 1,
            left: None,
            right: None,
        }
    }

    fn update_height(&mut self) {
        self.height = height(&self.left).max(height(&self.right)) + 1;
    }

    fn balance(&self) -> isize {
        height(&self.left) as isize - height(&self.right) as isize
    }
}

/// Insert `value` into the subtree and return its new root.
/// Smaller values go left, the others (equal included) go right
pub(super) fn insert<T, C: Comparator<T>>(
    link: Link<T>,
    value: T,
    comparator: &C,
) -> Box<AvlNode<T>> {
    let mut node = match link {
        None => return Box::new(AvlNode::new(value)),
        Some(node) => node,
    };

    if comparator.compare(&value, &node.value) == Ordering::Less {
        // Record on which side of the left child the value will land
        let outer = node.left.as_ref().map_or(true, |left| {
            comparator.compare(&value, &left.value) == Ordering::Less
        });
        node.left = Some(insert(node.left.take(), value, comparator));
        node.update_height();
        if node.balance() == 2 {
            node = if outer {
                rotate_with_left_child(node)
            } else {
                double_with_left_child(node)
            };
        }
    } else {
        let outer = node.right.as_ref().map_or(true, |right| {
            comparator.compare(&value, &right.value) != Ordering::Less
        });
        node.right = Some(insert(node.right.take(), value, comparator));
        node.update_height();
        if node.balance() == -2 {
            node = if outer {
                rotate_with_right_child(node)
            } else {
                double_with_right_child(node)
            };
        }
    }

    node
}

/// Single rotation for a left-left insertion: the left child moves up, taking `k2` as its
/// right child, and its former right subtree becomes the left subtree of `k2`
fn rotate_with_left_child<T>(mut k2: Box<AvlNode<T>>) -> Box<AvlNode<T>> {
    match k2.left.take() {
        None => k2,
        Some(mut k1) => {
            trace!(height = k2.height, "rotate with left child");
            k2.left = k1.right.take();
            k2.update_height();
            k1.right = Some(k2);
            k1.update_height();
            k1
        }
    }
}

/// Mirror of `rotate_with_left_child`, for a right-right insertion
fn rotate_with_right_child<T>(mut k1: Box<AvlNode<T>>) -> Box<AvlNode<T>> {
    match k1.right.take() {
        None => k1,
        Some(mut k2) => {
            trace!(height = k1.height, "rotate with right child");
            k1.right = k2.left.take();
            k1.update_height();
            k2.left = Some(k1);
            k2.update_height();
            k2
        }
    }
}

/// Left-right insertion: rotate the left child with its right child, then `k3` with its
/// new left child
fn double_with_left_child<T>(mut k3: Box<AvlNode<T>>) -> Box<AvlNode<T>> {
    k3.left = k3.left.take().map(rotate_with_right_child);
    rotate_with_left_child(k3)
}

/// Right-left insertion
fn double_with_right_child<T>(mut k1: Box<AvlNode<T>>) -> Box<AvlNode<T>> {
    k1.right = k1.right.take().map(rotate_with_left_child);
    rotate_with_right_child(k1)
}

pub(super) fn search<'a, T, C: Comparator<T>>(
    mut link: &'a Link<T>,
    value: &T,
    comparator: &C,
) -> Option<&'a T> {
    while let Some(node) = link {
        match comparator.compare(value, &node.value) {
            Ordering::Less => link = &node.left,
            Ordering::Equal => return Some(&node.value),
            Ordering::Greater => link = &node.right,
        }
    }
    None
}

/// Verify ordering, cached heights and balance of the subtree, returning its height.
/// Rotations can move a value next to an equal one on either side, so bounds are inclusive
pub(super) fn check<T, C: Comparator<T>>(
    link: &Link<T>,
    comparator: &C,
    depth: usize,
    lower: Option<&T>,
    upper: Option<&T>,
) -> Result<usize> {
    let node = match link {
        None => return Ok(0),
        Some(node) => node,
    };

    if let Some(lower) = lower {
        if comparator.compare(&node.value, lower) == Ordering::Less {
            return Err(TreeError::SeparatorViolation {
                depth: depth - 1,
                child: 1,
            });
        }
    }
    if let Some(upper) = upper {
        if comparator.compare(&node.value, upper) == Ordering::Greater {
            return Err(TreeError::SeparatorViolation {
                depth: depth - 1,
                child: 0,
            });
        }
    }

    let left = check(&node.left, comparator, depth + 1, lower, Some(&node.value))?;
    let right = check(&node.right, comparator, depth + 1, Some(&node.value), upper)?;

    let actual = left.max(right) + 1;
    if node.height != actual {
        return Err(TreeError::StaleHeight {
            depth,
            cached: node.height,
            actual,
        });
    }
    let balance = left as isize - right as isize;
    if balance.abs() > 1 {
        return Err(TreeError::Unbalanced { depth, balance });
    }
    Ok(actual)
}
