//! Height-balanced binary search tree.
//!
//! The heights of the two subtrees of any node differ by at most one. An insertion that
//! breaks this is repaired at the lowest unbalanced ancestor with one of four rotations,
//! chosen by the two directions the descent took below it.

mod node;
mod tree;

pub use tree::AvlTree;
