#[cfg(test)]
mod tests;

pub mod avl;
pub mod btree;

mod comparator;
mod error;

#[cfg(any(test, feature = "key-generator"))]
pub mod key_generator;

pub use avl::AvlTree;
pub use btree::{BTree, Node};
pub use comparator::{Comparator, NaturalOrder};
pub use error::{Result, TreeError};

/// Degree used by `BTree::default`: non-root nodes hold between 5 and 10 keys
pub const DEFAULT_DEGREE: usize = 5;
