//! B-tree over a three-way comparator.
//!
//! Each non-root node holds between `d` and `2d` keys, where `d` is the degree given at
//! construction. Insertion descends to a leaf and resolves overflows on the way back up:
//! a node reaching `2d + 1` keys keeps the lower `d`, hands the upper `d` to a new right
//! sibling and promotes the middle key to its parent. When the root itself splits, the tree
//! grows by one level, which keeps every leaf at the same depth.

mod node;
mod tree;

pub use node::Node;
pub use tree::BTree;

/// Upper bound on the key slots a node reserves when it is created
const MAX_PREALLOCATED_KEYS: usize = 64;

/// Outcome of inserting into a subtree, returned to the caller one level up
enum InsertResult<T> {
    Inserted,
    /// The node overflowed and was split: the promoted key and the new right sibling
    /// must be absorbed by the parent
    PendingSplit(T, Node<T>),
}
