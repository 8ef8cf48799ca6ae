//! Reproducible key sequences, for exercising and benchmarking the trees.

mod random;
mod sequential;

pub use random::*;
pub use sequential::*;

#[cfg(test)]
mod test {
    use super::*;
    use crate::{AvlTree, BTree};

    #[test]
    fn round_trip() {
        check_all(1);
        check_all(2);
        check_all(3);
        check_all(1000);
        check_all(1001);
    }

    fn check_all(num: usize) {
        check_one(RandomKeys::new(num, 17), num);
        check_one(SequentialKeys::new(num, SequentialOrder::Ascending), num);
        check_one(SequentialKeys::new(num, SequentialOrder::Descending), num);
    }

    fn check_one<I>(keys: I, num: usize)
    where
        I: Iterator<Item = u64> + Clone,
    {
        for degree in 1..4 {
            let btree: BTree<u64> = {
                let mut tree = BTree::new(degree);
                tree.extend(keys.clone());
                tree
            };
            assert_eq!(btree.len(), num);
            assert_eq!(btree.check_invariants(), Ok(()));
            assert!(keys.clone().all(|key| btree.contains(&key)));
            assert!(!btree.contains(&(num as u64)));
        }

        let avl: AvlTree<u64> = keys.clone().collect();
        assert_eq!(avl.len(), num);
        assert_eq!(avl.check_invariants(), Ok(()));
        assert!(keys.clone().all(|key| avl.contains(&key)));
        assert!(!avl.contains(&(num as u64)));
    }
}
