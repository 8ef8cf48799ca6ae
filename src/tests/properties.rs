use crate::key_generator::*;
use crate::{AvlTree, BTree, Node};
use ordered_float::OrderedFloat;

/// Depth of every leaf below `node`
fn leaf_depths<T>(node: &Node<T>, depth: usize, depths: &mut Vec<usize>) {
    if node.is_leaf() {
        depths.push(depth);
    }
    for child in node.children() {
        leaf_depths(child, depth + 1, depths);
    }
}

/// Visit every node below `node`, with a flag telling whether it is the root
fn all_nodes<'a, T>(node: &'a Node<T>, is_root: bool, nodes: &mut Vec<(&'a Node<T>, bool)>) {
    nodes.push((node, is_root));
    for child in node.children() {
        all_nodes(child, false, nodes);
    }
}

/// With distinct keys, every key under `children[i]` lies in `(keys[i - 1], keys[i]]`
fn assert_strict_separators(node: &Node<u64>, lower: Option<u64>, upper: Option<u64>) {
    for &key in node.keys() {
        assert!(lower.map_or(true, |lower| lower < key), "{} not above {:?}", key, lower);
        assert!(upper.map_or(true, |upper| key <= upper), "{} above {:?}", key, upper);
    }
    for (i, child) in node.children().enumerate() {
        let child_lower = if i == 0 { lower } else { Some(node.keys()[i - 1]) };
        let child_upper = node.keys().get(i).copied().or(upper);
        assert_strict_separators(child, child_lower, child_upper);
    }
}

#[test]
fn invariants_hold_after_every_insert() {
    for degree in 1..5 {
        let mut tree = BTree::new(degree);
        for (count, key) in RandomKeys::new(600, degree as u64).enumerate() {
            tree.insert(key);
            assert_eq!(tree.check_invariants(), Ok(()), "after {} inserts", count + 1);

            let root = tree.root().unwrap();
            let mut depths = vec![];
            leaf_depths(root, 0, &mut depths);
            assert!(depths.iter().all(|&depth| depth + 1 == tree.height()));

            assert_strict_separators(root, None, None);

            let mut nodes = vec![];
            all_nodes(root, true, &mut nodes);
            for (node, is_root) in nodes {
                assert!(node.len() <= 2 * degree);
                assert!(is_root || node.len() >= degree);
                assert!(node.keys().windows(2).all(|pair| pair[0] < pair[1]));
                if !node.is_leaf() {
                    assert_eq!(node.children().count(), node.len() + 1);
                }
            }
        }
    }
}

#[test]
fn separators_over_many_seeds() {
    for degree in 1..6 {
        for seed in 0..30 {
            let mut tree = BTree::new(degree);
            tree.extend(RandomKeys::new(300, seed));
            assert_strict_separators(tree.root().unwrap(), None, None);
            assert!((0..300).all(|key| tree.contains(&key)));
        }
    }
}

#[test]
fn round_trip_random_order() {
    let mut btree = BTree::new(3);
    btree.extend(RandomKeys::new(5000, 42));
    let mut avl = AvlTree::new();
    avl.extend(RandomKeys::new(5000, 42));

    for key in 0..5000 {
        assert!(btree.contains(&key), "{} missing from the B-tree", key);
        assert!(avl.contains(&key), "{} missing from the AVL tree", key);
    }
    for key in 5000..5100 {
        assert!(!btree.contains(&key));
        assert!(!avl.contains(&key));
    }
}

#[test]
fn root_holds_median_after_first_split() {
    for degree in 1..8 {
        for seed in 0..5 {
            let num = 2 * degree + 1;
            let mut tree = BTree::new(degree);
            tree.extend(RandomKeys::new(num, seed));
            assert_eq!(tree.height(), 2);
            let root = tree.root().unwrap();
            assert_eq!(root.keys(), &[degree as u64]);
            assert_eq!(root.children().count(), 2);
            assert!(root.children().all(|child| child.is_leaf()));
        }
    }
}

#[test]
fn height_is_logarithmic() {
    let degree = 2;
    let num = 10_000;
    let mut tree = BTree::new(degree);
    tree.extend(SequentialKeys::new(num, SequentialOrder::Descending));
    // Every non-root node has at least `degree + 1` children
    let bound = 1. + ((num as f64 + 1.) / 2.).ln() / ((degree + 1) as f64).ln();
    assert!(tree.height() as f64 <= bound + 1., "height {}", tree.height());

    let mut avl = AvlTree::new();
    avl.extend(SequentialKeys::new(num, SequentialOrder::Descending));
    assert!((avl.height() as f64) < 1.45 * ((num + 2) as f64).log2());
}

#[test]
fn float_keys() {
    let keys: Vec<OrderedFloat<f64>> = RandomFloatKeys::new(2000, 9).collect();
    let btree: BTree<OrderedFloat<f64>> = keys.iter().cloned().collect();
    let avl: AvlTree<OrderedFloat<f64>> = keys.iter().cloned().collect();
    assert_eq!(btree.check_invariants(), Ok(()));
    assert_eq!(avl.check_invariants(), Ok(()));
    for key in &keys {
        assert!(btree.contains(key));
        assert_eq!(avl.search(key), Some(key));
    }
    assert!(!btree.contains(&OrderedFloat(1.5)));
    assert!(!avl.contains(&OrderedFloat(-0.5)));
}
