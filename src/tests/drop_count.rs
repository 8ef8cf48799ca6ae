use crate::{AvlTree, BTree};
use lazy_static::lazy_static;
use std::sync::Mutex;

// Wrap a value and count the number of drop calls
lazy_static! {
    static ref NUM_DROPPED: Mutex<u32> = Mutex::new(0);
    static ref DROP_MUTEX: Mutex<()> = Mutex::new(());
}

#[derive(Ord, Eq, PartialOrd, PartialEq, Debug)]
struct Element(i32);

impl Drop for Element {
    fn drop(&mut self) {
        *NUM_DROPPED.lock().unwrap() += 1;
    }
}

fn helper_assert_drop_count<T>(x: T, num: u32) {
    let lock = DROP_MUTEX.lock().unwrap();
    let before = *NUM_DROPPED.lock().unwrap();
    drop(x);
    let after = *NUM_DROPPED.lock().unwrap();
    *NUM_DROPPED.lock().unwrap() = 0;
    drop(lock);
    assert_eq!(before, 0);
    assert_eq!(after, num);
}

#[test]
fn splits_move_every_value_once() {
    let _lock = DROP_MUTEX.lock().unwrap();
    let mut btree = BTree::new(2);
    let mut avl = AvlTree::new();
    for n in 0..200 {
        btree.insert(Element((n * 37) % 200));
        avl.insert(Element((n * 37) % 200));
    }

    // Searching with a temporary probe drops only the probe
    assert!(btree.contains(&Element(17)));
    assert!(avl.contains(&Element(17)));
    assert!(btree.check_invariants().is_ok());
    assert!(avl.check_invariants().is_ok());
    assert_eq!(*NUM_DROPPED.lock().unwrap(), 2);
    *NUM_DROPPED.lock().unwrap() = 0;
    drop(_lock);

    helper_assert_drop_count(btree, 200);
    helper_assert_drop_count(avl, 200);
}
