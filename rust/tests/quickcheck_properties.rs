use quickcheck::{quickcheck, Arbitrary, Gen};
use redblacktree::{DeleteOutcome, InsertOutcome, RedBlackTree};
use std::collections::BTreeSet;

/// Something to do to a tree in a quicktest.
#[derive(Copy, Clone, Debug)]
enum Op<K> {
    /// Insert the key
    Insert(K),
    /// Delete the key
    Delete(K),
    /// Compare iterators
    Iter,
}

impl<K: Arbitrary> Arbitrary for Op<K> {
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1, 1, 2]).unwrap() {
            0 => Op::Insert(K::arbitrary(g)),
            1 => Op::Delete(K::arbitrary(g)),
            2 => Op::Iter,
            _ => unreachable!(),
        }
    }
}

/// Applies the ops to a tree and a BTreeSet, returning false on the first
/// disagreement or broken invariant.
fn agrees_with_btreeset(ops: &[Op<i8>]) -> bool {
    let mut tree = RedBlackTree::new();
    let mut set = BTreeSet::new();

    for op in ops {
        let same = match *op {
            Op::Insert(k) => {
                let expected = if set.insert(k) {
                    InsertOutcome::Inserted
                } else {
                    InsertOutcome::DuplicateRejected
                };
                tree.insert(k) == expected
            }
            Op::Delete(k) => {
                let expected = if set.remove(&k) {
                    DeleteOutcome::Deleted
                } else {
                    DeleteOutcome::NotFound
                };
                tree.delete(&k) == expected
            }
            Op::Iter => tree.iter().eq(set.iter()),
        };
        if !same || !tree.check_invariants() {
            return false;
        }
    }

    tree.len() == set.len() && tree.iter().eq(set.iter())
}

quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
        agrees_with_btreeset(&ops)
    }

    fn contains(xs: Vec<i16>) -> bool {
        let tree: RedBlackTree<i16> = xs.iter().copied().collect();
        xs.iter().all(|x| tree.contains(x))
    }

    fn contains_not(xs: Vec<i16>, nots: Vec<i16>) -> bool {
        let tree: RedBlackTree<i16> = xs.iter().copied().collect();
        nots.iter()
            .filter(|x| !xs.contains(x))
            .all(|x| tree.find(x).is_none())
    }

    fn iter_is_sorted_and_unique(xs: Vec<i32>) -> bool {
        let tree: RedBlackTree<i32> = xs.iter().copied().collect();
        let keys: Vec<i32> = tree.iter().copied().collect();
        keys.windows(2).all(|w| w[0] < w[1]) && keys.len() == tree.len()
    }

    fn black_height_bounds_height(xs: Vec<u16>) -> bool {
        let tree: RedBlackTree<u16> = xs.into_iter().collect();
        tree.height() <= 2 * tree.black_height()
    }

    fn delete_everything_empties_tree(xs: Vec<u8>) -> bool {
        let mut tree: RedBlackTree<u8> = xs.iter().copied().collect();
        for x in &xs {
            let _ = tree.delete(x);
        }
        tree.is_empty() && tree.root().is_none() && tree.check_invariants()
    }
}
