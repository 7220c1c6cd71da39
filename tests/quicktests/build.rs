use bstree::Tree;
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

#[quickcheck]
fn from_sorted_has_minimum_height(xs: Vec<i16>) -> TestResult {
    let mut xs = xs;
    xs.sort_unstable();
    xs.dedup();
    if xs.is_empty() {
        return TestResult::discard();
    }
    let tree = match Tree::from_sorted(&xs) {
        Ok(tree) => tree,
        Err(_) => return TestResult::failed(),
    };
    // ceil(log2(n + 1)) is the bit length of n.
    let expected = (usize::BITS - xs.len().leading_zeros()) as usize;

    TestResult::from_bool(tree.height() == expected && tree.iter().eq(xs.iter()))
}

#[quickcheck]
fn preorder_round_trip(xs: Vec<i8>) -> TestResult {
    if xs.is_empty() {
        return TestResult::discard();
    }
    let tree: Tree<_> = xs.into_iter().collect();
    let preorder: Vec<i8> = tree.pre_order().copied().collect();
    let rebuilt = match Tree::from_preorder(&preorder) {
        Ok(tree) => tree,
        Err(_) => return TestResult::failed(),
    };

    TestResult::from_bool(rebuilt.pre_order().eq(preorder.iter()) && rebuilt == tree)
}

#[quickcheck]
fn preorder_of_arbitrary_sequence_is_either_rebuilt_or_rejected(xs: Vec<i8>) -> bool {
    match Tree::from_preorder(&xs) {
        Ok(tree) => tree.is_bst() && tree.pre_order().eq(xs.iter()),
        Err(_) => {
            // Anything rejected must not be a pre-order: inserting it gives a different one.
            let tree: Tree<_> = xs.iter().copied().collect();
            xs.is_empty() || !tree.pre_order().eq(xs.iter())
        }
    }
}
