use bstree::{search, Tree};
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

#[quickcheck]
fn closest_value_is_closest(xs: Vec<i16>, target: i16) -> TestResult {
    if xs.is_empty() {
        return TestResult::discard();
    }
    let tree: Tree<_> = xs.iter().copied().collect();
    let best = xs.iter().map(|x| x.abs_diff(target)).min();

    TestResult::from_bool(tree.closest_value(&target).map(|x| x.abs_diff(target)) == best)
}

#[quickcheck]
fn kth_largest_matches_sorting(xs: Vec<i8>, k: usize) -> TestResult {
    if xs.is_empty() {
        return TestResult::discard();
    }
    let k = k % xs.len() + 1;
    let tree: Tree<_> = xs.iter().copied().collect();
    let mut descending = xs;
    descending.sort_unstable_by(|a, b| b.cmp(a));

    TestResult::from_bool(tree.kth_largest(k) == Ok(&descending[k - 1]))
}

#[quickcheck]
fn root_is_ancestor_of_everything(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let Some(root) = tree.root() else {
        return true;
    };

    xs.iter()
        .filter_map(|x| tree.find(x))
        .all(|node| search::is_descendant(root, node))
}
