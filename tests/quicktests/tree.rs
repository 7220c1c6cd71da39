use bstree::{Config, LastNodeRemoval, Tree};
use quickcheck_macros::quickcheck;

use std::collections::HashSet;

fn removable() -> Tree<i8> {
    Tree::with_config(Config {
        last_node_removal: LastNodeRemoval::Remove,
    })
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x))
}

#[quickcheck]
fn in_order_is_sorted(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let mut sorted = xs;
    sorted.sort_unstable();

    tree.iter().eq(sorted.iter()) && tree.len() == sorted.len()
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = removable();
    tree.extend(xs.iter().copied());
    for delete in &deletes {
        tree.remove(delete);
    }

    let mut still_present = xs;
    for delete in &deletes {
        // Each removal only takes out one copy.
        if let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }
    still_present.sort_unstable();

    tree.is_bst() && tree.iter().eq(still_present.iter())
}

#[quickcheck]
fn removing_missing_value_changes_nothing(xs: Vec<i8>, missing: i8) -> bool {
    if xs.contains(&missing) {
        return true;
    }
    let mut tree = removable();
    tree.extend(xs.iter().copied());
    let before: Vec<i8> = tree.iter().copied().collect();

    tree.remove(&missing).is_none() && tree.iter().eq(before.iter())
}

#[quickcheck]
fn remove_then_contains(xs: Vec<i8>) -> bool {
    let mut tree = removable();
    tree.extend(xs.iter().copied());

    xs.iter().all(|x| {
        let copies_before = tree.iter().filter(|&y| y == x).count();
        tree.remove(x);
        let copies_after = tree.iter().filter(|&y| y == x).count();

        copies_after + 1 == copies_before && tree.contains(x) == (copies_after > 0)
    })
}
