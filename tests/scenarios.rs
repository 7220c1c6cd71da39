//! Worked examples built from JSON fixtures.

use bstree::fixture::TreeSpec;
use bstree::{search, Config, Error, LastNodeRemoval, Tree};

fn load(json: &str) -> Tree<i32> {
    let spec: TreeSpec<i32> = serde_json::from_str(json).unwrap();
    spec.build().unwrap()
}

fn values(tree: &Tree<i32>) -> Vec<i32> {
    tree.iter().copied().collect()
}

#[test]
fn closest_value() {
    let tree = load(include_str!("fixtures/closest_value.json"));

    assert_eq!(tree.closest_value(&12), Some(&13));
    assert_eq!(tree.closest_value(&5), Some(&5));
    assert_eq!(tree.closest_value(&16), Some(&15));
}

#[test]
fn kth_largest() {
    let tree: Tree<_> = [15, 5, 20, 2, 5, 17, 22, 1, 3].into_iter().collect();

    assert_eq!(tree.kth_largest(3), Ok(&17));
    assert_eq!(tree.kth_largest(10), Err(Error::RankOutOfRange { k: 10, len: 9 }));
}

#[test]
fn min_height() {
    let input = [1, 2, 5, 7, 10, 13, 14, 15, 22];
    let tree = Tree::from_sorted(&input).unwrap();

    assert_eq!(values(&tree), input);
    assert_eq!(tree.height(), 4);
}

#[test]
fn reconstruct() {
    let preorder = [10, 4, 2, 1, 5, 17, 19, 18];
    let tree = Tree::from_preorder(&preorder).unwrap();

    assert_eq!(tree.pre_order().copied().collect::<Vec<_>>(), preorder);
    assert_eq!(values(&tree), [1, 2, 4, 5, 10, 17, 18, 19]);
}

#[test]
fn three_nodes() {
    let tree = load(include_str!("fixtures/three_nodes.json"));
    let node = |v| tree.find(&v).unwrap();

    assert!(search::validate_three_nodes(node(5), node(2), node(3)));
    assert!(search::validate_three_nodes(node(3), node(2), node(5)));
    assert!(!search::validate_three_nodes(node(5), node(8), node(3)));
}

#[test]
fn remove_from_fixture() {
    let mut tree = load(include_str!("fixtures/closest_value.json"));

    assert_eq!(tree.remove(&10), Some(10));
    assert_eq!(tree.root().map(|root| *root.value()), Some(13));
    assert_eq!(values(&tree), [1, 2, 5, 5, 13, 14, 15, 22]);

    assert_eq!(tree.remove(&5), Some(5));
    assert_eq!(values(&tree), [1, 2, 5, 13, 14, 15, 22]);
    assert!(tree.is_bst());
}

#[test]
fn remove_everything() {
    let mut tree = load(include_str!("fixtures/three_nodes.json"));
    for x in 0..9 {
        tree.remove(&x);
    }
    // The default configuration refuses to remove the last node.
    assert_eq!(values(&tree), [8]);

    tree.set_config(Config {
        last_node_removal: LastNodeRemoval::Remove,
    });
    assert_eq!(tree.remove(&8), Some(8));
    assert!(tree.is_empty());
}

#[test]
fn fixture_round_trip_through_json() {
    let tree: Tree<_> = [10, 5, 15, 2, 5, 13, 22, 1, 14].into_iter().collect();
    let spec = TreeSpec::from_tree(&tree).unwrap();
    let json = serde_json::to_string(&spec).unwrap();
    let parsed: TreeSpec<i32> = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.build().unwrap(), tree);
}
