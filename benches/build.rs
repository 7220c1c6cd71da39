use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use bstree::Tree;

/// Returns how many nodes are needed to fill a binary tree with `num_levels` levels.
fn num_nodes_in_full_tree(num_levels: u32) -> usize {
    2usize.pow(num_levels) - 1
}

/// Pre-order traversal of the full tree holding `0..n`.
fn balanced_preorder(num_levels: u32) -> Vec<i32> {
    let xs = (0..)
        .take(num_nodes_in_full_tree(num_levels))
        .collect::<Vec<_>>();
    let tree = Tree::from_sorted(&xs).expect("non-empty ascending input");
    tree.pre_order().copied().collect()
}

/// Bench building trees in bulk from inputs of various sizes. The ascending pre-order input
/// describes a degenerate tree, which is the worst case for anything recursive.
pub fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    for num_levels in [3, 7, 11, 15] {
        let n = num_nodes_in_full_tree(num_levels);
        let sorted = (0..).take(n).collect::<Vec<i32>>();
        let preorder = balanced_preorder(num_levels);

        group.bench_with_input(BenchmarkId::new("from-sorted", n), &sorted, |b, xs| {
            b.iter(|| Tree::from_sorted(black_box(xs)))
        });
        group.bench_with_input(BenchmarkId::new("from-preorder-balanced", n), &preorder, |b, xs| {
            b.iter(|| Tree::from_preorder(black_box(xs)))
        });
        group.bench_with_input(BenchmarkId::new("from-preorder-degenerate", n), &sorted, |b, xs| {
            b.iter(|| Tree::from_preorder(black_box(xs)))
        });
        group.bench_with_input(BenchmarkId::new("insert-all", n), &preorder, |b, xs| {
            b.iter(|| xs.iter().copied().collect::<Tree<_>>())
        });
    }

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
