//! Performance benchmarks for sizetree

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use sizetree::test_utils::TestDir;
use sizetree::{OpenBranches, OutputConfig, TreeFormatter, TreeWalker, WalkerConfig, list_children};

/// Build `width` directories, each holding `width` files and one nested
/// directory of `width` more files.
fn create_test_tree(width: usize) -> TestDir {
    let dir = TestDir::new();
    for d in 0..width {
        for f in 0..width {
            dir.add_file(&format!("dir_{}/file_{}.txt", d, f), "some content");
            dir.add_file(&format!("dir_{}/nested/inner_{}.txt", d, f), "x");
        }
    }
    dir
}

fn bench_list_children(c: &mut Criterion) {
    let dir = TestDir::new();
    for i in 0..500 {
        dir.add_file(&format!("File_{}.txt", i), "");
    }

    c.bench_function("list_children_500", |b| {
        b.iter(|| list_children(black_box(dir.path()), 1))
    });
}

fn bench_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("walk");

    let small = create_test_tree(5);
    group.bench_function("small_tree", |b| {
        b.iter(|| TreeWalker::new(WalkerConfig::default()).walk(black_box(small.path())))
    });

    let medium = create_test_tree(20);
    group.bench_function("medium_tree", |b| {
        b.iter(|| TreeWalker::new(WalkerConfig::default()).walk(black_box(medium.path())))
    });

    group.finish();
}

fn bench_format(c: &mut Criterion) {
    let dir = create_test_tree(20);
    let walk = TreeWalker::new(WalkerConfig::default())
        .walk(dir.path())
        .unwrap();
    let formatter = TreeFormatter::new(OutputConfig { use_color: false });

    c.bench_function("format_medium_tree", |b| {
        b.iter(|| formatter.format(black_box(&walk.root)))
    });
}

fn bench_prefix(c: &mut Criterion) {
    c.bench_function("prefix_depth_32", |b| {
        b.iter(|| {
            let mut branches = OpenBranches::new();
            for depth in 1..=32 {
                black_box(branches.prefix(depth, depth % 3 == 0));
            }
        })
    });
}

criterion_group!(benches, bench_list_children, bench_walk, bench_format, bench_prefix);
criterion_main!(benches);
