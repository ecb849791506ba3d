use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use derive_more::{Deref, From};
use itertools::Itertools;
use zhang_shasha::{diff, distance, Node, Tree, Unit};

#[derive(Default, Clone, From, Deref)]
struct Branch(#[deref(forward)] Vec<Self>);

impl<'n> Node<'n> for Branch {
    type Label = usize;
    fn label(&'n self) -> Self::Label {
        self.len()
    }
}

impl<'t> Tree<'t> for Branch {
    type Children = &'t [Self];
    fn children(&'t self) -> Self::Children {
        self
    }
}

fn tree(leaves: Vec<Branch>, r: usize) -> Branch {
    if leaves.len() < r {
        leaves.into()
    } else {
        let chunks = (leaves.len() + r - 1) / r;
        leaves
            .into_iter()
            .chunks(chunks)
            .into_iter()
            .map(|c| tree(c.collect(), r))
            .collect::<Vec<_>>()
            .into()
    }
}

fn bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("n-tree distance");
    for r in [2, 4, 8, 16] {
        let a = tree(vec![Branch::default(); 100], r);
        let b = tree(vec![Branch::default(); 90], r);
        group.bench_with_input(BenchmarkId::from_parameter(r), &(a, b), |bench, (a, b)| {
            bench.iter(|| distance(a, b, &Unit))
        });
    }
    group.finish();

    let mut group = c.benchmark_group("n-tree diff");
    for r in [2, 4, 8, 16] {
        let a = tree(vec![Branch::default(); 100], r);
        let b = tree(vec![Branch::default(); 90], r);
        group.bench_with_input(BenchmarkId::from_parameter(r), &(a, b), |bench, (a, b)| {
            bench.iter(|| diff(a, b, &Unit))
        });
    }
    group.finish();
}

criterion_group!(benches, bench);
criterion_main!(benches);
