// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for the tree codec, draft store, and a full save cycle.

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use thicket_draft::{validate, DraftStore};
use thicket_form::FormState;
use thicket_tree::{codec, FieldId, Node};

/// Builds a tree of the given depth with `branching` children per node.
fn build_tree(depth: usize, branching: usize) -> Vec<Node> {
    fn build(prefix: &str, depth: usize, branching: usize) -> Vec<Node> {
        (0..branching)
            .map(|i| {
                let id = format!("{prefix}-{i}");
                let mut node = Node::new(id.clone(), format!("row {id}"));
                for field in FieldId::VALUES {
                    node.set_field(field, "filled");
                }
                if depth > 1 {
                    node.children = build(&id, depth - 1, branching);
                }
                node
            })
            .collect()
    }
    build("n", depth, branching)
}

fn bench_form(c: &mut Criterion) {
    let mut group = c.benchmark_group("form");

    for (depth, branching) in [(3, 3), (4, 4)] {
        let roots = build_tree(depth, branching);
        let rows = codec::flatten(&roots).len();

        group.bench_with_input(
            BenchmarkId::new("flatten", rows),
            &roots,
            |b, roots| b.iter(|| black_box(codec::flatten(roots))),
        );

        group.bench_with_input(
            BenchmarkId::new("rebuild", rows),
            &roots,
            |b, roots| {
                let flat = codec::flatten(roots);
                b.iter(|| black_box(codec::rebuild(&flat, roots).unwrap()));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("seed_drafts", rows),
            &roots,
            |b, roots| b.iter(|| black_box(DraftStore::seeded(roots))),
        );

        group.bench_with_input(
            BenchmarkId::new("validate_tree", rows),
            &roots,
            |b, roots| {
                let drafts = DraftStore::seeded(roots);
                b.iter(|| black_box(validate::validate_tree(roots, &drafts)));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("edit_and_save", rows),
            &roots,
            |b, roots| {
                b.iter_batched(
                    || FormState::new(roots.clone()),
                    |mut form| {
                        form.begin_edit();
                        form.field_changed("n-0", FieldId::Value1, "选项B1");
                        form.field_changed("n-1", FieldId::Value6, "edited");
                        form.save(1_000).unwrap();
                        form
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_form);
criterion_main!(benches);
