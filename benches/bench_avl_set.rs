use balanced_collections::avl_tree::AvlSet;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;
use std::collections::BTreeSet;

const NUM_OF_OPERATIONS: usize = 100;

fn bench_btreeset_insert(c: &mut Criterion) {
    c.bench_function("bench btreeset insert", |b| {
        b.iter(|| {
            let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
            let mut set = BTreeSet::new();
            for _ in 0..NUM_OF_OPERATIONS {
                set.insert(rng.next_u32());
            }
        })
    });
}

fn bench_btreeset_contains(c: &mut Criterion) {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut set = BTreeSet::new();
    let mut values = Vec::new();
    for _ in 0..NUM_OF_OPERATIONS {
        let value = rng.next_u32();
        set.insert(value);
        values.push(value);
    }

    c.bench_function("bench btreeset contains", move |b| {
        b.iter(|| {
            for value in &values {
                black_box(set.contains(value));
            }
        })
    });
}

fn bench_avl_set_insert(c: &mut Criterion) {
    c.bench_function("bench avl_set insert", |b| {
        b.iter(|| {
            let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
            let mut set = AvlSet::new();
            for _ in 0..NUM_OF_OPERATIONS {
                set.insert(rng.next_u32());
            }
        })
    });
}

fn bench_avl_set_contains(c: &mut Criterion) {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut set = AvlSet::new();
    let mut values = Vec::new();
    for _ in 0..NUM_OF_OPERATIONS {
        let value = rng.next_u32();
        set.insert(value);
        values.push(value);
    }

    c.bench_function("bench avl_set contains", move |b| {
        b.iter(|| {
            for value in &values {
                black_box(set.contains(value));
            }
        })
    });
}

fn bench_avl_set_remove(c: &mut Criterion) {
    c.bench_function("bench avl_set remove", |b| {
        b.iter(|| {
            let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
            let mut set = AvlSet::new();
            let mut values = Vec::new();
            for _ in 0..NUM_OF_OPERATIONS {
                let value = rng.next_u32();
                set.insert(value);
                values.push(value);
            }
            for value in &values {
                black_box(set.remove(value));
            }
        })
    });
}

fn bench_avl_set_inorder(c: &mut Criterion) {
    let mut set = AvlSet::new();
    for value in 0..NUM_OF_OPERATIONS as u32 {
        set.insert(value);
    }

    c.bench_function("bench avl_set inorder", move |b| {
        b.iter(|| black_box(set.inorder(|value| value.to_string())))
    });
}

criterion_group!(
    benches,
    bench_btreeset_contains,
    bench_btreeset_insert,
    bench_avl_set_contains,
    bench_avl_set_insert,
    bench_avl_set_remove,
    bench_avl_set_inorder,
);
criterion_main!(benches);
