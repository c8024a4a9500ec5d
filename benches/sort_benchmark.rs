/*!
 * Sort Benchmarks
 *
 * Compare selection sort and list quicksort across queue sizes, plus
 * quicksort's worst case (already-sorted input, last-element pivot)
 */

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use queuesort::{quick_sort, selection_sort, Queue, Value};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_values(n: usize, seed: u64) -> Vec<Value> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen_range(0..1_000_000)).collect()
}

fn bench_random_input(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_random");

    for &size in &[100usize, 1000, 5000] {
        let values = random_values(size, 0xBE7C4);

        group.bench_with_input(BenchmarkId::new("selection", size), &values, |b, values| {
            b.iter_batched(
                || Queue::from_values(values).unwrap(),
                |mut queue| {
                    selection_sort(&mut queue);
                    queue
                },
                BatchSize::LargeInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("quick", size), &values, |b, values| {
            b.iter_batched(
                || Queue::from_values(values).unwrap(),
                |mut queue| {
                    quick_sort(&mut queue);
                    queue
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_adversarial_input(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_presorted");

    // Sorted input degrades the tail pivot to O(n^2); kept small so the
    // recursion stays shallow.
    for &size in &[100usize, 1000] {
        let values: Vec<Value> = (0..size as Value).collect();

        group.bench_with_input(BenchmarkId::new("quick", size), &values, |b, values| {
            b.iter_batched(
                || Queue::from_values(values).unwrap(),
                |mut queue| {
                    quick_sort(&mut queue);
                    queue
                },
                BatchSize::LargeInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("selection", size), &values, |b, values| {
            b.iter_batched(
                || Queue::from_values(values).unwrap(),
                |mut queue| {
                    selection_sort(&mut queue);
                    queue
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_queue_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("queue_ops");

    group.bench_function("push_pop_1000", |b| {
        b.iter(|| {
            let mut queue = Queue::new();
            for v in 0..1000 {
                queue.push(v).unwrap();
            }
            while queue.pop().is_ok() {}
            queue
        });
    });

    let values = random_values(1000, 0xC0FF);
    group.bench_function("copy_1000", |b| {
        let queue = Queue::from_values(&values).unwrap();
        b.iter(|| queue.copy().unwrap());
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_random_input,
    bench_adversarial_input,
    bench_queue_ops
);
criterion_main!(benches);
