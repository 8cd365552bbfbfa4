//! Basic benchmarks for the `dyn_array` crate, with `Vec` as the reference point.
#![allow(
    missing_docs,
    reason = "No need for API documentation in benchmark code"
)]

use std::hint::black_box;
use std::iter;
use std::time::Instant;

use alloc_tracker::Allocator;
use criterion::{Criterion, criterion_group, criterion_main};
use dyn_array::DynArray;

criterion_group!(benches, entrypoint);
criterion_main!(benches);

#[global_allocator]
static ALLOCATOR: Allocator<std::alloc::System> = Allocator::system();

type TestItem = usize;
const TEST_VALUE: TestItem = 1024;
const FILL_COUNT: usize = 1_000;

fn entrypoint(c: &mut Criterion) {
    let allocs = alloc_tracker::Session::new();

    let mut group = c.benchmark_group("dyn_array_basic");

    let allocs_op = allocs.operation("push_1000_dyn_array");
    group.bench_function("push_1000_dyn_array", |b| {
        b.iter_custom(|iters| {
            let _span = allocs_op.measure_thread().iterations(iters);

            let start = Instant::now();

            for _ in 0..iters {
                let mut array = DynArray::new();

                for _ in 0..FILL_COUNT {
                    _ = black_box(array.push(black_box(TEST_VALUE)));
                }

                drop(black_box(array));
            }

            start.elapsed()
        });
    });

    let allocs_op = allocs.operation("push_1000_vec");
    group.bench_function("push_1000_vec", |b| {
        b.iter_custom(|iters| {
            let _span = allocs_op.measure_thread().iterations(iters);

            let start = Instant::now();

            for _ in 0..iters {
                let mut vec = Vec::new();

                for _ in 0..FILL_COUNT {
                    vec.push(black_box(TEST_VALUE));
                }

                drop(black_box(vec));
            }

            start.elapsed()
        });
    });

    let allocs_op = allocs.operation("push_1000_reserved");
    group.bench_function("push_1000_reserved", |b| {
        b.iter_custom(|iters| {
            let mut arrays = iter::repeat_with(|| {
                let mut array = DynArray::new();
                array
                    .reserve(FILL_COUNT)
                    .expect("benchmark storage must be available");
                array
            })
            .take(usize::try_from(iters).unwrap())
            .collect::<Vec<_>>();

            let _span = allocs_op.measure_thread().iterations(iters);

            let start = Instant::now();

            for array in &mut arrays {
                for _ in 0..FILL_COUNT {
                    _ = black_box(array.push(black_box(TEST_VALUE)));
                }
            }

            start.elapsed()
        });
    });

    let allocs_op = allocs.operation("insert_front_100");
    group.bench_function("insert_front_100", |b| {
        b.iter_custom(|iters| {
            let _span = allocs_op.measure_thread().iterations(iters);

            let start = Instant::now();

            for _ in 0..iters {
                let mut array = DynArray::new();

                for _ in 0..100 {
                    _ = black_box(array.insert(0, black_box(TEST_VALUE)));
                }

                drop(black_box(array));
            }

            start.elapsed()
        });
    });

    let allocs_op = allocs.operation("clone_1000");
    group.bench_function("clone_1000", |b| {
        b.iter_custom(|iters| {
            let source = DynArray::from_fn(FILL_COUNT, |index| index)
                .expect("benchmark storage must be available");

            let _span = allocs_op.measure_thread().iterations(iters);

            let start = Instant::now();

            for _ in 0..iters {
                drop(black_box(source.clone()));
            }

            start.elapsed()
        });
    });

    group.finish();

    allocs.print_to_stdout();
}
