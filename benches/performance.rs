use std::collections::VecDeque;

use blockdeque::BlockDeque;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

fn bench_push_back(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_back");

    for size in [100, 1000, 10000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("blockdeque", size), size, |b, &size| {
            b.iter(|| {
                let mut deque: BlockDeque<u64> = BlockDeque::new();
                for i in 0..size as u64 {
                    deque.push_back(i);
                }
                black_box(deque.len())
            });
        });
        group.bench_with_input(BenchmarkId::new("vecdeque", size), size, |b, &size| {
            b.iter(|| {
                let mut deque = VecDeque::new();
                for i in 0..size as u64 {
                    deque.push_back(i);
                }
                black_box(deque.len())
            });
        });
    }
    group.finish();
}

fn bench_push_front(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_front");

    for size in [100, 1000, 10000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("blockdeque", size), size, |b, &size| {
            b.iter(|| {
                let mut deque: BlockDeque<u64> = BlockDeque::new();
                for i in 0..size as u64 {
                    deque.push_front(i);
                }
                black_box(deque.len())
            });
        });
    }
    group.finish();
}

fn bench_random_access(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_access");

    for size in [1000, 10000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("index", size), size, |b, &size| {
            let deque: BlockDeque<u64> = (0..size as u64).collect();
            b.iter(|| {
                let mut sum = 0u64;
                // stride through blocks rather than walking them in order
                for i in 0..size {
                    sum = sum.wrapping_add(deque[(i * 7919) % size]);
                }
                black_box(sum)
            });
        });
    }
    group.finish();
}

fn bench_iteration(c: &mut Criterion) {
    let mut group = c.benchmark_group("iterator");

    for size in [1000, 10000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("full_iteration", size), size, |b, &size| {
            let deque: BlockDeque<u64> = (0..size as u64).collect();
            b.iter(|| {
                for value in black_box(&deque) {
                    black_box(value);
                }
            });
        });
        group.bench_with_input(BenchmarkId::new("cursor_walk", size), size, |b, &size| {
            let deque: BlockDeque<u64> = (0..size as u64).collect();
            b.iter(|| {
                let mut cursor = deque.cursor_front();
                while let Some(value) = cursor.get() {
                    black_box(value);
                    cursor.move_next();
                }
            });
        });
    }
    group.finish();
}

fn bench_middle_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("middle_insert");

    for size in [1000, 10000].iter() {
        group.bench_with_input(BenchmarkId::new("insert_remove", size), size, |b, &size| {
            let mut deque: BlockDeque<u64> = (0..size as u64).collect();
            b.iter(|| {
                deque.insert(size / 3, 42);
                black_box(deque.remove(size / 3))
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_push_back,
    bench_push_front,
    bench_random_access,
    bench_iteration,
    bench_middle_insert
);
criterion_main!(benches);
