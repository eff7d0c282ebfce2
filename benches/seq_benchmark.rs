use criterion::{black_box, criterion_group, criterion_main, Criterion};
use recurseq::fibonacci::{self, FibCache};
use recurseq::recurrence::{self, Memory};

fn criterion_benchmark(c: &mut Criterion) {
    let size = black_box(1000);

    c.bench_function(format!("fib_memoized_cold {size}").as_str(), |b| {
        b.iter(|| {
            let mut cache = FibCache::new();
            cache.get(size as u64)
        })
    });

    c.bench_function(format!("fib_memoized_warm {size}").as_str(), |b| {
        let mut cache = FibCache::new();
        cache.get(size as u64);
        b.iter(|| cache.get(size as u64))
    });

    c.bench_function(format!("fib_eager_sequence {size}").as_str(), |b| {
        b.iter(|| fibonacci::sequence(size))
    });

    c.bench_function(format!("fib_recurrence_sliding {size}").as_str(), |b| {
        let fib = recurrence::fibonacci();
        b.iter(|| fib.take(size).collect::<Vec<_>>())
    });

    c.bench_function(format!("fib_recurrence_full {size}").as_str(), |b| {
        let fib = recurrence::fibonacci().with_memory(Memory::Full);
        b.iter(|| fib.take(size).collect::<Vec<_>>())
    });

    c.bench_function(format!("hofstadter_q_full {size}").as_str(), |b| {
        let q = recurrence::hofstadter_q();
        b.iter(|| q.take(size).collect::<Vec<_>>())
    });

    c.bench_function("fib_naive 25", |b| {
        b.iter(|| fibonacci::naive(black_box(25)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
