use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use hlcsphere::prelude::*;

fn benchmark_now(c: &mut Criterion) {
    let mut group = c.benchmark_group("HybridLogicalClock");

    group.bench_function("now/frozen", |b| {
        let mut clock = HybridLogicalClock::new(|| 1_000u64);
        b.iter(|| black_box(clock.now()));
    });

    group.bench_function("now/system", |b| {
        let mut clock = HybridLogicalClock::new(SystemClock::new());
        b.iter(|| black_box(clock.now()));
    });

    group.bench_function("now/drift_monitor", |b| {
        let config = ClockConfig::new().with_max_offset(1_000_000);
        let mut clock = HybridLogicalClock::with_policy(|| 1_000u64, config, DriftMonitor::new());
        b.iter(|| black_box(clock.now()));
    });

    for lead in [0u64, 1_000, 1_000_000].iter() {
        group.bench_with_input(BenchmarkId::new("update", lead), lead, |b, &lead| {
            let mut clock = HybridLogicalClock::new(SystemClock::new());
            let remote = Timestamp::from_wall_time(clock.last().wall_time() + lead);
            b.iter(|| black_box(clock.update(black_box(&remote))));
        });
    }

    group.finish();
}

fn benchmark_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("Codec");
    let time = Timestamp::new(1_700_000_000_000_000_000, 42);
    let bytes = time.encode();

    group.bench_function("encode", |b| {
        b.iter(|| black_box(codec::encode(black_box(&time))));
    });

    group.bench_function("encode_into", |b| {
        let mut buffer = [0u8; 64];
        b.iter(|| codec::encode_into(black_box(&time), &mut buffer, black_box(16)));
    });

    group.bench_function("decode", |b| {
        b.iter(|| black_box(codec::decode(black_box(&bytes), 0)));
    });

    group.finish();
}

criterion_group!(benches, benchmark_now, benchmark_codec);
criterion_main!(benches);
