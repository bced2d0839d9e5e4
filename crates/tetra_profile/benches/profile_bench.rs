use criterion::{Criterion, black_box, criterion_group, criterion_main};

use tetra_profile::{CalendarDate, ClockTime, Profiler, sign_from_longitude};

fn sign_bench(c: &mut Criterion) {
    c.bench_function("sign_from_longitude", |b| {
        b.iter(|| sign_from_longitude(black_box(123.456)))
    });
}

fn profile_bench(c: &mut Criterion) {
    let profiler = Profiler::standard();
    let date = CalendarDate::new(1985, 6, 15).unwrap();
    let time = ClockTime::new(4, 30).unwrap();

    c.bench_function("profiler_compute", |b| {
        b.iter(|| profiler.compute(black_box(date), black_box(time)))
    });
}

criterion_group!(benches, sign_bench, profile_bench);
criterion_main!(benches);
