#[macro_use]
extern crate criterion;

extern crate trackbox;

use criterion::Criterion;
use trackbox::TrackPoint;
use trackbox::haversine::haversine_distance;

fn criterion_benchmark(c: &mut Criterion) {
    let point1 = TrackPoint::new(6.953333, 51.301389);
    let point2 = TrackPoint::new(6.186389, 50.823194);
    c.bench_function("haversine", |b| b.iter(|| haversine_distance(&point1, &point2)));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
