use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use hprs::{FeatureRecord, Furnishing, PriceModel, PropertyType};

fn bench_estimate(c: &mut Criterion) {
    let model = PriceModel::default();
    let features = FeatureRecord {
        size: 1_200.0,
        bedrooms: 3,
        bathrooms: 2,
        avg_local_rent: 25_000.0,
        growth_rate: 4.5,
        city_tier: 1,
        property_type: PropertyType::Apartment,
        furnishing: Furnishing::Code(4),
        rera_registered: 1,
        move_in_ready: 1,
    };

    c.bench_function("estimate", |b| {
        b.iter(|| model.estimate(black_box(&features)))
    });
}

criterion_group!(benches, bench_estimate);
criterion_main!(benches);
