// Ranking benchmarks over randomly generated listing datasets
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nestrank_core::{rank, Criteria, Listing};
use rand::prelude::*;

fn generate_random_listing(id: usize, rng: &mut impl Rng) -> Listing {
    Listing {
        address: format!("{} Main St", id),
        city: "San Jose".to_string(),
        state: "CA".to_string(),
        zip_code: "95112".to_string(),
        latitude: rng.random_range(37.0..38.0),
        longitude: rng.random_range(-122.0..-121.0),
        number_of_rooms: rng.random_range(1..6),
        square_feet: rng.random_range(400.0..3000.0),
        price: rng.random_range(1200.0..6000.0),
        distance_from_public_transportation: rng.random_range(0.0..10.0),
        distance_from_whole_foods: rng.random_range(0.0..10.0),
        distance_from_parks: rng.random_range(0.0..10.0),
    }
}

fn generate_listings(size: usize) -> Vec<Listing> {
    let mut rng = rand::rng();
    (0..size).map(|i| generate_random_listing(i, &mut rng)).collect()
}

fn benchmark_rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank");

    for size in [100, 1000, 10000].iter() {
        let listings = generate_listings(*size);
        let criteria = Criteria::new(true, true, true);

        group.bench_with_input(BenchmarkId::new("all_criteria", size), size, |b, _| {
            b.iter(|| {
                let ordered = rank(black_box(listings.clone()), black_box(&criteria)).unwrap();
                black_box(ordered);
            });
        });
    }

    group.finish();
}

fn benchmark_rank_single_criterion(c: &mut Criterion) {
    let listings = generate_listings(10000);
    let criteria = Criteria::new(true, false, false);

    c.bench_function("rank_grocery_only_10k", |b| {
        b.iter(|| {
            let ordered = rank(black_box(listings.clone()), black_box(&criteria)).unwrap();
            black_box(ordered);
        });
    });
}

criterion_group!(benches, benchmark_rank, benchmark_rank_single_criterion);
criterion_main!(benches);
