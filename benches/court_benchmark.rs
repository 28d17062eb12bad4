// benches/court_benchmark.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use court_scene::court_lib::{CourtConfig, CourtGeometryGenerator};
use court_scene::rendering_lib::mesh::SceneMesh;
use rand::Rng;

fn random_config(rng: &mut impl Rng) -> CourtConfig {
    let width = rng.gen_range(10.0..30.0);
    CourtConfig {
        width,
        length: rng.gen_range(width * 1.5..width * 2.5),
        floor_thickness: rng.gen_range(0.1..0.5),
        marking_thickness: rng.gen_range(0.05..0.2),
        three_point_radius_factor: rng.gen_range(0.3..0.45),
        ring_segments: rng.gen_range(32..=256),
    }
}

fn court_benchmark_fn(c: &mut Criterion) {
    let mut rng = rand::thread_rng();

    const NUM_BENCH_CONFIGS: usize = 100;
    let configs: Vec<CourtConfig> = (0..NUM_BENCH_CONFIGS).map(|_| random_config(&mut rng)).collect();

    let mut group = c.benchmark_group("CourtGeneration");

    group.bench_function("generate_court_100_configs", |b| {
        let mut config_iter = configs.iter().cycle();
        b.iter(|| {
            let config = config_iter.next().unwrap();
            CourtGeometryGenerator::generate_court(black_box(config))
        })
    });

    group.bench_function("generate_and_tessellate_100_configs", |b| {
        let mut config_iter = configs.iter().cycle();
        b.iter(|| {
            let config = config_iter.next().unwrap();
            let scene = CourtGeometryGenerator::generate_court(black_box(config));
            SceneMesh::from_descriptor(black_box(&scene))
        })
    });
    group.finish();
}

criterion_group!(benches, court_benchmark_fn);
criterion_main!(benches);
