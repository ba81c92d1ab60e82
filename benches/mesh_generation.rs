use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec3;
use skyline_scene::config::SceneConfig;
use skyline_scene::mesh::{create_building, create_cylinder, create_sphere};
use skyline_scene::traits::SceneProvider;
use skyline_scene::{AssetLibrary, CityScene};

/// Benchmark: UV sphere at increasing resolution
fn bench_sphere_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("sphere");

    for (slices, stacks) in [(16, 8), (32, 16), (128, 64), (512, 256)] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{slices}x{stacks}")),
            &(slices, stacks),
            |b, &(slices, stacks)| {
                b.iter(|| create_sphere(black_box(0.7), slices, stacks, Vec3::ZERO).unwrap());
            },
        );
    }

    group.finish();
}

/// Benchmark: open cylinder at increasing slice counts
fn bench_cylinder_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("cylinder");

    for slices in [16, 256, 4096] {
        group.bench_with_input(BenchmarkId::from_parameter(slices), &slices, |b, &slices| {
            b.iter(|| create_cylinder(black_box(0.08), 10.0, slices, Vec3::ZERO).unwrap());
        });
    }

    group.finish();
}

/// Benchmark: a street of buildings
fn bench_building_generation(c: &mut Criterion) {
    c.bench_function("buildings_100", |b| {
        b.iter(|| {
            (0..100)
                .map(|i| create_building(2.0, 3.0, 8.0, Vec3::new(0.0, 0.0, -(i as f32))).unwrap())
                .count()
        });
    });
}

/// Benchmark: whole city, registration included
fn bench_city_population(c: &mut Criterion) {
    c.bench_function("city_populate", |b| {
        b.iter(|| {
            let mut provider = CityScene::new(SceneConfig::default());
            let mut assets = AssetLibrary::new();
            provider.initialize(&mut assets).unwrap();
            black_box(provider.populate(&assets).unwrap().total_triangles())
        });
    });
}

/// Benchmark: per-frame time broadcast
fn bench_time_broadcast(c: &mut Criterion) {
    let mut provider = CityScene::default();
    let mut assets = AssetLibrary::new();
    provider.initialize(&mut assets).unwrap();
    let mut scene = provider.populate(&assets).unwrap();

    c.bench_function("broadcast_time", |b| {
        let mut time = 0.0f32;
        b.iter(|| {
            time += 1.0 / 60.0;
            scene.broadcast_time(black_box(time), (1280, 720));
        });
    });
}

criterion_group!(
    benches,
    bench_sphere_generation,
    bench_cylinder_generation,
    bench_building_generation,
    bench_city_population,
    bench_time_broadcast
);
criterion_main!(benches);
