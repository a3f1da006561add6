use criterion::*;
use std::hint::black_box;

mod common;
use common::*;

fn spawn_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("spawn");

    group.bench_function("create_add_10k", |b| {
        b.iter(|| {
            let (world, entities) = populate(ENTITIES_SMALL);
            black_box((world, entities));
        });
    });

    group.bench_function("destroy_10k", |b| {
        b.iter_batched(
            || populate(ENTITIES_SMALL),
            |(mut world, entities)| {
                for entity in entities {
                    world.destroy(entity);
                }
                black_box(world);
            },
            BatchSize::LargeInput,
        );
    });

    group.bench_function("recycle_churn_10k", |b| {
        b.iter_batched(
            || populate(ENTITIES_SMALL),
            |(mut world, entities)| {
                for entity in entities {
                    world.destroy(entity);
                }
                for n in 0..ENTITIES_SMALL {
                    let e = world.create();
                    world.add(
                        e,
                        Position {
                            x: n as f32,
                            y: 0.0,
                        },
                    );
                }
                black_box(world);
            },
            BatchSize::LargeInput,
        );
    });

    group.finish();
}

criterion_group!(benches, spawn_benchmark);
criterion_main!(benches);
