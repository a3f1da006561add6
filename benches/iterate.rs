use criterion::*;
use std::hint::black_box;

mod common;
use common::*;

fn iterate_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("iterate");

    group.bench_function("single_view_each_100k", |b| {
        b.iter_batched_ref(
            || populate(ENTITIES_MED).0,
            |world| {
                world.view::<Position>().each(|position| {
                    position.y += 1.0;
                });
                black_box(world);
            },
            BatchSize::LargeInput,
        );
    });

    group.bench_function("single_view_iter_100k", |b| {
        b.iter_batched_ref(
            || populate(ENTITIES_MED).0,
            |world| {
                let view = world.view::<Wealth>();
                black_box(view.iter().count());
            },
            BatchSize::LargeInput,
        );
    });

    group.bench_function("multi_view_build_100k", |b| {
        b.iter_batched_ref(
            || populate(ENTITIES_MED).0,
            |world| {
                let view = world.view_multi::<(Position, Wealth, Productivity)>();
                black_box(view.len());
            },
            BatchSize::LargeInput,
        );
    });

    group.bench_function("multi_view_each_100k", |b| {
        b.iter_batched_ref(
            || populate(ENTITIES_MED).0,
            |world| {
                world
                    .view_multi::<(Productivity, Wealth)>()
                    .each(|(productivity, wealth)| {
                        wealth.value += productivity.rate;
                    });
                black_box(world);
            },
            BatchSize::LargeInput,
        );
    });

    group.finish();
}

criterion_group!(benches, iterate_benchmark);
criterion_main!(benches);
