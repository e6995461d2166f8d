use criterion::{criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rs_fluids::solver::{FluidSimulation, SolverConfig};

pub fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("solver_step");
    group.measurement_time(std::time::Duration::from_secs(5));
    group.sample_size(50);

    for n in [32_usize, 64, 128] {
        let config = SolverConfig::new(n, 0.0002, 1.0 / 60.0).unwrap();
        let mut sim = FluidSimulation::new(config).unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        group.bench_function(format!("n{}", n), |b| {
            b.iter(|| {
                let x = rng.random_range(1..=n);
                let y = rng.random_range(1..=n);
                let index = sim.ix(x, y);
                sim.add_density(index, 1.0).unwrap();
                sim.add_velocity(
                    index,
                    rng.random_range(-3.0..3.0),
                    rng.random_range(-3.0..3.0),
                )
                .unwrap();
                sim.step();
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_step);
criterion_main!(benches);
