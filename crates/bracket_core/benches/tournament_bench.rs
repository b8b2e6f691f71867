use criterion::{black_box, criterion_group, criterion_main, Criterion};

use bracket_core::{run_single, trial_rng, MonteCarlo, Region, Roster, SimulationConfig, TeamRecord};

fn tiered_roster() -> Roster {
    let records = Region::ALL
        .into_iter()
        .flat_map(|region| {
            (1..=16u8).map(move |seed| {
                TeamRecord::new(
                    format!("{region}_S{seed}"),
                    1820.0 - 22.0 * seed as f64,
                    seed,
                    region.as_str(),
                )
            })
        })
        .collect();
    Roster::from_records(records).unwrap()
}

fn bench_single_tournament(c: &mut Criterion) {
    let roster = tiered_roster();
    let mut trial = 0u64;

    c.bench_function("single_tournament", |b| {
        b.iter(|| {
            trial += 1;
            black_box(run_single(&roster, &mut trial_rng(42, trial)));
        });
    });
}

fn bench_monte_carlo_1k(c: &mut Criterion) {
    let roster = tiered_roster();
    let mut group = c.benchmark_group("monte_carlo_1k");
    group.sample_size(20);

    group.bench_function("sequential", |b| {
        let config = SimulationConfig::deterministic(7).with_trials(1_000);
        b.iter(|| MonteCarlo::new(&roster, config.clone()).run().unwrap());
    });
    group.bench_function("parallel", |b| {
        let config = SimulationConfig::deterministic(7)
            .with_trials(1_000)
            .with_parallel(true);
        b.iter(|| MonteCarlo::new(&roster, config.clone()).run().unwrap());
    });
    group.finish();
}

criterion_group!(benches, bench_single_tournament, bench_monte_carlo_1k);
criterion_main!(benches);
