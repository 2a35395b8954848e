criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        branching_seed_generation,
        branching_deep_generation,
        querying_black_probability,
        scanning_playable_squares,
        pruning_to_ceiling,
}

use qrv_board::*;
use qrv_ensemble::*;

/// a fixed opening line, alternating colors from black
fn opening(depth: usize) -> Ensemble {
    let mut ensemble = Ensemble::default();
    let mut color = Color::Black;
    for _ in 0..depth {
        let Some(square) = ensemble.current().playable(color).next() else {
            break;
        };
        if ensemble.advance(square, color).is_err() {
            break;
        }
        color = !color;
    }
    ensemble
}

fn branching_seed_generation(c: &mut criterion::Criterion) {
    let generation = Generation::seed();
    let square = generation.playable(Color::Black).next().expect("opening move");
    c.bench_function("branch the 16 seed realizations", |b| {
        b.iter(|| generation.branch(square, Color::Black))
    });
}

fn branching_deep_generation(c: &mut criterion::Criterion) {
    let ensemble = opening(8);
    let generation = ensemble.current();
    let color = if generation.turn() % 2 == 0 { Color::Black } else { Color::White };
    let square = generation.playable(color).next().expect("playable square");
    c.bench_function("branch a generation 8 plies deep", |b| {
        b.iter(|| generation.branch(square, color))
    });
}

fn querying_black_probability(c: &mut criterion::Criterion) {
    let ensemble = opening(8);
    let generation = ensemble.current();
    c.bench_function("aggregate black probability over every square", |b| {
        b.iter(|| {
            Square::all()
                .filter_map(|s| generation.black_probability(s))
                .count()
        })
    });
}

fn scanning_playable_squares(c: &mut criterion::Criterion) {
    let ensemble = opening(8);
    let generation = ensemble.current();
    c.bench_function("scan every square for ensemble legality", |b| {
        b.iter(|| generation.playable(Color::Black).count())
    });
}

fn pruning_to_ceiling(c: &mut criterion::Criterion) {
    let ensemble = opening(8);
    let generation = ensemble.current().clone();
    let ceiling = Ceiling::Capped(generation.population() / 2);
    c.bench_function("prune a generation to half its population", |b| {
        b.iter(|| ceiling.enforce(generation.clone()))
    });
}
