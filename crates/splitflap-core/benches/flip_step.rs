use criterion::{black_box, criterion_group, criterion_main, Criterion};
use splitflap_core::{Config, DigitReading, Engine, Inputs, TimeFormat};

/// Step an engine with all six digits mid-flip, the busiest frame shape.
fn bench_update_all_flipping(c: &mut Criterion) {
    c.bench_function("update_all_flipping", |b| {
        let mut eng = Engine::new(Config::default());
        eng.seed(DigitReading::from_hms(9, 59, 59, TimeFormat::H24));
        eng.update(
            0.016,
            Inputs::with_reading(DigitReading::from_hms(10, 0, 0, TimeFormat::H24)),
        );
        b.iter(|| {
            let out = eng.update(black_box(0.004), Inputs::default());
            black_box(out.changes.len());
            // keep the face busy: restart flips once everything settles
            if !eng.is_animating() {
                eng.seed(DigitReading::from_hms(9, 59, 59, TimeFormat::H24));
                eng.update(
                    0.004,
                    Inputs::with_reading(DigitReading::from_hms(10, 0, 0, TimeFormat::H24)),
                );
            }
        })
    });
}

fn bench_idle_update(c: &mut Criterion) {
    c.bench_function("update_idle_face", |b| {
        let mut eng = Engine::new(Config::default());
        eng.seed(DigitReading::from_hms(12, 34, 56, TimeFormat::H24));
        b.iter(|| {
            let out = eng.update(black_box(0.0), Inputs::default());
            black_box(out.is_empty());
        })
    });
}

criterion_group!(benches, bench_update_all_flipping, bench_idle_update);
criterion_main!(benches);
