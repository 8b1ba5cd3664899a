use {
    criterion::{black_box, criterion_group, criterion_main, Benchmark, Criterion},
    std::f64::consts::PI,
    wavenumber::dispersion::{initial_guess, DispersionSolver},
};

pub fn criterion_benchmark(c: &mut Criterion) {
    let solver = DispersionSolver::default();

    c.bench(
        "dispersion",
        Benchmark::new("intermediate", move |b| {
            let (h, w) = (10.0, 2.0 * PI / 8.0);

            b.iter(|| {
                let (h, w) = black_box((h, w));
                solver.solve(initial_guess(h, w), h, w).unwrap()
            })
        }),
    );

    c.bench(
        "dispersion",
        Benchmark::new("deep", move |b| {
            let (h, w) = (4000.0, 2.0 * PI / 12.0);

            b.iter(|| {
                let (h, w) = black_box((h, w));
                solver.solve(initial_guess(h, w), h, w).unwrap()
            })
        }),
    );

    c.bench(
        "dispersion",
        Benchmark::new("shallow", move |b| {
            let (h, w) = (0.5, 2.0 * PI / 30.0);

            b.iter(|| {
                let (h, w) = black_box((h, w));
                solver.solve(initial_guess(h, w), h, w).unwrap()
            })
        }),
    );
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
