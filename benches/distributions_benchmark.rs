use criterion::{Criterion, criterion_group, criterion_main};
use probdist::stats::{
    Binomial, ChiSquared, ContinuousDistribution, DiscreteDistribution, Gamma, Laplace, Logistic,
    Pareto,
};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::hint::black_box;

fn bench_densities(c: &mut Criterion) {
    let xs: Vec<f64> = (0..10_000).map(|i| (i as f64) * 0.001 - 5.0).collect();
    let pos: Vec<f64> = (0..10_000).map(|i| (i as f64) * 0.002 + 1e-3).collect();

    let laplace = Laplace::new(0.0, 1.3).unwrap();
    c.bench_function("laplace_log_pdf_10k", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for &x in &xs {
                acc += laplace.log_pdf(x);
            }
            black_box(acc)
        })
    });

    let logistic = Logistic::new(0.0, 1.3).unwrap();
    c.bench_function("logistic_cdf_10k", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for &x in &xs {
                acc += logistic.cdf(x);
            }
            black_box(acc)
        })
    });

    let gamma = Gamma::new(3.3, 1.7).unwrap();
    c.bench_function("gamma_pdf_10k", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for &x in &pos {
                acc += gamma.pdf(x);
            }
            black_box(acc)
        })
    });

    let chi2 = ChiSquared::new(5.0).unwrap();
    c.bench_function("chi_squared_sf_10k", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for &x in &pos {
                acc += chi2.sf(x);
            }
            black_box(acc)
        })
    });

    let pareto = Pareto::new(1.0, 2.4).unwrap();
    c.bench_function("pareto_log_pdf_10k", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for &x in &pos {
                acc += pareto.log_pdf(x + 1.0);
            }
            black_box(acc)
        })
    });

    let binomial = Binomial::new(100_000, 0.3).unwrap();
    let ks: Vec<i64> = (0..10_000).map(|i| 25_000 + i).collect();
    c.bench_function("binomial_log_pmf_10k", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for &k in &ks {
                acc += binomial.log_pmf(k);
            }
            black_box(acc)
        })
    });
}

fn bench_quantiles(c: &mut Criterion) {
    let ps: Vec<f64> = (1..1_000).map(|i| (i as f64) / 1_000.0).collect();

    let chi2 = ChiSquared::new(5.0).unwrap();
    c.bench_function("chi_squared_ppf_1k", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for &p in &ps {
                acc += chi2.ppf(p).unwrap();
            }
            black_box(acc)
        })
    });

    let binomial = Binomial::new(1_000, 0.3).unwrap();
    c.bench_function("binomial_ppf_1k", |b| {
        b.iter(|| {
            let mut acc = 0;
            for &p in &ps {
                acc += binomial.ppf(p).unwrap();
            }
            black_box(acc)
        })
    });
}

fn bench_samplers(c: &mut Criterion) {
    let gamma = Gamma::new(0.7, 2.0).unwrap();
    c.bench_function("gamma_sample_10k", |b| {
        let mut rng = SmallRng::seed_from_u64(1);
        b.iter(|| {
            let acc: f64 = gamma.sampler(&mut rng).take(10_000).sum();
            black_box(acc)
        })
    });

    let logistic = Logistic::new(0.0, 1.0).unwrap();
    c.bench_function("logistic_sample_10k", |b| {
        let mut rng = SmallRng::seed_from_u64(2);
        b.iter(|| {
            let acc: f64 = logistic.sampler(&mut rng).take(10_000).sum();
            black_box(acc)
        })
    });
}

criterion_group!(benches, bench_densities, bench_quantiles, bench_samplers);
criterion_main!(benches);
