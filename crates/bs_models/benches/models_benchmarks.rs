//! Criterion benchmarks for Black-Scholes pricing and implied volatility.
//!
//! Measures single-option pricing and Greeks, and implied volatility
//! inversion across moneyness, including quotes that force bracket widening.

use bs_models::analytical::BlackScholes;
use bs_models::implied_vol::ImpliedVolSolver;
use bs_models::{black_scholes_price, implied_volatility, OptionType};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Benchmark closed-form pricing and Greeks.
fn bench_pricing(c: &mut Criterion) {
    let mut group = c.benchmark_group("black_scholes_price");

    for option_type in [OptionType::Call, OptionType::Put] {
        group.bench_with_input(
            BenchmarkId::new("free_function", option_type),
            &option_type,
            |b, &option_type| {
                b.iter(|| {
                    black_scholes_price(
                        black_box(100.0),
                        black_box(105.0),
                        black_box(0.5),
                        black_box(0.03),
                        black_box(0.25),
                        option_type,
                    )
                })
            },
        );
    }

    let model = BlackScholes::new(100.0, 0.03, 0.25).unwrap();
    group.bench_function("greeks", |b| {
        b.iter(|| model.greeks(black_box(105.0), black_box(0.5), OptionType::Call))
    });

    group.finish();
}

/// Benchmark implied volatility inversion.
fn bench_implied_vol(c: &mut Criterion) {
    let mut group = c.benchmark_group("implied_volatility");

    // (label, strike, sigma)
    let scenarios = [
        ("itm", 80.0, 0.2),
        ("atm", 100.0, 0.2),
        ("otm", 120.0, 0.2),
        ("high_vol", 100.0, 8.0),
    ];

    for (label, strike, sigma) in scenarios {
        let market =
            black_scholes_price(100.0, strike, 1.0, 0.05, sigma, OptionType::Call).unwrap();
        group.bench_with_input(BenchmarkId::new("call", label), &market, |b, &market| {
            b.iter(|| {
                implied_volatility(
                    black_box(market),
                    100.0,
                    strike,
                    1.0,
                    0.05,
                    OptionType::Call,
                )
            })
        });
    }

    // A chain of 100 strikes through a shared solver
    let solver = ImpliedVolSolver::with_defaults();
    let chain: Vec<(f64, f64)> = (0..100)
        .map(|i| {
            let strike = 60.0 + i as f64 * 0.8;
            let price =
                black_scholes_price(100.0, strike, 0.5, 0.02, 0.3, OptionType::Put).unwrap();
            (strike, price)
        })
        .collect();
    group.bench_function("put_chain_100", |b| {
        b.iter(|| {
            for &(strike, price) in &chain {
                let _ = solver.solve(black_box(price), 100.0, strike, 0.5, 0.02, OptionType::Put);
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_pricing, bench_implied_vol);
criterion_main!(benches);
