//! Benchmarks for NPV evaluation and root solving.
//!
//! Run with: cargo bench -p valora-analytics

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

use valora_analytics::prelude::*;

// =============================================================================
// TEST DATA GENERATORS
// =============================================================================

/// Monthly-paying loan: disbursement, `n` coupons, principal with the last one.
fn create_schedule(n: usize) -> CashflowSchedule {
    let mut amounts = vec![-1_000_000.0];
    let mut days = vec![0];
    for k in 1..=n {
        let coupon = 5_000.0;
        let principal = if k == n { 1_000_000.0 } else { 0.0 };
        amounts.push(coupon + principal);
        days.push(30 * k as i64);
    }
    CashflowSchedule::new(amounts, days).unwrap()
}

fn create_curve(n: usize) -> ReferenceCurve {
    let rates = (0..=n).map(|k| 0.05 + 0.0001 * k as f64).collect();
    ReferenceCurve::new(rates).unwrap()
}

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_flat_npv(c: &mut Criterion) {
    let mut group = c.benchmark_group("flat_npv");

    for size in [6usize, 60, 360] {
        let npv = FlatRateNpv::new(create_schedule(size), 365.0).unwrap();
        group.throughput(Throughput::Elements(size as u64 + 1));
        group.bench_with_input(BenchmarkId::from_parameter(size), &npv, |b, npv| {
            b.iter(|| npv.npv(black_box(0.021)))
        });
    }
    group.finish();
}

fn bench_margin_npv(c: &mut Criterion) {
    let mut group = c.benchmark_group("margin_npv");

    for size in [6usize, 60, 360] {
        let npv = MarginNpv::new(create_schedule(size), &create_curve(size), 365.0).unwrap();
        group.throughput(Throughput::Elements(size as u64 + 1));
        group.bench_with_input(BenchmarkId::from_parameter(size), &npv, |b, npv| {
            b.iter(|| npv.npv(black_box(-0.03)))
        });
    }
    group.finish();
}

fn bench_solver_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve_irr");
    let schedule = create_schedule(60);

    for kind in [SolverKind::Brent, SolverKind::Bisection] {
        let config = ValuationConfig::default().with_solver(kind);
        group.bench_function(kind.to_string(), |b| {
            b.iter(|| solve_irr(black_box(&schedule), &config))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_flat_npv,
    bench_margin_npv,
    bench_solver_comparison
);
criterion_main!(benches);
