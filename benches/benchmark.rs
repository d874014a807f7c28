use criterion::{black_box, criterion_group, criterion_main, Criterion};
use bigrational::{ContinuedFraction, Fixed, FixedBigRational};

fn random_rational() -> FixedBigRational {
    FixedBigRational::new(rand::random_range(0..i64::MAX), rand::random_range(1..i64::MAX))
}

// 牛顿迭代固定轮数，分子分母位数每轮翻倍
fn sqrt_newton(n: &FixedBigRational, rounds: usize) -> FixedBigRational {
    let mut curr = if n > &FixedBigRational::one() { (n + 1) / 2 } else { FixedBigRational::one() };
    for _ in 0..rounds {
        curr = (n / &curr + &curr) / 2;
    }
    curr
}

fn sqrt_f64(n: f64) -> Option<f64> {
    let mut prev;
    let mut curr;
    if n.is_sign_negative() {
        return None;
    } else if n > 1.0 {
        prev = (n + 1.0) / 2.0;
    } else {
        prev = 1.0;
    }

    loop {
        curr = (n / prev + prev) / 2.0;
        if (curr - prev).abs() < 1e-16 {
            return Some(curr);
        }
        prev = curr;
    }
}

fn benchmark_arithmetic(c: &mut Criterion) {
    c.bench_function(
        "sqrt_newton(rational, 5)",
        |b| b.iter(|| sqrt_newton(black_box(&random_rational()), 5)));
    c.bench_function(
        "sqrt(f64)",
        |b| b.iter(
            || sqrt_f64(black_box(rand::random_range(0..i64::MAX) as f64 / rand::random_range(1..i64::MAX) as f64))
        )
    );
}

fn benchmark_conversion(c: &mut Criterion) {
    c.bench_function(
        "from_f64 -> to_f64",
        |b| b.iter(|| {
            let value = f64::from_bits(rand::random_range(0..0x7ff0_0000_0000_0000u64));
            FixedBigRational::from_f64(black_box(value)).map(|r| r.to_f64())
        }));
    c.bench_function(
        "to_f64(random)",
        |b| b.iter(|| black_box(random_rational()).to_f64()));
}

fn benchmark_continued_fraction(c: &mut Criterion) {
    c.bench_function(
        "continued_fraction(random)",
        |b| b.iter(|| ContinuedFraction::value_of(black_box(&random_rational())).to_big_rational()));
    c.bench_function(
        "e(100).convergent(99)",
        |b| b.iter(|| ContinuedFraction::<Fixed>::e(black_box(100)).and_then(|cf| cf.convergent(99))));
}

criterion_group!(benches, benchmark_arithmetic, benchmark_conversion, benchmark_continued_fraction);
criterion_main!(benches);
