// A high-precision fraction lib implemented in rust.
// Copyright (C) 2025 Richard Sun
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use bigrational::{
    ContinuedFraction, FixedBigRational, FloatingBigRational, RationalError, RoundingMode,
};

type F = FloatingBigRational;

#[test]
fn sorting_puts_nan_last() {
    let mut values = vec![F::POSITIVE_INFINITY, F::NAN, F::zero(), F::NEGATIVE_INFINITY];
    values.sort_by(F::total_cmp);

    assert!(values[0].is_negative_infinity());
    assert!(values[1].is_zero());
    assert!(values[2].is_positive_infinity());
    assert!(values[3].is_nan());

    let nan = F::NAN;
    assert!(nan != nan);
    assert_eq!(nan.total_cmp(&nan), std::cmp::Ordering::Equal);
    assert!(nan.partial_cmp(&nan).is_none());
}

#[test]
fn special_values_propagate() {
    let inf = F::POSITIVE_INFINITY;
    let neg_inf = F::NEGATIVE_INFINITY;
    let two = F::two();

    assert!((F::NAN + &two).is_nan());
    assert!((&inf + &neg_inf).is_nan());
    assert!((&inf - &inf).is_nan());
    assert!((&inf + &two).is_positive_infinity());
    assert!((F::zero() * &inf).is_nan());
    assert!((&neg_inf * &neg_inf).is_positive_infinity());
    assert!((&two / &inf).is_zero());
    assert!((&inf / F::zero()).is_positive_infinity());
    assert!((&neg_inf / F::zero()).is_negative_infinity());
    assert!((&inf / &inf).is_nan());
    assert!((&two / 0).is_positive_infinity());
    assert!((-&two / 0).is_negative_infinity());
    assert!((F::zero() / 0).is_nan());
    assert!((&two % &inf).is_zero());
    assert!((F::NAN % &two).is_nan());
    assert!(F::NAN.to_f64().is_nan());
    assert_eq!(neg_inf.to_f64(), f64::NEG_INFINITY);
}

#[test]
fn float_boundaries_are_exact() {
    for value in [f64::MAX, f64::MIN_POSITIVE, f64::from_bits(1), -f64::from_bits(1), 0.1, -2.5] {
        assert_eq!(FixedBigRational::from_f64(value).unwrap().to_f64(), value);
    }
    for value in [f32::MAX, f32::MIN_POSITIVE, f32::from_bits(1)] {
        assert_eq!(FixedBigRational::from_f32(value).unwrap().to_f32(), value);
    }
    assert!(F::from(f64::NAN).is_nan());
    assert!(F::from(f64::NEG_INFINITY).is_negative_infinity());
    assert!(matches!(
        FixedBigRational::from_f64(f64::INFINITY),
        Err(RationalError::NonFiniteOperand(_))
    ));
    // 超出 f64 范围
    let huge = FixedBigRational::from_f64(f64::MAX).unwrap() * 2;
    assert_eq!(huge.to_f64(), f64::INFINITY);
    assert_eq!((-huge).to_f64(), f64::NEG_INFINITY);
}

#[test]
fn singleton_values() {
    assert_eq!(FixedBigRational::value_of(0, 1).unwrap(), FixedBigRational::zero());
    assert_eq!(FixedBigRational::value_of(4, 2).unwrap(), FixedBigRational::two());
    assert_eq!(F::value_of(0, 7).unwrap(), F::zero());
    assert!(F::value_of(0, 0).unwrap().is_nan());
    assert_eq!(FixedBigRational::value_of(1, 0), Err(RationalError::DivisionByZero));
}

#[test]
fn measures() {
    let x = FixedBigRational::new(3, 5);
    assert_eq!(FixedBigRational::zero().gcd(&x), x);
    assert!(FixedBigRational::zero().lcm(&x).is_zero());
    assert_eq!(
        FixedBigRational::one().mediant(&FixedBigRational::two()),
        FixedBigRational::new(3, 2)
    );
}

#[test]
fn continued_fractions() {
    let value = FixedBigRational::new(3245, 1000);
    let cf = value.to_continued_fraction();
    assert_eq!(cf.to_string(), "[3; 4, 12, 4]");
    assert_eq!(cf.to_big_rational(), value);

    let e = FixedBigRational::new(271_828_182_845i64, 100_000_000_000i64);
    let e = ContinuedFraction::value_of(&e);
    assert_eq!(e.convergent(0).unwrap(), FixedBigRational::from(2));
    assert_eq!(e.convergent(1).unwrap(), FixedBigRational::from(3));
    assert_eq!(e.convergent(2).unwrap(), FixedBigRational::new(8, 3));
    assert!(matches!(
        e.convergent(100),
        Err(RationalError::InvalidConvergentIndex { index: 100, .. })
    ));
}

#[test]
fn progression_enumerates() {
    let p = FixedBigRational::zero()
        .range_to(FixedBigRational::new(7, 3))
        .and_then(|p| p.step(FixedBigRational::new(1, 2)))
        .unwrap();
    let expected: Vec<_> = [(0, 1), (1, 2), (1, 1), (3, 2), (2, 1)]
        .into_iter()
        .map(|(n, d)| FixedBigRational::new(n, d))
        .collect();
    assert_eq!(p.into_iter().collect::<Vec<_>>(), expected);

    for step in [0, -1] {
        let result = FixedBigRational::zero().range_to(1).and_then(|p| p.step(step));
        assert!(matches!(result, Err(RationalError::InvalidProgression(_))));
    }
}

#[test]
fn rounding_defaults_to_half_even() {
    assert_eq!(RoundingMode::default(), RoundingMode::HalfEven);
    assert_eq!(FixedBigRational::new(1, 2).round(), FixedBigRational::zero());
    assert_eq!(FixedBigRational::new(3, 2).round(), FixedBigRational::two());
}

#[test]
fn decimals() {
    let value: FixedBigRational = "-1.25".parse().unwrap();
    assert_eq!(value, FixedBigRational::new(-5, 4));
    assert_eq!(value.to_big_decimal().unwrap().to_string(), "-1.25");
    assert!(matches!(
        FixedBigRational::new(1, 3).to_big_decimal(),
        Err(RationalError::NoExactRepresentation(_))
    ));
    assert_eq!(
        FixedBigRational::new(1, 3)
            .to_big_decimal_with_scale(3, RoundingMode::HalfEven)
            .unwrap()
            .to_string(),
        "0.333"
    );
}
