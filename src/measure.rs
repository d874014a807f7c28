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

//! 最大公约数、最小公倍数与中位分数

use num_integer::Integer;
use num_traits::Signed;

use crate::{
    rational::{
        utils::lcm,
        value::{Canonical, Value},
    },
    BigRational, Semantics,
};

impl<S: Semantics> BigRational<S> {
    /// 有理数的最大公约数：`gcd(分子) / lcm(分母)`
    ///
    /// `self` 为零时原样返回 `other`；任一操作数非有限时结果为 NaN
    ///
    /// # 示例
    /// ```
    /// # use bigrational::FixedBigRational;
    /// let a = FixedBigRational::new(2, 3);
    /// let b = FixedBigRational::new(4, 9);
    /// assert_eq!(a.gcd(&b), FixedBigRational::new(2, 9));
    /// assert_eq!(FixedBigRational::zero().gcd(&b), b);
    /// ```
    pub fn gcd(&self, other: &Self) -> Self {
        let (Some(a), Some(b)) = (self.finite(), other.finite()) else {
            return Self::from_value(Value::NaN);
        };
        if a.is_zero() {
            return other.clone();
        }

        let numer = a.numer().abs().gcd(&b.numer().abs());
        let denom = lcm(a.denom(), b.denom());
        Self::from_canonical(Canonical::reduce(numer, denom))
    }

    /// 有理数的最小公倍数：`lcm(分子) / gcd(分母)`
    ///
    /// 任一操作数为零时结果为零；任一操作数非有限时结果为 NaN
    ///
    /// # 示例
    /// ```
    /// # use bigrational::FixedBigRational;
    /// let a = FixedBigRational::new(2, 3);
    /// let b = FixedBigRational::new(4, 9);
    /// assert_eq!(a.lcm(&b), FixedBigRational::new(4, 3));
    /// assert!(FixedBigRational::zero().lcm(&b).is_zero());
    /// ```
    pub fn lcm(&self, other: &Self) -> Self {
        let (Some(a), Some(b)) = (self.finite(), other.finite()) else {
            return Self::from_value(Value::NaN);
        };
        if a.is_zero() || b.is_zero() {
            return Self::zero();
        }

        let numer = lcm(a.numer(), b.numer());
        let denom = a.denom().gcd(b.denom());
        Self::from_canonical(Canonical::reduce(numer, denom))
    }

    /// 中位分数 `(a + c) / (b + d)`
    ///
    /// NaN 参与时结果为 NaN；正负无穷的中位分数为零；
    /// 其余情况下无穷按 `±1⁄0` 参与计算
    ///
    /// # 示例
    /// ```
    /// # use bigrational::{FixedBigRational, FloatingBigRational};
    /// let a = FixedBigRational::one();
    /// assert_eq!(a.mediant(&FixedBigRational::two()), FixedBigRational::new(3, 2));
    ///
    /// let inf = FloatingBigRational::POSITIVE_INFINITY;
    /// assert_eq!(inf.mediant(&FloatingBigRational::NEGATIVE_INFINITY), FloatingBigRational::zero());
    /// assert_eq!(inf.mediant(&FloatingBigRational::new(1, 2)), FloatingBigRational::one());
    /// ```
    pub fn mediant(&self, other: &Self) -> Self {
        match (self.value(), other.value()) {
            (Value::NaN, _) | (_, Value::NaN) => Self::from_value(Value::NaN),
            (Value::PositiveInfinity, Value::NegativeInfinity)
            | (Value::NegativeInfinity, Value::PositiveInfinity) => Self::zero(),
            _ => {
                let numer = self.numerator() + other.numerator();
                let denom = self.denominator() + other.denominator();
                // 固定语义下两个分母均为正，和不会为零
                Self::from_value(Self::encode(numer, denom))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{FixedBigRational, FloatingBigRational};

    type F = FloatingBigRational;

    #[test]
    fn test_gcd() {
        let x = FixedBigRational::new(3, 4);
        assert_eq!(FixedBigRational::zero().gcd(&x), x);
        assert_eq!(x.gcd(&FixedBigRational::zero()), x);
        assert_eq!(x.gcd(&FixedBigRational::new(-1, 2)), FixedBigRational::new(1, 4));
        assert_eq!(
            FixedBigRational::from(12).gcd(&FixedBigRational::from(18)),
            FixedBigRational::from(6)
        );
        assert!(F::NAN.gcd(&F::one()).is_nan());
        assert!(F::one().gcd(&F::POSITIVE_INFINITY).is_nan());
    }

    #[test]
    fn test_lcm() {
        let x = FixedBigRational::new(3, 4);
        assert!(FixedBigRational::zero().lcm(&x).is_zero());
        assert!(x.lcm(&FixedBigRational::zero()).is_zero());
        assert_eq!(x.lcm(&FixedBigRational::new(-1, 2)), FixedBigRational::new(3, 2));
        assert_eq!(
            FixedBigRational::from(4).lcm(&FixedBigRational::from(6)),
            FixedBigRational::from(12)
        );
        assert!(F::NEGATIVE_INFINITY.lcm(&F::one()).is_nan());
    }

    #[test]
    fn test_mediant() {
        assert_eq!(
            FixedBigRational::one().mediant(&FixedBigRational::two()),
            FixedBigRational::new(3, 2)
        );
        assert_eq!(
            FixedBigRational::new(1, 2).mediant(&FixedBigRational::new(2, 3)),
            FixedBigRational::new(3, 5)
        );

        let inf = F::POSITIVE_INFINITY;
        let neg_inf = F::NEGATIVE_INFINITY;
        assert!(F::NAN.mediant(&F::one()).is_nan());
        assert!(inf.mediant(&neg_inf).is_zero());
        assert!(neg_inf.mediant(&inf).is_zero());
        assert!(inf.mediant(&inf).is_positive_infinity());
        assert_eq!(neg_inf.mediant(&F::new(1, 2)), F::zero());
        assert_eq!(inf.mediant(&F::two()), F::from(3));
    }
}
