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

//! 幂、精确开方与带余除法

use num_bigint::BigInt;
use num_integer::Roots;

use crate::{
    error::{RationalError, Result},
    rational::{
        utils::is_power_of,
        value::{Canonical, Value},
    },
    BigRational, Semantics,
};

/// 整数的精确 `n` 次方根
fn exact_root(value: &BigInt, n: u32) -> Option<BigInt> {
    let root = value.nth_root(n);
    (root.pow(n) == *value).then_some(root)
}

/// 非负整数平方根的上取整
fn ceil_sqrt(value: &BigInt) -> BigInt {
    let root = value.sqrt();
    if &root * &root == *value {
        root
    } else {
        root + 1
    }
}

impl<S: Semantics> BigRational<S> {
    /// 整数次幂，负指数经由倒数计算
    ///
    /// 浮动语义下 NaN 的任意次幂为 NaN，无穷的零次幂为 NaN
    ///
    /// # 错误
    /// 固定语义下零的负数次幂返回 [`RationalError::DivisionByZero`]
    ///
    /// # 示例
    /// ```
    /// # use bigrational::{FixedBigRational, FloatingBigRational};
    /// let a = FixedBigRational::new(-2, 3);
    /// assert_eq!(a.pow(3).unwrap(), FixedBigRational::new(-8, 27));
    /// assert_eq!(a.pow(-2).unwrap(), FixedBigRational::new(9, 4));
    /// assert_eq!(a.pow(0).unwrap(), FixedBigRational::one());
    /// assert!(FixedBigRational::zero().pow(-1).is_err());
    ///
    /// assert!(FloatingBigRational::zero().pow(-1).unwrap().is_positive_infinity());
    /// assert!(FloatingBigRational::POSITIVE_INFINITY.pow(0).unwrap().is_nan());
    /// ```
    pub fn pow(&self, exponent: i32) -> Result<Self> {
        let magnitude = exponent.unsigned_abs();
        match self.value() {
            Value::NaN => Ok(Self::from_value(Value::NaN)),
            Value::PositiveInfinity | Value::NegativeInfinity if exponent == 0 => {
                Ok(Self::from_value(Value::NaN))
            }
            Value::PositiveInfinity | Value::NegativeInfinity if exponent < 0 => Ok(Self::zero()),
            Value::PositiveInfinity => Ok(self.clone()),
            Value::NegativeInfinity => {
                Ok(Self::from_value(Value::infinity(magnitude % 2 == 0)))
            }
            Value::Finite(c) => {
                let power = Self::from_canonical(c.pow(magnitude));
                if exponent < 0 {
                    power.checked_recip()
                } else {
                    Ok(power)
                }
            }
        }
    }

    /// 精确平方根
    ///
    /// NaN 的平方根为 NaN，正无穷的平方根为正无穷
    ///
    /// # 错误
    /// 负数、负无穷或分子分母不全是完全平方数时返回 [`RationalError::NoExactRepresentation`]
    ///
    /// # 示例
    /// ```
    /// # use bigrational::FixedBigRational;
    /// assert_eq!(FixedBigRational::new(9, 25).sqrt().unwrap(), FixedBigRational::new(3, 5));
    /// assert!(FixedBigRational::new(8, 25).sqrt().is_err());
    /// assert!(FixedBigRational::from(-4).sqrt().is_err());
    /// ```
    pub fn sqrt(&self) -> Result<Self> {
        match self.value() {
            Value::NaN | Value::PositiveInfinity => Ok(self.clone()),
            _ if self.is_negative() => {
                tracing::debug!(value = %self, "square root of a negative value");
                Err(RationalError::NoExactRepresentation(format!("√{self}")))
            }
            Value::Finite(c) => self.exact_root_of(c, 2, "√"),
            Value::NegativeInfinity => {
                Err(RationalError::NoExactRepresentation(format!("√{self}")))
            }
        }
    }

    /// 精确立方根，负数的立方根为负数
    ///
    /// # 错误
    /// 分子分母不全是完全立方数时返回 [`RationalError::NoExactRepresentation`]
    ///
    /// # 示例
    /// ```
    /// # use bigrational::FixedBigRational;
    /// assert_eq!(FixedBigRational::new(-27, 125).cbrt().unwrap(), FixedBigRational::new(-3, 5));
    /// assert!(FixedBigRational::new(9, 125).cbrt().is_err());
    /// ```
    pub fn cbrt(&self) -> Result<Self> {
        match self.value() {
            Value::Finite(c) => self.exact_root_of(c, 3, "∛"),
            _ => Ok(self.clone()),
        }
    }

    fn exact_root_of(&self, c: &Canonical, n: u32, symbol: &str) -> Result<Self> {
        match (exact_root(c.numer(), n), exact_root(c.denom(), n)) {
            // 最简分数的根仍是最简分数
            (Some(numer), Some(denom)) => Ok(Self::from_canonical(Canonical::reduce(numer, denom))),
            _ => {
                tracing::debug!(value = %self, root = n, "no rational root");
                Err(RationalError::NoExactRepresentation(format!("{symbol}{self}")))
            }
        }
    }

    /// 平方根：能精确开方时返回精确值，否则返回 `f64` 平方根对应的有理数
    ///
    /// # 错误
    /// 负数返回 [`RationalError::NoExactRepresentation`]
    ///
    /// # 示例
    /// ```
    /// # use bigrational::FixedBigRational;
    /// assert_eq!(FixedBigRational::new(9, 25).sqrt_approximated().unwrap(), FixedBigRational::new(3, 5));
    /// let approx = FixedBigRational::new(8, 25).sqrt_approximated().unwrap();
    /// assert_eq!(approx.to_f64(), 0.32f64.sqrt());
    /// ```
    pub fn sqrt_approximated(&self) -> Result<Self> {
        match self.sqrt() {
            Ok(root) => Ok(root),
            Err(_) if self.is_negative() => {
                Err(RationalError::NoExactRepresentation(format!("√{self}")))
            }
            Err(_) => Self::from_f64(self.to_f64().sqrt()),
        }
    }

    /// 不超过原值的有理平方根及余数，满足 `self == root * root + remainder`
    ///
    /// 根取分子、分母各自的整数平方根；其平方超过原值时改用分母平方根的上取整，
    /// 余数因此恒为非负。NaN 得到两个 NaN，正无穷的根为正无穷、余数为 NaN
    ///
    /// # 错误
    /// 负数与负无穷返回 [`RationalError::NoExactRepresentation`]
    ///
    /// # 示例
    /// ```
    /// # use bigrational::FixedBigRational;
    /// let (root, rem) = FixedBigRational::new(11, 25).sqrt_and_remainder().unwrap();
    /// assert_eq!(root, FixedBigRational::new(3, 5));
    /// assert_eq!(rem, FixedBigRational::new(2, 25));
    ///
    /// let (root, rem) = FixedBigRational::new(9, 25).sqrt_and_remainder().unwrap();
    /// assert_eq!(root, FixedBigRational::new(3, 5));
    /// assert!(rem.is_zero());
    /// ```
    pub fn sqrt_and_remainder(&self) -> Result<(Self, Self)> {
        match self.value() {
            Value::NaN => Ok((self.clone(), self.clone())),
            Value::PositiveInfinity => Ok((self.clone(), Self::from_value(Value::NaN))),
            _ if self.is_negative() => {
                tracing::debug!(value = %self, "square root of a negative value");
                Err(RationalError::NoExactRepresentation(format!("√{self}")))
            }
            Value::Finite(c) => {
                let numer = c.numer().sqrt();
                let mut root = Canonical::reduce(numer.clone(), c.denom().sqrt());
                if root.mul(&root) > *c {
                    root = Canonical::reduce(numer, ceil_sqrt(c.denom()));
                }
                let remainder = c.sub(&root.mul(&root));
                Ok((Self::from_canonical(root), Self::from_canonical(remainder)))
            }
            Value::NegativeInfinity => {
                Err(RationalError::NoExactRepresentation(format!("√{self}")))
            }
        }
    }

    /// 立方根：能精确开方时返回精确值，否则返回 `f64` 立方根对应的有理数
    ///
    /// # 示例
    /// ```
    /// # use bigrational::FixedBigRational;
    /// let exact = FixedBigRational::new(-27, 125).cbrt_approximated().unwrap();
    /// assert_eq!(exact, FixedBigRational::new(-3, 5));
    /// let approx = FixedBigRational::new(28, 125).cbrt_approximated().unwrap();
    /// assert_eq!(approx.to_f64(), 0.224f64.cbrt());
    /// ```
    pub fn cbrt_approximated(&self) -> Result<Self> {
        match self.cbrt() {
            Ok(root) => Ok(root),
            Err(_) => Self::from_f64(self.to_f64().cbrt()),
        }
    }

    /// 带余除法：商向零截断，余数与被除数同号
    ///
    /// # 错误
    /// 固定语义下除数为零返回 [`RationalError::DivisionByZero`]
    ///
    /// # 示例
    /// ```
    /// # use bigrational::FixedBigRational;
    /// let (q, r) = FixedBigRational::new(-13, 2).div_rem(&FixedBigRational::from(3)).unwrap();
    /// assert_eq!(q, FixedBigRational::from(-2));
    /// assert_eq!(r, FixedBigRational::new(-1, 2));
    /// ```
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self)> {
        let quotient = self.checked_div(divisor)?.truncate();
        let remainder = self.sub_impl(&divisor.mul_impl(&quotient));
        Ok((quotient, remainder))
    }

    /// 分母是否为 2 的幂
    ///
    /// # 示例
    /// ```
    /// # use bigrational::FloatingBigRational;
    /// assert!(FloatingBigRational::new(3, 8).is_dyadic());
    /// assert!(FloatingBigRational::from(2).is_dyadic());
    /// assert!(!FloatingBigRational::new(1, 6).is_dyadic());
    /// assert!(!FloatingBigRational::POSITIVE_INFINITY.is_dyadic());
    /// ```
    pub fn is_dyadic(&self) -> bool {
        self.is_p_adic(2)
    }

    /// 分母是否为 `p` 的幂
    pub fn is_p_adic(&self, p: u32) -> bool {
        self.finite().is_some_and(|c| is_power_of(c.denom(), p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FixedBigRational, FloatingBigRational};
    use num_traits::Zero;

    type F = FloatingBigRational;

    #[test]
    fn test_pow_special_values() {
        assert!(F::NAN.pow(0).unwrap().is_nan());
        assert!(F::NAN.pow(3).unwrap().is_nan());
        assert!(F::NEGATIVE_INFINITY.pow(0).unwrap().is_nan());
        assert!(F::NEGATIVE_INFINITY.pow(3).unwrap().is_negative_infinity());
        assert!(F::NEGATIVE_INFINITY.pow(2).unwrap().is_positive_infinity());
        assert!(F::POSITIVE_INFINITY.pow(-2).unwrap().is_zero());
        assert_eq!(F::zero().pow(0).unwrap(), F::one());
        assert_eq!(
            FixedBigRational::zero().pow(-2),
            Err(RationalError::DivisionByZero)
        );
    }

    #[test]
    fn test_roots() {
        assert_eq!(FixedBigRational::new(4, 9).sqrt().unwrap(), FixedBigRational::new(2, 3));
        assert_eq!(FixedBigRational::zero().sqrt().unwrap(), FixedBigRational::zero());
        assert!(F::NAN.sqrt().unwrap().is_nan());
        assert!(F::POSITIVE_INFINITY.sqrt().unwrap().is_positive_infinity());
        assert!(F::NEGATIVE_INFINITY.sqrt().is_err());
        assert!(matches!(
            FixedBigRational::new(2, 1).sqrt(),
            Err(RationalError::NoExactRepresentation(_))
        ));

        assert_eq!(FixedBigRational::new(27, 125).cbrt().unwrap(), FixedBigRational::new(3, 5));
        assert!(F::NEGATIVE_INFINITY.cbrt().unwrap().is_negative_infinity());
        assert!(FixedBigRational::new(-1, 4).sqrt_approximated().is_err());

        let approx = FixedBigRational::new(9, 26).sqrt_approximated().unwrap();
        assert_eq!(approx, FixedBigRational::from_f64((9.0f64 / 26.0).sqrt()).unwrap());
    }

    #[test]
    fn test_sqrt_and_remainder() {
        let r = |n: i64, d: i64| FixedBigRational::new(n, d);
        assert_eq!(r(11, 25).sqrt_and_remainder().unwrap(), (r(3, 5), r(2, 25)));
        assert_eq!(r(8, 25).sqrt_and_remainder().unwrap(), (r(2, 5), r(4, 25)));
        assert_eq!(r(9, 25).sqrt_and_remainder().unwrap(), (r(3, 5), r(0, 1)));
        // 分母平方根向下取整会让根偏大
        assert_eq!(r(1, 2).sqrt_and_remainder().unwrap(), (r(1, 2), r(1, 4)));
        assert_eq!(r(100, 3).sqrt_and_remainder().unwrap(), (r(5, 1), r(25, 3)));

        for (n, d) in [(5, 7), (99, 101), (1_000_001, 3), (17, 1), (0, 1)] {
            let value = r(n, d);
            let (root, rem) = value.sqrt_and_remainder().unwrap();
            assert!(!root.is_negative() && !rem.is_negative());
            assert_eq!(&root * &root + rem, value);
        }

        assert!(r(-1, 4).sqrt_and_remainder().is_err());
        assert!(F::NEGATIVE_INFINITY.sqrt_and_remainder().is_err());
        let (root, rem) = F::NAN.sqrt_and_remainder().unwrap();
        assert!(root.is_nan() && rem.is_nan());
        let (root, rem) = F::POSITIVE_INFINITY.sqrt_and_remainder().unwrap();
        assert!(root.is_positive_infinity() && rem.is_nan());
    }

    #[test]
    fn test_cbrt_approximated() {
        assert_eq!(
            FixedBigRational::new(8, 27).cbrt_approximated().unwrap(),
            FixedBigRational::new(2, 3)
        );
        let approx = FixedBigRational::new(26, 125).cbrt_approximated().unwrap();
        assert_eq!(approx, FixedBigRational::from_f64((26.0f64 / 125.0).cbrt()).unwrap());
        let negative = FixedBigRational::new(-26, 125).cbrt_approximated().unwrap();
        assert_eq!(negative, -approx);
        assert!(F::NAN.cbrt_approximated().unwrap().is_nan());
        assert!(F::NEGATIVE_INFINITY.cbrt_approximated().unwrap().is_negative_infinity());
    }

    #[test]
    fn test_div_rem() {
        let r = |n: i64, d: i64| FixedBigRational::new(n, d);
        assert_eq!(r(13, 2).div_rem(&r(3, 1)).unwrap(), (r(2, 1), r(1, 2)));
        assert_eq!(r(-13, 2).div_rem(&r(-3, 1)).unwrap(), (r(2, 1), r(-1, 2)));
        assert_eq!(r(-13, 2).div_rem(&r(3, 1)).unwrap(), (r(-2, 1), r(-1, 2)));
        assert_eq!(r(13, 2).div_rem(&r(-3, 1)).unwrap(), (r(-2, 1), r(1, 2)));
        assert_eq!(r(6, 1).div_rem(&FixedBigRational::two()).unwrap(), (r(3, 1), r(0, 1)));
        assert_eq!(r(1, 2).div_rem(&FixedBigRational::zero()), Err(RationalError::DivisionByZero));

        let (q, rem) = F::new(13, 2).div_rem(&F::NAN).unwrap();
        assert!(q.is_nan() && rem.is_nan());
        let (q, rem) = F::NAN.div_rem(&F::from(3)).unwrap();
        assert!(q.is_nan() && rem.is_nan());
    }

    #[test]
    fn test_adic() {
        assert!(FixedBigRational::zero().is_dyadic());
        assert!(FixedBigRational::new(1, 2).is_dyadic());
        assert!(!FixedBigRational::new(2, 3).is_dyadic());
        assert!(!F::NAN.is_dyadic());
        assert!(!F::NEGATIVE_INFINITY.is_dyadic());

        assert!(FixedBigRational::zero().is_p_adic(3));
        assert!(FixedBigRational::new(1, 3).is_p_adic(3));
        assert!(FixedBigRational::new(2, 1).is_p_adic(3));
        assert!(!FixedBigRational::new(2, 5).is_p_adic(3));
    }

    #[test]
    fn test_exact_root_helper() {
        assert_eq!(exact_root(&BigInt::from(1_000_000), 3), Some(BigInt::from(100)));
        assert_eq!(exact_root(&BigInt::from(-8), 3), Some(BigInt::from(-2)));
        assert_eq!(exact_root(&BigInt::from(10), 2), None);
        assert!(exact_root(&BigInt::zero(), 2).is_some());
    }
}
