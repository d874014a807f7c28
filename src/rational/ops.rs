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

//! 算术运算符
//!
//! 右操作数可以是任何能转换为同一语义的值：整数、`BigInt`、`&BigRational`，
//! 浮动语义下还包括 `f32` 与 `f64`。特殊值先经过匹配表，有限路径只处理有限值。
//!
//! ```
//! # use bigrational::{FixedBigRational, FloatingBigRational};
//! let a = FixedBigRational::new(1, 2);
//! let b = FixedBigRational::new(1, 3);
//! assert_eq!(&a + &b, FixedBigRational::new(5, 6));
//! assert_eq!(&a - 1, FixedBigRational::new(-1, 2));
//! assert_eq!(&a * 3, FixedBigRational::new(3, 2));
//! assert_eq!(&a / &b, FixedBigRational::new(3, 2));
//!
//! let inf = FloatingBigRational::POSITIVE_INFINITY;
//! let neg_inf = FloatingBigRational::NEGATIVE_INFINITY;
//! assert!((&inf + &neg_inf).is_nan());
//! assert!((&inf * FloatingBigRational::zero()).is_nan());
//! assert!((FloatingBigRational::new(1, 2) / &neg_inf).is_zero());
//! assert!((FloatingBigRational::new(-1, 2) / 0).is_negative_infinity());
//! ```

use std::{
    iter::{Product, Sum},
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign},
};

use super::{value::Value, BigRational, Semantics};

// operations
fn add_values(lhs: &Value, rhs: &Value) -> Value {
    match (lhs, rhs) {
        // NaN
        (Value::NaN, _) | (_, Value::NaN) => Value::NaN,

        // (+inf / -inf) + (+inf / -inf)
        (Value::PositiveInfinity, Value::NegativeInfinity)
        | (Value::NegativeInfinity, Value::PositiveInfinity) => Value::NaN,
        (Value::PositiveInfinity, _) | (_, Value::PositiveInfinity) => Value::PositiveInfinity,
        (Value::NegativeInfinity, _) | (_, Value::NegativeInfinity) => Value::NegativeInfinity,

        // finite + finite
        (Value::Finite(a), Value::Finite(b)) => Value::Finite(a.add(b)),
    }
}

fn mul_values(lhs: &Value, rhs: &Value) -> Value {
    match (lhs, rhs) {
        // NaN
        (Value::NaN, _) | (_, Value::NaN) => Value::NaN,

        // finite * finite
        (Value::Finite(a), Value::Finite(b)) => Value::Finite(a.mul(b)),

        // 至少一侧为无穷：0 * inf 为 NaN，否则由符号之积决定
        _ => match lhs.signum() * rhs.signum() {
            0 => Value::NaN,
            s => Value::infinity(s > 0),
        },
    }
}

fn neg_value(value: &Value) -> Value {
    match value {
        Value::Finite(c) => Value::Finite(c.neg()),
        Value::NaN => Value::NaN,
        Value::PositiveInfinity => Value::NegativeInfinity,
        Value::NegativeInfinity => Value::PositiveInfinity,
    }
}

impl<S: Semantics> BigRational<S> {
    pub(crate) fn add_impl(&self, rhs: &Self) -> Self {
        Self::from_value(add_values(&self.value, &rhs.value))
    }

    pub(crate) fn sub_impl(&self, rhs: &Self) -> Self {
        Self::from_value(add_values(&self.value, &neg_value(&rhs.value)))
    }

    pub(crate) fn mul_impl(&self, rhs: &Self) -> Self {
        Self::from_value(mul_values(&self.value, &rhs.value))
    }

    // 固定语义下除以零与整数除法一样 panic
    fn div_impl(&self, rhs: &Self) -> Self {
        match self.checked_div(rhs) {
            Ok(quotient) => quotient,
            Err(err) => panic!("{err}"),
        }
    }

    // 除法是精确的，余数恒为零
    fn rem_impl(&self, rhs: &Self) -> Self {
        if self.is_nan() || rhs.is_nan() {
            Self::nan()
        } else {
            Self::zero()
        }
    }
}

macro_rules! impl_binary_op {
    ($($op:ident, $method:ident, $assign:ident, $assign_method:ident, $imp:ident);* $(;)?) => {
        $(
            impl<S: Semantics, T: Into<BigRational<S>>> $op<T> for BigRational<S> {
                type Output = BigRational<S>;

                fn $method(self, rhs: T) -> Self::Output {
                    self.$imp(&rhs.into())
                }
            }

            impl<S: Semantics, T: Into<BigRational<S>>> $op<T> for &BigRational<S> {
                type Output = BigRational<S>;

                fn $method(self, rhs: T) -> Self::Output {
                    self.$imp(&rhs.into())
                }
            }

            impl<S: Semantics, T: Into<BigRational<S>>> $assign<T> for BigRational<S> {
                fn $assign_method(&mut self, rhs: T) {
                    *self = self.$imp(&rhs.into());
                }
            }
        )*
    };
}

impl_binary_op!(
    Add, add, AddAssign, add_assign, add_impl;
    Sub, sub, SubAssign, sub_assign, sub_impl;
    Mul, mul, MulAssign, mul_assign, mul_impl;
    Div, div, DivAssign, div_assign, div_impl;
    Rem, rem, RemAssign, rem_assign, rem_impl;
);

impl<S: Semantics> Neg for BigRational<S> {
    type Output = Self;

    /// 取反，自动处理特殊值
    ///
    /// # 示例
    /// ```
    /// # use bigrational::FloatingBigRational;
    /// let a = FloatingBigRational::new(1, 2);
    /// assert_eq!(-a, FloatingBigRational::new(-1, 2));
    ///
    /// assert!((-FloatingBigRational::NAN).is_nan());
    /// assert!((-FloatingBigRational::POSITIVE_INFINITY).is_negative_infinity());
    /// assert!((-FloatingBigRational::zero()).is_zero());
    /// ```
    fn neg(self) -> Self::Output {
        Self::from_value(neg_value(&self.value))
    }
}

impl<S: Semantics> Neg for &BigRational<S> {
    type Output = BigRational<S>;

    fn neg(self) -> Self::Output {
        BigRational::from_value(neg_value(&self.value))
    }
}

impl<S: Semantics> From<&BigRational<S>> for BigRational<S> {
    fn from(value: &BigRational<S>) -> Self {
        value.clone()
    }
}

impl<S: Semantics> Sum for BigRational<S> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc.add_impl(&x))
    }
}

impl<'a, S: Semantics> Sum<&'a BigRational<S>> for BigRational<S> {
    fn sum<I: Iterator<Item = &'a BigRational<S>>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc.add_impl(x))
    }
}

impl<S: Semantics> Product for BigRational<S> {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::one(), |acc, x| acc.mul_impl(&x))
    }
}

impl<'a, S: Semantics> Product<&'a BigRational<S>> for BigRational<S> {
    fn product<I: Iterator<Item = &'a BigRational<S>>>(iter: I) -> Self {
        iter.fold(Self::one(), |acc, x| acc.mul_impl(x))
    }
}

#[cfg(test)]
mod tests {
    use crate::{FixedBigRational, FloatingBigRational};

    type F = FloatingBigRational;

    #[test]
    fn test_add_table() {
        let inf = F::POSITIVE_INFINITY;
        let neg_inf = F::NEGATIVE_INFINITY;
        let a = F::new(1, 2);

        assert!((&inf + &neg_inf).is_nan());
        assert!((&neg_inf + &inf).is_nan());
        assert!((&inf + &inf).is_positive_infinity());
        assert!((&a + &neg_inf).is_negative_infinity());
        assert!((&a + F::NAN).is_nan());
        assert!((F::NAN + &inf).is_nan());
        assert_eq!(&a + &a, F::one());
    }

    #[test]
    fn test_sub_table() {
        let inf = F::POSITIVE_INFINITY;
        let neg_inf = F::NEGATIVE_INFINITY;

        assert!((&inf - &inf).is_nan());
        assert!((&inf - &neg_inf).is_positive_infinity());
        assert!((F::new(1, 2) - &inf).is_negative_infinity());
        assert_eq!(F::new(1, 2) - F::new(1, 3), F::new(1, 6));
    }

    #[test]
    fn test_mul_table() {
        let inf = F::POSITIVE_INFINITY;
        let neg_inf = F::NEGATIVE_INFINITY;

        assert!((&inf * F::zero()).is_nan());
        assert!((F::zero() * &neg_inf).is_nan());
        assert!((&inf * &neg_inf).is_negative_infinity());
        assert!((&neg_inf * &neg_inf).is_positive_infinity());
        assert!((F::new(-1, 2) * &inf).is_negative_infinity());
        assert!((F::new(-1, 2) * &neg_inf).is_positive_infinity());
        assert!((F::NAN * F::zero()).is_nan());
    }

    #[test]
    fn test_div_table() {
        let inf = F::POSITIVE_INFINITY;
        let neg_inf = F::NEGATIVE_INFINITY;

        assert!((&inf / &neg_inf).is_nan());
        assert!((&inf / &inf).is_nan());
        assert!((&inf / 0).is_positive_infinity());
        assert!((&neg_inf / 0).is_negative_infinity());
        assert!((F::new(3, 4) / &inf).is_zero());
        assert!((F::new(3, 4) / 0).is_positive_infinity());
        assert!((F::zero() / 0).is_nan());
        assert!((F::new(1, 2) / F::NAN).is_nan());
    }

    #[test]
    fn test_rem_is_zero_or_nan() {
        assert!((F::new(7, 2) % 3).is_zero());
        assert!((F::POSITIVE_INFINITY % 3).is_zero());
        assert!((F::new(7, 2) % F::NAN).is_nan());
        assert!((FixedBigRational::new(13, 2) % FixedBigRational::new(3, 1)).is_zero());
    }

    #[test]
    fn test_assign_ops() {
        let mut a = FixedBigRational::new(1, 2);
        let mut b = FixedBigRational::new(1, 3);
        a += &b;
        b *= 3;
        assert_eq!(a, FixedBigRational::new(5, 6));
        assert_eq!(b, FixedBigRational::one());

        a -= 1;
        assert_eq!(a, FixedBigRational::new(-1, 6));
        a /= FixedBigRational::new(-1, 3);
        assert_eq!(a, FixedBigRational::new(1, 2));
        a %= 5;
        assert!(a.is_zero());
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn test_fixed_div_by_zero_panics() {
        let _ = FixedBigRational::new(1, 2) / 0;
    }

    #[test]
    fn test_sum_and_product() {
        let values: Vec<FixedBigRational> =
            (1..=4).map(|d| FixedBigRational::new(1, d)).collect();
        let sum: FixedBigRational = values.iter().sum();
        let product: FixedBigRational = values.into_iter().product();
        assert_eq!(sum, FixedBigRational::new(25, 12));
        assert_eq!(product, FixedBigRational::new(1, 24));

        let with_nan = [F::one(), F::NAN];
        assert!(with_nan.iter().sum::<F>().is_nan());
    }
}
