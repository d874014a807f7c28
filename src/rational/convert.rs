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

//! 与原生数值类型、`BigInt`、`BigDecimal` 以及字符串之间的转换
//!
//! 二进制浮点数与有理数之间的转换是精确的：任何有限的 `f64` 都能无损地转换为有理数，
//! 有理数转换为 `f64` 时按就近舍入（平局取偶）处理，包括次正规数与溢出。

use std::{cmp::Ordering, fmt::Display, str::FromStr};

use bigdecimal::BigDecimal;
use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, ToPrimitive, Zero};

use super::{
    utils::{strip_factor, ten_pow},
    value::{Canonical, Value},
    BigRational, Floating, Semantics,
};
use crate::{
    error::{RationalError, Result},
    rounding::{round_integer, RoundingMode},
};

/// IEEE-754 二进制格式的位布局
#[derive(Debug, Clone, Copy)]
struct FloatFormat {
    mantissa_bits: u32,
    exponent_bits: u32,
}

const BINARY64: FloatFormat = FloatFormat { mantissa_bits: 52, exponent_bits: 11 };
const BINARY32: FloatFormat = FloatFormat { mantissa_bits: 23, exponent_bits: 8 };

impl FloatFormat {
    const fn bias(self) -> i64 {
        (1 << (self.exponent_bits - 1)) - 1
    }

    const fn precision(self) -> i64 {
        self.mantissa_bits as i64 + 1
    }

    const fn exponent_mask(self) -> u64 {
        (1 << self.exponent_bits) - 1
    }

    const fn mantissa_mask(self) -> u64 {
        (1 << self.mantissa_bits) - 1
    }

    const fn sign_bit(self) -> u64 {
        1 << (self.mantissa_bits + self.exponent_bits)
    }

    const fn infinity_bits(self) -> u64 {
        self.exponent_mask() << self.mantissa_bits
    }

    /// 最小次正规数最低位的指数，`f64` 为 -1074
    const fn min_lsb(self) -> i64 {
        1 - self.bias() - self.mantissa_bits as i64
    }

    /// 将位模式拆解为精确的有理数值
    fn decompose(self, bits: u64) -> Value {
        let negative = bits & self.sign_bit() != 0;
        let exponent = (bits >> self.mantissa_bits) & self.exponent_mask();
        let mantissa = bits & self.mantissa_mask();

        if exponent == self.exponent_mask() {
            return if mantissa == 0 { Value::infinity(!negative) } else { Value::NaN };
        }

        // 次正规数没有隐含位
        let (significand, lsb) = if exponent == 0 {
            (mantissa, self.min_lsb())
        } else {
            (mantissa | (1 << self.mantissa_bits), exponent as i64 + self.min_lsb() - 1)
        };

        let mut numer = BigInt::from(significand);
        if negative {
            numer = -numer;
        }
        let canonical = if lsb >= 0 {
            Canonical::integer(numer << lsb as usize)
        } else {
            Canonical::reduce(numer, BigInt::one() << lsb.unsigned_abs() as usize)
        };
        Value::Finite(canonical)
    }

    /// 将有限值就近舍入（平局取偶）为位模式
    fn compose(self, value: &Canonical) -> u64 {
        if value.is_zero() {
            return 0;
        }
        let sign = if value.signum() < 0 { self.sign_bit() } else { 0 };
        let numer = value.numer().magnitude();
        let denom = value.denom().magnitude();

        // 放大后商至少有 precision + 2 位，低位留给舍入
        let shift = self.precision() + 2 - (numer.bits() as i64 - denom.bits() as i64);
        let (scaled_numer, scaled_denom): (BigUint, BigUint) = if shift >= 0 {
            (numer << shift as usize, denom.clone())
        } else {
            (numer.clone(), denom << shift.unsigned_abs() as usize)
        };
        let (quotient, remainder) = scaled_numer.div_rem(&scaled_denom);
        let sticky = !remainder.is_zero();

        let len = quotient.bits() as i64;
        let exponent = len - 1 - shift;
        if exponent > self.bias() {
            return sign | self.infinity_bits();
        }

        let lsb = (exponent - (self.precision() - 1)).max(self.min_lsb());
        let dropped = lsb + shift;
        if dropped > len {
            // 不足最小次正规数的一半
            return sign;
        }
        let dropped = dropped as usize;

        let mut significand = &quotient >> dropped;
        let rest = &quotient - (&significand << dropped);
        let half = BigUint::one() << (dropped - 1);
        let round_up = match rest.cmp(&half) {
            Ordering::Greater => true,
            Ordering::Less => false,
            Ordering::Equal => sticky || significand.is_odd(),
        };
        if round_up {
            significand += 1u32;
        }

        let Some(significand) = significand.to_u64() else {
            return sign | self.infinity_bits();
        };
        // 进位会自然地溢入指数域，最大值再进位即为无穷
        let bits = (((lsb - self.min_lsb()) as u64) << self.mantissa_bits) + significand;
        sign | bits.min(self.infinity_bits())
    }
}

impl<S: Semantics> BigRational<S> {
    fn from_float_bits(bits: u64, format: FloatFormat, shown: impl Display) -> Result<Self> {
        let value = format.decompose(bits);
        if !S::NON_FINITE && !matches!(value, Value::Finite(_)) {
            tracing::debug!(semantics = S::NAME, value = %shown, "rejected non-finite float");
            return Err(RationalError::NonFiniteOperand(shown.to_string()));
        }
        Ok(Self::from_value(value))
    }

    /// 由 `f64` 精确转换
    ///
    /// # 错误
    /// 固定语义下 NaN 与无穷返回 [`RationalError::NonFiniteOperand`]
    ///
    /// # 示例
    /// ```
    /// # use bigrational::{FixedBigRational, FloatingBigRational};
    /// assert_eq!(FixedBigRational::from_f64(0.375).unwrap(), FixedBigRational::new(3, 8));
    /// assert!(FixedBigRational::from_f64(f64::NAN).is_err());
    /// assert!(FloatingBigRational::from_f64(f64::NEG_INFINITY).unwrap().is_negative_infinity());
    /// ```
    pub fn from_f64(value: f64) -> Result<Self> {
        Self::from_float_bits(value.to_bits(), BINARY64, value)
    }

    /// 由 `f32` 精确转换
    pub fn from_f32(value: f32) -> Result<Self> {
        Self::from_float_bits(u64::from(value.to_bits()), BINARY32, value)
    }

    /// 转换为最接近的 `f64`
    ///
    /// # 示例
    /// ```
    /// # use bigrational::FloatingBigRational;
    /// assert_eq!(FloatingBigRational::new(1, 3).to_f64(), 1.0 / 3.0);
    /// assert_eq!(FloatingBigRational::from(f64::MAX).to_f64(), f64::MAX);
    /// assert!(FloatingBigRational::NAN.to_f64().is_nan());
    /// ```
    pub fn to_f64(&self) -> f64 {
        match &self.value {
            Value::Finite(c) => f64::from_bits(BINARY64.compose(c)),
            Value::NaN => f64::NAN,
            Value::PositiveInfinity => f64::INFINITY,
            Value::NegativeInfinity => f64::NEG_INFINITY,
        }
    }

    /// 转换为最接近的 `f32`
    pub fn to_f32(&self) -> f32 {
        match &self.value {
            // BINARY32 的位模式只占低 32 位
            Value::Finite(c) => f32::from_bits(BINARY32.compose(c) as u32),
            Value::NaN => f32::NAN,
            Value::PositiveInfinity => f32::INFINITY,
            Value::NegativeInfinity => f32::NEG_INFINITY,
        }
    }

    /// 由 `BigDecimal` 精确转换
    ///
    /// # 示例
    /// ```
    /// # use bigrational::FixedBigRational;
    /// # use bigdecimal::BigDecimal;
    /// # use std::str::FromStr;
    /// let d = BigDecimal::from_str("3.245").unwrap();
    /// assert_eq!(FixedBigRational::from_big_decimal(&d), FixedBigRational::new(649, 200));
    /// ```
    pub fn from_big_decimal(decimal: &BigDecimal) -> Self {
        let (digits, scale) = decimal.as_bigint_and_exponent();
        let canonical = match scale.cmp(&0) {
            Ordering::Equal => Canonical::integer(digits),
            Ordering::Less => Canonical::integer(digits * ten_pow(scale.unsigned_abs() as usize)),
            Ordering::Greater => Canonical::reduce(digits, ten_pow(scale as usize)),
        };
        Self::from_canonical(canonical)
    }

    /// 精确转换为 `BigDecimal`
    ///
    /// # 错误
    /// 非有限值或分母含有 2 与 5 以外的素因子时返回
    /// [`RationalError::NoExactRepresentation`]
    ///
    /// # 示例
    /// ```
    /// # use bigrational::FixedBigRational;
    /// # use bigdecimal::BigDecimal;
    /// # use std::str::FromStr;
    /// let a = FixedBigRational::new(3, 8);
    /// assert_eq!(a.to_big_decimal().unwrap(), BigDecimal::from_str("0.375").unwrap());
    /// assert!(FixedBigRational::new(1, 3).to_big_decimal().is_err());
    /// ```
    pub fn to_big_decimal(&self) -> Result<BigDecimal> {
        let Some(c) = self.finite() else {
            tracing::debug!(value = %self, "no decimal form for non-finite value");
            return Err(RationalError::NoExactRepresentation(self.to_string()));
        };

        let (rest, twos) = strip_factor(c.denom(), 2);
        let (rest, fives) = strip_factor(&rest, 5);
        if !rest.is_one() {
            tracing::debug!(value = %self, "denominator has factors other than 2 and 5");
            return Err(RationalError::NoExactRepresentation(self.to_string()));
        }

        let scale = twos.max(fives);
        let digits = c.numer() * (ten_pow(scale as usize) / c.denom());
        Ok(BigDecimal::new(digits, i64::from(scale)))
    }

    /// 按指定舍入方式转换为保留 `scale` 位小数的 `BigDecimal`
    ///
    /// # 错误
    /// - 非有限值返回 [`RationalError::NonFiniteOperand`]
    /// - [`RoundingMode::Unnecessary`] 且需要舍入时返回 [`RationalError::NoExactRepresentation`]
    ///
    /// # 示例
    /// ```
    /// # use bigrational::{FixedBigRational, RoundingMode};
    /// # use bigdecimal::BigDecimal;
    /// # use std::str::FromStr;
    /// let a = FixedBigRational::new(340, 11);
    /// let down = a.to_big_decimal_with_scale(2, RoundingMode::Down).unwrap();
    /// let up = a.to_big_decimal_with_scale(2, RoundingMode::Ceiling).unwrap();
    /// assert_eq!(down, BigDecimal::from_str("30.90").unwrap());
    /// assert_eq!(up, BigDecimal::from_str("30.91").unwrap());
    /// ```
    pub fn to_big_decimal_with_scale(&self, scale: i64, mode: RoundingMode) -> Result<BigDecimal> {
        let Some(c) = self.finite() else {
            return Err(RationalError::NonFiniteOperand(self.to_string()));
        };

        let factor = ten_pow(scale.unsigned_abs() as usize);
        let scaled = if scale >= 0 {
            c.mul(&Canonical::integer(factor))
        } else {
            c.mul(&Canonical::reduce(BigInt::one(), factor))
        };
        let digits = round_integer(&scaled, mode).ok_or_else(|| {
            tracing::debug!(value = %self, scale, "inexact decimal with unnecessary rounding");
            RationalError::NoExactRepresentation(format!("{self} at scale {scale}"))
        })?;
        Ok(BigDecimal::new(digits, scale))
    }

    /// 向零截断为整数
    ///
    /// # 错误
    /// 非有限值返回 [`RationalError::NonFiniteOperand`]
    pub fn to_bigint(&self) -> Result<BigInt> {
        match self.finite() {
            Some(c) => Ok(c.numer() / c.denom()),
            None => Err(RationalError::NonFiniteOperand(self.to_string())),
        }
    }
}

impl From<f64> for BigRational<Floating> {
    /// 精确转换，NaN 与无穷映射为对应的特殊值
    fn from(value: f64) -> Self {
        Self::from_value(BINARY64.decompose(value.to_bits()))
    }
}

impl From<f32> for BigRational<Floating> {
    fn from(value: f32) -> Self {
        Self::from_value(BINARY32.decompose(u64::from(value.to_bits())))
    }
}

impl<S: Semantics> From<&BigDecimal> for BigRational<S> {
    fn from(value: &BigDecimal) -> Self {
        Self::from_big_decimal(value)
    }
}

impl<S: Semantics> From<BigDecimal> for BigRational<S> {
    fn from(value: BigDecimal) -> Self {
        Self::from_big_decimal(&value)
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl<S: Semantics> From<$t> for BigRational<S> {
                fn from(value: $t) -> Self {
                    Self::from_integer(value)
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, BigInt);

macro_rules! impl_from_for_float {
    ($($t:ty => $to:ident),*) => {
        $(
            impl<S: Semantics> From<&BigRational<S>> for $t {
                fn from(value: &BigRational<S>) -> Self {
                    value.$to()
                }
            }

            impl<S: Semantics> From<BigRational<S>> for $t {
                fn from(value: BigRational<S>) -> Self {
                    value.$to()
                }
            }
        )*
    };
}

impl_from_for_float!(f32 => to_f32, f64 => to_f64);

macro_rules! impl_try_from_for_integer {
    ($($t:ty => $to:ident),*) => {
        $(
            impl<S: Semantics> TryFrom<&BigRational<S>> for $t {
                type Error = RationalError;

                /// 向零截断后转换
                fn try_from(value: &BigRational<S>) -> Result<Self> {
                    value.to_bigint()?.$to().ok_or_else(|| {
                        RationalError::OutOfRange(format!("{value} as {}", stringify!($t)))
                    })
                }
            }

            impl<S: Semantics> TryFrom<BigRational<S>> for $t {
                type Error = RationalError;

                fn try_from(value: BigRational<S>) -> Result<Self> {
                    <$t>::try_from(&value)
                }
            }
        )*
    };
}

impl_try_from_for_integer!(
    i8 => to_i8, i16 => to_i16, i32 => to_i32, i64 => to_i64, i128 => to_i128, isize => to_isize,
    u8 => to_u8, u16 => to_u16, u32 => to_u32, u64 => to_u64, u128 => to_u128, usize => to_usize
);

impl<S: Semantics> FromStr for BigRational<S> {
    type Err = RationalError;

    /// 解析 `n`、`n/d`、`n⁄d`、十进制小数，浮动语义下还接受 `NaN`、`Infinity`、`-Infinity`、`+∞`、`-∞`
    ///
    /// # 示例
    /// ```
    /// # use bigrational::{FixedBigRational, FloatingBigRational};
    /// assert_eq!("6/-4".parse::<FixedBigRational>().unwrap(), FixedBigRational::new(-3, 2));
    /// assert_eq!("3⁄4".parse::<FixedBigRational>().unwrap(), FixedBigRational::new(3, 4));
    /// assert_eq!("0.25".parse::<FixedBigRational>().unwrap(), FixedBigRational::new(1, 4));
    /// assert!("-∞".parse::<FloatingBigRational>().unwrap().is_negative_infinity());
    /// assert!("NaN".parse::<FixedBigRational>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let special = match s {
            "NaN" => Some(Value::NaN),
            "Infinity" | "+Infinity" | "∞" | "+∞" => Some(Value::PositiveInfinity),
            "-Infinity" | "-∞" => Some(Value::NegativeInfinity),
            _ => None,
        };
        if let Some(value) = special {
            return if S::NON_FINITE {
                Ok(Self::from_value(value))
            } else {
                Err(RationalError::Parse(format!("{s} is not a fixed rational")))
            };
        }

        let parse_integer = |part: &str| {
            part.trim()
                .parse::<BigInt>()
                .map_err(|err| RationalError::Parse(format!("{s}: {err}")))
        };
        match s.split_once(['/', '⁄']) {
            Some((numer, denom)) => Self::value_of(parse_integer(numer)?, parse_integer(denom)?),
            None if s.contains(['.', 'e', 'E']) => {
                let decimal = BigDecimal::from_str(s)
                    .map_err(|err| RationalError::Parse(format!("{s}: {err}")))?;
                Ok(Self::from_big_decimal(&decimal))
            }
            None => Ok(Self::from_integer(parse_integer(s)?)),
        }
    }
}
