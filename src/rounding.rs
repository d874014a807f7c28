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

//! 舍入到整数
//!
//! 非有限值经过舍入保持不变

use std::cmp::Ordering;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, Zero};

use crate::{
    error::{RationalError, Result},
    rational::value::{Canonical, Value},
    BigRational, Semantics,
};

/// 舍入方式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// 向正无穷
    Ceiling,
    /// 向负无穷
    Floor,
    /// 就近舍入，平局取偶
    #[default]
    HalfEven,
    /// 就近舍入，平局远离零
    HalfUp,
    /// 就近舍入，平局趋向零
    HalfDown,
    /// 趋向零
    Down,
    /// 远离零
    Up,
    /// 不允许舍入，值必须已经是整数
    Unnecessary,
}

/// 按指定方式舍入为整数
///
/// 仅在 `Unnecessary` 且值不是整数时返回 `None`
pub(crate) fn round_integer(value: &Canonical, mode: RoundingMode) -> Option<BigInt> {
    let (floor, remainder) = value.numer().div_mod_floor(value.denom());
    if remainder.is_zero() {
        return Some(floor);
    }

    let negative = value.numer().is_negative();
    let bump = match mode {
        RoundingMode::Floor => false,
        RoundingMode::Ceiling => true,
        RoundingMode::Down => negative,
        RoundingMode::Up => !negative,
        RoundingMode::HalfEven | RoundingMode::HalfUp | RoundingMode::HalfDown => {
            match (&remainder << 1usize).cmp(value.denom()) {
                Ordering::Less => false,
                Ordering::Greater => true,
                Ordering::Equal => match mode {
                    RoundingMode::HalfUp => !negative,
                    RoundingMode::HalfDown => negative,
                    _ => floor.is_odd(),
                },
            }
        }
        RoundingMode::Unnecessary => return None,
    };

    Some(if bump { floor + 1u32 } else { floor })
}

impl<S: Semantics> BigRational<S> {
    // 不会失败的舍入方式
    fn rounded(&self, mode: RoundingMode) -> Self {
        match self.finite() {
            Some(c) => round_integer(c, mode).map_or_else(|| self.clone(), Self::from_integer),
            None => self.clone(),
        }
    }

    /// 按指定方式舍入为整数
    ///
    /// # 错误
    /// [`RoundingMode::Unnecessary`] 且值不是整数时返回 [`RationalError::NoExactRepresentation`]
    ///
    /// # 示例
    /// ```
    /// # use bigrational::{FixedBigRational, RoundingMode};
    /// let a = FixedBigRational::new(-5, 2);
    /// assert_eq!(a.round_with(RoundingMode::HalfUp).unwrap(), FixedBigRational::from(-3));
    /// assert_eq!(a.round_with(RoundingMode::HalfDown).unwrap(), FixedBigRational::from(-2));
    /// assert_eq!(a.round_with(RoundingMode::Ceiling).unwrap(), FixedBigRational::from(-2));
    /// assert!(a.round_with(RoundingMode::Unnecessary).is_err());
    /// ```
    pub fn round_with(&self, mode: RoundingMode) -> Result<Self> {
        match self.finite() {
            Some(c) => round_integer(c, mode).map(Self::from_integer).ok_or_else(|| {
                tracing::debug!(value = %self, "rounding is necessary");
                RationalError::NoExactRepresentation(self.to_string())
            }),
            None => Ok(self.clone()),
        }
    }

    /// 以默认方式（平局取偶）舍入
    ///
    /// # 示例
    /// ```
    /// # use bigrational::FixedBigRational;
    /// assert_eq!(FixedBigRational::new(1, 2).round(), FixedBigRational::zero());
    /// assert_eq!(FixedBigRational::new(3, 2).round(), FixedBigRational::two());
    /// ```
    pub fn round(&self) -> Self {
        self.rounded(RoundingMode::default())
    }

    /// 向负无穷取整
    pub fn floor(&self) -> Self {
        self.rounded(RoundingMode::Floor)
    }

    /// 向正无穷取整
    pub fn ceil(&self) -> Self {
        self.rounded(RoundingMode::Ceiling)
    }

    /// 向零取整
    pub fn truncate(&self) -> Self {
        self.rounded(RoundingMode::Down)
    }

    /// 拆分为向零取整的整数部分与小数部分，两者之和等于原值
    ///
    /// 非有限值的整数部分为其自身，小数部分为 NaN
    ///
    /// # 示例
    /// ```
    /// # use bigrational::{FixedBigRational, FloatingBigRational};
    /// let (whole, fraction) = FixedBigRational::new(-7, 2).truncate_and_fraction();
    /// assert_eq!(whole, FixedBigRational::from(-3));
    /// assert_eq!(fraction, FixedBigRational::new(-1, 2));
    ///
    /// let (whole, fraction) = FloatingBigRational::POSITIVE_INFINITY.truncate_and_fraction();
    /// assert!(whole.is_positive_infinity());
    /// assert!(fraction.is_nan());
    /// ```
    pub fn truncate_and_fraction(&self) -> (Self, Self) {
        let whole = self.truncate();
        let fraction = self.sub_impl(&whole);
        (whole, fraction)
    }

    /// 小数部分，与 [`truncate`](Self::truncate) 之和等于原值
    pub fn fraction(&self) -> Self {
        self.truncate_and_fraction().1
    }

    /// 朝 `goal` 的方向取整，等于 `goal` 时原样返回
    ///
    /// # 示例
    /// ```
    /// # use bigrational::FixedBigRational;
    /// let a = FixedBigRational::new(7, 2);
    /// assert_eq!(a.round_towards(&FixedBigRational::from(10)), FixedBigRational::from(4));
    /// assert_eq!(a.round_towards(&FixedBigRational::zero()), FixedBigRational::from(3));
    /// ```
    pub fn round_towards(&self, goal: &Self) -> Self {
        match self.partial_cmp(goal) {
            Some(Ordering::Equal) => self.clone(),
            Some(Ordering::Less) => self.ceil(),
            Some(Ordering::Greater) => self.floor(),
            None => Self::from_value(Value::NaN),
        }
    }

    /// 向零取整
    pub fn round_in(&self) -> Self {
        self.round_towards(&Self::zero())
    }

    /// 远离零取整
    pub fn round_out(&self) -> Self {
        self.rounded(RoundingMode::Up)
    }
}
