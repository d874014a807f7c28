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

//! 规范值与其上的有限运算
//!
//! 这里的运算全部假设操作数有限；特殊值由上层的匹配表先行拦截。

use std::cmp::Ordering;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

/// 值的种类：有限值或三个特殊值之一
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum Value {
    Finite(Canonical),
    NaN,
    PositiveInfinity,
    NegativeInfinity,
}

impl Value {
    pub(crate) fn infinity(positive: bool) -> Self {
        if positive { Value::PositiveInfinity } else { Value::NegativeInfinity }
    }

    /// NaN 为 0，正负无穷分别为 1、-1
    pub(crate) fn signum(&self) -> i8 {
        match self {
            Value::Finite(c) => c.signum(),
            Value::NaN => 0,
            Value::PositiveInfinity => 1,
            Value::NegativeInfinity => -1,
        }
    }
}

/// 最简分数 `numer / denom`
///
/// 不变式：`denom > 0`，`gcd(|numer|, denom) == 1`，零总是 `0 / 1`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct Canonical {
    numer: BigInt,
    denom: BigInt,
}

impl Canonical {
    pub(crate) fn zero() -> Self {
        Self { numer: BigInt::zero(), denom: BigInt::one() }
    }

    pub(crate) fn integer(numer: BigInt) -> Self {
        Self { numer, denom: BigInt::one() }
    }

    /// 化简为最简形式，调用方保证 `denom != 0`
    pub(crate) fn reduce(numer: BigInt, denom: BigInt) -> Self {
        debug_assert!(!denom.is_zero());
        if numer.is_zero() {
            return Self::zero();
        }

        // 符号移到分子
        let (mut numer, mut denom) = if denom.is_negative() {
            (-numer, -denom)
        } else {
            (numer, denom)
        };

        let gcd = numer.gcd(&denom);
        if !gcd.is_one() {
            numer /= &gcd;
            denom /= &gcd;
        }
        Self { numer, denom }
    }

    pub(crate) fn numer(&self) -> &BigInt {
        &self.numer
    }

    pub(crate) fn denom(&self) -> &BigInt {
        &self.denom
    }

    pub(crate) fn is_zero(&self) -> bool {
        self.numer.is_zero()
    }

    pub(crate) fn is_integer(&self) -> bool {
        self.denom.is_one()
    }

    pub(crate) fn signum(&self) -> i8 {
        if self.numer.is_positive() {
            1
        } else if self.numer.is_negative() {
            -1
        } else {
            0
        }
    }

    pub(crate) fn neg(&self) -> Self {
        Self { numer: -&self.numer, denom: self.denom.clone() }
    }

    pub(crate) fn abs(&self) -> Self {
        Self { numer: self.numer.abs(), denom: self.denom.clone() }
    }

    pub(crate) fn add(&self, rhs: &Self) -> Self {
        if self.is_zero() {
            return rhs.clone();
        }
        if rhs.is_zero() {
            return self.clone();
        }
        if self.denom == rhs.denom {
            return Self::reduce(&self.numer + &rhs.numer, self.denom.clone());
        }

        // a/b + c/d = (a*e + c*f) / (e*f*g)，其中 g = gcd(b, d)，e = d/g，f = b/g
        let g = self.denom.gcd(&rhs.denom);
        let e = &rhs.denom / &g;
        let f = &self.denom / &g;
        let numer = &self.numer * &e + &rhs.numer * &f;
        let denom = e * f * g;
        Self::reduce(numer, denom)
    }

    pub(crate) fn sub(&self, rhs: &Self) -> Self {
        self.add(&rhs.neg())
    }

    pub(crate) fn mul(&self, rhs: &Self) -> Self {
        if self.is_zero() || rhs.is_zero() {
            return Self::zero();
        }

        // 先交叉约分，乘积即为最简
        let gcd_ad = self.numer.gcd(&rhs.denom);
        let gcd_bc = self.denom.gcd(&rhs.numer);
        let numer = (&self.numer / &gcd_ad) * (&rhs.numer / &gcd_bc);
        let denom = (&self.denom / &gcd_bc) * (&rhs.denom / &gcd_ad);
        Self { numer, denom }
    }

    /// 倒数；零没有倒数
    pub(crate) fn recip(&self) -> Option<Self> {
        if self.is_zero() {
            return None;
        }
        Some(if self.numer.is_negative() {
            Self { numer: -&self.denom, denom: -&self.numer }
        } else {
            Self { numer: self.denom.clone(), denom: self.numer.clone() }
        })
    }

    pub(crate) fn pow(&self, exponent: u32) -> Self {
        // 最简分数的幂仍是最简分数
        Self { numer: self.numer.pow(exponent), denom: self.denom.pow(exponent) }
    }

    /// 向负无穷取整
    pub(crate) fn floor(&self) -> BigInt {
        self.numer.div_floor(&self.denom)
    }
}

impl PartialOrd for Canonical {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Canonical {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.denom == other.denom {
            return self.numer.cmp(&other.numer);
        }
        (&self.numer * &other.denom).cmp(&(&other.numer * &self.denom))
    }
}
