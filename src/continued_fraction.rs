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


//! # continued_fraction
//!
//! 有限连分数 `[a0; a1, a2, ...]`
//!
//! 第 0 项为整数部分，其后为部分商。有限值的分解与重建互为逆运算；
//! 非有限值分解为单项的 `[NaN;]`。

use std::{
    fmt::{self, Debug, Display, Formatter},
    slice,
};

use num_bigint::BigInt;
use num_traits::{One, Signed};

use crate::{
    error::{RationalError, Result},
    rational::value::{Canonical, Value},
    BigRational, Semantics,
};

/// 有限连分数
///
/// # 示例
/// ```
/// # use bigrational::{ContinuedFraction, FixedBigRational};
/// let cf = ContinuedFraction::value_of(&FixedBigRational::new(3245, 1000));
/// assert_eq!(cf.to_string(), "[3; 4, 12, 4]");
/// assert_eq!(cf.to_big_rational(), FixedBigRational::new(3245, 1000));
/// ```
#[derive(Clone, PartialEq)]
pub struct ContinuedFraction<S: Semantics> {
    terms: Vec<BigRational<S>>,
}

impl<S: Semantics> ContinuedFraction<S> {
    /// 将有理数分解为连分数
    ///
    /// 每一步取 `floor(x)` 作为一项，再对小数部分取倒数，直到小数部分为零
    pub fn value_of(value: &BigRational<S>) -> Self {
        let Some(mut rest) = value.finite().cloned() else {
            return Self { terms: vec![BigRational::from_value(Value::NaN)] };
        };

        let mut terms = Vec::new();
        loop {
            let whole = rest.floor();
            let fraction = rest.sub(&Canonical::integer(whole.clone()));
            terms.push(BigRational::from_integer(whole));
            match fraction.recip() {
                Some(next) => rest = next,
                None => break,
            }
        }
        tracing::trace!(value = %value, terms = terms.len(), "decomposed continued fraction");
        Self { terms }
    }

    /// 由整数部分与部分商构造
    ///
    /// # 错误
    /// 部分商必须是正的有限值，否则返回 [`RationalError::InvalidContinuedFraction`]
    ///
    /// # 示例
    /// ```
    /// # use bigrational::{ContinuedFraction, FixedBigRational};
    /// let cf = ContinuedFraction::from_terms(
    ///     FixedBigRational::from(1),
    ///     vec![FixedBigRational::from(2), FixedBigRational::from(2)],
    /// ).unwrap();
    /// assert_eq!(cf.to_big_rational(), FixedBigRational::new(7, 5));
    /// ```
    pub fn from_terms(
        integer_part: BigRational<S>,
        fractional_parts: impl IntoIterator<Item = BigRational<S>>,
    ) -> Result<Self> {
        let mut terms = vec![integer_part];
        terms.extend(fractional_parts);

        if !terms[0].is_finite() && terms.len() > 1 {
            return Err(RationalError::InvalidContinuedFraction(
                "a non-finite integer part has no fractional parts".to_string(),
            ));
        }
        if let Some(bad) = terms[1..].iter().find(|term| !term.is_finite() || !term.is_positive()) {
            tracing::debug!(term = %bad, "rejected fractional part");
            return Err(RationalError::InvalidContinuedFraction(format!(
                "fractional part {bad} is not positive"
            )));
        }
        Ok(Self { terms })
    }

    /// 整数部分
    pub fn integer_part(&self) -> &BigRational<S> {
        &self.terms[0]
    }

    /// 部分商，不含整数部分
    pub fn fractional_parts(&self) -> &[BigRational<S>] {
        &self.terms[1..]
    }

    /// 包括整数部分在内的前 `fractional_terms + 1` 项
    ///
    /// 超出长度时返回全部项
    pub fn terms(&self, fractional_terms: usize) -> &[BigRational<S>] {
        let end = fractional_terms.saturating_add(1).min(self.terms.len());
        &self.terms[..end]
    }

    /// 项数，包括整数部分
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// 连分数总有整数部分，恒为 `false`
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, BigRational<S>> {
        self.terms.iter()
    }

    /// 是否由有限值分解而来
    pub fn is_finite(&self) -> bool {
        self.integer_part().is_finite()
    }

    /// 所有部分商的分子都为 ±1
    ///
    /// # 示例
    /// ```
    /// # use bigrational::{ContinuedFraction, FixedBigRational};
    /// assert!(ContinuedFraction::value_of(&FixedBigRational::from(2)).is_simple());
    /// assert!(!ContinuedFraction::value_of(&FixedBigRational::new(2, 3)).is_simple());
    /// ```
    pub fn is_simple(&self) -> bool {
        self.fractional_parts().iter().all(|term| term.numerator().abs().is_one())
    }

    /// 自右向左折叠 `a + 1/acc` 重建有理数
    ///
    /// `[NaN;]` 重建为 NaN
    pub fn to_big_rational(&self) -> BigRational<S> {
        let Some(last) = self.terms.last().and_then(BigRational::finite) else {
            return BigRational::from_value(Value::NaN);
        };

        let mut acc = last.clone();
        for term in self.terms.iter().rev().skip(1) {
            let Some(term) = term.finite() else {
                return BigRational::from_value(Value::NaN);
            };
            // 部分商恒为正，累加值不会为零
            acc = match acc.recip() {
                Some(recip) => term.add(&recip),
                None => term.clone(),
            };
        }
        BigRational::from_canonical(acc)
    }

    /// 第 `n` 个渐近分数，第 0 个为整数部分
    ///
    /// # 错误
    /// `n` 不小于项数时返回 [`RationalError::InvalidConvergentIndex`]
    ///
    /// # 示例
    /// ```
    /// # use bigrational::{ContinuedFraction, FixedBigRational};
    /// let e = FixedBigRational::new(271_828_182_845i64, 100_000_000_000i64);
    /// let cf = ContinuedFraction::value_of(&e);
    /// assert_eq!(cf.convergent(0).unwrap(), FixedBigRational::from(2));
    /// assert_eq!(cf.convergent(1).unwrap(), FixedBigRational::from(3));
    /// assert_eq!(cf.convergent(2).unwrap(), FixedBigRational::new(8, 3));
    /// ```
    pub fn convergent(&self, n: usize) -> Result<BigRational<S>> {
        if n >= self.terms.len() {
            tracing::debug!(index = n, terms = self.terms.len(), "convergent out of range");
            return Err(RationalError::InvalidConvergentIndex { index: n, terms: self.terms.len() });
        }
        if !self.is_finite() {
            return Ok(BigRational::from_value(Value::NaN));
        }

        // p(-1) = 1, q(-1) = 0, p(0) = a0, q(0) = 1
        let mut previous = (Canonical::integer(BigInt::one()), Canonical::zero());
        let mut current = match self.terms[0].finite() {
            Some(a0) => (a0.clone(), Canonical::integer(BigInt::one())),
            None => return Ok(BigRational::from_value(Value::NaN)),
        };
        for term in &self.terms[1..=n] {
            let Some(a) = term.finite() else {
                return Ok(BigRational::from_value(Value::NaN));
            };
            let next = (
                a.mul(&current.0).add(&previous.0),
                a.mul(&current.1).add(&previous.1),
            );
            previous = std::mem::replace(&mut current, next);
        }

        let (p, q) = current;
        Ok(match q.recip() {
            Some(recip) => BigRational::from_canonical(p.mul(&recip)),
            None => BigRational::from_value(Value::NaN),
        })
    }

    /// 倒数：整数部分为零时去掉它，否则在前面补零
    ///
    /// # 示例
    /// ```
    /// # use bigrational::{ContinuedFraction, FixedBigRational};
    /// let cf = ContinuedFraction::value_of(&FixedBigRational::new(7, 3));
    /// assert_eq!(cf.reciprocal().to_big_rational(), FixedBigRational::new(3, 7));
    /// assert_eq!(cf.reciprocal().reciprocal(), cf);
    /// ```
    pub fn reciprocal(&self) -> Self {
        if !self.is_finite() {
            return self.clone();
        }
        let terms = if self.integer_part().is_zero() && self.terms.len() > 1 {
            self.terms[1..].to_vec()
        } else {
            let mut terms = Vec::with_capacity(self.terms.len() + 1);
            terms.push(BigRational::zero());
            terms.extend(self.terms.iter().cloned());
            terms
        };
        Self { terms }
    }

    /// 黄金分割 φ 的 `n` 项近似，渐近分数为相邻斐波那契数之比
    ///
    /// # 错误
    /// `n` 为零时返回 [`RationalError::InvalidContinuedFraction`]
    ///
    /// # 示例
    /// ```
    /// # use bigrational::{ContinuedFraction, FixedBigRational};
    /// let phi = ContinuedFraction::<bigrational::Fixed>::phi(10).unwrap();
    /// assert_eq!(phi.to_big_rational(), FixedBigRational::new(89, 55));
    /// ```
    pub fn phi(n: usize) -> Result<Self> {
        Self::generate("φ", n, |_| 1)
    }

    /// √2 的 `n` 项近似：`[1; 2, 2, ...]`
    pub fn root2(n: usize) -> Result<Self> {
        Self::generate("√2", n, |i| if i == 0 { 1 } else { 2 })
    }

    /// √3 的 `n` 项近似：`[1; 1, 2, 1, 2, ...]`
    pub fn root3(n: usize) -> Result<Self> {
        Self::generate("√3", n, |i| if i % 2 == 1 { 1 } else if i == 0 { 1 } else { 2 })
    }

    /// 自然常数 e 的 `n` 项近似：`[2; 1, 2, 1, 1, 4, 1, 1, 6, ...]`
    pub fn e(n: usize) -> Result<Self> {
        Self::generate("e", n, |i| match i {
            0 => 2,
            i if i % 3 == 2 => 2 * (i as u64 + 1) / 3,
            _ => 1,
        })
    }

    fn generate(name: &str, n: usize, term: impl Fn(usize) -> u64) -> Result<Self> {
        if n == 0 {
            return Err(RationalError::InvalidContinuedFraction(format!(
                "not enough terms to approximate {name}: {n}"
            )));
        }
        tracing::trace!(constant = name, terms = n, "generating continued fraction");
        let terms = (0..n).map(|i| BigRational::from_integer(term(i))).collect();
        Ok(Self { terms })
    }
}

impl<S: Semantics> BigRational<S> {
    /// 分解为连分数，见 [`ContinuedFraction::value_of`]
    pub fn to_continued_fraction(&self) -> ContinuedFraction<S> {
        ContinuedFraction::value_of(self)
    }
}

impl<S: Semantics> From<&BigRational<S>> for ContinuedFraction<S> {
    fn from(value: &BigRational<S>) -> Self {
        Self::value_of(value)
    }
}

impl<S: Semantics> From<&ContinuedFraction<S>> for BigRational<S> {
    fn from(value: &ContinuedFraction<S>) -> Self {
        value.to_big_rational()
    }
}

impl<'a, S: Semantics> IntoIterator for &'a ContinuedFraction<S> {
    type Item = &'a BigRational<S>;
    type IntoIter = slice::Iter<'a, BigRational<S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}

impl<S: Semantics> Display for ContinuedFraction<S> {
    /// `[a0;]` 或 `[a0; a1, a2, ...]`
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{};", self.integer_part())?;
        for (i, term) in self.fractional_parts().iter().enumerate() {
            let sep = if i == 0 { " " } else { ", " };
            write!(f, "{sep}{term}")?;
        }
        f.write_str("]")
    }
}

impl<S: Semantics> Debug for ContinuedFraction<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "ContinuedFraction<{}>({})", S::NAME, self)
    }
}
