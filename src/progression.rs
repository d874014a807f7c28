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


//! # progression
//!
//! 有理数等差数列 `start, start + step, ...`，包含终点
//!
//! [`BigRational::range_to`] 创建步长为 1 的递增数列，
//! [`BigRational::down_to`] 创建步长为 -1 的递减数列，
//! 再用 [`Progression::step`] 更换步长。
//!
//! # 示例
//! ```
//! # use bigrational::FixedBigRational;
//! let p = FixedBigRational::zero()
//!     .range_to(FixedBigRational::new(7, 3))
//!     .and_then(|p| p.step(FixedBigRational::new(1, 2)))
//!     .unwrap();
//! assert_eq!(p.to_string(), "0..7⁄3 step 1⁄2");
//! assert_eq!(p.iter().count(), 5);
//! ```

use std::{
    cmp::Ordering,
    fmt::{self, Debug, Display, Formatter},
    iter::FusedIterator,
};

use crate::{
    error::{RationalError, Result},
    BigRational, Semantics,
};

/// 闭区间上的等差数列
#[derive(Clone, PartialEq, Hash)]
pub struct Progression<S: Semantics> {
    start: BigRational<S>,
    end_inclusive: BigRational<S>,
    step: BigRational<S>,
}

fn invalid(reason: String) -> RationalError {
    tracing::debug!(%reason, "rejected progression");
    RationalError::InvalidProgression(reason)
}

impl<S: Semantics> Progression<S> {
    fn bounded(
        start: BigRational<S>,
        end_inclusive: BigRational<S>,
        step: BigRational<S>,
    ) -> Result<Self> {
        if !start.is_finite() || !end_inclusive.is_finite() {
            return Err(invalid(format!("non-finite bound: {start}..{end_inclusive}")));
        }
        Ok(Self { start, end_inclusive, step })
    }

    /// 更换步长，方向须与数列方向一致
    ///
    /// # 错误
    /// 步长为零、非有限，或符号与方向相反时返回 [`RationalError::InvalidProgression`]
    ///
    /// # 示例
    /// ```
    /// # use bigrational::{FixedBigRational, RationalError};
    /// let up = FixedBigRational::zero().range_to(FixedBigRational::one()).unwrap();
    /// assert!(up.clone().step(FixedBigRational::from(2)).is_ok());
    /// assert!(matches!(up.clone().step(FixedBigRational::from(-1)), Err(RationalError::InvalidProgression(_))));
    /// assert!(up.step(FixedBigRational::zero()).is_err());
    /// ```
    pub fn step<T: Into<BigRational<S>>>(self, step: T) -> Result<Self> {
        let step = step.into();
        if !step.is_finite() {
            return Err(invalid(format!("non-finite step: {step}")));
        }
        if step.is_zero() {
            return Err(invalid("step must be non-zero".to_string()));
        }
        if step.is_negative() != self.is_descending() {
            let direction = if self.is_descending() { "negative" } else { "positive" };
            return Err(invalid(format!("step {step} must be {direction} for {self}")));
        }
        Ok(Self { step, ..self })
    }

    pub fn start(&self) -> &BigRational<S> {
        &self.start
    }

    pub fn end_inclusive(&self) -> &BigRational<S> {
        &self.end_inclusive
    }

    pub fn step_size(&self) -> &BigRational<S> {
        &self.step
    }

    fn is_descending(&self) -> bool {
        self.step.is_negative()
    }

    // 在数列方向上 a 是否不超过 b
    fn within(&self, a: &BigRational<S>, b: &BigRational<S>) -> bool {
        let ordering = a.total_cmp(b);
        if self.is_descending() {
            ordering != Ordering::Less
        } else {
            ordering != Ordering::Greater
        }
    }

    /// 起点已越过终点
    pub fn is_empty(&self) -> bool {
        !self.within(&self.start, &self.end_inclusive)
    }

    /// `value` 是否是数列中的某一项
    ///
    /// # 示例
    /// ```
    /// # use bigrational::FixedBigRational;
    /// let p = FixedBigRational::zero()
    ///     .range_to(FixedBigRational::two())
    ///     .and_then(|p| p.step(FixedBigRational::new(1, 2)))
    ///     .unwrap();
    /// assert!(p.contains(&FixedBigRational::new(3, 2)));
    /// assert!(!p.contains(&FixedBigRational::new(1, 3)));
    /// assert!(!p.contains(&FixedBigRational::from(3)));
    /// ```
    pub fn contains(&self, value: &BigRational<S>) -> bool {
        if !value.is_finite()
            || !self.within(&self.start, value)
            || !self.within(value, &self.end_inclusive)
        {
            return false;
        }
        let offset = value.sub_impl(&self.start);
        match offset.checked_div(&self.step) {
            Ok(count) => count.is_integer(),
            Err(_) => false,
        }
    }

    pub fn iter(&self) -> ProgressionIter<S> {
        ProgressionIter {
            next: Some(self.start.clone()).filter(|_| !self.is_empty()),
            end_inclusive: self.end_inclusive.clone(),
            step: self.step.clone(),
        }
    }
}

impl<S: Semantics> BigRational<S> {
    /// 从 `self` 递增到 `end_inclusive`，步长为 1
    ///
    /// 起点大于终点时得到空数列
    ///
    /// # 错误
    /// 任一端点非有限时返回 [`RationalError::InvalidProgression`]
    pub fn range_to<T: Into<Self>>(&self, end_inclusive: T) -> Result<Progression<S>> {
        Progression::bounded(self.clone(), end_inclusive.into(), Self::one())
    }

    /// 从 `self` 递减到 `end_inclusive`，步长为 -1
    ///
    /// # 示例
    /// ```
    /// # use bigrational::FixedBigRational;
    /// let p = FixedBigRational::two().down_to(FixedBigRational::new(1, 2)).unwrap();
    /// assert_eq!(p.to_string(), "2 downTo 1⁄2 step -1");
    /// assert_eq!(p.iter().collect::<Vec<_>>(), vec![FixedBigRational::two(), FixedBigRational::one()]);
    /// ```
    pub fn down_to<T: Into<Self>>(&self, end_inclusive: T) -> Result<Progression<S>> {
        Progression::bounded(self.clone(), end_inclusive.into(), -Self::one())
    }
}

/// 数列迭代器，持有自己的游标
#[derive(Clone)]
pub struct ProgressionIter<S: Semantics> {
    next: Option<BigRational<S>>,
    end_inclusive: BigRational<S>,
    step: BigRational<S>,
}

impl<S: Semantics> Iterator for ProgressionIter<S> {
    type Item = BigRational<S>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        let following = current.add_impl(&self.step);
        let ordering = following.total_cmp(&self.end_inclusive);
        let in_range = if self.step.is_negative() {
            ordering != Ordering::Less
        } else {
            ordering != Ordering::Greater
        };
        if in_range {
            self.next = Some(following);
        }
        Some(current)
    }
}

impl<S: Semantics> FusedIterator for ProgressionIter<S> {}

impl<S: Semantics> IntoIterator for &Progression<S> {
    type Item = BigRational<S>;
    type IntoIter = ProgressionIter<S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<S: Semantics> IntoIterator for Progression<S> {
    type Item = BigRational<S>;
    type IntoIter = ProgressionIter<S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<S: Semantics> Display for Progression<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_descending() {
            write!(f, "{} downTo {} step {}", self.start, self.end_inclusive, self.step)
        } else {
            write!(f, "{}..{} step {}", self.start, self.end_inclusive, self.step)
        }
    }
}

impl<S: Semantics> Debug for Progression<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Progression<{}>({})", S::NAME, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FixedBigRational, FloatingBigRational};

    fn r(n: i64, d: i64) -> FixedBigRational {
        FixedBigRational::new(n, d)
    }

    #[test]
    fn test_itself() {
        let zero_to_one = r(0, 1).range_to(r(1, 1)).unwrap();
        assert_eq!(zero_to_one, r(0, 1).range_to(1).unwrap());
        assert_eq!(zero_to_one.clone().step(1).unwrap(), zero_to_one);
        assert_ne!(zero_to_one.clone().step(2).unwrap(), zero_to_one);
        assert_ne!(r(0, 1).range_to(2).unwrap(), zero_to_one);
    }

    #[test]
    fn test_pretty_print() {
        assert_eq!(r(0, 1).range_to(1).unwrap().to_string(), "0..1 step 1");
        assert_eq!(r(0, 1).range_to(1).and_then(|p| p.step(2)).unwrap().to_string(), "0..1 step 2");
        assert_eq!(r(1, 1).down_to(0).unwrap().to_string(), "1 downTo 0 step -1");
        assert_eq!(
            r(1, 1).down_to(0).and_then(|p| p.step(-2)).unwrap().to_string(),
            "1 downTo 0 step -2"
        );
        assert_eq!(
            format!("{:?}", r(0, 1).range_to(1).unwrap()),
            "Progression<fixed>(0..1 step 1)"
        );
    }

    #[test]
    fn test_progress() {
        let p = r(0, 1).range_to(r(7, 3)).and_then(|p| p.step(r(1, 2))).unwrap();
        assert_eq!(p.iter().collect::<Vec<_>>(), vec![r(0, 1), r(1, 2), r(1, 1), r(3, 2), r(2, 1)]);

        assert!(r(0, 1).range_to(-1).unwrap().is_empty());
        assert_eq!(r(0, 1).range_to(-1).unwrap().iter().count(), 0);
        assert_eq!(
            r(1, 1).range_to(r(5, 2)).unwrap().into_iter().collect::<Vec<_>>(),
            vec![r(1, 1), r(2, 1)]
        );
        assert_eq!(
            r(1, 1).range_to(3).and_then(|p| p.step(2)).unwrap().iter().collect::<Vec<_>>(),
            vec![r(1, 1), r(3, 1)]
        );
        assert_eq!(
            r(2, 1).down_to(r(1, 2)).unwrap().iter().collect::<Vec<_>>(),
            vec![r(2, 1), r(1, 1)]
        );
        assert_eq!(r(1, 1).range_to(1).unwrap().iter().collect::<Vec<_>>(), vec![r(1, 1)]);

        let mut iter = r(0, 1).range_to(0).unwrap().iter();
        assert!(iter.next().is_some());
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_contains() {
        let p = r(0, 1).range_to(2).unwrap();
        assert!(p.contains(&r(1, 1)));
        assert!(p.contains(&r(2, 1)));
        assert!(!p.contains(&r(1, 2)));
        assert!(!p.contains(&r(-1, 1)));

        let down = r(1, 1).down_to(-1).and_then(|p| p.step(r(-1, 2))).unwrap();
        assert!(down.contains(&r(-1, 2)));
        assert!(!down.contains(&r(3, 2)));
    }

    #[test]
    fn test_not_progress() {
        let rejected = [
            r(0, 1).range_to(1).and_then(|p| p.step(-1)),
            r(1, 1).down_to(0).and_then(|p| p.step(1)),
            r(0, 1).down_to(0).and_then(|p| p.step(0)),
        ];
        for result in rejected {
            assert!(matches!(result, Err(RationalError::InvalidProgression(_))));
        }
    }

    #[test]
    fn test_floating_rejects_non_finite() {
        let zero = FloatingBigRational::zero();
        assert!(zero.range_to(FloatingBigRational::NAN).is_err());
        assert!(FloatingBigRational::NAN.range_to(zero.clone()).is_err());
        assert!(zero.range_to(FloatingBigRational::POSITIVE_INFINITY).is_err());
        assert!(zero
            .range_to(zero.clone())
            .and_then(|p| p.step(FloatingBigRational::NAN))
            .is_err());

        let p = zero.range_to(1).and_then(|p| p.step(0.25)).unwrap();
        assert_eq!(p.iter().count(), 5);
        assert!(!p.contains(&FloatingBigRational::NAN));
    }
}
