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


//! # rational
//!
//! 提供任意精度的有理数，自动化简为最简分数
//!
//! # 核心功能
//! - 两种语义：[`Fixed`]（除零报错）与 [`Floating`]（除零得到 NaN 或无穷）
//! - 基本四则运算 (`+`, `-`, `*`, `/`, `%` 等)
//! - 与原生整数、浮点数以及 `BigDecimal` 的精确转换
//! - 特殊值处理 (NaN, 正负无穷)

mod convert;
mod ops;
pub(crate) mod utils;
pub(crate) mod value;

use std::{
    cmp::Ordering,
    fmt::{self, Debug, Display, Formatter},
    hash::{Hash, Hasher},
    marker::PhantomData,
};

use num_bigint::BigInt;
use num_traits::{One, Zero};

use crate::error::{RationalError, Result};
use utils::{BIG_NEG_ONE, BIG_ONE, BIG_TEN, BIG_TWO, BIG_ZERO};
use value::{Canonical, Value};

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Fixed {}
    impl Sealed for super::Floating {}
}

/// 有理数的语义标记
///
/// 只有 [`Fixed`] 与 [`Floating`] 两种实现
pub trait Semantics:
    sealed::Sealed + Copy + Default + Debug + PartialEq + Eq + Hash + Send + Sync + 'static
{
    /// 用于 `Debug` 输出的名字
    const NAME: &'static str;

    /// 是否允许 NaN 与无穷
    const NON_FINITE: bool;
}

/// 固定语义：分母为零是错误
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Fixed;

/// 浮动语义：分母为零编码为 NaN 或正负无穷，与 IEEE-754 的约定一致
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Floating;

impl Semantics for Fixed {
    const NAME: &'static str = "fixed";
    const NON_FINITE: bool = false;
}

impl Semantics for Floating {
    const NAME: &'static str = "floating";
    const NON_FINITE: bool = true;
}

/// 任意精度有理数
///
/// 始终维护最简分数形式：分母为正，分子分母互素，零为 `0⁄1`
///
/// # 示例 - 基础使用
/// ```
/// use bigrational::FixedBigRational;
///
/// let a = FixedBigRational::new(3, 4); // 3/4
/// let b = FixedBigRational::from(2);   // 2/1
/// assert_eq!(a + b, FixedBigRational::new(11, 4));
/// ```
///
/// # 特殊值处理
/// ```
/// # use bigrational::FloatingBigRational;
/// let inf = FloatingBigRational::POSITIVE_INFINITY;
/// let nan = FloatingBigRational::NAN;
///
/// assert!(inf > FloatingBigRational::from(1000));
/// assert!(nan != nan); // NaN 不满足自反性
/// ```
#[derive(Clone)]
pub struct BigRational<S: Semantics> {
    value: Value,
    _semantics: PhantomData<S>,
}

/// 除零报错的有理数
pub type FixedBigRational = BigRational<Fixed>;

/// 以 NaN 与正负无穷吸收除零的有理数
pub type FloatingBigRational = BigRational<Floating>;

impl<S: Semantics> BigRational<S> {
    pub(crate) const fn from_value(value: Value) -> Self {
        Self { value, _semantics: PhantomData }
    }

    pub(crate) fn from_canonical(canonical: Canonical) -> Self {
        Self::from_value(Value::Finite(canonical))
    }

    pub(crate) fn value(&self) -> &Value {
        &self.value
    }

    /// 有限值的规范形式
    pub(crate) fn finite(&self) -> Option<&Canonical> {
        match &self.value {
            Value::Finite(c) => Some(c),
            _ => None,
        }
    }

    /// 按 `n/0` 的约定编码：调用方在固定语义下保证 `denom != 0`
    pub(crate) fn encode(numer: BigInt, denom: BigInt) -> Value {
        if denom.is_zero() {
            match numer.sign() {
                num_bigint::Sign::Plus => Value::PositiveInfinity,
                num_bigint::Sign::Minus => Value::NegativeInfinity,
                num_bigint::Sign::NoSign => Value::NaN,
            }
        } else {
            Value::Finite(Canonical::reduce(numer, denom))
        }
    }

    /// NaN；只会在浮动语义下被调用
    pub(crate) const fn nan() -> Self {
        Self::from_value(Value::NaN)
    }

    /// 创建有理数，自动化简为最简形式
    ///
    /// # 参数
    /// - `numerator`: 分子
    /// - `denominator`: 分母
    ///
    /// # 错误
    /// 固定语义下分母为零时返回 [`RationalError::DivisionByZero`]；
    /// 浮动语义下分母为零得到 NaN（分子为零）或对应符号的无穷
    ///
    /// # 示例
    /// ```
    /// # use bigrational::{FixedBigRational, FloatingBigRational, RationalError};
    /// let half = FixedBigRational::value_of(-4, -8).unwrap();
    /// assert_eq!(half, FixedBigRational::new(1, 2));
    /// assert_eq!(FixedBigRational::value_of(1, 0), Err(RationalError::DivisionByZero));
    ///
    /// let inf = FloatingBigRational::value_of(-3, 0).unwrap();
    /// assert!(inf.is_negative_infinity());
    /// ```
    pub fn value_of<N, D>(numerator: N, denominator: D) -> Result<Self>
    where
        N: Into<BigInt>,
        D: Into<BigInt>,
    {
        let (numer, denom) = (numerator.into(), denominator.into());
        if denom.is_zero() && !S::NON_FINITE {
            tracing::debug!(semantics = S::NAME, "rejected zero denominator");
            return Err(RationalError::DivisionByZero);
        }
        Ok(Self::from_value(Self::encode(numer, denom)))
    }

    /// 由整数创建
    pub fn from_integer<I: Into<BigInt>>(value: I) -> Self {
        Self::from_canonical(Canonical::integer(value.into()))
    }

    /// 常量 0、1、2、10 取自共享的整数表
    ///
    /// 每次调用返回一个新值。常量之间按值相等，不依赖同一实例，
    /// 经 [`value_of`](Self::value_of) 或运算得到的 1 与 `one()` 无法区分
    ///
    /// # 示例
    /// ```
    /// # use bigrational::FixedBigRational;
    /// assert_eq!(FixedBigRational::value_of(3, 3).unwrap(), FixedBigRational::one());
    /// assert_eq!(FixedBigRational::new(20, 2), FixedBigRational::ten());
    /// ```
    pub fn zero() -> Self {
        Self::from_integer(BIG_ZERO.clone())
    }

    pub fn one() -> Self {
        Self::from_integer(BIG_ONE.clone())
    }

    pub fn two() -> Self {
        Self::from_integer(BIG_TWO.clone())
    }

    pub fn ten() -> Self {
        Self::from_integer(BIG_TEN.clone())
    }

    /// 分子；NaN 为 0，正无穷为 1，负无穷为 -1
    ///
    /// # 示例
    /// ```
    /// # use bigrational::{FixedBigRational, FloatingBigRational};
    /// # use num_bigint::BigInt;
    /// let a = FixedBigRational::new(6, -8);
    /// assert_eq!(a.numerator(), &BigInt::from(-3));
    /// assert_eq!(a.denominator(), &BigInt::from(4));
    ///
    /// let neg_inf = FloatingBigRational::NEGATIVE_INFINITY;
    /// assert_eq!(neg_inf.numerator(), &BigInt::from(-1));
    /// assert_eq!(neg_inf.denominator(), &BigInt::from(0));
    /// ```
    pub fn numerator(&self) -> &BigInt {
        match &self.value {
            Value::Finite(c) => c.numer(),
            Value::NaN => &*BIG_ZERO,
            Value::PositiveInfinity => &*BIG_ONE,
            Value::NegativeInfinity => &*BIG_NEG_ONE,
        }
    }

    /// 分母；特殊值的分母均为 0
    pub fn denominator(&self) -> &BigInt {
        match &self.value {
            Value::Finite(c) => c.denom(),
            _ => &*BIG_ZERO,
        }
    }

    /// 零值返回 true，否则返回 false
    ///
    /// # 示例
    /// ```
    /// # use bigrational::FloatingBigRational;
    /// assert!(FloatingBigRational::zero().is_zero());
    /// assert!(!FloatingBigRational::new(2, 3).is_zero());
    /// assert!(!FloatingBigRational::NAN.is_zero());
    /// ```
    pub fn is_zero(&self) -> bool {
        matches!(&self.value, Value::Finite(c) if c.is_zero())
    }

    pub fn is_one(&self) -> bool {
        matches!(&self.value, Value::Finite(c) if c.is_integer() && c.numer().is_one())
    }

    /// 有限且分母为 1
    pub fn is_integer(&self) -> bool {
        matches!(&self.value, Value::Finite(c) if c.is_integer())
    }

    pub fn is_finite(&self) -> bool {
        matches!(self.value, Value::Finite(_))
    }

    pub fn is_nan(&self) -> bool {
        matches!(self.value, Value::NaN)
    }

    /// 正无穷或负无穷
    pub fn is_infinite(&self) -> bool {
        matches!(self.value, Value::PositiveInfinity | Value::NegativeInfinity)
    }

    pub fn is_positive_infinity(&self) -> bool {
        matches!(self.value, Value::PositiveInfinity)
    }

    pub fn is_negative_infinity(&self) -> bool {
        matches!(self.value, Value::NegativeInfinity)
    }

    /// 正值返回 true，否则返回 false
    ///
    /// # 示例
    /// ```
    /// # use bigrational::FloatingBigRational;
    /// assert!(FloatingBigRational::new(2, 3).is_positive());
    /// assert!(!FloatingBigRational::new(-2, 3).is_positive());
    /// assert!(!FloatingBigRational::zero().is_positive());
    /// assert!(!FloatingBigRational::NAN.is_positive());
    /// assert!(FloatingBigRational::POSITIVE_INFINITY.is_positive());
    /// ```
    pub fn is_positive(&self) -> bool {
        self.value.signum() > 0
    }

    /// 负值返回 true，否则返回 false
    pub fn is_negative(&self) -> bool {
        self.value.signum() < 0
    }

    /// 获取符号
    ///
    /// # 示例
    /// ```
    /// # use bigrational::FloatingBigRational;
    /// assert_eq!(FloatingBigRational::new(-2, 3).sign(), FloatingBigRational::from(-1));
    /// assert!(FloatingBigRational::zero().sign().is_zero());
    /// assert!(FloatingBigRational::NAN.sign().is_nan());
    /// assert_eq!(FloatingBigRational::POSITIVE_INFINITY.sign(), FloatingBigRational::one());
    /// ```
    pub fn sign(&self) -> Self {
        match &self.value {
            Value::NaN => Self::nan(),
            v => Self::from_integer(v.signum()),
        }
    }

    /// 获取绝对值，保持特殊值语义
    ///
    /// # 示例
    /// ```
    /// # use bigrational::FloatingBigRational;
    /// let a = FloatingBigRational::new(-2, 3);
    /// assert_eq!(a.abs(), FloatingBigRational::new(2, 3));
    ///
    /// let neg_inf = FloatingBigRational::NEGATIVE_INFINITY;
    /// assert!(neg_inf.abs().is_positive_infinity());
    /// ```
    pub fn abs(&self) -> Self {
        match &self.value {
            Value::Finite(c) => Self::from_canonical(c.abs()),
            Value::NaN => Self::nan(),
            Value::PositiveInfinity | Value::NegativeInfinity => {
                Self::from_value(Value::PositiveInfinity)
            }
        }
    }

    /// 获取倒数
    ///
    /// 无穷的倒数为零；零的倒数在浮动语义下为正无穷
    ///
    /// # 错误
    /// 固定语义下对零取倒数返回 [`RationalError::DivisionByZero`]
    ///
    /// # 示例
    /// ```
    /// # use bigrational::{FixedBigRational, RationalError};
    /// let a = FixedBigRational::new(-2, 3);
    /// assert_eq!(a.checked_recip(), Ok(FixedBigRational::new(-3, 2)));
    /// assert_eq!(FixedBigRational::zero().checked_recip(), Err(RationalError::DivisionByZero));
    /// ```
    pub fn checked_recip(&self) -> Result<Self> {
        match &self.value {
            Value::Finite(c) => match c.recip() {
                Some(r) => Ok(Self::from_canonical(r)),
                None if S::NON_FINITE => Ok(Self::from_value(Value::PositiveInfinity)),
                None => Err(RationalError::DivisionByZero),
            },
            Value::NaN => Ok(Self::nan()),
            Value::PositiveInfinity | Value::NegativeInfinity => Ok(Self::zero()),
        }
    }

    /// 除法；固定语义下除以零返回错误
    ///
    /// # 示例
    /// ```
    /// # use bigrational::{FixedBigRational, RationalError};
    /// let a = FixedBigRational::new(1, 2);
    /// assert_eq!(a.checked_div(&FixedBigRational::new(1, 3)), Ok(FixedBigRational::new(3, 2)));
    /// assert_eq!(a.checked_div(&FixedBigRational::zero()), Err(RationalError::DivisionByZero));
    /// ```
    pub fn checked_div(&self, rhs: &Self) -> Result<Self> {
        Ok(self.mul_impl(&rhs.checked_recip()?))
    }

    /// 全序比较：负无穷 < 有限值 < 正无穷 < NaN，两个 NaN 相等
    ///
    /// 用于排序；与 `==` 不同，这里 NaN 与自身相等
    ///
    /// # 示例
    /// ```
    /// # use bigrational::FloatingBigRational;
    /// let mut values = vec![
    ///     FloatingBigRational::POSITIVE_INFINITY,
    ///     FloatingBigRational::NAN,
    ///     FloatingBigRational::zero(),
    ///     FloatingBigRational::NEGATIVE_INFINITY,
    /// ];
    /// values.sort_by(FloatingBigRational::total_cmp);
    /// assert!(values[0].is_negative_infinity());
    /// assert!(values[1].is_zero());
    /// assert!(values[2].is_positive_infinity());
    /// assert!(values[3].is_nan());
    /// ```
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        fn rank(value: &Value) -> u8 {
            match value {
                Value::NegativeInfinity => 0,
                Value::Finite(_) => 1,
                Value::PositiveInfinity => 2,
                Value::NaN => 3,
            }
        }

        match (&self.value, &other.value) {
            (Value::Finite(a), Value::Finite(b)) => a.cmp(b),
            (a, b) => rank(a).cmp(&rank(b)),
        }
    }

    /// 跨语义比较数值是否相等，NaN 与任何值都不等价
    ///
    /// # 示例
    /// ```
    /// # use bigrational::{FixedBigRational, FloatingBigRational};
    /// assert!(FixedBigRational::zero().equivalent(&FloatingBigRational::zero()));
    /// assert!(!FixedBigRational::zero().equivalent(&FloatingBigRational::one()));
    /// assert!(!FloatingBigRational::NAN.equivalent(&FloatingBigRational::NAN));
    /// ```
    pub fn equivalent<O: Semantics>(&self, other: &BigRational<O>) -> bool {
        !matches!(self.value, Value::NaN) && self.value == other.value
    }
}

impl BigRational<Fixed> {
    /// 创建新分数，自动化简为最简形式
    ///
    /// # Panics
    /// 当分母为零时触发 panic；需要错误值时使用 [`BigRational::value_of`]
    ///
    /// # 示例
    /// ```
    /// # use bigrational::FixedBigRational;
    /// let normal = FixedBigRational::new(4, -2); // -2/1
    /// assert_eq!(normal, FixedBigRational::from(-2));
    /// ```
    pub fn new<N: Into<BigInt>, D: Into<BigInt>>(numerator: N, denominator: D) -> Self {
        let denom = denominator.into();
        assert!(!denom.is_zero(), "attempt to create a fixed rational with a zero denominator");
        Self::from_canonical(Canonical::reduce(numerator.into(), denom))
    }
}

impl BigRational<Floating> {
    pub const NAN: Self = Self::from_value(Value::NaN);
    pub const POSITIVE_INFINITY: Self = Self::from_value(Value::PositiveInfinity);
    pub const NEGATIVE_INFINITY: Self = Self::from_value(Value::NegativeInfinity);

    /// 创建新分数，自动化简为最简形式
    ///
    /// 分母为零时得到 NaN 或无穷，不会失败
    ///
    /// # 示例
    /// ```
    /// # use bigrational::FloatingBigRational;
    /// assert_eq!(FloatingBigRational::new(4, -2), FloatingBigRational::from(-2));
    /// assert!(FloatingBigRational::new(1, 0).is_positive_infinity());
    /// assert!(FloatingBigRational::new(0, 0).is_nan());
    /// ```
    pub fn new<N: Into<BigInt>, D: Into<BigInt>>(numerator: N, denominator: D) -> Self {
        Self::from_value(Self::encode(numerator.into(), denominator.into()))
    }

    /// 获取倒数，保持特殊值语义
    ///
    /// # 示例
    /// ```
    /// # use bigrational::FloatingBigRational;
    /// assert_eq!(FloatingBigRational::new(2, 3).reciprocal(), FloatingBigRational::new(3, 2));
    /// assert!(FloatingBigRational::POSITIVE_INFINITY.reciprocal().is_zero());
    /// assert!(FloatingBigRational::zero().reciprocal().is_positive_infinity());
    /// ```
    pub fn reciprocal(&self) -> Self {
        match &self.value {
            Value::Finite(c) => match c.recip() {
                Some(r) => Self::from_canonical(r),
                None => Self::POSITIVE_INFINITY,
            },
            Value::NaN => Self::NAN,
            Value::PositiveInfinity | Value::NegativeInfinity => Self::zero(),
        }
    }
}

impl<S: Semantics> Default for BigRational<S> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<S: Semantics> Zero for BigRational<S> {
    fn zero() -> Self {
        BigRational::zero()
    }

    fn is_zero(&self) -> bool {
        matches!(&self.value, Value::Finite(c) if c.is_zero())
    }
}

impl<S: Semantics> One for BigRational<S> {
    fn one() -> Self {
        BigRational::one()
    }
}

impl<S: Semantics> PartialEq for BigRational<S> {
    /// 判断是否相等
    ///
    /// # 取等规则
    /// 1. **NaN 参与比较**：任意操作数为 NaN 时返回 `false`，包括与自身比较
    /// 2. **无穷**：仅与同符号的无穷相等
    /// 3. **有限值**：最简形式唯一，直接比较分子分母
    ///
    /// # 示例
    /// ```
    /// # use bigrational::FloatingBigRational;
    /// let a1 = FloatingBigRational::new(2, 3);
    /// let a2 = FloatingBigRational::new(-4, -6);
    /// assert!(a1 == a2);
    ///
    /// let nan = FloatingBigRational::NAN;
    /// assert!(nan != nan);
    /// ```
    fn eq(&self, other: &Self) -> bool {
        match (&self.value, &other.value) {
            (Value::NaN, _) | (_, Value::NaN) => false,
            (a, b) => a == b,
        }
    }
}

// 固定语义不含 NaN，相等关系自反
impl Eq for BigRational<Fixed> {}

impl<S: Semantics> PartialOrd for BigRational<S> {
    /// 扩展实数上的比较
    ///
    /// # 比较规则
    /// 1. **NaN 参与比较**：任意操作数为 NaN 时返回 `None`
    /// 2. **无穷大**：正无穷大于所有非 NaN 值，负无穷小于所有非 NaN 值
    /// 3. **有限值**：交叉相乘比较，不损失精度
    ///
    /// # 示例
    /// ```
    /// # use bigrational::FloatingBigRational;
    /// # use std::cmp::Ordering;
    /// let a = FloatingBigRational::new(3, 4);
    /// let b = FloatingBigRational::new(2, 3);
    /// assert_eq!(a.partial_cmp(&b), Some(Ordering::Greater));
    ///
    /// let inf = FloatingBigRational::POSITIVE_INFINITY;
    /// assert_eq!(inf.partial_cmp(&a), Some(Ordering::Greater));
    /// assert_eq!(FloatingBigRational::NAN.partial_cmp(&a), None);
    /// ```
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (&self.value, &other.value) {
            (Value::NaN, _) | (_, Value::NaN) => None,
            _ => Some(self.total_cmp(other)),
        }
    }
}

impl Ord for BigRational<Fixed> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

// 与原生数值比较：先转换为同一语义，再按有理数比较
macro_rules! impl_cmp_with_primitive {
    ($($t:ty),*) => {
        $(
            impl<S: Semantics> PartialEq<$t> for BigRational<S> {
                fn eq(&self, other: &$t) -> bool {
                    *self == Self::from(*other)
                }
            }

            impl<S: Semantics> PartialOrd<$t> for BigRational<S> {
                fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
                    self.partial_cmp(&Self::from(*other))
                }
            }
        )*
    };
}

impl_cmp_with_primitive!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl<S: Semantics> PartialEq<BigInt> for BigRational<S> {
    fn eq(&self, other: &BigInt) -> bool {
        matches!(&self.value, Value::Finite(c) if c.is_integer() && c.numer() == other)
    }
}

impl<S: Semantics> PartialOrd<BigInt> for BigRational<S> {
    fn partial_cmp(&self, other: &BigInt) -> Option<Ordering> {
        self.partial_cmp(&Self::from_integer(other.clone()))
    }
}

macro_rules! impl_cmp_with_float {
    ($($t:ty),*) => {
        $(
            impl PartialEq<$t> for BigRational<Floating> {
                fn eq(&self, other: &$t) -> bool {
                    *self == Self::from(*other)
                }
            }

            impl PartialOrd<$t> for BigRational<Floating> {
                fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
                    self.partial_cmp(&Self::from(*other))
                }
            }
        )*
    };
}

impl_cmp_with_float!(f32, f64);

impl<S: Semantics> Hash for BigRational<S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<S: Semantics> Display for BigRational<S> {
    /// 格式化输出，分数线使用 `⁄` (U+2044)
    ///
    /// 备用格式 (`{:#}`) 下无穷写作 `+∞` 与 `-∞`
    ///
    /// # 示例
    /// ```
    /// # use bigrational::FloatingBigRational;
    /// assert_eq!(FloatingBigRational::new(1, -2).to_string(), "-1⁄2");
    /// assert_eq!(FloatingBigRational::new(4, 2).to_string(), "2");
    /// assert_eq!(FloatingBigRational::NAN.to_string(), "NaN");
    /// assert_eq!(FloatingBigRational::POSITIVE_INFINITY.to_string(), "Infinity");
    /// assert_eq!(format!("{:#}", FloatingBigRational::NEGATIVE_INFINITY), "-∞");
    /// ```
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.value {
            Value::Finite(c) if c.is_integer() => write!(f, "{}", c.numer()),
            Value::Finite(c) => write!(f, "{}⁄{}", c.numer(), c.denom()),
            Value::NaN => f.write_str("NaN"),
            Value::PositiveInfinity if f.alternate() => f.write_str("+∞"),
            Value::PositiveInfinity => f.write_str("Infinity"),
            Value::NegativeInfinity if f.alternate() => f.write_str("-∞"),
            Value::NegativeInfinity => f.write_str("-Infinity"),
        }
    }
}

impl<S: Semantics> Debug for BigRational<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "BigRational<{}>({})", S::NAME, self)
    }
}
