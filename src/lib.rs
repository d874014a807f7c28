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


//! # bigrational
//!
//! 任意精度的精确有理数
//!
//! 两种语义共用同一个类型 [`BigRational`]：
//! - [`FixedBigRational`]：分母为零是错误
//! - [`FloatingBigRational`]：分母为零得到 NaN 或正负无穷，类似 IEEE 754
//!
//! 所有值在构造时化简为最简形式，分母恒为正。
//!
//! # 示例
//! ```
//! use bigrational::{FixedBigRational, FloatingBigRational, RoundingMode};
//!
//! let a = FixedBigRational::new(1, 2);
//! let b = FixedBigRational::new(1, 3);
//! assert_eq!(&a + &b, FixedBigRational::new(5, 6));
//! assert_eq!((a / b).to_string(), "3⁄2");
//!
//! let x = FloatingBigRational::from(0.1);
//! assert_eq!(x.to_f64(), 0.1);
//! assert!((FloatingBigRational::one() / 0).is_positive_infinity());
//!
//! let r = FixedBigRational::new(5, 2);
//! assert_eq!(r.round(), FixedBigRational::two());
//! assert_eq!(r.round_with(RoundingMode::HalfUp).unwrap(), FixedBigRational::from(3));
//! ```

mod continued_fraction;
mod error;
mod math;
mod measure;
mod progression;
mod rational;
mod rounding;

pub use continued_fraction::ContinuedFraction;
pub use error::{RationalError, Result};
pub use progression::{Progression, ProgressionIter};
pub use rational::{BigRational, Fixed, FixedBigRational, Floating, FloatingBigRational, Semantics};
pub use rounding::RoundingMode;
