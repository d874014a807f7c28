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

//! 错误类型

use thiserror::Error;

/// 有理数运算中可能出现的错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RationalError {
    // construction
    #[error("division by zero")]
    DivisionByZero,

    // conversion
    #[error("non-finite operand: {0}")]
    NonFiniteOperand(String),

    #[error("no exact representation: {0}")]
    NoExactRepresentation(String),

    #[error("out of range: {0}")]
    OutOfRange(String),

    #[error("cannot parse rational: {0}")]
    Parse(String),

    // progressions
    #[error("invalid progression: {0}")]
    InvalidProgression(String),

    // continued fractions
    #[error("invalid convergent index {index} for {terms} term(s)")]
    InvalidConvergentIndex { index: usize, terms: usize },

    #[error("invalid continued fraction: {0}")]
    InvalidContinuedFraction(String),
}

/// crate 内统一使用的 `Result`
pub type Result<T> = std::result::Result<T, RationalError>;
