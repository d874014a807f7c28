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

use std::sync::LazyLock;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

// 只读常量表，首次访问时初始化，之后在线程间共享
pub(crate) static BIG_ZERO: LazyLock<BigInt> = LazyLock::new(BigInt::zero);
pub(crate) static BIG_ONE: LazyLock<BigInt> = LazyLock::new(BigInt::one);
pub(crate) static BIG_NEG_ONE: LazyLock<BigInt> = LazyLock::new(|| -BigInt::one());
pub(crate) static BIG_TWO: LazyLock<BigInt> = LazyLock::new(|| BigInt::from(2u8));
pub(crate) static BIG_TEN: LazyLock<BigInt> = LazyLock::new(|| BigInt::from(10u8));

/// `10^exp`
pub(crate) fn ten_pow(exp: usize) -> BigInt {
    num_traits::pow(BigInt::from(10u8), exp)
}

/// 最小公倍数，结果非负；任一参数为零时为零
pub(crate) fn lcm(a: &BigInt, b: &BigInt) -> BigInt {
    a.lcm(b)
}

/// 从 `n` 中剥离全部素因子 `p`，返回剩余部分与剥离次数
pub(crate) fn strip_factor(n: &BigInt, p: u32) -> (BigInt, u32) {
    let p = BigInt::from(p);
    let mut rest = n.abs();
    let mut count = 0;
    if rest.is_zero() {
        return (rest, count);
    }
    loop {
        let (q, r) = rest.div_rem(&p);
        if !r.is_zero() {
            break;
        }
        rest = q;
        count += 1;
    }
    (rest, count)
}

/// `n` 是否为 `p` 的非负整数次幂（包括 `p^0 = 1`）
pub(crate) fn is_power_of(n: &BigInt, p: u32) -> bool {
    if p < 2 {
        return n.is_one();
    }
    let (rest, _) = strip_factor(n, p);
    n.is_positive() && rest.is_one()
}
