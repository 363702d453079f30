use std::mem;

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::config::TABLE_LIMIT;
use crate::error::FibError;

/// 自底向上填表
///
/// 从F(0)、F(1)开始依次填满长度为n+1的表，没有递归，但整张表都留在内存里。
///
/// # 错误处理
/// `n > TABLE_LIMIT`时返回`FibError::TableLimit`
pub fn fib_table(n: u64) -> Result<BigUint, FibError> {
    if n > TABLE_LIMIT {
        return Err(FibError::TableLimit {
            n,
            limit: TABLE_LIMIT,
        });
    }
    let n = n as usize;
    let mut table = Vec::with_capacity(n.max(1) + 1);
    table.push(BigUint::zero());
    table.push(BigUint::one());
    for i in 2..=n {
        let next = &table[i - 1] + &table[i - 2];
        table.push(next);
    }
    Ok(table.swap_remove(n))
}

/// 迭代，只保留最近两个值
///
/// 时间O(n)，任意时刻只持有两个大整数，没有深度或表长限制。
///
/// # 示例
///
/// ```
/// use num_bigint::BigUint;
/// use quickpivot::fib::fib_iter;
///
/// assert_eq!(fib_iter(0), BigUint::from(0u32));
/// assert_eq!(fib_iter(100).to_string(), "354224848179261915075");
/// ```
pub fn fib_iter(n: u64) -> BigUint {
    let mut prev = BigUint::zero();
    let mut current = BigUint::one();
    if n == 0 {
        return prev;
    }
    for _ in 1..n {
        let next = &prev + &current;
        prev = mem::replace(&mut current, next);
    }
    current
}

/// 依次产生F(0), F(1), F(2), ...的无限迭代器
///
/// ```
/// use num_traits::ToPrimitive;
/// use quickpivot::fib::Fibonacci;
///
/// let first: Vec<u32> = Fibonacci::new()
///     .take(8)
///     .map(|v| v.to_u32().unwrap())
///     .collect();
/// assert_eq!(first, vec![0, 1, 1, 2, 3, 5, 8, 13]);
/// ```
#[derive(Debug, Clone)]
pub struct Fibonacci {
    current: BigUint,
    next: BigUint,
}

impl Fibonacci {
    pub fn new() -> Self {
        Self {
            current: BigUint::zero(),
            next: BigUint::one(),
        }
    }
}

impl Default for Fibonacci {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Fibonacci {
    type Item = BigUint;

    fn next(&mut self) -> Option<BigUint> {
        let following = &self.current + &self.next;
        let next = mem::replace(&mut self.next, following);
        Some(mem::replace(&mut self.current, next))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_matches_iter() {
        for n in 0..=60 {
            assert_eq!(fib_table(n).unwrap(), fib_iter(n));
        }
    }

    #[test]
    fn test_table_limit() {
        assert_eq!(
            fib_table(TABLE_LIMIT + 1),
            Err(FibError::TableLimit {
                n: TABLE_LIMIT + 1,
                limit: TABLE_LIMIT
            })
        );
    }

    #[test]
    fn test_iterator_matches_iter() {
        for (n, value) in Fibonacci::new().take(50).enumerate() {
            assert_eq!(value, fib_iter(n as u64));
        }
    }
}
