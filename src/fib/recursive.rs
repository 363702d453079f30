use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::config::RECURSION_LIMIT;
use crate::error::FibError;

/// 朴素递归：F(n) = F(n-2) + F(n-1)
///
/// 子问题被反复求解，时间复杂度为指数级，n超过40左右就已经很慢。
///
/// # 错误处理
/// 从F(1)往上递归，深度为n - 1，超过`RECURSION_LIMIT`时返回`FibError::RecursionLimit`
pub fn fib_naive(n: u64) -> Result<BigUint, FibError> {
    check_depth(n, 1, RECURSION_LIMIT)?;
    Ok(naive(n))
}

fn naive(n: u64) -> BigUint {
    if n <= 1 {
        BigUint::from(n)
    } else {
        naive(n - 2) + naive(n - 1)
    }
}

/// 递归 + 手动记忆化
///
/// 每次调用单独建一张表，每个子问题只计算一次，时间O(n)。
/// 表只在本次调用内有效，跨调用复用见[`FibCache`](crate::fib::FibCache)。
///
/// # 错误处理
/// 深度规则与[`fib_naive`]相同
///
/// # 示例
///
/// ```
/// use num_bigint::BigUint;
/// use quickpivot::fib::fib_memo_rec;
///
/// assert_eq!(fib_memo_rec(10).unwrap(), BigUint::from(55u32));
/// assert!(fib_memo_rec(1_000_000).is_err());
/// ```
pub fn fib_memo_rec(n: u64) -> Result<BigUint, FibError> {
    check_depth(n, 1, RECURSION_LIMIT)?;
    let n = n as usize;
    let mut table: Vec<Option<BigUint>> = vec![None; n.max(1) + 1];
    table[0] = Some(BigUint::zero());
    table[1] = Some(BigUint::one());
    Ok(memo(&mut table, n))
}

fn memo(table: &mut [Option<BigUint>], n: usize) -> BigUint {
    if let Some(value) = &table[n] {
        return value.clone();
    }
    let value = memo(table, n - 1) + memo(table, n - 2);
    table[n] = Some(value.clone());
    value
}

/// 从已知的F(highest)递归到F(n)需要`n - highest`层，超过`limit`即报错
///
/// 所有递归实现共用这条规则，未缓存时highest为1。
pub(crate) fn check_depth(n: u64, highest: u64, limit: u64) -> Result<(), FibError> {
    if n > highest && n - highest > limit {
        return Err(FibError::RecursionLimit { n, limit });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_naive_small() {
        let expected = [0u32, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55];
        for (n, &value) in expected.iter().enumerate() {
            assert_eq!(fib_naive(n as u64).unwrap(), BigUint::from(value));
        }
    }

    #[test]
    fn test_memo_rec_matches_naive() {
        for n in 0..=20 {
            assert_eq!(fib_memo_rec(n), fib_naive(n));
        }
    }

    #[test]
    fn test_recursion_limit() {
        assert_eq!(
            fib_memo_rec(RECURSION_LIMIT + 2),
            Err(FibError::RecursionLimit {
                n: RECURSION_LIMIT + 2,
                limit: RECURSION_LIMIT
            })
        );
        assert!(fib_naive(RECURSION_LIMIT + 2).is_err());
        assert!(fib_memo_rec(RECURSION_LIMIT + 1).is_ok());
    }

    #[test]
    fn test_check_depth_counts_from_highest() {
        assert!(check_depth(0, 1, 10).is_ok());
        assert!(check_depth(11, 1, 10).is_ok());
        assert!(check_depth(12, 1, 10).is_err());
        assert!(check_depth(25, 15, 10).is_ok());
        assert!(check_depth(26, 15, 10).is_err());
    }
}
