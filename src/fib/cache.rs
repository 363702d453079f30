use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::config::RECURSION_LIMIT;
use crate::error::FibError;
use crate::fib::recursive::check_depth;

/// 跨调用保留结果的递归斐波那契缓存
///
/// 缓存里始终是F(0)..=F(highest)的连续前缀。求更大的n时只需从`highest`
/// 往上递归，所以递归深度是`n - highest`而不是n：直接求F(5000)会超出限制，
/// 先求F(900)、F(1800)……逐步"预热"之后就可以求出来。
///
/// # 示例
///
/// ```
/// use quickpivot::fib::FibCache;
///
/// let mut cache = FibCache::with_recursion_limit(100);
/// assert!(cache.get(150).is_err());
/// cache.get(90).unwrap();
/// assert_eq!(cache.get(150).unwrap().to_string(), "9969216677189303386214405760200");
/// ```
#[derive(Debug, Clone)]
pub struct FibCache {
    values: Vec<BigUint>,
    recursion_limit: u64,
}

impl FibCache {
    /// 使用默认递归深度限制创建缓存
    pub fn new() -> Self {
        Self::with_recursion_limit(RECURSION_LIMIT)
    }

    /// 指定递归深度限制，超过`RECURSION_LIMIT`的值会被截断到`RECURSION_LIMIT`
    pub fn with_recursion_limit(recursion_limit: u64) -> Self {
        Self {
            values: vec![BigUint::zero(), BigUint::one()],
            recursion_limit: recursion_limit.min(RECURSION_LIMIT),
        }
    }

    /// 求F(n)，途中算出的值都会留在缓存里
    ///
    /// # 错误处理
    /// `n - highest()`超过递归深度限制时返回`FibError::RecursionLimit`，缓存不变
    pub fn get(&mut self, n: u64) -> Result<BigUint, FibError> {
        check_depth(n, self.highest(), self.recursion_limit)?;
        Ok(self.fill(n as usize))
    }

    /// 已缓存的最大下标
    pub fn highest(&self) -> u64 {
        self.values.len() as u64 - 1
    }

    pub fn recursion_limit(&self) -> u64 {
        self.recursion_limit
    }

    /// 清空缓存，只保留F(0)和F(1)
    pub fn clear(&mut self) {
        self.values.truncate(2);
    }

    fn fill(&mut self, n: usize) -> BigUint {
        if let Some(value) = self.values.get(n) {
            return value.clone();
        }
        // 先补齐n-1，此时values恰好覆盖0..n
        let prev = self.fill(n - 1);
        let value = prev + &self.values[n - 2];
        self.values.push(value.clone());
        value
    }
}

impl Default for FibCache {
    fn default() -> Self {
        Self::new()
    }
}
