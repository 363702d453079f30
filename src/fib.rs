//! Fib模块 - 斐波那契数列的五种实现
//!
//! 用同一个问题对比朴素递归、记忆化递归和动态规划：
//! - fib_naive：朴素递归，指数时间
//! - FibCache：跨调用保留结果的递归缓存
//! - fib_memo_rec：单次调用内记忆化的递归
//! - fib_table：自底向上填表
//! - fib_iter：只保留最近两个值的迭代
//!
//! 所有结果都是任意精度的`BigUint`，约定F(0) = 0，F(1) = 1。
//! 递归实现受`RECURSION_LIMIT`限制，填表实现受`TABLE_LIMIT`限制，
//! 超出时返回错误而不是让栈溢出或耗尽内存。
//!
//! # 示例
//!
//! ```
//! use quickpivot::fib::FibMethod;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! for method in FibMethod::ALL {
//!     assert_eq!(method.compute(25)?.to_string(), "75025");
//! }
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod dynamic;
pub mod recursive;

use std::fmt;

use num_bigint::BigUint;

use crate::error::FibError;

pub use cache::FibCache;
pub use dynamic::{Fibonacci, fib_iter, fib_table};
pub use recursive::{fib_memo_rec, fib_naive};

/// 斐波那契实现方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FibMethod {
    /// 朴素递归
    Naive,
    /// 递归 + 跨调用缓存
    Cached,
    /// 递归 + 单次调用内记忆化
    MemoRecursive,
    /// 自底向上填表
    Table,
    /// 迭代，只保留两个值
    Iterative,
}

impl FibMethod {
    pub const ALL: [FibMethod; 5] = [
        FibMethod::Naive,
        FibMethod::Cached,
        FibMethod::MemoRecursive,
        FibMethod::Table,
        FibMethod::Iterative,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            FibMethod::Naive => "naive",
            FibMethod::Cached => "cached",
            FibMethod::MemoRecursive => "memo-recursive",
            FibMethod::Table => "table",
            FibMethod::Iterative => "iterative",
        }
    }

    /// 用该方式计算F(n)，`Cached`每次使用一个新的缓存
    pub fn compute(&self, n: u64) -> Result<BigUint, FibError> {
        match self {
            FibMethod::Naive => fib_naive(n),
            FibMethod::Cached => FibCache::new().get(n),
            FibMethod::MemoRecursive => fib_memo_rec(n),
            FibMethod::Table => fib_table(n),
            FibMethod::Iterative => Ok(fib_iter(n)),
        }
    }
}

impl fmt::Display for FibMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
