//! 错误类型
//!
//! 排序/选择与斐波那契两部分各自有独立的错误枚举。

use thiserror::Error;

/// 错误大类
///
/// 调用方只关心"下标越界"还是"参数非法"时使用。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// 下标或区间超出序列范围
    IndexOutOfRange,
    /// 参数本身不合法（空区间、空序列、秩越界）
    InvalidArgument,
}

/// 划分、排序、选择操作的错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    #[error("index {index} is out of range for a sequence of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("range start {start} is past its end {end}")]
    InvalidRange { start: usize, end: usize },

    #[error("cannot select from an empty sequence")]
    EmptySequence,

    #[error("rank {k} is out of range for a sequence of length {len}")]
    RankOutOfRange { k: usize, len: usize },
}

impl OrderError {
    /// 返回错误所属的大类
    pub fn kind(&self) -> ErrorKind {
        match self {
            OrderError::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
            OrderError::InvalidRange { .. }
            | OrderError::EmptySequence
            | OrderError::RankOutOfRange { .. } => ErrorKind::InvalidArgument,
        }
    }
}

/// 斐波那契计算的错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FibError {
    #[error("computing F({n}) needs recursion deeper than the limit of {limit}")]
    RecursionLimit { n: u64, limit: u64 },

    #[error("computing F({n}) needs a table larger than the limit of {limit}")]
    TableLimit { n: u64, limit: u64 },
}
