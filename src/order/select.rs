use std::cmp::Ordering;

use crate::error::OrderError;
use crate::order::partition::pivot_range;
use crate::order::sequence::Sequence;

/// 查找第`k`小的元素（快速选择）
///
/// `k`从0开始计数，`k = 0`即最小值。每一轮划分当前区间，
/// 若枢轴下标恰为`k`则结束，否则只在包含`k`的一侧继续。
/// 期望时间O(n)，枢轴极度偏斜时退化为O(n²)。
///
/// 序列会被部分划分（副作用）：返回后`seq[k]`就是结果，
/// 其左侧元素都不大于它，右侧元素都不小于它。
///
/// # 返回值
/// 返回指向序列中第`k`小元素的引用
///
/// # 错误处理
/// * 空序列返回`OrderError::EmptySequence`
/// * `k >= seq.len()`返回`OrderError::RankOutOfRange`
///
/// # 示例
///
/// ```
/// use quickpivot::select;
///
/// let mut a = vec![10, 4, 5, 15, 11, 3, 17, 2, 18];
/// assert_eq!(select(&mut a, 0), Ok(&2));
/// assert_eq!(select(&mut a, 2), Ok(&4));
/// assert_eq!(select(&mut a, 3), Ok(&5));
/// ```
pub fn select<S>(seq: &mut S, k: usize) -> Result<&S::Item, OrderError>
where
    S: Sequence + ?Sized,
    S::Item: Ord,
{
    select_by(seq, k, |a, b| a.cmp(b))
}

/// 与[`select`]相同，但使用自定义比较函数
pub fn select_by<S, F>(seq: &mut S, k: usize, mut compare: F) -> Result<&S::Item, OrderError>
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    let len = seq.len();
    if len == 0 {
        return Err(OrderError::EmptySequence);
    }
    if k >= len {
        return Err(OrderError::RankOutOfRange { k, len });
    }

    // 循环不变式：start <= k <= end
    let mut start = 0;
    let mut end = len - 1;
    while start < end {
        let p = pivot_range(seq, start, end, &mut compare);
        match k.cmp(&p) {
            Ordering::Equal => break,
            Ordering::Less => end = p - 1,
            Ordering::Greater => start = p + 1,
        }
    }
    Ok(seq.at(k))
}
