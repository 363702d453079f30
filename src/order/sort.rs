use std::cmp::Ordering;

use crate::config::WORK_STACK_CAPACITY;
use crate::error::OrderError;
use crate::order::partition::pivot_range;
use crate::order::sequence::Sequence;

/// 原地快速排序
///
/// 每次以区间首元素为枢轴调用划分，再分别处理枢轴左右两侧。
/// 不稳定：相等元素的相对顺序可能改变。返回同一个序列以便链式调用。
///
/// # 示例
///
/// ```
/// use quickpivot::quick_sort;
///
/// let mut a = vec![10, 4, 5, 15, 11, 3, 17, 2, 18];
/// assert_eq!(quick_sort(&mut a), &vec![2, 3, 4, 5, 10, 11, 15, 17, 18]);
/// ```
pub fn quick_sort<S>(seq: &mut S) -> &mut S
where
    S: Sequence + ?Sized,
    S::Item: Ord,
{
    quick_sort_by(seq, |a, b| a.cmp(b))
}

/// 与[`quick_sort`]相同，但使用自定义比较函数
///
/// 浮点数可以借助`total_cmp`排序：
///
/// ```
/// use quickpivot::quick_sort_by;
///
/// let mut a = [2.5, -1.0, 0.0];
/// quick_sort_by(&mut a, |x: &f64, y: &f64| x.total_cmp(y));
/// assert_eq!(a, [-1.0, 0.0, 2.5]);
/// ```
pub fn quick_sort_by<S, F>(seq: &mut S, mut compare: F) -> &mut S
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    if seq.len() > 1 {
        let end = seq.len() - 1;
        sort_unchecked(seq, 0, end, &mut compare);
    }
    seq
}

/// 只对闭区间`[start, end]`排序，区间外的元素保持不动
///
/// `start > end`视为空区间，直接返回。
///
/// # 错误处理
/// 非空区间的下标越界时返回`OrderError::IndexOutOfRange`，序列不会被修改。
pub fn sort_range<S>(seq: &mut S, start: usize, end: usize) -> Result<(), OrderError>
where
    S: Sequence + ?Sized,
    S::Item: Ord,
{
    sort_range_by(seq, start, end, |a, b| a.cmp(b))
}

/// 与[`sort_range`]相同，但使用自定义比较函数
pub fn sort_range_by<S, F>(
    seq: &mut S,
    start: usize,
    end: usize,
    mut compare: F,
) -> Result<(), OrderError>
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    if start > end {
        return Ok(());
    }
    let len = seq.len();
    if end >= len {
        return Err(OrderError::IndexOutOfRange { index: end, len });
    }
    sort_unchecked(seq, start, end, &mut compare);
    Ok(())
}

// 使用Vec作为栈来模拟递归，较大的一侧先入栈，保证栈深度为O(log n)
fn sort_unchecked<S, F>(seq: &mut S, start: usize, end: usize, compare: &mut F)
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    let mut stack = Vec::with_capacity(WORK_STACK_CAPACITY);
    stack.push((start, end));

    while let Some((start, end)) = stack.pop() {
        if start >= end {
            continue;
        }

        let p = pivot_range(seq, start, end, compare);

        // 枢轴已经就位，两侧都不包含它
        let left = (p > start).then(|| (start, p - 1));
        let right = (p < end).then(|| (p + 1, end));

        match (left, right) {
            (Some(l), Some(r)) => {
                if l.1 - l.0 > r.1 - r.0 {
                    stack.push(l);
                    stack.push(r);
                } else {
                    stack.push(r);
                    stack.push(l);
                }
            }
            (Some(side), None) | (None, Some(side)) => stack.push(side),
            (None, None) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_example() {
        let mut a = vec![10, 4, 5, 15, 11, 3, 17, 2, 18];
        quick_sort(&mut a);
        assert_eq!(a, vec![2, 3, 4, 5, 10, 11, 15, 17, 18]);
    }

    #[test]
    fn test_trivial_inputs() {
        let mut empty: Vec<i32> = vec![];
        assert!(quick_sort(&mut empty).is_empty());

        let mut one = vec![7];
        assert_eq!(quick_sort(&mut one), &vec![7]);
    }

    #[test]
    fn test_duplicates_and_sorted_inputs() {
        let mut a = vec![3, 1, 3, 3, 2, 1, 3];
        quick_sort(&mut a);
        assert_eq!(a, vec![1, 1, 2, 3, 3, 3, 3]);

        let mut asc: Vec<i32> = (0..500).collect();
        quick_sort(&mut asc);
        assert_eq!(asc, (0..500).collect::<Vec<_>>());

        let mut desc: Vec<i32> = (0..500).rev().collect();
        quick_sort(&mut desc);
        assert_eq!(desc, (0..500).collect::<Vec<_>>());
    }

    #[test]
    fn test_sort_range() {
        let mut a = vec![9, 4, 3, 2, 1, 0];
        sort_range(&mut a, 1, 4).unwrap();
        assert_eq!(a, vec![9, 1, 2, 3, 4, 0]);

        // 空区间什么也不做
        sort_range(&mut a, 3, 2).unwrap();
        assert_eq!(a, vec![9, 1, 2, 3, 4, 0]);

        assert_eq!(
            sort_range(&mut a, 0, 6),
            Err(OrderError::IndexOutOfRange { index: 6, len: 6 })
        );
    }

    #[test]
    fn test_sort_by_key() {
        let mut words = vec!["pear", "fig", "banana", "kiwi"];
        quick_sort_by(&mut words, |a, b| a.len().cmp(&b.len()));
        assert_eq!(words[0], "fig");
        assert_eq!(words[3], "banana");
    }
}
