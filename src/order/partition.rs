use std::cmp::Ordering;

use crate::error::OrderError;
use crate::order::sequence::Sequence;

/// 以`seq[start]`为枢轴，原地划分闭区间`[start, end]`
///
/// 划分完成后返回枢轴的新下标`p`：区间内`p`左侧的元素都不大于枢轴，
/// 右侧的元素都严格大于枢轴，`seq[p]`就是原来的枢轴。
/// 时间O(end - start)，额外空间O(1)。不稳定，也不保证两侧大小均衡。
///
/// # 参数
/// * `seq` - 待划分的序列
/// * `start` - 区间起点（含），同时是枢轴所在位置
/// * `end` - 区间终点（含）
///
/// # 错误处理
/// * 任一下标越界返回`OrderError::IndexOutOfRange`
/// * `start > end`返回`OrderError::InvalidRange`
///
/// 出错时序列不会被修改。
///
/// # 示例
///
/// ```
/// use quickpivot::partition;
///
/// let mut a = vec![10, 4, 5, 15, 11, 2, 17, 0, 18];
/// let p = partition(&mut a, 1, 7).unwrap();
/// assert_eq!(p, 3);
/// assert_eq!(a, vec![10, 2, 0, 4, 11, 15, 17, 5, 18]);
/// ```
pub fn partition<S>(seq: &mut S, start: usize, end: usize) -> Result<usize, OrderError>
where
    S: Sequence + ?Sized,
    S::Item: Ord,
{
    partition_by(seq, start, end, |a, b| a.cmp(b))
}

/// 与[`partition`]相同，但使用自定义比较函数
///
/// `compare(x, pivot) == Greater`的元素被视为"大于枢轴"，其余都归入左侧。
pub fn partition_by<S, F>(
    seq: &mut S,
    start: usize,
    end: usize,
    mut compare: F,
) -> Result<usize, OrderError>
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    check_range(seq.len(), start, end)?;
    Ok(pivot_range(seq, start, end, &mut compare))
}

/// 校验闭区间`[start, end]`是否落在长度为`len`的序列内
pub(crate) fn check_range(len: usize, start: usize, end: usize) -> Result<(), OrderError> {
    if start >= len {
        return Err(OrderError::IndexOutOfRange { index: start, len });
    }
    if end >= len {
        return Err(OrderError::IndexOutOfRange { index: end, len });
    }
    if start > end {
        return Err(OrderError::InvalidRange { start, end });
    }
    Ok(())
}

/// 双指针划分，调用方保证`start <= end < seq.len()`
///
/// 枢轴在扫描过程中一直留在`start`，只有`(start, end]`内的元素会被交换，
/// 最后再把枢轴换到左边界上。
pub(crate) fn pivot_range<S, F>(seq: &mut S, start: usize, end: usize, compare: &mut F) -> usize
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    // (start, front] 不大于枢轴，(back, end] 大于枢轴
    let mut front = start;
    let mut back = end;
    while front != back {
        if compare(seq.at(front + 1), seq.at(start)) != Ordering::Greater {
            front += 1;
        } else if compare(seq.at(back), seq.at(start)) == Ordering::Greater {
            back -= 1;
        } else {
            seq.swap(front + 1, back);
        }
    }
    seq.swap(start, front);
    front
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_partitioned(a: &[i32], start: usize, end: usize, p: usize, pivot: i32) {
        assert!(start <= p && p <= end);
        assert_eq!(a[p], pivot);
        assert!(a[start..p].iter().all(|&x| x <= pivot), "left side: {:?}", a);
        assert!(a[p + 1..=end].iter().all(|&x| x > pivot), "right side: {:?}", a);
    }

    #[test]
    fn test_full_range() {
        let mut a = vec![10, 4, 5, 15, 11, 2, 17, 0, 18];
        let p = partition(&mut a, 0, 8).unwrap();
        assert_partitioned(&a, 0, 8, p, 10);
    }

    #[test]
    fn test_inner_range_leaves_outside_untouched() {
        let mut a = vec![10, 4, 5, 15, 11, 2, 17, 0, 18];
        let p = partition(&mut a, 1, 7).unwrap();
        assert_eq!(p, 3);
        assert_eq!(a, vec![10, 2, 0, 4, 11, 15, 17, 5, 18]);
    }

    #[test]
    fn test_single_element_range() {
        let mut a = [3, 1, 2];
        assert_eq!(partition(&mut a, 1, 1), Ok(1));
        assert_eq!(a, [3, 1, 2]);
    }

    #[test]
    fn test_all_equal() {
        let mut a = vec![7; 6];
        let p = partition(&mut a, 0, 5).unwrap();
        // 相等元素全部归入左侧，枢轴落在区间末尾
        assert_eq!(p, 5);
        assert_eq!(a, vec![7; 6]);
    }

    #[test]
    fn test_pivot_is_extreme() {
        let mut a = vec![1, 5, 4, 3, 2];
        assert_eq!(partition(&mut a, 0, 4), Ok(0));

        let mut a = vec![9, 5, 4, 3, 2];
        assert_eq!(partition(&mut a, 0, 4), Ok(4));
        assert_eq!(a[4], 9);
    }

    #[test]
    fn test_by_descending() {
        let mut a = vec![5, 9, 1, 7, 3];
        let p = partition_by(&mut a, 0, 4, |x, y| y.cmp(x)).unwrap();
        assert_eq!(a[p], 5);
        assert!(a[..p].iter().all(|&x| x >= 5));
        assert!(a[p + 1..].iter().all(|&x| x < 5));
    }

    #[test]
    fn test_bounds() {
        let mut a = vec![1, 2, 3];
        assert_eq!(
            partition(&mut a, 0, 3),
            Err(OrderError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(
            partition(&mut a, 4, 1),
            Err(OrderError::IndexOutOfRange { index: 4, len: 3 })
        );
        assert_eq!(
            partition(&mut a, 2, 1),
            Err(OrderError::InvalidRange { start: 2, end: 1 })
        );
        assert_eq!(a, vec![1, 2, 3]);

        let mut empty: Vec<i32> = Vec::new();
        assert_eq!(
            partition(&mut empty, 0, 0),
            Err(OrderError::IndexOutOfRange { index: 0, len: 0 })
        );
    }
}
