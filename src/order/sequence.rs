use ndarray::{ArrayBase, DataMut, Ix1};

/// 可随机访问、可原地修改的有序容器
///
/// 划分、排序、选择只需要长度、按下标取元素和交换两个位置这三种能力，
/// 因此切片、`Vec`、定长数组以及一维`ndarray`（包括带步长的列视图）都能直接使用。
///
/// # 示例
///
/// ```
/// use ndarray::array;
/// use quickpivot::{quick_sort, Sequence};
///
/// let mut m = array![[3, 9], [1, 8], [2, 7]];
/// // 只对第0列原地排序
/// let mut column = m.column_mut(0);
/// quick_sort(&mut column);
/// assert_eq!(Sequence::len(&column), 3);
/// assert_eq!(m, array![[1, 9], [2, 8], [3, 7]]);
/// ```
pub trait Sequence {
    type Item;

    /// 元素个数
    fn len(&self) -> usize;

    /// 取下标处的元素，下标越界时panic
    fn at(&self, index: usize) -> &Self::Item;

    /// 交换两个位置的元素，下标越界时panic
    fn swap(&mut self, a: usize, b: usize);

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Sequence for [T] {
    type Item = T;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn at(&self, index: usize) -> &T {
        &self[index]
    }

    fn swap(&mut self, a: usize, b: usize) {
        <[T]>::swap(self, a, b)
    }
}

impl<T> Sequence for Vec<T> {
    type Item = T;

    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn at(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.as_mut_slice().swap(a, b)
    }
}

impl<T, const N: usize> Sequence for [T; N] {
    type Item = T;

    fn len(&self) -> usize {
        N
    }

    fn at(&self, index: usize) -> &T {
        &self[index]
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.as_mut_slice().swap(a, b)
    }
}

// 一维数组与可变视图，步长不为1的视图也按逻辑下标访问
impl<S> Sequence for ArrayBase<S, Ix1>
where
    S: DataMut,
{
    type Item = S::Elem;

    // len与swap定义在ArrayRef上，先解引用再调用
    fn len(&self) -> usize {
        (**self).len()
    }

    fn at(&self, index: usize) -> &S::Elem {
        &self[index]
    }

    fn swap(&mut self, a: usize, b: usize) {
        (**self).swap(a, b)
    }
}
