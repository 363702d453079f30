//! Order模块 - 基于原地划分的排序与选择
//!
//! 该模块提供三个互相独立的操作，都直接修改调用方传入的序列：
//! - partition：以区间首元素为枢轴原地划分
//! - quick_sort：在划分之上构建的快速排序
//! - select：在划分之上构建的快速选择（第k小元素）
//!
//! 所有操作都对[`Sequence`]泛型，切片、`Vec`、定长数组和一维`ndarray`均可使用，
//! 每个操作另有`_by`版本接受自定义比较函数。
//!
//! # 示例
//!
//! ```
//! use quickpivot::{partition, quick_sort, select};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut a = vec![10, 4, 5, 15, 11, 2, 17, 0, 18];
//! let p = partition(&mut a, 0, 8)?;
//! assert_eq!(a[p], 10);
//!
//! let mut b = vec![10, 4, 5, 15, 11, 3, 17, 2, 18];
//! assert_eq!(*select(&mut b, 0)?, 2);
//! assert_eq!(quick_sort(&mut b), &vec![2, 3, 4, 5, 10, 11, 15, 17, 18]);
//! # Ok(())
//! # }
//! ```

pub mod partition;
pub mod select;
pub mod sequence;
pub mod sort;

pub use partition::{partition, partition_by};
pub use select::{select, select_by};
pub use sequence::Sequence;
pub use sort::{quick_sort, quick_sort_by, sort_range, sort_range_by};
