pub mod config;
pub mod error;
pub mod fib;
pub mod order;

// 重新导出order模块中的常用类型和函数
pub use error::{ErrorKind, FibError, OrderError};
pub use order::{Sequence, partition, partition_by};
pub use order::{quick_sort, quick_sort_by, sort_range, sort_range_by};
pub use order::{select, select_by};
