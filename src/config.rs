// 递归斐波那契实现允许的最大递归深度
pub const RECURSION_LIMIT: u64 = 1_000;
// 自底向上填表实现允许的最大表长
pub const TABLE_LIMIT: u64 = 100_000;

// 快速排序工作栈的初始容量，较大一侧先入栈，深度为O(log n)
pub const WORK_STACK_CAPACITY: usize = 64;
