//! 纯格式化函数：大小、权限、时间、转义。不做任何 I/O。

pub mod escape;
pub mod modified;
pub mod permissions;
pub mod size;
