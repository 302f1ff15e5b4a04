//! 目录项的读取、分类与排序。

pub mod functions;
pub mod structs;
