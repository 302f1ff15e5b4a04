//! HTML 渲染：行数据计算、快捷链接、整页输出。

pub mod html_builder;
pub mod page;
pub mod row;
pub mod shortcut;
