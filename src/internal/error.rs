//! 目录列表相关错误类型。

use std::path::PathBuf;

use thiserror::Error;

/// 单次列表请求中的致命错误。
///
/// 任何一个变体出现时，本次请求都不会写出 HTML，而是交给配置的错误出口处理。
#[derive(Debug, Error)]
pub enum ListingError {
    #[error("请求路径解码失败: {0}")]
    MalformedPath(String),

    #[error("目标路径超出根目录: {}", .0.display())]
    OutsideRoot(PathBuf),

    #[error("读取目录属性失败 {}: {source}", path.display())]
    StatTarget {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("读取目录内容失败 {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("读取上级目录属性失败 {}: {source}", path.display())]
    StatParent {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ListingError {
    /// 对应的 HTTP 状态码，供默认错误出口使用
    pub fn status_code(&self) -> u16 {
        match self {
            ListingError::MalformedPath(_) => 400,
            ListingError::OutsideRoot(_) => 403,
            ListingError::StatTarget { source, .. }
            | ListingError::ReadDir { source, .. }
            | ListingError::StatParent { source, .. } => match source.kind() {
                std::io::ErrorKind::NotFound => 404,
                std::io::ErrorKind::PermissionDenied => 403,
                _ => 500,
            },
        }
    }
}

/// 构造渲染器时的配置错误。
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("根目录为空")]
    EmptyRoot,

    #[error("无法解析根目录 {}: {source}", path.display())]
    ResolveRoot {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
