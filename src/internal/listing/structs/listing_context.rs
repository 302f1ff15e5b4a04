use std::path::PathBuf;

/// 单次请求内不可变的上下文
#[derive(Debug, Clone)]
pub struct ListingContext {
    pub target: PathBuf,       // 规范化后的目标目录绝对路径
    pub raw_path: String,      // URL 中原始（未解码）的 path，用于拼链接
    pub pathname: String,      // 解码后的 path，用于标题
    pub query: Option<String>, // 原始查询串，带 `?`
    pub root: PathBuf,         // 根目录边界
}

impl ListingContext {
    /// 链接前缀：原始 path 去掉末尾的 `/`
    pub fn href_base(&self) -> &str {
        self.raw_path.strip_suffix('/').unwrap_or(&self.raw_path)
    }
}
