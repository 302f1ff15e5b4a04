use std::collections::HashMap;

/// 外部传入的请求描述：URL（含查询串）和请求头
#[derive(Debug, Clone, Default)]
pub struct ListingRequest {
    pub url: String,
    headers: HashMap<String, String>, // 名字统一小写
}

impl ListingRequest {
    pub fn new(url: &str) -> Self {
        Self { url: url.to_string(), headers: HashMap::new() }
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.insert(name.to_ascii_lowercase(), value.to_string());
        self
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_ascii_lowercase()).map(String::as_str)
    }

    /// `host` 头，只用于页脚
    pub fn host(&self) -> &str {
        self.header("host").unwrap_or("")
    }
}
