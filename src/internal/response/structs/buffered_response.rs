use async_trait::async_trait;
use bytes::Bytes;

use crate::internal::error::ListingError;
use crate::internal::response::traits::response_sink::ResponseSink;

/// 把响应收集到内存里的 [`ResponseSink`] 实现
///
/// 适合测试，或先渲染再交给别的框架发送的场景。
#[derive(Debug, Default)]
pub struct BufferedResponse {
    pub status: Option<u16>,
    pub headers: Vec<(String, String)>, // 名字统一小写
    pub body: Option<Bytes>,
    pub next_calls: usize,
    pub fail_calls: usize,
    pub last_error: Option<String>,
}

impl BufferedResponse {
    pub fn new() -> Self {
        Self::default()
    }

    /// 按名字取响应头（不区分大小写），同名时取最后一次设置的值
    pub fn header(&self, name: &str) -> Option<&str> {
        let name = name.to_ascii_lowercase();
        self.headers
            .iter()
            .rev()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }

    /// body 按 UTF-8 读出，没有 body 时为空串
    pub fn body_text(&self) -> String {
        self.body
            .as_ref()
            .map(|b| String::from_utf8_lossy(b).into_owned())
            .unwrap_or_default()
    }

    fn upsert_header(&mut self, name: &str, value: &str) {
        let name = name.to_ascii_lowercase();
        match self.headers.iter_mut().find(|(k, _)| *k == name) {
            Some(slot) => slot.1 = value.to_string(),
            None => self.headers.push((name, value.to_string())),
        }
    }
}

#[async_trait]
impl ResponseSink for BufferedResponse {
    fn set_header(&mut self, name: &str, value: &str) {
        self.upsert_header(name, value);
    }

    fn write_head(&mut self, status: u16, headers: &[(&str, &str)]) {
        self.status = Some(status);
        for (name, value) in headers {
            self.upsert_header(name, value);
        }
    }

    async fn end(&mut self, body: Bytes) {
        self.body = Some(body);
    }

    async fn next(&mut self) {
        self.next_calls += 1;
    }

    async fn fail(&mut self, error: &ListingError) {
        self.fail_calls += 1;
        self.last_error = Some(error.to_string());
        self.status = Some(error.status_code());
    }
}
