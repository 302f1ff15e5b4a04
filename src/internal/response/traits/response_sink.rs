//! 响应出口 trait：由外部 HTTP 框架实现，渲染器只通过它写出结果。

use async_trait::async_trait;
use bytes::Bytes;

use crate::internal::error::ListingError;

/// 可写的 HTTP 响应
///
/// 每个请求只会走三条路之一：
/// - 成功：若干次 `set_header` → 一次 `write_head(200, ..)` → 一次 `end(body)`
/// - 出错且 `handle_error` 开启：一次 `fail`
/// - 出错且 `handle_error` 关闭：一次 `next`
#[async_trait]
pub trait ResponseSink: Send {
    fn set_header(&mut self, name: &str, value: &str);

    fn write_head(&mut self, status: u16, headers: &[(&str, &str)]);

    async fn end(&mut self, body: Bytes);

    /// 交给下一个处理器（吞掉错误）
    async fn next(&mut self);

    /// 错误处理出口，默认写出纯文本错误页；接入方可以覆盖成自己的错误页
    async fn fail(&mut self, error: &ListingError) {
        let status = error.status_code();
        self.write_head(status, &[("content-type", "text/plain; charset=utf-8")]);
        self.end(Bytes::from(format!("{status} {error}\n"))).await;
    }
}
