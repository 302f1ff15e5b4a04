use std::path::Path;
use std::sync::Arc;

use bytes::Bytes;
use tracing::{debug, error, instrument, warn};

use crate::internal::error::{ConfigError, ListingError};
use crate::internal::listing::functions::classify_entries::classify_entries;
use crate::internal::listing::functions::resolve_path::{
    decode_pathname, parent_within_root, resolve_target, split_request_url,
};
use crate::internal::listing::structs::entry::{Entry, EntryMeta};
use crate::internal::listing::structs::listing_context::ListingContext;
use crate::internal::listing::structs::listing_request::ListingRequest;
use crate::internal::options::structs::listing_options::ListingOptions;
use crate::internal::render::page::{RenderedPage, render_page};
use crate::internal::response::headers::{etag, last_modified};
use crate::internal::response::traits::response_sink::ResponseSink;
use crate::internal::style::style_table::StyleTable;

/// 一次请求的结局，三者必居其一
#[derive(Debug)]
pub enum ListingOutcome {
    /// 已写出 200 页面
    Rendered { rows: usize },
    /// 出错，已交给 [`ResponseSink::fail`]
    Propagated(ListingError),
    /// 出错，已交给 [`ResponseSink::next`]
    Deferred(ListingError),
}

impl ListingOutcome {
    pub fn is_rendered(&self) -> bool {
        matches!(self, ListingOutcome::Rendered { .. })
    }
}

/// 成功渲染时要写出的全部内容
#[derive(Debug, Clone)]
pub struct ListingPage {
    pub page: RenderedPage,
    pub etag: String,
    pub last_modified: String,
}

/// 目录列表渲染器
///
/// 配置与样式表在构造时固定，之后可在任意多个请求间共享（`Clone` 只复制 `Arc`）。
///
/// example:
/// ```
/// use dir_index::{BufferedResponse, DirectoryListing, ListingOptions, ListingRequest, StyleTable};
///
/// let listing = DirectoryListing::new(ListingOptions::new("./public"), StyleTable::builtin())?;
/// let request = ListingRequest::new("/docs/?sort=name").with_header("host", "localhost:8080");
/// let mut response = BufferedResponse::new();
/// let outcome = listing.handle(&request, &mut response).await;
/// ```
#[derive(Debug, Clone)]
pub struct DirectoryListing {
    options: Arc<ListingOptions>,
    style: Arc<StyleTable>,
}

impl DirectoryListing {
    /// 创建渲染器，root 会在这里被解析成绝对路径
    pub fn new(
        mut options: ListingOptions,
        style: StyleTable,
    ) -> Result<Self, ConfigError> {
        options.resolve_root()?;
        Ok(Self { options: Arc::new(options), style: Arc::new(style) })
    }

    pub fn options(&self) -> &ListingOptions {
        &self.options
    }

    pub fn style(&self) -> &StyleTable {
        &self.style
    }

    /// 处理一个列表请求，并把结果写入 `response`
    ///
    /// 成功时设置 `content-type` / `etag` / `last-modified` / `cache-control` 并写出 200；
    /// 致命错误在写出任何内容之前中止，按 `handle_error` 交给 `fail` 或 `next`，且只调用一次。
    #[instrument(skip_all, fields(url = %request.url))]
    pub async fn handle<S>(
        &self,
        request: &ListingRequest,
        response: &mut S,
    ) -> ListingOutcome
    where
        S: ResponseSink + ?Sized,
    {
        match self.build(request).await {
            Ok(listing) => {
                response.set_header("etag", &listing.etag);
                response.set_header("last-modified", &listing.last_modified);
                response.set_header("cache-control", &self.options.cache_control);
                response.write_head(200, &[("content-type", "text/html")]);

                let rows = listing.page.rows;
                response.end(Bytes::from(listing.page.html)).await;
                debug!(rows, "目录列表已输出");
                ListingOutcome::Rendered { rows }
            }
            Err(err) if self.options.handle_error => {
                error!(error = %err, "目录列表失败，交给错误处理");
                response.fail(&err).await;
                ListingOutcome::Propagated(err)
            }
            Err(err) => {
                warn!(error = %err, "目录列表失败，交给下一个处理器");
                response.next().await;
                ListingOutcome::Deferred(err)
            }
        }
    }

    /// 只生成页面和响应头，不写响应；任何致命错误都原样返回
    pub async fn build(
        &self,
        request: &ListingRequest,
    ) -> Result<ListingPage, ListingError> {
        let options = &self.options;
        let ctx = self.context(&request.url)?;

        let target_meta = stat(&ctx.target)
            .await
            .map_err(|source| ListingError::StatTarget { path: ctx.target.clone(), source })?;

        let names = read_names(&ctx.target, options.show_dotfiles).await?;

        let mut buckets = classify_entries(&ctx.target, names).await;

        if let Some(parent) = parent_within_root(&ctx.target, &ctx.root) {
            let parent_meta = stat(&parent)
                .await
                .map_err(|source| ListingError::StatParent { path: parent, source })?;
            buckets.insert_dir_sorted(Entry::new("..", parent_meta));
        }

        let page = render_page(&ctx, &buckets, options, &self.style, request.host()).await;

        Ok(ListingPage {
            page,
            etag: etag(&target_meta, options.weak_etags),
            last_modified: last_modified(&target_meta),
        })
    }

    /// 解析请求 URL，得到本次请求的上下文
    pub fn context(&self, url: &str) -> Result<ListingContext, ListingError> {
        let (raw_path, query) = split_request_url(url);
        let pathname = decode_pathname(raw_path)?;
        let target = resolve_target(&self.options.root, &self.options.base_dir, &pathname)?;

        Ok(ListingContext {
            target,
            raw_path: raw_path.to_string(),
            pathname,
            query: query.map(str::to_string),
            root: self.options.root.clone(),
        })
    }
}

async fn stat(path: &Path) -> std::io::Result<EntryMeta> {
    let metadata = tokio::fs::metadata(path).await?;
    Ok(EntryMeta::from_metadata(&metadata))
}

/// 读取目录下的全部名字，按需过滤掉 `.` 开头的项
async fn read_names(
    dir: &Path,
    show_dotfiles: bool,
) -> Result<Vec<String>, ListingError> {
    let read_err = |source: std::io::Error| ListingError::ReadDir { path: dir.to_path_buf(), source };

    let mut read_dir = tokio::fs::read_dir(dir).await.map_err(read_err)?;
    let mut names = Vec::new();

    while let Some(dir_entry) = read_dir.next_entry().await.map_err(read_err)? {
        let name = dir_entry.file_name().to_string_lossy().into_owned();
        if !show_dotfiles && name.starts_with('.') {
            continue;
        }
        names.push(name);
    }

    Ok(names)
}
