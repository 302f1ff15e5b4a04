//! 目录本身的缓存相关响应头。

use sha2::{Digest, Sha256};

use crate::internal::listing::structs::entry::EntryMeta;

/// ETag 取摘要的前多少个十六进制字符
const ETAG_HEX_LEN: usize = 20;

/// 由 inode、大小、修改时间计算 ETag
///
/// 只输出摘要，不把 inode 号暴露给客户端；`weak` 时加 `W/` 前缀。
pub fn etag(meta: &EntryMeta, weak: bool) -> String {
    let mtime = meta
        .modified
        .map(|t| t.timestamp_nanos_opt().unwrap_or_else(|| t.timestamp_millis()))
        .unwrap_or(0);
    let source = format!(
        "{}-{}-{}",
        meta.inode.unwrap_or(0),
        meta.size.unwrap_or(0),
        mtime
    );

    let mut hasher = Sha256::new();
    hasher.update(source.as_bytes());
    let digest = format!("{:x}", hasher.finalize());

    let tag = format!("\"{}\"", &digest[..ETAG_HEX_LEN]);
    if weak { format!("W/{tag}") } else { tag }
}

/// IMF-fixdate，如 `Tue, 02 Jan 2024 03:04:05 GMT`；没有修改时间时取 Unix 纪元
pub fn last_modified(meta: &EntryMeta) -> String {
    let modified = meta.modified.unwrap_or_default();
    modified.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}
