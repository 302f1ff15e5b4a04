use std::path::Path;

use futures_util::stream::{self, StreamExt};
use tracing::debug;

use crate::internal::listing::structs::buckets::Buckets;
use crate::internal::listing::structs::entry::{Entry, EntryMeta};

/// 同时在途的 stat 数量上限
pub const MAX_CONCURRENT_STATS: usize = 64;

/// 对目录下的一组名字逐个 stat，并分成 dirs / files / unknowns 三个已排序的桶
///
/// - 单项 stat 失败不会中止整个列表，该项会进入 unknowns
/// - 最多 [`MAX_CONCURRENT_STATS`] 个 stat 同时进行，全部结束后才分桶；结果保持输入顺序
/// - 名字列表为空时直接返回三个空桶
pub async fn classify_entries(dir: &Path, names: Vec<String>) -> Buckets {
    let mut buckets = Buckets::default();
    if names.is_empty() {
        return buckets;
    }

    let tasks = names.into_iter().map(|name| async move {
        let full_path = dir.join(&name);
        match tokio::fs::metadata(&full_path).await {
            Ok(metadata) => Entry::new(name, EntryMeta::from_metadata(&metadata)),
            Err(err) => {
                debug!(path = %full_path.display(), error = %err, "目录项 stat 失败，按未知项处理");
                Entry::unknown(name, err)
            }
        }
    });

    let entries: Vec<Entry> = stream::iter(tasks)
        .buffered(MAX_CONCURRENT_STATS)
        .collect()
        .await;

    for entry in entries {
        buckets.place(entry);
    }
    buckets.sort();

    buckets
}
