use std::fs::Metadata;
use std::sync::Arc;

use chrono::{DateTime, Utc};

/// 一次 stat 得到的、渲染需要的属性
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryMeta {
    pub is_dir: bool,                     // 是否目录（已跟随符号链接）
    pub size: Option<u64>,                // 文件大小（字节）
    pub modified: Option<DateTime<Utc>>,  // 最后修改时间
    pub mode: Option<u32>,                // 原始 mode 位，仅 unix 有
    pub inode: Option<u64>,               // inode 号，仅用于 ETag
}

impl EntryMeta {
    pub fn from_metadata(metadata: &Metadata) -> Self {
        #[cfg(unix)]
        let (mode, inode) = {
            use std::os::unix::fs::MetadataExt;
            (Some(metadata.mode()), Some(metadata.ino()))
        };
        #[cfg(not(unix))]
        let (mode, inode) = (None, None);

        Self {
            is_dir: metadata.is_dir(),
            size: Some(metadata.len()),
            modified: metadata.modified().ok().map(DateTime::<Utc>::from),
            mode,
            inode,
        }
    }
}

/// 目录中的一项
///
/// `name` 是文件系统上的原始名字，不做任何转义，转义只在渲染时发生。
/// `meta` 为 `None` 时表示 stat 失败（断开的符号链接、无权限、读取后被删除等），
/// 此时 `stat_error` 保存失败原因。
#[derive(Debug, Clone)]
pub struct Entry {
    pub name: String,
    pub meta: Option<EntryMeta>,
    pub stat_error: Option<Arc<std::io::Error>>,
}

impl Entry {
    pub fn new(name: impl Into<String>, meta: EntryMeta) -> Self {
        Self { name: name.into(), meta: Some(meta), stat_error: None }
    }

    pub fn unknown(name: impl Into<String>, error: std::io::Error) -> Self {
        Self {
            name: name.into(),
            meta: None,
            stat_error: Some(Arc::new(error)),
        }
    }

    pub fn is_dir(&self) -> bool {
        self.meta.as_ref().is_some_and(|m| m.is_dir)
    }

    pub fn is_unknown(&self) -> bool {
        self.meta.is_none()
    }
}
