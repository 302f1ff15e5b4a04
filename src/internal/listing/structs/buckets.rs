use crate::internal::listing::functions::compare_names::compare_names;
use crate::internal::listing::structs::entry::Entry;

/// 一次列表请求的分桶结果
///
/// 每个桶各自排序，永不合并后再排；渲染顺序固定为 dirs → files → unknowns。
#[derive(Debug, Clone, Default)]
pub struct Buckets {
    pub unknowns: Vec<Entry>, // stat 失败的项
    pub dirs: Vec<Entry>,
    pub files: Vec<Entry>,
}

impl Buckets {
    /// 按 stat 结果把一项放进对应的桶
    pub fn place(&mut self, entry: Entry) {
        match &entry.meta {
            None => self.unknowns.push(entry),
            Some(meta) if meta.is_dir => self.dirs.push(entry),
            Some(_) => self.files.push(entry),
        }
    }

    /// 三个桶分别做稳定排序
    pub fn sort(&mut self) {
        for bucket in [&mut self.dirs, &mut self.files, &mut self.unknowns] {
            bucket.sort_by(|a, b| compare_names(&a.name, &b.name));
        }
    }

    /// 把一个目录项插入 dirs，位置由排序规则决定（不强制置顶）
    pub fn insert_dir_sorted(&mut self, entry: Entry) {
        let at = self.dirs.partition_point(|e| {
            compare_names(&e.name, &entry.name).is_le()
        });
        self.dirs.insert(at, entry);
    }

    pub fn len(&self) -> usize {
        self.dirs.len() + self.files.len() + self.unknowns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 按渲染顺序遍历：dirs、files、unknowns
    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.dirs.iter().chain(self.files.iter()).chain(self.unknowns.iter())
    }
}
