use std::path::{Component, Path, PathBuf};

use percent_encoding::percent_decode_str;

use crate::internal::error::ListingError;

/// 只做字面上的规范化：去掉 `.`，`..` 弹出上一级（到根为止），不访问文件系统
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // 已经在根上时 pop 不会越过根；相对路径开头的 `..` 保留
                if !out.pop() && !out.has_root() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// 把请求 URL 拆成 (原始 path, 查询串)，查询串带 `?`
pub fn split_request_url(url: &str) -> (&str, Option<&str>) {
    match url.find('?') {
        Some(at) => (&url[..at], Some(&url[at..])),
        None => (url, None),
    }
}

/// 解码 URL path 中的百分号编码，非法 UTF-8 视为错误
pub fn decode_pathname(raw_path: &str) -> Result<String, ListingError> {
    percent_decode_str(raw_path)
        .decode_utf8()
        .map(|s| s.into_owned())
        .map_err(|e| ListingError::MalformedPath(format!("{raw_path}: {e}")))
}

/// 把解码后的请求路径映射到根目录下的文件系统路径
///
/// 先去掉 `base_dir` 前缀，再拼到 `root` 上并规范化。
/// 结果不在 `root` 内（例如 `..` 逃逸，或请求不在 `base_dir` 下）时返回 `OutsideRoot`。
pub fn resolve_target(
    root: &Path,
    base_dir: &str,
    pathname: &str,
) -> Result<PathBuf, ListingError> {
    let request = normalize_lexically(&Path::new("/").join(pathname));
    let base = normalize_lexically(&Path::new("/").join(base_dir));

    let relative = request
        .strip_prefix(&base)
        .map_err(|_| ListingError::OutsideRoot(root.join(pathname.trim_start_matches('/'))))?;

    let target = normalize_lexically(&root.join(relative));
    if !target.starts_with(root) {
        return Err(ListingError::OutsideRoot(target));
    }

    Ok(target)
}

/// 上级目录仍在根目录内时返回它，否则返回 `None`
///
/// 按路径组件比较，`/srv` 不会被当作 `/srvx` 的前缀。
pub fn parent_within_root(target: &Path, root: &Path) -> Option<PathBuf> {
    let parent = target.parent()?;
    if parent.starts_with(root) {
        Some(parent.to_path_buf())
    } else {
        None
    }
}
