//! 快捷链接文件：文件内容（去掉首尾空白）就是跳转目标。

use std::path::Path;

use tokio::io::AsyncReadExt;

/// 快捷链接文件最多读取的字节数，超出部分直接忽略
pub const MAX_SHORTCUT_BYTES: u64 = 4 * 1024;

/// 名字带有快捷链接后缀时返回去掉后缀后的显示名
///
/// 去掉后缀后为空（文件名就是 `.url`）时不算快捷链接。
pub fn strip_shortcut_suffix<'a>(name: &'a str, suffix: &str) -> Option<&'a str> {
    let stem = name.strip_suffix(suffix)?;
    if stem.is_empty() { None } else { Some(stem) }
}

/// 读取快捷链接目标，最多读 [`MAX_SHORTCUT_BYTES`]；内容为空时返回 `None`
pub async fn read_shortcut_target(path: &Path) -> std::io::Result<Option<String>> {
    let file = tokio::fs::File::open(path).await?;
    let mut buf = Vec::new();
    file.take(MAX_SHORTCUT_BYTES).read_to_end(&mut buf).await?;

    let text = String::from_utf8_lossy(&buf);
    let target = text.trim();
    if target.is_empty() {
        Ok(None)
    } else {
        Ok(Some(target.to_string()))
    }
}
