use chrono::{DateTime, Datelike, SecondsFormat, Utc};

/// 没有可用时间时显示的占位符（原样写入 HTML）
pub const MODIFIED_PLACEHOLDER: &str = "&nbsp;&nbsp;-&nbsp;&nbsp;";

/// 把修改时间格式化为 `YYYY-MM-DD HH:MM:SS`（UTC）
///
/// 即 ISO-8601 去掉小数秒和时区标记、`T` 换成空格。
/// 没有时间或年份超出四位数时返回 `None`，由调用方渲染 [`MODIFIED_PLACEHOLDER`]。
pub fn format_modified(modified: Option<&DateTime<Utc>>) -> Option<String> {
    let modified = modified?;
    if !(0..=9999).contains(&modified.year()) {
        return None;
    }

    let iso = modified.to_rfc3339_opts(SecondsFormat::Secs, true);
    let trimmed = iso.strip_suffix('Z')?;
    Some(trimmed.replacen('T', " ", 1))
}
