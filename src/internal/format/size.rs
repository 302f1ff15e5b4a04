use crate::internal::listing::structs::entry::EntryMeta;

/// 二进制单位（1024 进位）
const BINARY_UNITS: [&str; 6] = ["K", "M", "G", "T", "P", "E"];

/// SI 单位（1000 进位），千用小写 k 与二进制区分
const SI_UNITS: [&str; 6] = ["k", "M", "G", "T", "P", "E"];

/// 快捷链接行没有大小，显示占位符
pub const SIZE_PLACEHOLDER: &str = "-";

/// 把目录项的大小格式化为字符串
///
/// - 没有属性或没有大小（断开的符号链接等）：可读模式 `"0B"`，字节模式 `"0"`
/// - 字节模式：精确字节数
/// - 可读模式：小于进位阈值时 `"{n}B"`，否则保留一位小数加单位，如 `"2.0K"`
pub fn format_size(
    meta: Option<&EntryMeta>,
    human_readable: bool,
    si: bool,
) -> String {
    let meta = match meta {
        Some(m) => m,
        None => return unknown_size(human_readable),
    };

    match meta.size {
        Some(bytes) => format_bytes(bytes, human_readable, si),
        None => unknown_size(human_readable),
    }
}

/// 只按字节数格式化，规则同 [`format_size`]
pub fn format_bytes(bytes: u64, human_readable: bool, si: bool) -> String {
    if !human_readable {
        return bytes.to_string();
    }

    let (threshold, units) = if si {
        (1000u64, &SI_UNITS)
    } else {
        (1024u64, &BINARY_UNITS)
    };

    if bytes < threshold {
        return format!("{bytes}B");
    }

    let threshold = threshold as f64;
    let mut value = bytes as f64 / threshold;
    let mut unit = 0;
    while value >= threshold && unit + 1 < units.len() {
        value /= threshold;
        unit += 1;
    }

    format!("{:.1}{}", value, units[unit])
}

fn unknown_size(human_readable: bool) -> String {
    if human_readable { "0B".to_string() } else { "0".to_string() }
}
