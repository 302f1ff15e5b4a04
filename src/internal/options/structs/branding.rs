use serde::Deserialize;

/// 页脚品牌：请求的 host 命中 `host_suffix` 时，页脚改为 `{label} @ {host}`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HostBranding {
    pub host_suffix: String,
    pub label: String,
}

impl HostBranding {
    pub fn new(host_suffix: &str, label: &str) -> Self {
        Self {
            host_suffix: host_suffix.to_ascii_lowercase(),
            label: label.to_string(),
        }
    }

    /// 比较时忽略大小写和端口号
    pub fn matches(&self, host: &str) -> bool {
        let hostname = strip_port(host).to_ascii_lowercase();
        let suffix = self.host_suffix.trim_start_matches('.').to_ascii_lowercase();
        if suffix.is_empty() {
            return false;
        }
        hostname == suffix
            || hostname
                .strip_suffix(suffix.as_str())
                .is_some_and(|rest| rest.ends_with('.'))
    }
}

fn strip_port(host: &str) -> &str {
    // IPv6 字面量形如 [::1]:8080
    if let Some(rest) = host.strip_prefix('[') {
        return rest.split(']').next().unwrap_or(rest);
    }
    host.rsplit_once(':').map(|(h, _)| h).unwrap_or(host)
}
