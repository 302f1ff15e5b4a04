use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::internal::error::ConfigError;
use crate::internal::listing::functions::resolve_path::normalize_lexically;
use crate::internal::options::structs::branding::HostBranding;

/// 默认缓存策略
pub const DEFAULT_CACHE_CONTROL: &str = "max-age=3600";

/// 默认挂载路径
pub const DEFAULT_BASE_DIR: &str = "/";

/// 默认的快捷链接后缀
pub const DEFAULT_SHORTCUT_SUFFIX: &str = ".url";

/// 页脚中显示的默认服务名
pub const DEFAULT_SERVER_NAME: &str = "dir_index";

/// 目录列表渲染配置
///
/// 进程启动时构造一次，之后只读。可以直接从配置文件反序列化，缺省字段取 [`Default`]。
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ListingOptions {
    /// 对外提供服务的根目录
    pub root: PathBuf,
    /// URL 上的挂载前缀，请求路径去掉它之后再拼到 root 上
    pub base_dir: String,
    /// `cache-control` 响应头的值
    pub cache_control: String,
    /// 大小是否显示为 `2.0K` 之类的可读形式
    pub human_readable: bool,
    /// 可读大小是否按 1000 进位
    pub si: bool,
    /// 是否显示以 `.` 开头的项
    pub show_dotfiles: bool,
    /// 是否隐藏权限信息（显示在名字单元格的 title 中）
    pub hide_permissions: bool,
    /// ETag 是否加 `W/` 前缀
    pub weak_etags: bool,
    /// 出错时 true 交给错误处理出口（写出错误响应），false 交给下一个处理器
    pub handle_error: bool,
    /// 快捷链接文件后缀，`None` 表示关闭该功能
    pub shortcut_suffix: Option<String>,
    /// 页脚默认显示的服务名
    pub server_name: String,
    /// 按 host 切换页脚文字
    pub branding: Option<HostBranding>,
}

impl Default for ListingOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            base_dir: DEFAULT_BASE_DIR.to_string(),
            cache_control: DEFAULT_CACHE_CONTROL.to_string(),
            human_readable: true,
            si: false,
            show_dotfiles: true,
            hide_permissions: false,
            weak_etags: true,
            handle_error: true,
            shortcut_suffix: Some(DEFAULT_SHORTCUT_SUFFIX.to_string()),
            server_name: DEFAULT_SERVER_NAME.to_string(),
            branding: None,
        }
    }
}

impl ListingOptions {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self { root: root.as_ref().to_path_buf(), ..Self::default() }
    }

    pub fn base_dir(mut self, base_dir: &str) -> Self {
        self.base_dir = base_dir.to_string();
        self
    }

    pub fn cache_control(mut self, value: &str) -> Self {
        self.cache_control = value.to_string();
        self
    }

    pub fn human_readable(mut self, on: bool) -> Self {
        self.human_readable = on;
        self
    }

    pub fn si(mut self, on: bool) -> Self {
        self.si = on;
        self
    }

    pub fn show_dotfiles(mut self, on: bool) -> Self {
        self.show_dotfiles = on;
        self
    }

    pub fn hide_permissions(mut self, on: bool) -> Self {
        self.hide_permissions = on;
        self
    }

    pub fn weak_etags(mut self, on: bool) -> Self {
        self.weak_etags = on;
        self
    }

    pub fn handle_error(mut self, on: bool) -> Self {
        self.handle_error = on;
        self
    }

    /// 传空字符串表示关闭快捷链接
    pub fn shortcut_suffix(mut self, suffix: &str) -> Self {
        self.shortcut_suffix = if suffix.is_empty() {
            None
        } else {
            Some(suffix.to_string())
        };
        self
    }

    pub fn server_name(mut self, name: &str) -> Self {
        self.server_name = name.to_string();
        self
    }

    pub fn branding(mut self, branding: HostBranding) -> Self {
        self.branding = Some(branding);
        self
    }

    /// 把 root 变成绝对、规范化的路径，只在构造渲染器时调用一次
    pub(crate) fn resolve_root(&mut self) -> Result<(), ConfigError> {
        if self.root.as_os_str().is_empty() {
            return Err(ConfigError::EmptyRoot);
        }

        let absolute = std::path::absolute(&self.root).map_err(|source| {
            ConfigError::ResolveRoot { path: self.root.clone(), source }
        })?;

        self.root = normalize_lexically(&absolute);
        Ok(())
    }
}
