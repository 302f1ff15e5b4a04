use std::collections::HashMap;
use std::sync::Arc;

use super::builtin::{BUILTIN_GLYPH_CSS, BUILTIN_ICONS};

/// 基础样式，构建时内联进页面
const BASE_CSS: &str = include_str!("../../assets/listing.css");

/// 目录固定使用的图标类
pub const FOLDER_CLASS: &str = "_folder";

/// 未识别扩展名使用的图标类
pub const PAGE_CLASS: &str = "_page";

/// 图标与样式表
///
/// 构造后不可变，由渲染器在创建时持有，多个请求共享同一份（内部字段都是 `Arc`）。
#[derive(Debug, Clone)]
pub struct StyleTable {
    icons: Arc<HashMap<String, String>>, // 小写扩展名 -> 图标类名
    css: Arc<String>,                    // 内联 CSS
    stylesheets: Arc<Vec<String>>,       // 额外的 <link rel="stylesheet"> 地址
}

impl Default for StyleTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl StyleTable {
    /// 内置图标表 + 内置 CSS
    pub fn builtin() -> Self {
        let icons = BUILTIN_ICONS
            .iter()
            .map(|(ext, class)| (ext.to_string(), class.to_string()))
            .collect();

        Self {
            icons: Arc::new(icons),
            css: Arc::new(format!("{BASE_CSS}{BUILTIN_GLYPH_CSS}")),
            stylesheets: Arc::new(Vec::new()),
        }
    }

    /// 空表：所有文件都用通用图标，不带 CSS
    pub fn empty() -> Self {
        Self {
            icons: Arc::new(HashMap::new()),
            css: Arc::new(String::new()),
            stylesheets: Arc::new(Vec::new()),
        }
    }

    /// 增加或覆盖一个扩展名的图标类
    pub fn with_icon(mut self, ext: &str, class: &str) -> Self {
        Arc::make_mut(&mut self.icons)
            .insert(ext.trim_start_matches('.').to_ascii_lowercase(), class.to_string());
        self
    }

    /// 替换内联 CSS
    pub fn with_css(mut self, css: impl Into<String>) -> Self {
        self.css = Arc::new(css.into());
        self
    }

    /// 追加一个外部样式表链接
    pub fn with_stylesheet(mut self, href: impl Into<String>) -> Self {
        Arc::make_mut(&mut self.stylesheets).push(href.into());
        self
    }

    pub fn css(&self) -> &str {
        &self.css
    }

    pub fn stylesheets(&self) -> &[String] {
        &self.stylesheets
    }

    /// 计算目录项的图标 class 属性值，如 `icon icon-pdf`
    ///
    /// 扩展名取最后一个 `.` 之后的部分；没有 `.` 时整个名字当作扩展名。
    pub fn icon_class(&self, name: &str, is_dir: bool) -> String {
        let class = if is_dir {
            FOLDER_CLASS
        } else {
            let ext = name.rsplit('.').next().unwrap_or(name).to_ascii_lowercase();
            self.icons.get(&ext).map(String::as_str).unwrap_or(PAGE_CLASS)
        };
        format!("icon icon-{class}")
    }
}
