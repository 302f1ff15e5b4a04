//! 单行数据的计算与输出。
//!
//! [`ListingRow`] 里的字符串都是未做 HTML 转义的值（href 已经过 URL 编码），
//! 转义统一在 [`write_row`] 里经由 [`HtmlBuilder`] 完成。

use tracing::warn;

use crate::internal::format::escape::encode_uri_component;
use crate::internal::format::modified::{MODIFIED_PLACEHOLDER, format_modified};
use crate::internal::format::permissions::format_mode;
use crate::internal::format::size::{SIZE_PLACEHOLDER, format_size};
use crate::internal::listing::structs::entry::Entry;
use crate::internal::listing::structs::listing_context::ListingContext;
use crate::internal::options::structs::listing_options::ListingOptions;
use crate::internal::render::html_builder::HtmlBuilder;
use crate::internal::render::shortcut::{read_shortcut_target, strip_shortcut_suffix};
use crate::internal::style::style_table::StyleTable;

/// 表格中的一行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingRow {
    pub icon_class: String,
    pub href: String,
    pub display_name: String,       // 未转义，目录已带末尾 `/`
    pub external: bool,             // 快捷链接，新标签页打开
    pub modified: Option<String>,   // None 时渲染占位符
    pub size: String,
    pub permissions: Option<String>, // 写到名字单元格的 title 里
}

/// 由目录项计算一行的全部显示数据
pub async fn build_row(
    entry: &Entry,
    ctx: &ListingContext,
    options: &ListingOptions,
    style: &StyleTable,
) -> ListingRow {
    let is_dir = entry.is_dir();
    let meta = entry.meta.as_ref();

    let permissions = match (options.hide_permissions, meta.and_then(|m| m.mode)) {
        (false, Some(mode)) => Some(format_mode(mode)),
        _ => None,
    };
    let modified = format_modified(meta.and_then(|m| m.modified.as_ref()));
    let icon_class = style.icon_class(&entry.name, is_dir);

    // 快捷链接：只处理 stat 成功的非目录项
    if !is_dir && meta.is_some() {
        if let Some(stem) = options
            .shortcut_suffix
            .as_deref()
            .and_then(|suffix| strip_shortcut_suffix(&entry.name, suffix))
        {
            let path = ctx.target.join(&entry.name);
            match read_shortcut_target(&path).await {
                Ok(Some(target)) => {
                    return ListingRow {
                        icon_class,
                        href: target,
                        display_name: stem.to_string(),
                        external: true,
                        modified,
                        size: SIZE_PLACEHOLDER.to_string(),
                        permissions,
                    };
                }
                Ok(None) => {}
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "读取快捷链接失败，按普通文件显示");
                }
            }
        }
    }

    let mut href = format!("{}/{}", ctx.href_base(), encode_uri_component(&entry.name));
    let mut display_name = entry.name.clone();
    if is_dir {
        href.push('/');
        if let Some(query) = &ctx.query {
            href.push_str(query);
        }
        display_name.push('/');
    }

    ListingRow {
        icon_class,
        href,
        display_name,
        external: false,
        modified,
        size: format_size(meta, options.human_readable, options.si),
        permissions,
    }
}

/// 输出一行：图标、名字链接、修改时间、大小，列顺序固定
pub fn write_row(html: &mut HtmlBuilder, row: &ListingRow) {
    html.raw("<tr>");

    html.raw("<td>")
        .open("i", &[("class", row.icon_class.as_str())])
        .close("i")
        .raw("</td>");

    match &row.permissions {
        Some(perms) => html.open("td", &[("class", "display-name"), ("title", perms.as_str())]),
        None => html.open("td", &[("class", "display-name")]),
    };
    if row.external {
        html.element(
            "a",
            &[
                ("href", row.href.as_str()),
                ("target", "_blank"),
                ("rel", "noopener noreferrer"),
            ],
            &row.display_name,
        );
    } else {
        html.element("a", &[("href", row.href.as_str())], &row.display_name);
    }
    html.raw("</td>");

    html.raw("<td class=\"last-modified\"><code>");
    match &row.modified {
        Some(text) => html.text(text),
        None => html.raw(MODIFIED_PLACEHOLDER),
    };
    html.raw("</code></td>");

    html.raw("<td class=\"file-size\"><code>")
        .text(&row.size)
        .raw("</code></td>");

    html.raw("</tr>").newline();
}
