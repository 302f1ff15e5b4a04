use crate::internal::listing::structs::buckets::Buckets;
use crate::internal::listing::structs::listing_context::ListingContext;
use crate::internal::options::structs::listing_options::ListingOptions;
use crate::internal::render::html_builder::HtmlBuilder;
use crate::internal::render::row::{build_row, write_row};
use crate::internal::style::style_table::StyleTable;

/// 渲染好的页面
#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub html: String,
    pub rows: usize,
}

/// 生成完整的列表页面
///
/// 行顺序：dirs 块、files 块、unknowns 块，每块内部已排好序。
pub async fn render_page(
    ctx: &ListingContext,
    buckets: &Buckets,
    options: &ListingOptions,
    style: &StyleTable,
    host: &str,
) -> RenderedPage {
    let mut html = HtmlBuilder::with_capacity(2048 + buckets.len() * 256);
    let title = format!("Index of {}", ctx.pathname);

    html.raw("<!doctype html>\n<html>\n  <head>\n")
        .raw("    <meta charset=\"utf-8\">\n")
        .raw("    <meta name=\"viewport\" content=\"width=device-width\">\n")
        .raw("    ")
        .element("title", &[], &title)
        .newline();
    for href in style.stylesheets() {
        html.raw("    ")
            .open("link", &[("rel", "stylesheet"), ("href", href.as_str())])
            .newline();
    }
    html.raw("    <style type=\"text/css\">")
        .raw(style.css())
        .raw("</style>\n")
        .raw("  </head>\n  <body>\n")
        .element("h1", &[], &title)
        .newline();

    html.raw("<table>\n");
    let mut rows = 0;
    for entry in buckets.iter() {
        let row = build_row(entry, ctx, options, style).await;
        write_row(&mut html, &row);
        rows += 1;
    }
    html.raw("</table>\n");

    html.raw("<br>")
        .element("address", &[], &footer_text(options, host))
        .newline()
        .raw("</body></html>");

    RenderedPage { html: html.finish(), rows }
}

/// 页脚文字：命中品牌 host 时用品牌名，否则显示服务名
pub fn footer_text(options: &ListingOptions, host: &str) -> String {
    match &options.branding {
        Some(branding) if branding.matches(host) => {
            format!("{} @ {}", branding.label, host)
        }
        _ => format!("{} server running @ {}", options.server_name, host),
    }
}
