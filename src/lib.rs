/// 内部导出的模块
mod internal;


/// 导出核心入口
pub use internal::entrance::show_dir::*;
pub use internal::error::{ConfigError, ListingError};
pub use internal::listing::structs::ListingRequest;
pub use internal::options::structs::{HostBranding, ListingOptions};
pub use internal::response::structs::BufferedResponse;
pub use internal::response::traits::ResponseSink;
pub use internal::style::style_table::StyleTable;

/// 纯格式化函数，渲染之外也可以单独使用
pub mod format {
    use crate::internal;
    pub use internal::format::escape::{encode_uri_component, escape_html};
    pub use internal::format::modified::{MODIFIED_PLACEHOLDER, format_modified};
    pub use internal::format::permissions::format_mode;
    pub use internal::format::size::{SIZE_PLACEHOLDER, format_bytes, format_size};
}

/// 目录项读取、分类与排序，不依赖 HTTP
pub mod listing {
    use crate::internal;
    pub use internal::listing::functions::classify_entries::{MAX_CONCURRENT_STATS, classify_entries};
    pub use internal::listing::functions::compare_names::compare_names;
    pub use internal::listing::functions::resolve_path::{
        normalize_lexically, parent_within_root, resolve_target,
    };
    pub use internal::listing::structs::{Buckets, Entry, EntryMeta, ListingContext, NameKey};
}

pub mod options {
    use crate::internal;
    pub use internal::options::structs::listing_options::{
        DEFAULT_BASE_DIR, DEFAULT_CACHE_CONTROL, DEFAULT_SERVER_NAME,
        DEFAULT_SHORTCUT_SUFFIX,
    };
}

pub mod render {
    use crate::internal;
    pub use internal::render::html_builder::HtmlBuilder;
    pub use internal::render::page::{RenderedPage, footer_text};
    pub use internal::render::row::{ListingRow, build_row, write_row};
    pub use internal::render::shortcut::MAX_SHORTCUT_BYTES;
}

pub mod style {
    use crate::internal;
    pub use internal::style::style_table::{FOLDER_CLASS, PAGE_CLASS};
}

pub mod headers {
    use crate::internal;
    pub use internal::response::headers::{etag, last_modified};
}
