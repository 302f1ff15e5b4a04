use crate::StyleTable;
use crate::style::{FOLDER_CLASS, PAGE_CLASS};

#[test]
fn builtin_table_knows_common_extensions() {
    let style = StyleTable::builtin();
    assert_eq!(style.icon_class("report.pdf", false), "icon icon-pdf");
    assert_eq!(style.icon_class("photo.JPG", false), "icon icon-image");
    assert_eq!(style.icon_class("archive.tar.gz", false), "icon icon-archive");
    assert_eq!(style.icon_class("link.url", false), "icon icon-_link");
}

#[test]
fn unknown_extension_uses_page_icon() {
    let style = StyleTable::builtin();
    assert_eq!(style.icon_class("data.weird", false), format!("icon icon-{PAGE_CLASS}"));
    // 没有点时整个名字当作扩展名
    assert_eq!(style.icon_class("Makefile", false), format!("icon icon-{PAGE_CLASS}"));
}

#[test]
fn directories_always_use_folder_icon() {
    let style = StyleTable::builtin();
    assert_eq!(style.icon_class("photos.png", true), format!("icon icon-{FOLDER_CLASS}"));
    assert_eq!(style.icon_class("..", true), format!("icon icon-{FOLDER_CLASS}"));
}

#[test]
fn builtin_css_contains_glyph_rules() {
    let style = StyleTable::builtin();
    assert!(style.css().contains(".icon-_folder::before"));
    assert!(style.css().contains(".icon-pdf::before"));
}

#[test]
fn custom_table_is_independent_of_builtin() {
    let style = StyleTable::empty()
        .with_icon(".Rs", "rust")
        .with_css("td { color: red; }")
        .with_stylesheet("/theme.css");

    assert_eq!(style.icon_class("main.rs", false), "icon icon-rust");
    assert_eq!(style.icon_class("report.pdf", false), format!("icon icon-{PAGE_CLASS}"));
    assert_eq!(style.css(), "td { color: red; }");
    assert_eq!(style.stylesheets(), ["/theme.css".to_string()]);

    // 原有的内置表不受影响
    assert_eq!(StyleTable::builtin().icon_class("main.rs", false), "icon icon-code");
}
