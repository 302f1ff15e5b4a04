//! 配置测试：默认值、反序列化、root 解析、品牌 host 匹配。

use std::path::PathBuf;

use crate::options::{DEFAULT_BASE_DIR, DEFAULT_CACHE_CONTROL, DEFAULT_SHORTCUT_SUFFIX};
use crate::{ConfigError, DirectoryListing, HostBranding, ListingOptions, StyleTable};

#[test]
fn defaults() {
    let options = ListingOptions::default();
    assert_eq!(options.cache_control, DEFAULT_CACHE_CONTROL);
    assert_eq!(options.base_dir, DEFAULT_BASE_DIR);
    assert_eq!(options.shortcut_suffix.as_deref(), Some(DEFAULT_SHORTCUT_SUFFIX));
    assert!(options.human_readable);
    assert!(!options.si);
    assert!(options.show_dotfiles);
    assert!(!options.hide_permissions);
    assert!(options.weak_etags);
    assert!(options.handle_error);
    assert!(options.branding.is_none());
}

#[test]
fn deserialize_fills_missing_fields_with_defaults() {
    let options: ListingOptions = serde_json::from_str(
        r#"{
            "root": "/srv/www",
            "show_dotfiles": false,
            "si": true,
            "branding": { "host_suffix": "example.org", "label": "Example" }
        }"#,
    )
    .unwrap();

    assert_eq!(options.root, PathBuf::from("/srv/www"));
    assert!(!options.show_dotfiles);
    assert!(options.si);
    assert_eq!(options.cache_control, DEFAULT_CACHE_CONTROL);
    assert_eq!(options.branding, Some(HostBranding::new("example.org", "Example")));
}

#[test]
fn shortcut_can_be_disabled_from_config() {
    let options: ListingOptions = serde_json::from_str(r#"{ "shortcut_suffix": null }"#).unwrap();
    assert_eq!(options.shortcut_suffix, None);
}

#[test]
fn empty_root_is_rejected() {
    let err = DirectoryListing::new(ListingOptions::new(""), StyleTable::builtin()).unwrap_err();
    assert!(matches!(err, ConfigError::EmptyRoot));
}

#[test]
fn relative_root_becomes_absolute() {
    let listing =
        DirectoryListing::new(ListingOptions::new("./public/../public/."), StyleTable::builtin())
            .unwrap();
    let root = &listing.options().root;
    assert!(root.is_absolute());
    assert!(root.ends_with("public"));
    assert!(!root.components().any(|c| matches!(c, std::path::Component::ParentDir)));
}

#[test]
fn branding_matches_host_and_subdomains() {
    let branding = HostBranding::new(".Example.org", "Example");
    assert!(branding.matches("example.org"));
    assert!(branding.matches("EXAMPLE.ORG:8080"));
    assert!(branding.matches("mirror.example.org"));
    assert!(!branding.matches("badexample.org"));
    assert!(!branding.matches("example.org.evil.com"));
    assert!(!branding.matches(""));
}
