//! 构建时根据 src/assets/icons.toml 生成内置图标表与图标 CSS，供 style 模块 include! 使用。

use std::env;
use std::fs;
use std::path::Path;

/// 图标表中允许的键：字母、数字、下划线、短横线
fn is_valid_key(s: &str) -> bool {
    !s.is_empty()
        && s.chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

fn main() {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let icons_path = Path::new(&manifest_dir).join("src/assets/icons.toml");
    println!("cargo:rerun-if-changed=src/assets/icons.toml");

    let content = if icons_path.exists() {
        fs::read_to_string(&icons_path).unwrap_or_default()
    } else {
        String::new()
    };

    let icons = parse_section(&content, "icons");
    let glyphs = parse_section(&content, "glyphs");

    let mut icon_entries = String::new();
    for (ext, class) in &icons {
        if !is_valid_key(ext) || !is_valid_key(class) {
            continue;
        }
        icon_entries.push_str(&format!(
            "    ({:?}, {:?}),\n",
            ext.to_ascii_lowercase(),
            class
        ));
    }

    let mut glyph_css = String::new();
    for (class, glyph) in &glyphs {
        // 字符会原样写进 CSS 字符串，引号和反斜杠直接丢弃
        if !is_valid_key(class) || glyph.contains(['"', '\\']) {
            continue;
        }
        glyph_css.push_str(&format!(
            ".icon-{class}::before {{ content: \"{glyph}\"; }}\n"
        ));
    }

    let code = format!(
        r#"// 自动生成，请勿手改。图标表来自 src/assets/icons.toml

/// 内置的「扩展名 -> 图标类名」表。
pub(crate) static BUILTIN_ICONS: &[(&str, &str)] = &[
{icons}];

/// 内置图标类对应的 CSS 规则。
pub(crate) static BUILTIN_GLYPH_CSS: &str = {css:?};
"#,
        icons = icon_entries,
        css = glyph_css,
    );

    let out_dir = env::var("OUT_DIR").unwrap();
    let out_path = Path::new(&out_dir).join("builtin_icons.rs");
    fs::write(out_path, code).expect("write builtin_icons.rs");
}

/// 解析形如 `[section]` 下的 `key = "value"` 行，保持文件中的顺序。
///
/// 只支持本项目 icons.toml 用到的子集：裸键、双引号字符串值、`#` 注释。
fn parse_section(content: &str, section: &str) -> Vec<(String, String)> {
    let header = format!("[{}]", section);
    let mut in_section = false;
    let mut pairs = Vec::new();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if line.starts_with('[') {
            in_section = line == header;
            continue;
        }
        if !in_section {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let value = value.trim();
        if value.len() < 2 || !value.starts_with('"') || !value.ends_with('"')
        {
            continue;
        }
        pairs.push((
            key.trim().to_string(),
            value[1..value.len() - 1].to_string(),
        ));
    }

    pairs
}
