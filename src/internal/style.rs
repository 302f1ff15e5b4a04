pub mod style_table;

/// build.rs 生成的内置图标表
mod builtin {
    include!(concat!(env!("OUT_DIR"), "/builtin_icons.rs"));
}
