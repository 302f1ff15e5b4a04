pub mod classify_entries;
pub mod compare_names;
pub mod resolve_path;
