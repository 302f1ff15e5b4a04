pub mod show_dir;
