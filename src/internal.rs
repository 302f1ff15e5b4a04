pub mod entrance;
pub mod error;
pub mod format;
pub mod listing;
pub mod options;
pub mod render;
pub mod response;
pub mod style;
