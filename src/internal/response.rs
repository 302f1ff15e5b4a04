pub mod headers;
pub mod structs;
pub mod traits;
