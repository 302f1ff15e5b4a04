pub mod buckets;
pub mod entry;
pub mod listing_context;
pub mod listing_request;
pub mod name_key;

// 重导出公共类型
pub use buckets::Buckets;
pub use entry::{Entry, EntryMeta};
pub use listing_context::ListingContext;
pub use listing_request::ListingRequest;
pub use name_key::NameKey;
