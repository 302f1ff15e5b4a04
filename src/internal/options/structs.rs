pub mod branding;
pub mod listing_options;

pub use branding::HostBranding;
pub use listing_options::ListingOptions;
