pub mod buffered_response;

pub use buffered_response::BufferedResponse;
