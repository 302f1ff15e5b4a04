pub mod response_sink;

pub use response_sink::ResponseSink;
