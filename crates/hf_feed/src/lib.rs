pub mod builder;
pub mod pipeline;
pub mod rss;
pub mod writer;

pub use builder::FeedBuilder;
pub use pipeline::{Pipeline, RunSummary};
pub use rss::RssSerializer;
pub use writer::write_atomic;
