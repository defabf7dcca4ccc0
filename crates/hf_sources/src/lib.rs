pub mod hacker_news;
pub mod logging;
pub mod memory;

pub use hacker_news::HackerNewsSource;
pub use logging::init_logging;
pub use memory::MemorySource;
