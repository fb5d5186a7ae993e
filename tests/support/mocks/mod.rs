// tests/support/mocks/mod.rs
pub mod news_source;
pub mod repos;
pub mod time;

pub use news_source::StubNewsSource;
pub use repos::InMemoryNewsRepo;
pub use time::{FixedClock, fixed_now};
