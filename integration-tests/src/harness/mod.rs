pub mod fixtures;
pub mod tracing;

pub use tracing::{CapturedEvent, init_test_tracing};
