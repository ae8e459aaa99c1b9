pub mod error;
pub mod progress;

pub use error::{MergeError, Result};
pub use progress::ProgressTracker;
