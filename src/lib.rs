pub mod cli;
pub mod config;
pub mod pipeline;
pub mod report;
pub mod resolver;
pub mod types;
pub mod utils;

pub use config::{Config, PartialConfig, DEFAULT_KEY_FIELD};
pub use pipeline::{run_merge, MergeOutcome};
pub use report::{MergeReport, ReportFormat};
pub use types::{InputSource, LoadOutcome, MergeStats, Record};
pub use utils::{MergeError, ProgressTracker};
