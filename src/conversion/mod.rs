//! Charset-to-UTF-8 conversion module
//!
//! Contains the per-file transcoding engine, the batch runner, and run
//! statistics.

pub mod batch;
pub mod engine;
pub mod stats;

pub use batch::{run, BatchResult, ConversionOutcome, ConversionStatus};
pub use engine::{ConversionEngine, TranscodeStats};
pub use stats::BatchSummary;
