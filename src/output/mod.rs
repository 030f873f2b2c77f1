//! Record sinks
//!
//! The engine's sole externally observable output is a stream of finished
//! [`crate::model::Meeting`] records; sinks receive them one at a time.

pub mod jsonl;
pub mod traits;

pub use jsonl::JsonlSink;
pub use traits::{OutputError, OutputResult, RecordSink};
