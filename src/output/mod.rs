//! Tree output sinks
//!
//! - `streaming` - colored console output, one line at a time
//! - `lines` - plain lines collected in memory
//! - `json` - JSON output of a tree built in memory

mod config;
mod json;
mod lines;
mod streaming;

pub use config::OutputConfig;
pub use json::print_json;
pub use lines::LineCollector;
pub use streaming::StreamingFormatter;
