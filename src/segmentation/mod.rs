pub mod algorithm;
pub mod summary;

pub use algorithm::{segment_intervals, ActiveState, Interval};
pub use summary::{summarize, RunSummary};
