pub mod reading;
pub mod statistics;
pub mod time_range;

pub use reading::{format_label, HvacState, LabelZone, Reading};
pub use statistics::{HealthStatus, Statistics};
pub use time_range::TimeRange;
