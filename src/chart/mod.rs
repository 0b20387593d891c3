pub mod annotations;
pub mod config;
pub mod handle;

pub use annotations::{annotations_for, BoxAnnotation};
pub use config::{build_chart_config, ChartConfig};
pub use handle::ChartHandle;
