use std::path::Path;

use anyhow::{Context, Result};

use super::config::ChartConfig;

/// One rendered chart instance. The dashboard state owns at most one and
/// swaps it wholesale on every history refresh.
#[derive(Debug, Clone)]
pub struct ChartHandle {
    pub generation: u64,
    pub config: ChartConfig,
}

impl ChartHandle {
    pub fn new(generation: u64, config: ChartConfig) -> Self {
        Self { generation, config }
    }

    pub fn write_to(&self, path: &Path) -> Result<()> {
        let serialized = serde_json::to_string_pretty(&self.config)?;
        std::fs::write(path, serialized)
            .with_context(|| format!("Failed to write chart to {}", path.display()))
    }
}
