use std::fmt;

use serde::Serialize;

use crate::segmentation::RunSummary;
use crate::units::{format_humidity, format_humidity_rounded};

use super::state::DashboardState;

/// Display strings for every dashboard field.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub current_temp: String,
    pub current_humidity: String,
    pub target_temp: String,
    pub hvac_status: String,
    pub avg_temp: String,
    pub min_temp: String,
    pub max_temp: String,
    pub avg_humidity: String,
    pub range_label: &'static str,
    pub sample_count: usize,
    pub summary: RunSummary,
    pub chart_generation: Option<u64>,
}

impl DashboardView {
    pub fn from_state(state: &DashboardState) -> Self {
        let unit = state.unit;
        let current = state.current.as_ref();
        let stats = state.statistics.as_ref();

        Self {
            current_temp: unit.format_rounded(
                current.and_then(|r| unit.select(r.temperature_c, r.temperature_f)),
            ),
            current_humidity: format_humidity_rounded(current.and_then(|r| r.humidity)),
            target_temp: unit.format_rounded(
                current.and_then(|r| unit.select(r.target_temperature_c, r.target_temperature_f)),
            ),
            hvac_status: current
                .and_then(|r| r.hvac_state.clone())
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| "--".to_string()),
            avg_temp: unit.format_celsius_one_decimal(stats.and_then(|s| s.avg_temperature)),
            min_temp: unit.format_celsius_one_decimal(stats.and_then(|s| s.min_temperature)),
            max_temp: unit.format_celsius_one_decimal(stats.and_then(|s| s.max_temperature)),
            avg_humidity: format_humidity(stats.and_then(|s| s.avg_humidity)),
            range_label: state.selected_range.label(),
            sample_count: state.sample_count,
            summary: state.summary,
            chart_generation: state.chart.as_ref().map(|c| c.generation),
        }
    }
}

impl fmt::Display for DashboardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Current   {}  humidity {}", self.current_temp, self.current_humidity)?;
        writeln!(f, "Target    {}  HVAC {}", self.target_temp, self.hvac_status)?;
        writeln!(f, "Range     {} ({} samples)", self.range_label, self.sample_count)?;
        writeln!(
            f,
            "Stats     avg {}  min {}  max {}  humidity {}",
            self.avg_temp, self.min_temp, self.max_temp, self.avg_humidity
        )?;
        write!(
            f,
            "HVAC runs heating {} ({} samples)  cooling {} ({} samples)",
            self.summary.heating_runs,
            self.summary.heating_samples,
            self.summary.cooling_runs,
            self.summary.cooling_samples
        )
    }
}
