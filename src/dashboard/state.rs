use chrono::{DateTime, Utc};

use crate::chart::{build_chart_config, ChartHandle};
use crate::models::{LabelZone, Reading, Statistics, TimeRange};
use crate::segmentation::{segment_intervals, summarize, RunSummary};
use crate::units::TemperatureUnit;

use super::view::DashboardView;

/// Everything the dashboard displays. Refreshes fetch first and then apply
/// the new values here in one step; values are only ever replaced.
#[derive(Debug, Clone)]
pub struct DashboardState {
    pub unit: TemperatureUnit,
    pub label_zone: LabelZone,
    pub selected_range: TimeRange,
    pub current: Option<Reading>,
    pub statistics: Option<Statistics>,
    pub summary: RunSummary,
    pub sample_count: usize,
    pub chart: Option<ChartHandle>,
    pub current_updated_at: Option<DateTime<Utc>>,
    pub history_updated_at: Option<DateTime<Utc>>,
    next_generation: u64,
}

impl DashboardState {
    pub fn new(unit: TemperatureUnit, label_zone: LabelZone, selected_range: TimeRange) -> Self {
        Self {
            unit,
            label_zone,
            selected_range,
            current: None,
            statistics: None,
            summary: RunSummary::default(),
            sample_count: 0,
            chart: None,
            current_updated_at: None,
            history_updated_at: None,
            next_generation: 1,
        }
    }

    pub fn apply_current(&mut self, reading: Reading) {
        self.current = Some(reading);
        self.current_updated_at = Some(Utc::now());
    }

    pub fn apply_statistics(&mut self, statistics: Statistics) {
        self.statistics = Some(statistics);
    }

    /// Segment the history, build a fresh chart and swap it in. Returns the
    /// chart that was replaced, if any.
    pub fn apply_history(&mut self, readings: &[Reading]) -> Option<ChartHandle> {
        let zone = self.label_zone;
        let labels: Vec<String> = readings.iter().map(|r| zone.format(&r.timestamp)).collect();
        let intervals = segment_intervals(readings, |r| zone.format(&r.timestamp));
        let config = build_chart_config(readings, &intervals, self.unit, labels);

        let generation = self.next_generation;
        self.next_generation += 1;
        self.summary = summarize(&intervals);
        self.sample_count = readings.len();
        self.history_updated_at = Some(Utc::now());
        self.chart.replace(ChartHandle::new(generation, config))
    }

    pub fn view(&self) -> DashboardView {
        DashboardView::from_state(self)
    }
}
