use serde::Serialize;

use super::algorithm::{ActiveState, Interval};

/// Per-state run counts over one segmentation result.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    pub heating_runs: usize,
    pub heating_samples: usize,
    pub cooling_runs: usize,
    pub cooling_samples: usize,
}

pub fn summarize(intervals: &[Interval]) -> RunSummary {
    intervals
        .iter()
        .fold(RunSummary::default(), |mut summary, interval| {
            match interval.state {
                ActiveState::Heating => {
                    summary.heating_runs += 1;
                    summary.heating_samples += interval.sample_count();
                }
                ActiveState::Cooling => {
                    summary.cooling_runs += 1;
                    summary.cooling_samples += interval.sample_count();
                }
            }
            summary
        })
}
