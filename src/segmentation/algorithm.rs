use serde::Serialize;

use crate::models::{HvacState, Reading};

/// HVAC state that can own a highlighted run.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum ActiveState {
    Heating,
    Cooling,
}

impl ActiveState {
    pub fn from_state(state: HvacState) -> Option<Self> {
        match state {
            HvacState::Heating => Some(ActiveState::Heating),
            HvacState::Cooling => Some(ActiveState::Cooling),
            HvacState::Inactive => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActiveState::Heating => "HEATING",
            ActiveState::Cooling => "COOLING",
        }
    }
}

/// A maximal run of consecutive readings sharing one active state.
/// Indices are inclusive positions into the input sequence.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Interval {
    pub state: ActiveState,
    pub start_index: usize,
    pub end_index: usize,
    pub start_label: String,
    pub end_label: String,
}

impl Interval {
    fn open(state: ActiveState, index: usize, label: String) -> Self {
        Self {
            state,
            start_index: index,
            end_index: index,
            start_label: label.clone(),
            end_label: label,
        }
    }

    pub fn sample_count(&self) -> usize {
        self.end_index - self.start_index + 1
    }
}

/// Split readings into highlight intervals, one per run of the same active
/// state. Input order is trusted; readings without an active state close the
/// current run and are never covered.
pub fn segment_intervals<F>(readings: &[Reading], mut label: F) -> Vec<Interval>
where
    F: FnMut(&Reading) -> String,
{
    let mut intervals = Vec::new();
    let mut current: Option<Interval> = None;

    for (index, reading) in readings.iter().enumerate() {
        match ActiveState::from_state(reading.state()) {
            Some(state) => match &mut current {
                Some(interval) if interval.state == state => {
                    interval.end_index = index;
                    interval.end_label = label(reading);
                }
                _ => {
                    if let Some(interval) = current.take() {
                        intervals.push(interval);
                    }
                    current = Some(Interval::open(state, index, label(reading)));
                }
            },
            None => {
                if let Some(interval) = current.take() {
                    intervals.push(interval);
                }
            }
        }
    }

    if let Some(interval) = current {
        intervals.push(interval);
    }

    intervals
}

#[cfg(test)]
mod tests {
    use super::*;

    fn readings(states: &[Option<&str>]) -> Vec<Reading> {
        states
            .iter()
            .enumerate()
            .map(|(i, state)| Reading {
                timestamp: format!("t{i}"),
                hvac_state: state.map(str::to_string),
                ..Reading::default()
            })
            .collect()
    }

    fn segment(states: &[Option<&str>]) -> Vec<Interval> {
        segment_intervals(&readings(states), |r| r.timestamp.clone())
    }

    fn spans(intervals: &[Interval]) -> Vec<(ActiveState, usize, usize)> {
        intervals
            .iter()
            .map(|i| (i.state, i.start_index, i.end_index))
            .collect()
    }

    const H: Option<&str> = Some("HEATING");
    const C: Option<&str> = Some("COOLING");
    const I: Option<&str> = Some("IDLE");

    #[test]
    fn empty_input_yields_nothing() {
        assert!(segment(&[]).is_empty());
    }

    #[test]
    fn idle_only_yields_nothing() {
        assert!(segment(&[I, I]).is_empty());
        assert!(segment(&[None, Some("OFF"), Some("heating")]).is_empty());
    }

    #[test]
    fn idle_gap_splits_runs() {
        let out = segment(&[H, H, I, C]);
        assert_eq!(
            spans(&out),
            vec![(ActiveState::Heating, 0, 1), (ActiveState::Cooling, 3, 3)]
        );
        assert_eq!(out[0].start_label, "t0");
        assert_eq!(out[0].end_label, "t1");
    }

    #[test]
    fn state_change_without_idle_splits_runs() {
        let out = segment(&[H, C]);
        assert_eq!(
            spans(&out),
            vec![(ActiveState::Heating, 0, 0), (ActiveState::Cooling, 1, 1)]
        );
    }

    #[test]
    fn trailing_run_is_closed() {
        let out = segment(&[I, H, H]);
        assert_eq!(spans(&out), vec![(ActiveState::Heating, 1, 2)]);
        assert_eq!(out[0].end_label, "t2");
    }

    #[test]
    fn fully_active_sequence_is_one_interval() {
        let out = segment(&[C, C, C, C]);
        assert_eq!(spans(&out), vec![(ActiveState::Cooling, 0, 3)]);
        assert_eq!(out[0].sample_count(), 4);
    }

    #[test]
    fn single_reading_run_has_equal_bounds() {
        let out = segment(&[I, H, I]);
        assert_eq!(out[0].start_index, out[0].end_index);
        assert_eq!(out[0].start_label, out[0].end_label);
    }

    #[test]
    fn coverage_matches_active_indices() {
        let states = [H, None, C, C, H, I, H, Some("FAN"), C, C];
        let out = segment(&states);

        let mut covered = vec![0usize; states.len()];
        for interval in &out {
            for slot in &mut covered[interval.start_index..=interval.end_index] {
                *slot += 1;
            }
        }
        for (i, state) in states.iter().enumerate() {
            let active = HvacState::from_label(*state).is_active();
            assert_eq!(covered[i], usize::from(active), "index {i}");
        }

        for pair in out.windows(2) {
            assert!(pair[0].end_index < pair[1].start_index);
        }
        assert_eq!(out, segment(&states));
    }
}
