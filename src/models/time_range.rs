use serde::{Deserialize, Serialize};

/// History window selectable on the dashboard.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum TimeRange {
    #[default]
    SixHours,
    TwelveHours,
    TwentyFourHours,
    FortyEightHours,
    OneWeek,
}

impl TimeRange {
    pub const ALL: [TimeRange; 5] = [
        TimeRange::SixHours,
        TimeRange::TwelveHours,
        TimeRange::TwentyFourHours,
        TimeRange::FortyEightHours,
        TimeRange::OneWeek,
    ];

    pub fn hours(&self) -> u32 {
        match self {
            TimeRange::SixHours => 6,
            TimeRange::TwelveHours => 12,
            TimeRange::TwentyFourHours => 24,
            TimeRange::FortyEightHours => 48,
            TimeRange::OneWeek => 168,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeRange::SixHours => "6 Hours",
            TimeRange::TwelveHours => "12 Hours",
            TimeRange::TwentyFourHours => "24 Hours",
            TimeRange::FortyEightHours => "48 Hours",
            TimeRange::OneWeek => "1 Week",
        }
    }
}
