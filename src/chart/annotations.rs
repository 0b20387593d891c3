use serde::Serialize;

use crate::segmentation::{ActiveState, Interval};

const HEATING_FILL: &str = "rgba(255, 99, 71, 0.2)";
const HEATING_BORDER: &str = "rgba(255, 99, 71, 0.5)";
const COOLING_FILL: &str = "rgba(135, 206, 235, 0.2)";
const COOLING_BORDER: &str = "rgba(135, 206, 235, 0.5)";

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AnnotationLabel {
    pub content: &'static str,
    pub enabled: bool,
}

/// Highlight box spanning sample positions on the index axis.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BoxAnnotation {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub x_min: usize,
    pub x_max: usize,
    pub background_color: &'static str,
    pub border_color: &'static str,
    pub border_width: u32,
    pub label: AnnotationLabel,
}

pub fn colors_for(state: ActiveState) -> (&'static str, &'static str) {
    match state {
        ActiveState::Heating => (HEATING_FILL, HEATING_BORDER),
        ActiveState::Cooling => (COOLING_FILL, COOLING_BORDER),
    }
}

impl From<&Interval> for BoxAnnotation {
    fn from(interval: &Interval) -> Self {
        let (background_color, border_color) = colors_for(interval.state);
        Self {
            kind: "box",
            x_min: interval.start_index,
            x_max: interval.end_index,
            background_color,
            border_color,
            border_width: 1,
            label: AnnotationLabel {
                content: interval.state.as_str(),
                enabled: false,
            },
        }
    }
}

pub fn annotations_for(intervals: &[Interval]) -> Vec<BoxAnnotation> {
    intervals.iter().map(BoxAnnotation::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn heating_box_serializes_like_the_chart_plugin_expects() {
        let interval = Interval {
            state: ActiveState::Heating,
            start_index: 2,
            end_index: 5,
            start_label: "a".into(),
            end_label: "b".into(),
        };
        let value = serde_json::to_value(BoxAnnotation::from(&interval)).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "box",
                "xMin": 2,
                "xMax": 5,
                "backgroundColor": "rgba(255, 99, 71, 0.2)",
                "borderColor": "rgba(255, 99, 71, 0.5)",
                "borderWidth": 1,
                "label": { "content": "HEATING", "enabled": false }
            })
        );
    }

    #[test]
    fn cooling_uses_sky_blue() {
        assert_eq!(
            colors_for(ActiveState::Cooling),
            ("rgba(135, 206, 235, 0.2)", "rgba(135, 206, 235, 0.5)")
        );
    }
}
