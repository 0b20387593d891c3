use serde::Serialize;
use serde_json::{json, Value};

use crate::models::Reading;
use crate::segmentation::Interval;
use crate::units::TemperatureUnit;

use super::annotations::annotations_for;

/// Line-chart configuration document: data, datasets and options including
/// the HVAC highlight annotations.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(transparent)]
pub struct ChartConfig(Value);

impl ChartConfig {
    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

pub fn build_chart_config(
    readings: &[Reading],
    intervals: &[Interval],
    unit: TemperatureUnit,
    labels: Vec<String>,
) -> ChartConfig {
    let temperature_title = format!("Temperature ({})", unit.symbol());
    let temperatures: Vec<Option<f64>> = readings
        .iter()
        .map(|r| unit.select(r.temperature_c, r.temperature_f))
        .collect();
    let targets: Vec<Option<f64>> = readings
        .iter()
        .map(|r| unit.select(r.target_temperature_c, r.target_temperature_f))
        .collect();
    let humidity: Vec<Option<f64>> = readings.iter().map(|r| r.humidity).collect();

    ChartConfig(json!({
        "type": "line",
        "data": {
            "labels": labels,
            "datasets": [
                {
                    "label": temperature_title,
                    "data": temperatures,
                    "borderColor": "#3498db",
                    "backgroundColor": "rgba(52, 152, 219, 0.1)",
                    "tension": 0.4,
                    "yAxisID": "y-temp"
                },
                {
                    "label": format!("Target Temperature ({})", unit.symbol()),
                    "data": targets,
                    "borderColor": "#e74c3c",
                    "backgroundColor": "rgba(231, 76, 60, 0.1)",
                    "borderDash": [5, 5],
                    "tension": 0.4,
                    "yAxisID": "y-temp"
                },
                {
                    "label": "Humidity (%)",
                    "data": humidity,
                    "borderColor": "#2ecc71",
                    "backgroundColor": "rgba(46, 204, 113, 0.1)",
                    "tension": 0.4,
                    "yAxisID": "y-humidity"
                }
            ]
        },
        "options": {
            "responsive": true,
            "maintainAspectRatio": false,
            "interaction": { "mode": "index", "intersect": false },
            "plugins": {
                "legend": { "display": true, "position": "top" },
                "annotation": { "annotations": annotations_for(intervals) }
            },
            "scales": {
                "x": {
                    "display": true,
                    "title": { "display": true, "text": "Time" }
                },
                "y-temp": {
                    "type": "linear",
                    "display": true,
                    "position": "left",
                    "title": { "display": true, "text": temperature_title }
                },
                "y-humidity": {
                    "type": "linear",
                    "display": true,
                    "position": "right",
                    "title": { "display": true, "text": "Humidity (%)" },
                    "grid": { "drawOnChartArea": false }
                }
            }
        }
    }))
}
