use serde::{Deserialize, Serialize};

/// Aggregates served by `/api/statistics`. Temperatures are Celsius.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Statistics {
    #[serde(default)]
    pub avg_temperature: Option<f64>,
    #[serde(default)]
    pub min_temperature: Option<f64>,
    #[serde(default)]
    pub max_temperature: Option<f64>,
    #[serde(default)]
    pub avg_humidity: Option<f64>,
    #[serde(default)]
    pub period_hours: Option<u32>,
}

/// Body of `/health`.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub service: Option<String>,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}
