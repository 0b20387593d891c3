//! Reading data model.
//!
//! Represents a single thermostat sample as served by `/api/temperatures`
//! and `/api/current`.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// HVAC state reported by the thermostat at sample time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HvacState {
    Heating,
    Cooling,
    Inactive,
}

impl HvacState {
    /// Parse a raw label. Only the exact upper-case labels are active.
    pub fn from_label(label: Option<&str>) -> Self {
        match label {
            Some("HEATING") => HvacState::Heating,
            Some("COOLING") => HvacState::Cooling,
            _ => HvacState::Inactive,
        }
    }

    pub fn is_active(&self) -> bool {
        !matches!(self, HvacState::Inactive)
    }
}

/// Represents a single sample of the thermostat history.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Reading {
    #[serde(default)]
    pub id: Option<i64>,
    pub timestamp: String,
    #[serde(default)]
    pub device_name: Option<String>,
    #[serde(default)]
    pub temperature_c: Option<f64>,
    #[serde(default)]
    pub temperature_f: Option<f64>,
    #[serde(default)]
    pub humidity: Option<f64>,
    #[serde(default)]
    pub target_temperature_c: Option<f64>,
    #[serde(default)]
    pub target_temperature_f: Option<f64>,
    #[serde(default, deserialize_with = "lenient_label")]
    pub hvac_mode: Option<String>,
    #[serde(default, deserialize_with = "lenient_label")]
    pub hvac_state: Option<String>,
}

impl Reading {
    pub fn state(&self) -> HvacState {
        HvacState::from_label(self.hvac_state.as_deref())
    }

    /// Parsed sample instant. Offset-less timestamps are taken as UTC.
    pub fn instant(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.timestamp)
    }
}

/// Accepts any JSON value and keeps it only when it is a string, so a
/// malformed label degrades to "absent" instead of failing the whole payload.
fn lenient_label<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        _ => None,
    })
}

pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

/// Format a timestamp for chart labels in the given timezone
/// (`M/D/YYYY, h:mm:ss AM`). Unparseable input is returned verbatim.
pub fn format_label<Tz>(raw: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    match parse_timestamp(raw) {
        Some(instant) => instant
            .with_timezone(tz)
            .format("%-m/%-d/%Y, %-I:%M:%S %p")
            .to_string(),
        None => raw.to_string(),
    }
}

/// Timezone used for human-readable timestamp labels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LabelZone {
    #[default]
    Local,
    Utc,
}

impl LabelZone {
    pub fn format(&self, raw: &str) -> String {
        match self {
            LabelZone::Local => format_label(raw, &chrono::Local),
            LabelZone::Utc => format_label(raw, &Utc),
        }
    }
}
