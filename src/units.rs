//! Temperature unit strategy.
//!
//! The API reports both scales for readings but only Celsius for statistics,
//! so every displayed temperature goes through [`TemperatureUnit`].

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "c" | "celsius" => Some(TemperatureUnit::Celsius),
            "f" | "fahrenheit" => Some(TemperatureUnit::Fahrenheit),
            _ => None,
        }
    }

    pub fn convert_from_celsius(&self, celsius: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius => celsius,
            TemperatureUnit::Fahrenheit => celsius * 9.0 / 5.0 + 32.0,
        }
    }

    /// Pick the value already expressed in this unit, converting the
    /// Celsius one when it is missing.
    pub fn select(&self, celsius: Option<f64>, fahrenheit: Option<f64>) -> Option<f64> {
        match self {
            TemperatureUnit::Celsius => celsius,
            TemperatureUnit::Fahrenheit => {
                fahrenheit.or_else(|| celsius.map(|c| self.convert_from_celsius(c)))
            }
        }
    }

    pub fn format_rounded(&self, value: Option<f64>) -> String {
        match value {
            Some(v) => format!("{}{}", round_whole(v), self.symbol()),
            None => format!("--{}", self.symbol()),
        }
    }

    /// Format a Celsius aggregate in this unit with one decimal.
    pub fn format_celsius_one_decimal(&self, celsius: Option<f64>) -> String {
        match celsius {
            Some(c) => format!("{}{}", round_one(self.convert_from_celsius(c)), self.symbol()),
            None => format!("--{}", self.symbol()),
        }
    }
}

// `+ 0.0` maps -0.0 to 0.0.
fn round_whole(value: f64) -> f64 {
    value.round() + 0.0
}

fn round_one(value: f64) -> f64 {
    (value * 10.0).round() / 10.0 + 0.0
}

pub fn format_humidity_rounded(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{}%", round_whole(v)),
        None => "--%".to_string(),
    }
}

pub fn format_humidity(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v}%"),
        None => "--%".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fahrenheit_prefers_reported_value() {
        let unit = TemperatureUnit::Fahrenheit;
        assert_eq!(unit.select(Some(20.0), Some(68.5)), Some(68.5));
        assert_eq!(unit.select(Some(20.0), None), Some(68.0));
        assert_eq!(unit.select(None, None), None);
        assert_eq!(TemperatureUnit::Celsius.select(Some(20.0), Some(68.5)), Some(20.0));
    }

    #[test]
    fn rounded_formatting() {
        let unit = TemperatureUnit::Celsius;
        assert_eq!(unit.format_rounded(Some(21.6)), "22°C");
        assert_eq!(unit.format_rounded(Some(0.0)), "0°C");
        assert_eq!(unit.format_rounded(None), "--°C");
        assert_eq!(TemperatureUnit::Fahrenheit.format_rounded(None), "--°F");
    }

    #[test]
    fn small_negatives_render_without_sign() {
        assert_eq!(TemperatureUnit::Celsius.format_rounded(Some(-0.3)), "0°C");
        assert_eq!(TemperatureUnit::Celsius.format_rounded(Some(-0.6)), "-1°C");
        assert_eq!(TemperatureUnit::Celsius.format_celsius_one_decimal(Some(-0.04)), "0°C");
        assert_eq!(format_humidity_rounded(Some(-0.2)), "0%");
    }

    #[test]
    fn statistics_convert_then_round() {
        assert_eq!(
            TemperatureUnit::Celsius.format_celsius_one_decimal(Some(21.4)),
            "21.4°C"
        );
        assert_eq!(
            TemperatureUnit::Fahrenheit.format_celsius_one_decimal(Some(21.4)),
            "70.5°F"
        );
        assert_eq!(TemperatureUnit::Fahrenheit.format_celsius_one_decimal(None), "--°F");
    }

    #[test]
    fn humidity_formatting() {
        assert_eq!(format_humidity_rounded(Some(44.6)), "45%");
        assert_eq!(format_humidity(Some(44.6)), "44.6%");
        assert_eq!(format_humidity(None), "--%");
    }

    #[test]
    fn parses_unit_names() {
        assert_eq!(TemperatureUnit::parse("F"), Some(TemperatureUnit::Fahrenheit));
        assert_eq!(TemperatureUnit::parse(" celsius "), Some(TemperatureUnit::Celsius));
        assert_eq!(TemperatureUnit::parse("kelvin"), None);
    }
}
