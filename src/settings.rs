use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf, sync::RwLock, time::Duration};

use crate::models::{LabelZone, TimeRange};
use crate::units::TemperatureUnit;

pub const DEFAULT_SETTINGS_FILE: &str = "thermodash.json";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DashboardSettings {
    pub api_base_url: String,
    pub unit: TemperatureUnit,
    pub label_zone: LabelZone,
    pub selected_range: TimeRange,
    pub current_refresh_secs: u64,
    pub history_refresh_secs: u64,
    pub request_timeout_secs: u64,
    pub chart_output: Option<PathBuf>,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:5000".into(),
            unit: TemperatureUnit::Celsius,
            label_zone: LabelZone::Local,
            selected_range: TimeRange::SixHours,
            current_refresh_secs: 60,
            history_refresh_secs: 300,
            request_timeout_secs: 10,
            chart_output: None,
        }
    }
}

impl DashboardSettings {
    pub fn current_refresh(&self) -> Duration {
        Duration::from_secs(self.current_refresh_secs.max(1))
    }

    pub fn history_refresh(&self) -> Duration {
        Duration::from_secs(self.history_refresh_secs.max(1))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }
}

/// Values taken from `THERMODASH_API_URL` / `THERMODASH_UNIT`. They shape
/// what the dashboard sees but are never written back to the settings file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnvOverrides {
    pub api_base_url: Option<String>,
    pub unit: Option<TemperatureUnit>,
}

impl EnvOverrides {
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            api_base_url: lookup("THERMODASH_API_URL")
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()),
            unit: lookup("THERMODASH_UNIT").and_then(|v| TemperatureUnit::parse(&v)),
        }
    }

    pub fn apply(&self, settings: &mut DashboardSettings) {
        if let Some(url) = &self.api_base_url {
            settings.api_base_url = url.clone();
        }
        if let Some(unit) = self.unit {
            settings.unit = unit;
        }
    }
}

pub struct SettingsStore {
    path: PathBuf,
    data: RwLock<DashboardSettings>,
    overrides: EnvOverrides,
}

impl SettingsStore {
    pub fn new(path: PathBuf) -> Result<Self> {
        let data = if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read settings from {}", path.display()))?;
            serde_json::from_str(&contents).unwrap_or_default()
        } else {
            DashboardSettings::default()
        };

        Ok(Self {
            path,
            data: RwLock::new(data),
            overrides: EnvOverrides::default(),
        })
    }

    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(EnvOverrides::from_lookup(|key| std::env::var(key).ok()))
    }

    pub fn with_overrides(mut self, overrides: EnvOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// File-backed settings with overrides applied on top.
    pub fn snapshot(&self) -> DashboardSettings {
        let mut settings = self
            .data
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone();
        self.overrides.apply(&mut settings);
        settings
    }

    pub fn selected_range(&self) -> TimeRange {
        self.snapshot().selected_range
    }

    pub fn update_selected_range(&self, range: TimeRange) -> Result<()> {
        let mut guard = self
            .data
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        guard.selected_range = range;
        self.persist(&guard)
    }

    fn persist(&self, data: &DashboardSettings) -> Result<()> {
        let serialized = serde_json::to_string_pretty(data)?;
        fs::write(&self.path, serialized)
            .with_context(|| format!("Failed to write settings to {}", self.path.display()))
    }
}
