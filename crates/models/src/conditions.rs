//! Value types returned by the simulated weather, air-quality and activity endpoints.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherForecast {
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub temperature_c: i32,
    pub temperature_f: i32,
    pub summary: String,
}

/// Fahrenheit conversion used across the API, truncating toward zero.
pub fn celsius_to_fahrenheit(c: i32) -> i32 {
    32 + (c as f64 / 0.5556) as i32
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AqiCategory {
    Good,
    Moderate,
    #[serde(rename = "Unhealthy for Sensitive Groups")]
    UnhealthyForSensitiveGroups,
    Unhealthy,
    #[serde(rename = "Very Unhealthy")]
    VeryUnhealthy,
    Hazardous,
}

impl AqiCategory {
    /// US EPA bands.
    pub fn from_aqi(aqi: u16) -> Self {
        match aqi {
            0..=50 => Self::Good,
            51..=100 => Self::Moderate,
            101..=150 => Self::UnhealthyForSensitiveGroups,
            151..=200 => Self::Unhealthy,
            201..=300 => Self::VeryUnhealthy,
            _ => Self::Hazardous,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pollutant {
    Pm25,
    Pm10,
    O3,
    No2,
}

/// Concentrations: PM in µg/m³, gases in ppb.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PollutantLevels {
    pub pm25: f64,
    pub pm10: f64,
    pub o3: f64,
    pub no2: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AirQualityReport {
    pub location: String,
    pub aqi: u16,
    pub category: AqiCategory,
    pub dominant_pollutant: Pollutant,
    pub pollutants: PollutantLevels,
    pub measured_at: DateTime<Utc>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Setting {
    Indoor,
    Outdoor,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Low,
    Moderate,
    High,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub name: String,
    pub setting: Setting,
    pub intensity: Intensity,
}

impl Activity {
    pub fn new(name: &str, setting: Setting, intensity: Intensity) -> Self {
        Self { name: name.to_string(), setting, intensity }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conditions {
    pub temperature_c: i32,
    pub snow_depth_cm: i32,
    pub aqi: u16,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityRecommendation {
    pub conditions: Conditions,
    pub activities: Vec<Activity>,
}
