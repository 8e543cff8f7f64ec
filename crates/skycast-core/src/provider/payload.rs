//! Raw WeatherAPI forecast payload.
//!
//! Mirrors the subset of the `forecast.json` response the app consumes.
//! Nothing in here is stored or displayed directly -- the payload exists
//! only long enough to be normalized into the app vocabulary.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastPayload {
    pub location: PayloadLocation,
    pub current: PayloadCurrent,
    pub forecast: PayloadForecast,
    #[serde(default)]
    pub alerts: Option<PayloadAlerts>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayloadLocation {
    pub name: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub country: String,
    /// Provider-local timestamp, e.g. "2025-06-01 14:30".
    #[serde(default)]
    pub localtime: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayloadCurrent {
    pub temp_c: f64,
    pub condition: PayloadCondition,
    #[serde(default)]
    pub uv: f64,
    #[serde(default)]
    pub humidity: f64,
    #[serde(default)]
    pub wind_kph: f64,
    #[serde(default)]
    pub air_quality: Option<PayloadAirQuality>,
}

/// Provider condition representation: numeric code plus free text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayloadCondition {
    #[serde(default)]
    pub text: String,
    pub code: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayloadAirQuality {
    #[serde(default)]
    pub pm2_5: f64,
    #[serde(default)]
    pub pm10: f64,
    /// US EPA index, 1 (good) to 6 (hazardous).
    #[serde(rename = "us-epa-index", default)]
    pub us_epa_index: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayloadForecast {
    #[serde(default)]
    pub forecastday: Vec<PayloadForecastDay>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayloadForecastDay {
    pub date: NaiveDate,
    pub day: PayloadDay,
    #[serde(default)]
    pub hour: Vec<PayloadHour>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayloadDay {
    pub maxtemp_c: f64,
    pub mintemp_c: f64,
    pub condition: PayloadCondition,
    #[serde(default)]
    pub daily_chance_of_rain: u8,
    #[serde(default)]
    pub uv: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayloadHour {
    /// Provider-local timestamp, e.g. "2025-06-01 13:00".
    pub time: String,
    pub temp_c: f64,
    pub condition: PayloadCondition,
    #[serde(default)]
    pub chance_of_rain: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayloadAlerts {
    #[serde(default)]
    pub alert: Vec<PayloadAlert>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayloadAlert {
    #[serde(default)]
    pub headline: String,
    #[serde(default)]
    pub severity: String,
    #[serde(rename = "desc", default)]
    pub description: String,
    #[serde(default)]
    pub expires: String,
}
