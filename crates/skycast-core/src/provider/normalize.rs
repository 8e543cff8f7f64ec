//! Payload normalization pipeline.
//!
//! Runs once per received payload: condition codes through the normalizer,
//! alerts through the classifier, daily entries through the continuity
//! filler. The output [`WeatherSnapshot`] speaks only the app's closed
//! vocabulary.

use serde::{Deserialize, Serialize};

use super::payload::ForecastPayload;
use crate::alerts::{classify, AlertClassification};
use crate::conditions::{normalize, CanonicalCondition};
use crate::error::ProviderError;
use crate::forecast::{ContinuityFiller, DailyForecast};

/// Hours of hourly forecast carried in a snapshot.
const HOURLY_WINDOW: usize = 24;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// "Name, Region" display string.
    pub location: String,
    pub temperature_c: f64,
    pub condition: CanonicalCondition,
    /// Provider's own description text, kept for display.
    pub description: String,
    /// Provider-local observation timestamp.
    pub observed_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HourlyForecast {
    pub time: String,
    pub temperature_c: f64,
    pub condition: CanonicalCondition,
    pub precipitation_chance: u8,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AirQuality {
    /// US EPA index, 1-6.
    pub aqi: u8,
    pub pm25: f64,
    pub pm10: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifiedAlert {
    pub headline: String,
    #[serde(flatten)]
    pub classification: AlertClassification,
    pub description: String,
    pub expires: String,
}

/// Fully normalized weather payload, ready for the display layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub current: CurrentConditions,
    pub hourly: Vec<HourlyForecast>,
    /// Always exactly the requested window length.
    pub daily: Vec<DailyForecast>,
    pub air_quality: Option<AirQuality>,
    pub uv_index: u8,
    pub alerts: Vec<ClassifiedAlert>,
}

/// Normalize one raw payload into a [`WeatherSnapshot`].
///
/// `window` is the guaranteed daily-forecast length; short provider series
/// are padded by `filler`.
///
/// # Errors
///
/// `ProviderError::EmptyForecast` when the payload carries no forecast
/// days at all.
pub fn normalize_payload(
    payload: &ForecastPayload,
    window: usize,
    filler: &ContinuityFiller,
) -> Result<WeatherSnapshot, ProviderError> {
    let days = &payload.forecast.forecastday;
    if days.is_empty() {
        return Err(ProviderError::EmptyForecast);
    }

    // Next 24 hours: today's remaining hours plus tomorrow's.
    let hourly: Vec<HourlyForecast> = days
        .iter()
        .take(2)
        .flat_map(|d| d.hour.iter())
        .take(HOURLY_WINDOW)
        .map(|h| HourlyForecast {
            time: h.time.clone(),
            temperature_c: h.temp_c,
            condition: normalize(h.condition.code),
            precipitation_chance: h.chance_of_rain,
        })
        .collect();

    let daily_raw: Vec<DailyForecast> = days
        .iter()
        .map(|d| DailyForecast {
            date: d.date,
            condition: normalize(d.day.condition.code),
            high_c: d.day.maxtemp_c,
            low_c: d.day.mintemp_c,
            precipitation_chance: d.day.daily_chance_of_rain,
            synthetic: false,
        })
        .collect();
    let daily = filler
        .ensure_window(daily_raw, window)
        .map_err(|e| ProviderError::Decode(e.to_string()))?;

    let alerts = payload
        .alerts
        .as_ref()
        .map(|a| a.alert.as_slice())
        .unwrap_or_default()
        .iter()
        .map(|raw| ClassifiedAlert {
            headline: raw.headline.clone(),
            classification: classify(&raw.headline, &raw.severity),
            description: raw.description.clone(),
            expires: raw.expires.clone(),
        })
        .collect();

    let location = if payload.location.region.is_empty() {
        payload.location.name.clone()
    } else {
        format!("{}, {}", payload.location.name, payload.location.region)
    };

    Ok(WeatherSnapshot {
        current: CurrentConditions {
            location,
            temperature_c: payload.current.temp_c,
            condition: normalize(payload.current.condition.code),
            description: payload.current.condition.text.clone(),
            observed_at: payload.location.localtime.clone(),
        },
        hourly,
        daily,
        air_quality: payload.current.air_quality.as_ref().map(|aq| AirQuality {
            aqi: aq.us_epa_index,
            pm25: aq.pm2_5,
            pm10: aq.pm10,
        }),
        uv_index: payload.current.uv.round() as u8,
        alerts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alerts::{AlertSeverity, HazardType};
    use crate::provider::payload::*;
    use chrono::NaiveDate;

    fn condition(code: i64, text: &str) -> PayloadCondition {
        PayloadCondition {
            text: text.into(),
            code,
        }
    }

    fn sample_payload(days: usize) -> ForecastPayload {
        let forecastday = (0..days)
            .map(|i| PayloadForecastDay {
                date: NaiveDate::from_ymd_opt(2025, 6, 1 + i as u32).unwrap(),
                day: PayloadDay {
                    maxtemp_c: 20.0 + i as f64,
                    mintemp_c: 11.0,
                    condition: condition(1183, "Light rain"),
                    daily_chance_of_rain: 60,
                    uv: 4.0,
                },
                hour: (0..24)
                    .map(|h| PayloadHour {
                        time: format!("2025-06-0{} {:02}:00", 1 + i, h),
                        temp_c: 15.0,
                        condition: condition(1000, "Sunny"),
                        chance_of_rain: 5,
                    })
                    .collect(),
            })
            .collect();

        ForecastPayload {
            location: PayloadLocation {
                name: "Bergen".into(),
                region: "Vestland".into(),
                country: "Norway".into(),
                localtime: "2025-06-01 12:00".into(),
            },
            current: PayloadCurrent {
                temp_c: 14.2,
                condition: condition(1087, "Thundery outbreaks possible"),
                uv: 3.6,
                humidity: 80.0,
                wind_kph: 12.0,
                air_quality: Some(PayloadAirQuality {
                    pm2_5: 8.3,
                    pm10: 12.1,
                    us_epa_index: 1,
                }),
            },
            forecast: PayloadForecast { forecastday },
            alerts: Some(PayloadAlerts {
                alert: vec![PayloadAlert {
                    headline: "Flash Flood Warning".into(),
                    severity: "Severe".into(),
                    description: "River levels rising".into(),
                    expires: "2025-06-02T00:00:00".into(),
                }],
            }),
        }
    }

    #[test]
    fn full_payload_normalizes() {
        let snapshot =
            normalize_payload(&sample_payload(7), 7, &ContinuityFiller::new()).unwrap();

        assert_eq!(snapshot.current.location, "Bergen, Vestland");
        assert_eq!(snapshot.current.condition, CanonicalCondition::Lightning);
        assert_eq!(snapshot.hourly.len(), 24);
        assert_eq!(snapshot.daily.len(), 7);
        assert!(snapshot.daily.iter().all(|d| !d.synthetic));
        assert_eq!(snapshot.uv_index, 4);

        let aq = snapshot.air_quality.unwrap();
        assert_eq!(aq.aqi, 1);

        assert_eq!(snapshot.alerts.len(), 1);
        assert_eq!(snapshot.alerts[0].classification.hazard, HazardType::Flood);
        assert_eq!(
            snapshot.alerts[0].classification.severity,
            AlertSeverity::Severe
        );
    }

    #[test]
    fn truncated_provider_series_is_padded() {
        let snapshot =
            normalize_payload(&sample_payload(3), 7, &ContinuityFiller::with_seed(9)).unwrap();

        assert_eq!(snapshot.daily.len(), 7);
        assert!(snapshot.daily[..3].iter().all(|d| !d.synthetic));
        assert!(snapshot.daily[3..].iter().all(|d| d.synthetic));
        // Synthetic days carry the last real day's condition.
        assert!(snapshot.daily[3..]
            .iter()
            .all(|d| d.condition == CanonicalCondition::Rainy));
    }

    #[test]
    fn missing_alerts_block_yields_empty_list() {
        let mut payload = sample_payload(7);
        payload.alerts = None;
        let snapshot = normalize_payload(&payload, 7, &ContinuityFiller::new()).unwrap();
        assert!(snapshot.alerts.is_empty());
    }

    #[test]
    fn empty_forecast_is_a_provider_error() {
        let mut payload = sample_payload(1);
        payload.forecast.forecastday.clear();
        let err = normalize_payload(&payload, 7, &ContinuityFiller::new()).unwrap_err();
        assert!(matches!(err, ProviderError::EmptyForecast));
    }
}
