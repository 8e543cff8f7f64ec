//! Weather provider collaborator: raw payload model, HTTP client, and the
//! normalization pipeline that turns one payload into app vocabulary.

mod client;
mod normalize;
pub mod payload;

pub use client::WeatherApiClient;
pub use normalize::{
    normalize_payload, AirQuality, ClassifiedAlert, CurrentConditions, HourlyForecast,
    WeatherSnapshot,
};
pub use payload::ForecastPayload;
