//! WeatherAPI HTTP client.

use reqwest::Client;
use url::Url;

use super::payload::ForecastPayload;
use crate::error::{CoreError, ProviderError};
use crate::storage::Config;

/// Thin client for the WeatherAPI `forecast.json` endpoint.
pub struct WeatherApiClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl WeatherApiClient {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Build from the `[provider]` config section.
    ///
    /// # Errors
    ///
    /// `ProviderError::ApiKeyMissing` when no API key is configured.
    pub fn from_config(config: &Config) -> Result<Self, CoreError> {
        let api_key = config
            .provider
            .api_key
            .clone()
            .ok_or(ProviderError::ApiKeyMissing)?;
        Ok(Self::new(api_key, config.provider.base_url.clone()))
    }

    /// Fetch a forecast for `query` -- a location name or a
    /// `"lat,lon"` coordinate pair -- covering `days` days, with air
    /// quality and alerts included.
    ///
    /// # Errors
    ///
    /// Transport failures, non-success HTTP statuses and undecodable
    /// bodies all map to [`ProviderError`].
    pub async fn fetch_forecast(
        &self,
        query: &str,
        days: u8,
    ) -> Result<ForecastPayload, ProviderError> {
        let url = self.forecast_url(query, days)?;
        let resp = self.client.get(url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ProviderError::Status {
                status: status.as_u16(),
            });
        }

        resp.json::<ForecastPayload>()
            .await
            .map_err(|e| ProviderError::Decode(e.to_string()))
    }

    fn forecast_url(&self, query: &str, days: u8) -> Result<Url, ProviderError> {
        let endpoint = format!("{}/forecast.json", self.base_url.trim_end_matches('/'));
        Url::parse_with_params(
            &endpoint,
            &[
                ("key", self.api_key.as_str()),
                ("q", query),
                ("days", &days.to_string()),
                ("aqi", "yes"),
                ("alerts", "yes"),
            ],
        )
        .map_err(|e| ProviderError::Decode(format!("invalid provider URL: {e}")))
    }
}

impl std::fmt::Debug for WeatherApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Key deliberately omitted.
        f.debug_struct("WeatherApiClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forecast_url_carries_query_parameters() {
        let client = WeatherApiClient::new("test-key", "https://api.weatherapi.com/v1/");
        let url = client.forecast_url("Oslo", 7).unwrap();
        assert_eq!(url.path(), "/v1/forecast.json");
        let pairs: Vec<_> = url.query_pairs().collect();
        assert!(pairs.iter().any(|(k, v)| k == "key" && v == "test-key"));
        assert!(pairs.iter().any(|(k, v)| k == "q" && v == "Oslo"));
        assert!(pairs.iter().any(|(k, v)| k == "days" && v == "7"));
        assert!(pairs.iter().any(|(k, v)| k == "aqi" && v == "yes"));
        assert!(pairs.iter().any(|(k, v)| k == "alerts" && v == "yes"));
    }

    #[test]
    fn coordinates_are_a_valid_query() {
        let client = WeatherApiClient::new("k", "https://api.weatherapi.com/v1");
        let url = client.forecast_url("59.91,10.75", 3).unwrap();
        assert!(url
            .query_pairs()
            .any(|(k, v)| k == "q" && v == "59.91,10.75"));
    }

    #[test]
    fn from_config_requires_api_key() {
        let config = Config::default();
        let err = WeatherApiClient::from_config(&config).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Provider(ProviderError::ApiKeyMissing)
        ));
    }
}
