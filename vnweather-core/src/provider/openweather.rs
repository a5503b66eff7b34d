use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::{
    error::WeatherError,
    model::{CurrentWeather, Forecast},
    normalize::normalize_city_name,
};

use super::WeatherProvider;

/// Units are always metric; the UI shows °C and m/s.
const UNITS: &str = "metric";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn with_base_url(api_key: String, base_url: &str) -> Self {
        Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// `GET {base_url}/{endpoint}?q=..&units=metric&appid=..` and decode the body.
    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        city: &str,
    ) -> Result<T, WeatherError> {
        let query = normalize_city_name(city);
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!(%url, city = %query, "sending OpenWeather request");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("q", &*query),
                ("units", UNITS),
                ("appid", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            debug!(%status, body = %truncate_body(&body), "OpenWeather request failed");
            return Err(WeatherError::from_status(status, &body));
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    #[instrument(skip(self), level = "debug")]
    async fn current_weather(&self, city: &str) -> Result<CurrentWeather, WeatherError> {
        self.get_json("weather", city).await
    }

    #[instrument(skip(self), level = "debug")]
    async fn forecast(&self, city: &str) -> Result<Forecast, WeatherError> {
        self.get_json("forecast", city).await
    }
}

fn truncate_body(body: &str) -> &str {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}
