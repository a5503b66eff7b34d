use crate::{
    Config, CurrentWeather, Forecast, WeatherError, provider::openweather::OpenWeatherProvider,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// Source of weather data for a free-text city query.
///
/// One call is one request: implementations do not cache, retry or
/// de-duplicate.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Current conditions for `city`.
    async fn current_weather(&self, city: &str) -> Result<CurrentWeather, WeatherError>;

    /// Five days of 3-hour forecast slots for `city`.
    async fn forecast(&self, city: &str) -> Result<Forecast, WeatherError>;
}

/// Construct the OpenWeather provider from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let api_key = config.api_key()?;
    let provider = OpenWeatherProvider::with_base_url(api_key.to_owned(), config.base_url());
    Ok(Box::new(provider))
}
