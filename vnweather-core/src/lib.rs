//! Core library for the `vnweather` app.
//!
//! This crate defines:
//! - City name normalization (Vietnamese aliases and diacritics)
//! - Weather-condition to background-gradient classification
//! - The OpenWeather client and its error kinds
//! - The saved-city list and the storage / confirmation ports it talks through
//! - Screen state for the home and detail views
//!
//! It is used by `vnweather-cli`, but any front-end can drive it through
//! [`WeatherApp`].

pub mod app;
pub mod config;
pub mod confirm;
pub mod detail;
pub mod error;
pub mod format;
pub mod model;
pub mod normalize;
pub mod provider;
pub mod saved;
pub mod storage;
pub mod theme;

pub use app::WeatherApp;
pub use config::Config;
pub use confirm::{AlwaysConfirm, Confirm};
pub use detail::DetailView;
pub use error::{ErrorKind, WeatherError};
pub use model::{CurrentWeather, Forecast, ForecastEntry};
pub use normalize::normalize_city_name;
pub use provider::{WeatherProvider, openweather::OpenWeatherProvider, provider_from_config};
pub use saved::SavedCities;
pub use storage::{CityStore, FileStore, MemoryStore};
pub use theme::{Color, Gradient, Palette, weather_gradient};
