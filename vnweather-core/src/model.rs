//! OpenWeather payload shapes.
//!
//! The same structs double as the persisted form of the saved-city list, so
//! they serialize back to the JSON shape the API returned.

use serde::{Deserialize, Serialize};

use crate::theme::{self, Gradient};

/// Number of 3-hour forecast slots per day.
const SLOTS_PER_DAY: usize = 8;
/// Slot index within a day that stands in for midday.
const MIDDAY_SLOT: usize = 4;
/// Days shown in the forecast strip.
pub const FORECAST_DAYS: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    /// Group keyword, e.g. "Rain" or "Clear".
    pub main: String,
    pub description: String,
    /// Icon code such as "10d" or "01n".
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MainReadings {
    pub temp: f64,
    pub feels_like: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub humidity: u8,
    pub pressure: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Sys {
    #[serde(default)]
    pub country: Option<String>,
    pub sunrise: i64,
    pub sunset: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Wind {
    pub speed: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Clouds {
    pub all: u8,
}

/// Current conditions for one city, as returned by `/weather`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    /// Stable OpenWeather city id.
    pub id: u64,
    pub name: String,
    pub sys: Sys,
    pub main: MainReadings,
    pub weather: Vec<Condition>,
    #[serde(default)]
    pub wind: Wind,
    /// Meters.
    #[serde(default)]
    pub visibility: u32,
    #[serde(default)]
    pub clouds: Clouds,
    /// Offset from UTC in seconds.
    #[serde(default)]
    pub timezone: i64,
}

impl CurrentWeather {
    /// The dominant condition, `weather[0]`.
    pub fn condition(&self) -> Option<&Condition> {
        self.weather.first()
    }

    pub fn is_night_at(&self, now: i64) -> bool {
        theme::is_night(now, self.sys.sunrise, self.sys.sunset)
    }

    pub fn gradient_at(&self, now: i64) -> Gradient {
        let keyword = self.condition().map(|c| c.main.as_str()).unwrap_or_default();
        Gradient::classify(keyword, self.is_night_at(now))
    }
}

/// One 3-hour slot from `/forecast`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    pub dt: i64,
    /// UTC time as "YYYY-MM-DD HH:MM:SS".
    pub dt_txt: String,
    pub main: MainReadings,
    pub weather: Vec<Condition>,
}

impl ForecastEntry {
    pub fn condition(&self) -> Option<&Condition> {
        self.weather.first()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastCity {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub country: Option<String>,
}

/// Body of `/forecast`: five days of 3-hour slots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    pub list: Vec<ForecastEntry>,
    #[serde(default)]
    pub city: Option<ForecastCity>,
}

impl Forecast {
    pub fn daily(&self) -> Vec<ForecastEntry> {
        daily_forecast(&self.list)
    }
}

/// Reduce 3-hour slots to one entry per day, nearest midday, at most five days.
pub fn daily_forecast(entries: &[ForecastEntry]) -> Vec<ForecastEntry> {
    entries
        .iter()
        .skip(MIDDAY_SLOT)
        .step_by(SLOTS_PER_DAY)
        .take(FORECAST_DAYS)
        .cloned()
        .collect()
}

/// Error body OpenWeather sends with non-2xx responses.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
