//! View model for the city detail screen.

use serde::Serialize;

use crate::{
    format::{capitalize_first, day_of_week, format_time, icon_url, round_temp},
    model::{CurrentWeather, ForecastEntry, daily_forecast},
    theme::{Gradient, Palette},
};

/// One labelled cell in the details grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailItem {
    pub label: &'static str,
    pub value: String,
}

/// One day in the forecast strip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastDay {
    pub dt: i64,
    pub day: String,
    pub icon_url: Option<String>,
    pub temperature: i64,
}

impl ForecastDay {
    fn from_entry(entry: &ForecastEntry) -> Self {
        Self {
            dt: entry.dt,
            day: day_of_week(&entry.dt_txt)
                .map(str::to_string)
                .unwrap_or_else(|| entry.dt_txt.clone()),
            icon_url: entry.condition().map(|c| icon_url(&c.icon)),
            temperature: round_temp(entry.main.temp),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailView {
    pub city_id: u64,
    pub city: String,
    pub country: Option<String>,
    pub temperature: i64,
    pub description: String,
    pub high: i64,
    pub low: i64,
    pub icon_url: Option<String>,
    pub is_night: bool,
    pub gradient: Gradient,
    pub sunrise: String,
    pub sunset: String,
    pub details: Vec<DetailItem>,
    pub forecast: Vec<ForecastDay>,
}

impl DetailView {
    /// Build the screen for `weather` as seen at `now` (Unix seconds).
    ///
    /// `forecast` is the raw 3-hour list; it is reduced to one slot per day
    /// here. Pass an empty slice when the forecast could not be loaded.
    pub fn build(weather: &CurrentWeather, forecast: &[ForecastEntry], now: i64) -> Self {
        let condition = weather.condition();
        let is_night = weather.is_night_at(now);

        Self {
            city_id: weather.id,
            city: weather.name.clone(),
            country: weather.sys.country.clone(),
            temperature: round_temp(weather.main.temp),
            description: condition
                .map(|c| capitalize_first(&c.description))
                .unwrap_or_default(),
            high: round_temp(weather.main.temp_max),
            low: round_temp(weather.main.temp_min),
            icon_url: condition.map(|c| icon_url(&c.icon)),
            is_night,
            gradient: weather.gradient_at(now),
            sunrise: format_time(weather.sys.sunrise, weather.timezone),
            sunset: format_time(weather.sys.sunset, weather.timezone),
            details: details_grid(weather),
            forecast: daily_forecast(forecast)
                .iter()
                .map(ForecastDay::from_entry)
                .collect(),
        }
    }

    pub fn palette(&self) -> Palette {
        self.gradient.palette()
    }
}

fn details_grid(weather: &CurrentWeather) -> Vec<DetailItem> {
    let item = |label: &'static str, value: String| DetailItem { label, value };
    vec![
        item("Cảm giác như", format!("{}°C", round_temp(weather.main.feels_like))),
        item("Độ ẩm", format!("{}%", weather.main.humidity)),
        item("Gió", format!("{} m/s", weather.wind.speed)),
        item("Áp suất", format!("{} hPa", weather.main.pressure)),
        item("Tầm nhìn", visibility_km(weather.visibility)),
        item("Mây", format!("{}%", weather.clouds.all)),
    ]
}

/// Metres as kilometres with one decimal, halves rounded up.
fn visibility_km(metres: u32) -> String {
    let tenths = (u64::from(metres) + 50) / 100;
    format!("{}.{} km", tenths / 10, tenths % 10)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::{current, forecast_entries};
    use crate::theme::weather_gradient;

    // Between the fixture's sunrise and sunset.
    const DAYTIME: i64 = 1_700_020_000;

    #[test]
    fn header_values_are_rounded_and_capitalized() {
        let view = DetailView::build(&current(1581130, "Hanoi"), &[], DAYTIME);

        assert_eq!(view.city, "Hanoi");
        assert_eq!(view.country.as_deref(), Some("VN"));
        assert_eq!(view.temperature, 28);
        assert_eq!(view.high, 31);
        assert_eq!(view.low, 26);
        assert_eq!(view.description, "Mưa nhẹ");
        assert_eq!(
            view.icon_url.as_deref(),
            Some("https://openweathermap.org/img/wn/10d@4x.png")
        );
        assert!(view.forecast.is_empty());
    }

    #[test]
    fn gradient_follows_condition_by_day_and_night_at_night() {
        let weather = current(1, "Hanoi");

        let day = DetailView::build(&weather, &[], DAYTIME);
        assert!(!day.is_night);
        assert_eq!(day.gradient, Gradient::Rain);
        assert_eq!(day.palette(), weather_gradient("rain", false));

        let night = DetailView::build(&weather, &[], weather.sys.sunset + 1);
        assert!(night.is_night);
        assert_eq!(night.gradient, Gradient::Night);
    }

    #[test]
    fn details_grid_formats_units() {
        let view = DetailView::build(&current(1, "Hanoi"), &[], DAYTIME);
        let values: Vec<(&str, &str)> = view
            .details
            .iter()
            .map(|d| (d.label, d.value.as_str()))
            .collect();

        assert_eq!(
            values,
            [
                ("Cảm giác như", "31°C"),
                ("Độ ẩm", "78%"),
                ("Gió", "3.5 m/s"),
                ("Áp suất", "1009 hPa"),
                ("Tầm nhìn", "8.0 km"),
                ("Mây", "75%"),
            ]
        );
    }

    #[test]
    fn visibility_rounds_half_tenths_up() {
        let mut weather = current(1, "Hanoi");
        weather.visibility = 1250;
        let view = DetailView::build(&weather, &[], DAYTIME);
        assert_eq!(view.details[4].value, "1.3 km");

        assert_eq!(visibility_km(250), "0.3 km");
        assert_eq!(visibility_km(1249), "1.2 km");
        assert_eq!(visibility_km(10_000), "10.0 km");
        assert_eq!(visibility_km(0), "0.0 km");
    }

    #[test]
    fn sun_times_use_city_offset() {
        let view = DetailView::build(&current(1, "Hanoi"), &[], DAYTIME);
        // 1_700_000_000 is 22:13 UTC, 05:13 at UTC+7.
        assert_eq!(view.sunrise, "05:13");
        assert_eq!(view.sunset, "17:10");
    }

    #[test]
    fn forecast_strip_has_one_day_each() {
        let view = DetailView::build(&current(1, "Hanoi"), &forecast_entries(5), DAYTIME);

        let days: Vec<&str> = view.forecast.iter().map(|d| d.day.as_str()).collect();
        assert_eq!(days, ["T2", "T3", "T4", "T5", "T6"]);
        assert_eq!(view.forecast[0].temperature, 4);
        assert_eq!(
            view.forecast[0].icon_url.as_deref(),
            Some("https://openweathermap.org/img/wn/03d@4x.png")
        );
    }
}
