//! Background gradients keyed to the weather condition and day/night state.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Build a color from a `0xRRGGBB` literal.
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Ordered gradient stops, top to bottom.
pub type Palette = [Color; 3];

const CLEAR: Palette = [
    Color::from_hex(0xFF9F1C),
    Color::from_hex(0xFF6F00),
    Color::from_hex(0x9B2226),
];
const CLOUDS: Palette = [
    Color::from_hex(0x5F0F40),
    Color::from_hex(0x310A31),
    Color::from_hex(0x1B0F1E),
];
const RAIN: Palette = [
    Color::from_hex(0x3A0F7D),
    Color::from_hex(0x240046),
    Color::from_hex(0x10002B),
];
const THUNDERSTORM: Palette = [
    Color::from_hex(0x240046),
    Color::from_hex(0x3C096C),
    Color::from_hex(0x10002B),
];
const SNOW: Palette = [
    Color::from_hex(0xF8EDEB),
    Color::from_hex(0xEDEDE9),
    Color::from_hex(0xF8EDEB),
];
const MIST: Palette = [
    Color::from_hex(0x6D597A),
    Color::from_hex(0x355070),
    Color::from_hex(0x6D597A),
];
const NIGHT: Palette = [
    Color::from_hex(0x0B090A),
    Color::from_hex(0x161A1D),
    Color::from_hex(0x2B2D42),
];
const DEFAULT: Palette = [
    Color::from_hex(0x2B1D3A),
    Color::from_hex(0x3B2558),
    Color::from_hex(0xFF9F1C),
];

/// The eight background states the UI can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gradient {
    Clear,
    Clouds,
    Rain,
    Thunderstorm,
    Snow,
    Mist,
    Night,
    Default,
}

impl Gradient {
    /// Pick the gradient for an OpenWeather `weather[0].main` keyword.
    ///
    /// Night always wins. Otherwise the keyword is matched case-insensitively;
    /// anything unrecognized falls back to [`Gradient::Default`].
    pub fn classify(condition: &str, is_night: bool) -> Self {
        if is_night {
            return Self::Night;
        }

        match condition.to_lowercase().as_str() {
            "clear" => Self::Clear,
            "clouds" => Self::Clouds,
            "rain" | "drizzle" => Self::Rain,
            "thunderstorm" => Self::Thunderstorm,
            "snow" => Self::Snow,
            "mist" | "fog" | "haze" | "smoke" | "dust" | "sand" | "ash" | "squall"
            | "tornado" => Self::Mist,
            _ => Self::Default,
        }
    }

    pub const fn palette(self) -> Palette {
        match self {
            Self::Clear => CLEAR,
            Self::Clouds => CLOUDS,
            Self::Rain => RAIN,
            Self::Thunderstorm => THUNDERSTORM,
            Self::Snow => SNOW,
            Self::Mist => MIST,
            Self::Night => NIGHT,
            Self::Default => DEFAULT,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Clear => "clear",
            Self::Clouds => "clouds",
            Self::Rain => "rain",
            Self::Thunderstorm => "thunderstorm",
            Self::Snow => "snow",
            Self::Mist => "mist",
            Self::Night => "night",
            Self::Default => "default",
        }
    }
}

impl fmt::Display for Gradient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Shorthand for `Gradient::classify(condition, is_night).palette()`.
pub fn weather_gradient(condition: &str, is_night: bool) -> Palette {
    Gradient::classify(condition, is_night).palette()
}

/// Whether `now` lies outside `[sunrise, sunset]`, all in Unix seconds.
///
/// The bounds are the target city's, so this reports the city's own day/night
/// regardless of where the viewer is.
pub fn is_night(now: i64, sunrise: i64, sunset: i64) -> bool {
    now < sunrise || now > sunset
}
