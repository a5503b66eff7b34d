//! Errors surfaced by weather lookups.

use reqwest::StatusCode;
use thiserror::Error;

use crate::model::ApiErrorBody;

pub const MSG_NOT_FOUND: &str = "Không tìm thấy thành phố. Vui lòng kiểm tra lại tên.";
pub const MSG_NETWORK: &str = "Không có kết nối Internet. Vui lòng kiểm tra mạng.";
pub const MSG_API_FALLBACK: &str = "Đã xảy ra lỗi khi lấy dữ liệu thời tiết.";
pub const MSG_UNKNOWN: &str = "Đã xảy ra lỗi. Vui lòng thử lại sau.";

/// A failed lookup. Every variant is terminal for its request; nothing retries.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WeatherError {
    #[error("city not found")]
    NotFound,

    #[error("network unavailable: {0}")]
    NetworkUnavailable(String),

    #[error("API error ({status}): {}", .message.as_deref().unwrap_or("no message"))]
    Api {
        status: u16,
        message: Option<String>,
    },

    #[error("unexpected error: {0}")]
    Unknown(String),
}

/// How the UI groups errors for its icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    NotFound,
    General,
}

impl ErrorKind {
    pub fn icon_name(&self) -> &'static str {
        match self {
            Self::Network => "wifi_off",
            Self::NotFound => "map_pin_off",
            Self::General => "alert_circle",
        }
    }
}

impl WeatherError {
    /// Classify a non-2xx response. `body` is the raw response text.
    pub fn from_status(status: StatusCode, body: &str) -> Self {
        if status == StatusCode::NOT_FOUND {
            return Self::NotFound;
        }

        let message = serde_json::from_str::<ApiErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.trim().is_empty());

        Self::Api {
            status: status.as_u16(),
            message,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NetworkUnavailable(_) => ErrorKind::Network,
            Self::NotFound => ErrorKind::NotFound,
            Self::Api { .. } | Self::Unknown(_) => ErrorKind::General,
        }
    }

    /// Fixed Vietnamese text shown to the user.
    pub fn user_message(&self) -> String {
        match self {
            Self::NotFound => MSG_NOT_FOUND.to_string(),
            Self::NetworkUnavailable(_) => MSG_NETWORK.to_string(),
            Self::Api {
                message: Some(msg), ..
            } => msg.clone(),
            Self::Api { message: None, .. } => MSG_API_FALLBACK.to_string(),
            Self::Unknown(_) => MSG_UNKNOWN.to_string(),
        }
    }
}

impl From<reqwest::Error> for WeatherError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() {
            Self::NetworkUnavailable(err.to_string())
        } else {
            Self::Unknown(err.to_string())
        }
    }
}

impl From<serde_json::Error> for WeatherError {
    fn from(err: serde_json::Error) -> Self {
        Self::Unknown(format!("malformed response: {err}"))
    }
}
