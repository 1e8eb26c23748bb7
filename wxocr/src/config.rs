use serde::Deserialize;
use std::env;

pub const DEFAULT_BASE_URL: &str = "https://api.weixin.qq.com";

pub const API_BANK_CARD: &str = "/cv/ocr/bankcard";
pub const API_ID_CARD: &str = "/cv/ocr/idcard";
/// Shared by driver's license and vehicle license recognition.
pub const API_DRIVING: &str = "/cv/ocr/driving";

/// Fixed description of one OCR endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub path: &'static str,
    /// Whether the endpoint takes a `type` (recognition mode) field.
    pub requires_mode: bool,
}

pub const BANK_CARD: Endpoint = Endpoint {
    path: API_BANK_CARD,
    requires_mode: true,
};

pub const ID_CARD: Endpoint = Endpoint {
    path: API_ID_CARD,
    requires_mode: true,
};

pub const DRIVER_LICENSE: Endpoint = Endpoint {
    path: API_DRIVING,
    requires_mode: false,
};

pub const VEHICLE_LICENSE: Endpoint = Endpoint {
    path: API_DRIVING,
    requires_mode: false,
};

fn parse_env_or<T: std::str::FromStr>(var: &str, default: T) -> T
where
    T::Err: std::fmt::Display,
{
    match env::var(var) {
        Ok(val) => match val.parse() {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Invalid value '{}' for {}: {}. Using default.", val, var, e);
                default
            }
        },
        Err(_) => default,
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    pub ocr: OcrConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OcrConfig {
    pub base_url: String,
    pub access_token: Option<String>,
    pub timeout_secs: u64,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            base_url: env::var("WXOCR_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            access_token: env::var("WXOCR_ACCESS_TOKEN").ok(),
            timeout_secs: parse_env_or("WXOCR_TIMEOUT", 30),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::default()
    }
}
