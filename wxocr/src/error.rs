use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OcrError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("OCR API returned HTTP {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Failed to read image file {}: {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode OCR response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("OCR API error {code}: {message}")]
    Api { code: i64, message: String },

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl OcrError {
    /// True for failures on the way to or from the server, before any body
    /// was decoded.
    pub fn is_transport(&self) -> bool {
        matches!(self, OcrError::Http(_) | OcrError::Status { .. })
    }

    /// The remote `errcode` when the server reported a business failure.
    pub fn api_code(&self) -> Option<i64> {
        match self {
            OcrError::Api { code, .. } => Some(*code),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, OcrError>;
