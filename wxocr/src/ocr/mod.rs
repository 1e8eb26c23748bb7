//! OCR recognition for card and license images.
//!
//! Every recognition call submits one image to a fixed `cv/ocr` endpoint and
//! decodes the JSON reply into a typed document.
//!
//! # Submission modes
//!
//! - by URL: form-encoded POST carrying `access_token` and `img_url`
//! - by file: multipart POST carrying `access_token` and an `img` file part
//!
//! Bank-card and ID-card endpoints additionally take a `type` field
//! ([`RecognizeMode`]); the driving endpoint rejects it.
//!
//! # Errors
//!
//! A reply with a non-zero `errcode` is an [`OcrError::Api`](crate::error::OcrError::Api)
//! even when the HTTP status is 200.
//!
//! # Usage
//!
//! ```rust,ignore
//! let client = OcrClient::new(reqwest::Client::new(), "https://api.weixin.qq.com")?;
//! let card = client
//!     .bank_card_by_url(&token, "https://example.com/card.jpg", RecognizeMode::Photo)
//!     .await?;
//! ```

mod api;
mod decode;
mod request;
mod types;

pub use api::{
    bank_card_by_file, bank_card_by_url, driver_license_by_file, driver_license_by_url,
    id_card_by_file, id_card_by_url, recognize, vehicle_license_by_file, vehicle_license_by_url,
    ImageSource, OcrClient,
};
pub use decode::decode_response;
pub use request::{submit_file, submit_url};
pub use types::{
    ApiStatus, BankCard, DriverLicense, IdCard, IdCardSide, RecognizeMode, VehicleLicense,
};
