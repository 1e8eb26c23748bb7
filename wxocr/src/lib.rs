pub mod config;
pub mod error;
pub mod ocr;

pub use error::{OcrError, Result};
pub use ocr::{
    BankCard, DriverLicense, IdCard, IdCardSide, ImageSource, OcrClient, RecognizeMode,
    VehicleLicense,
};
