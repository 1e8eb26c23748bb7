use serde::de::DeserializeOwned;
use tracing::warn;

use crate::error::{OcrError, Result};

use super::types::ApiStatus;

/// Decode a response body into `T`, surfacing a non-zero `errcode` as
/// [`OcrError::Api`] before the document fields are looked at.
pub fn decode_response<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    let status: ApiStatus = serde_json::from_slice(body)?;

    if !status.is_ok() {
        warn!(
            errcode = status.errcode,
            errmsg = %status.errmsg,
            "OCR API reported a failure"
        );
        return Err(OcrError::Api {
            code: status.errcode,
            message: status.errmsg,
        });
    }

    Ok(serde_json::from_slice(body)?)
}
