use std::path::Path;

use reqwest::{multipart, Client, Response};
use tracing::debug;

use crate::error::{OcrError, Result};

use super::types::RecognizeMode;

fn require_non_empty(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(OcrError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// POST `access_token`, `img_url` and optionally `type` as a urlencoded form.
pub async fn submit_url(
    client: &Client,
    api: &str,
    access_token: &str,
    img_url: &str,
    mode: Option<RecognizeMode>,
) -> Result<Vec<u8>> {
    require_non_empty("endpoint", api)?;
    require_non_empty("access_token", access_token)?;
    require_non_empty("img_url", img_url)?;

    let mut params = vec![("access_token", access_token), ("img_url", img_url)];
    if let Some(mode) = mode {
        params.push(("type", mode.as_str()));
    }

    debug!(api, ?mode, "Submitting image by URL");

    let response = client.post(api).form(&params).send().await?;
    read_body(response).await
}

/// Upload a local image as the `img` part of a multipart form, alongside
/// `access_token` and optionally `type`.
pub async fn submit_file(
    client: &Client,
    api: &str,
    access_token: &str,
    path: &Path,
    mode: Option<RecognizeMode>,
) -> Result<Vec<u8>> {
    require_non_empty("endpoint", api)?;
    require_non_empty("access_token", access_token)?;

    let image_bytes = tokio::fs::read(path).await.map_err(|source| OcrError::File {
        path: path.to_path_buf(),
        source,
    })?;

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());
    let mime_type = mime_guess::from_path(path).first_or_octet_stream();

    let file_part = multipart::Part::bytes(image_bytes)
        .file_name(file_name)
        .mime_str(mime_type.as_ref())?;

    let mut form = multipart::Form::new().text("access_token", access_token.to_string());
    if let Some(mode) = mode {
        form = form.text("type", mode.as_str());
    }
    let form = form.part("img", file_part);

    debug!(api, ?mode, path = %path.display(), "Submitting image by file");

    let response = client.post(api).multipart(form).send().await?;
    read_body(response).await
}

async fn read_body(response: Response) -> Result<Vec<u8>> {
    let status = response.status();
    debug!("OCR response status: {}", status);

    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read error response".to_string());
        return Err(OcrError::Status { status, body });
    }

    Ok(response.bytes().await?.to_vec())
}
