use std::path::Path;
use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::{self, Endpoint, OcrConfig};
use crate::error::{OcrError, Result};

use super::decode::decode_response;
use super::request::{submit_file, submit_url};
use super::types::{BankCard, DriverLicense, IdCard, RecognizeMode, VehicleLicense};

/// Where the image bytes come from.
#[derive(Debug, Clone, Copy)]
pub enum ImageSource<'a> {
    /// Remote location the backend fetches itself.
    Url(&'a str),
    /// Local file uploaded as multipart.
    File(&'a Path),
}

fn check_mode(endpoint: Endpoint, mode: Option<RecognizeMode>) -> Result<()> {
    match (endpoint.requires_mode, mode) {
        (true, None) => Err(OcrError::Validation(format!(
            "{} requires a recognize mode",
            endpoint.path
        ))),
        (false, Some(mode)) => Err(OcrError::Validation(format!(
            "{} does not accept a recognize mode (got {mode})",
            endpoint.path
        ))),
        _ => Ok(()),
    }
}

/// Submit an image to `api` and decode the reply into `T`.
pub async fn recognize<T: DeserializeOwned>(
    client: &Client,
    api: &str,
    endpoint: Endpoint,
    access_token: &str,
    source: ImageSource<'_>,
    mode: Option<RecognizeMode>,
) -> Result<T> {
    check_mode(endpoint, mode)?;

    let body = match source {
        ImageSource::Url(img_url) => submit_url(client, api, access_token, img_url, mode).await?,
        ImageSource::File(path) => submit_file(client, api, access_token, path, mode).await?,
    };

    decode_response(&body)
}

pub async fn bank_card_by_url(
    client: &Client,
    api: &str,
    access_token: &str,
    img_url: &str,
    mode: RecognizeMode,
) -> Result<BankCard> {
    recognize(
        client,
        api,
        config::BANK_CARD,
        access_token,
        ImageSource::Url(img_url),
        Some(mode),
    )
    .await
}

pub async fn bank_card_by_file(
    client: &Client,
    api: &str,
    access_token: &str,
    path: impl AsRef<Path>,
    mode: RecognizeMode,
) -> Result<BankCard> {
    recognize(
        client,
        api,
        config::BANK_CARD,
        access_token,
        ImageSource::File(path.as_ref()),
        Some(mode),
    )
    .await
}

pub async fn id_card_by_url(
    client: &Client,
    api: &str,
    access_token: &str,
    img_url: &str,
    mode: RecognizeMode,
) -> Result<IdCard> {
    recognize(
        client,
        api,
        config::ID_CARD,
        access_token,
        ImageSource::Url(img_url),
        Some(mode),
    )
    .await
}

pub async fn id_card_by_file(
    client: &Client,
    api: &str,
    access_token: &str,
    path: impl AsRef<Path>,
    mode: RecognizeMode,
) -> Result<IdCard> {
    recognize(
        client,
        api,
        config::ID_CARD,
        access_token,
        ImageSource::File(path.as_ref()),
        Some(mode),
    )
    .await
}

pub async fn driver_license_by_url(
    client: &Client,
    api: &str,
    access_token: &str,
    img_url: &str,
) -> Result<DriverLicense> {
    recognize(
        client,
        api,
        config::DRIVER_LICENSE,
        access_token,
        ImageSource::Url(img_url),
        None,
    )
    .await
}

pub async fn driver_license_by_file(
    client: &Client,
    api: &str,
    access_token: &str,
    path: impl AsRef<Path>,
) -> Result<DriverLicense> {
    recognize(
        client,
        api,
        config::DRIVER_LICENSE,
        access_token,
        ImageSource::File(path.as_ref()),
        None,
    )
    .await
}

pub async fn vehicle_license_by_url(
    client: &Client,
    api: &str,
    access_token: &str,
    img_url: &str,
) -> Result<VehicleLicense> {
    recognize(
        client,
        api,
        config::VEHICLE_LICENSE,
        access_token,
        ImageSource::Url(img_url),
        None,
    )
    .await
}

pub async fn vehicle_license_by_file(
    client: &Client,
    api: &str,
    access_token: &str,
    path: impl AsRef<Path>,
) -> Result<VehicleLicense> {
    recognize(
        client,
        api,
        config::VEHICLE_LICENSE,
        access_token,
        ImageSource::File(path.as_ref()),
        None,
    )
    .await
}

/// HTTP client bound to an API host. Cheap to clone; clones share the
/// connection pool.
#[derive(Clone, Debug)]
pub struct OcrClient {
    client: Client,
    base_url: Url,
}

impl OcrClient {
    pub fn new(client: Client, base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url.trim_end_matches('/'))?;
        Ok(Self { client, base_url })
    }

    /// Build a client whose transport uses the configured timeout.
    pub fn from_config(config: &OcrConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Self::new(client, &config.base_url)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // Appended rather than joined so a path prefix on the base URL survives.
    fn endpoint_url(&self, endpoint: Endpoint) -> String {
        format!(
            "{}{}",
            self.base_url.as_str().trim_end_matches('/'),
            endpoint.path
        )
    }

    pub async fn bank_card_by_url(
        &self,
        access_token: &str,
        img_url: &str,
        mode: RecognizeMode,
    ) -> Result<BankCard> {
        let api = self.endpoint_url(config::BANK_CARD);
        bank_card_by_url(&self.client, &api, access_token, img_url, mode).await
    }

    pub async fn bank_card_by_file(
        &self,
        access_token: &str,
        path: impl AsRef<Path>,
        mode: RecognizeMode,
    ) -> Result<BankCard> {
        let api = self.endpoint_url(config::BANK_CARD);
        bank_card_by_file(&self.client, &api, access_token, path, mode).await
    }

    pub async fn id_card_by_url(
        &self,
        access_token: &str,
        img_url: &str,
        mode: RecognizeMode,
    ) -> Result<IdCard> {
        let api = self.endpoint_url(config::ID_CARD);
        id_card_by_url(&self.client, &api, access_token, img_url, mode).await
    }

    pub async fn id_card_by_file(
        &self,
        access_token: &str,
        path: impl AsRef<Path>,
        mode: RecognizeMode,
    ) -> Result<IdCard> {
        let api = self.endpoint_url(config::ID_CARD);
        id_card_by_file(&self.client, &api, access_token, path, mode).await
    }

    pub async fn driver_license_by_url(
        &self,
        access_token: &str,
        img_url: &str,
    ) -> Result<DriverLicense> {
        let api = self.endpoint_url(config::DRIVER_LICENSE);
        driver_license_by_url(&self.client, &api, access_token, img_url).await
    }

    pub async fn driver_license_by_file(
        &self,
        access_token: &str,
        path: impl AsRef<Path>,
    ) -> Result<DriverLicense> {
        let api = self.endpoint_url(config::DRIVER_LICENSE);
        driver_license_by_file(&self.client, &api, access_token, path).await
    }

    pub async fn vehicle_license_by_url(
        &self,
        access_token: &str,
        img_url: &str,
    ) -> Result<VehicleLicense> {
        let api = self.endpoint_url(config::VEHICLE_LICENSE);
        vehicle_license_by_url(&self.client, &api, access_token, img_url).await
    }

    pub async fn vehicle_license_by_file(
        &self,
        access_token: &str,
        path: impl AsRef<Path>,
    ) -> Result<VehicleLicense> {
        let api = self.endpoint_url(config::VEHICLE_LICENSE);
        vehicle_license_by_file(&self.client, &api, access_token, path).await
    }
}
