use std::path::PathBuf;

use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wxocr::config::Config;
use wxocr::{ImageSource, OcrClient, RecognizeMode};

#[derive(Parser)]
#[command(name = "wxocr")]
#[command(about = "Recognize bank cards, ID cards and licenses with the WeChat OCR API")]
struct Args {
    /// Access token; falls back to WXOCR_ACCESS_TOKEN
    #[arg(long)]
    access_token: Option<String>,

    /// API host; falls back to WXOCR_BASE_URL
    #[arg(long)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Args)]
#[group(required = true, multiple = false)]
struct Image {
    /// Remote image the API fetches itself
    #[arg(long)]
    url: Option<String>,

    /// Local image to upload
    #[arg(long)]
    file: Option<PathBuf>,
}

impl Image {
    fn source(&self) -> anyhow::Result<ImageSource<'_>> {
        match (&self.url, &self.file) {
            (Some(url), _) => Ok(ImageSource::Url(url)),
            (None, Some(file)) => Ok(ImageSource::File(file)),
            (None, None) => Err(anyhow!("either --url or --file is required")),
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Recognize a bank card number
    BankCard {
        #[command(flatten)]
        image: Image,
        #[arg(long, default_value = "photo")]
        mode: RecognizeMode,
    },
    /// Recognize the front or back of an ID card
    IdCard {
        #[command(flatten)]
        image: Image,
        #[arg(long, default_value = "photo")]
        mode: RecognizeMode,
    },
    /// Recognize a driver's license
    DriverLicense {
        #[command(flatten)]
        image: Image,
    },
    /// Recognize a vehicle license
    VehicleLicense {
        #[command(flatten)]
        image: Image,
    },
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wxocr=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = Config::from_env();
    if let Some(base_url) = args.base_url {
        config.ocr.base_url = base_url;
    }

    let access_token = args
        .access_token
        .or_else(|| config.ocr.access_token.clone())
        .ok_or_else(|| anyhow!("no access token: pass --access-token or set WXOCR_ACCESS_TOKEN"))?;

    tracing::debug!("Using OCR API at {}", config.ocr.base_url);
    let client = OcrClient::from_config(&config.ocr).context("Failed to create OCR client")?;

    match args.command {
        Command::BankCard { image, mode } => {
            let card = match image.source()? {
                ImageSource::Url(url) => client.bank_card_by_url(&access_token, url, mode).await?,
                ImageSource::File(path) => {
                    client.bank_card_by_file(&access_token, path, mode).await?
                }
            };
            print_json(&card)
        }
        Command::IdCard { image, mode } => {
            let card = match image.source()? {
                ImageSource::Url(url) => client.id_card_by_url(&access_token, url, mode).await?,
                ImageSource::File(path) => client.id_card_by_file(&access_token, path, mode).await?,
            };
            print_json(&card)
        }
        Command::DriverLicense { image } => {
            let license = match image.source()? {
                ImageSource::Url(url) => client.driver_license_by_url(&access_token, url).await?,
                ImageSource::File(path) => {
                    client.driver_license_by_file(&access_token, path).await?
                }
            };
            print_json(&license)
        }
        Command::VehicleLicense { image } => {
            let license = match image.source()? {
                ImageSource::Url(url) => client.vehicle_license_by_url(&access_token, url).await?,
                ImageSource::File(path) => {
                    client.vehicle_license_by_file(&access_token, path).await?
                }
            };
            print_json(&license)
        }
    }
}
