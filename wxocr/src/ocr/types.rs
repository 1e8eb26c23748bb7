use serde::{Deserialize, Serialize};

/// Hint telling the backend whether the image is a photograph or a flatbed
/// scan. Sent as the `type` field for bank-card and ID-card requests.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum RecognizeMode {
    #[default]
    Photo,
    Scan,
}

impl RecognizeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Photo => "photo",
            Self::Scan => "scan",
        }
    }
}

impl std::fmt::Display for RecognizeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RecognizeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "photo" => Ok(Self::Photo),
            "scan" => Ok(Self::Scan),
            _ => Err(format!("Unknown recognize mode: {s}")),
        }
    }
}

/// `errcode`/`errmsg` pair carried by every response. Absent fields mean
/// success.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiStatus {
    #[serde(default)]
    pub errcode: i64,
    #[serde(default)]
    pub errmsg: String,
}

impl ApiStatus {
    pub fn is_ok(&self) -> bool {
        self.errcode == 0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BankCard {
    #[serde(rename = "id")]
    pub number: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum IdCardSide {
    Front,
    Back,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IdCard {
    #[serde(rename = "type")]
    pub side: IdCardSide,
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DriverLicense {
    pub id_num: String,
    pub name: String,
    pub sex: String,
    pub nationality: String,
    pub address: String,
    pub birth_date: String,
    pub issue_date: String,
    pub car_class: String,
    pub valid_from: String,
    pub valid_to: String,
    pub official_seal: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VehicleLicense {
    // The backend spells this key without the "e".
    #[serde(rename = "vhicle_type")]
    pub vehicle_type: String,
    pub owner: String,
    #[serde(rename = "addr")]
    pub address: String,
    pub use_character: String,
    pub model: String,
    pub vin: String,
    pub engine_num: String,
    pub register_date: String,
    pub issue_date: String,
    #[serde(rename = "plate_num_b")]
    pub plate_num: String,
    pub record: String,
    pub passengers_num: String,
    pub total_quality: String,
    pub prepare_quality: String,
}
