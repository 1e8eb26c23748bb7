#![allow(dead_code)]

use std::collections::HashMap;
use std::path::PathBuf;

use serde_json::json;
use tempfile::TempDir;
use wiremock::{Match, Request};

pub const ACCESS_TOKEN: &str = "mock-access-token";

/// Fake JPEG payload; the mock server never decodes it.
pub const IMAGE_BYTES: &[u8] = b"\xFF\xD8\xFF\xE0fake-card-image";

/// Write [`IMAGE_BYTES`] to `card.jpg` inside a fresh temp dir. Keep the
/// returned dir alive for as long as the path is used.
pub fn image_fixture() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("card.jpg");
    std::fs::write(&path, IMAGE_BYTES).expect("Failed to write image fixture");
    (dir, path)
}

pub fn media_url(server_uri: &str) -> String {
    format!("{server_uri}/mediaurl")
}

/// Matches a urlencoded body containing every `required` field with the given
/// value and none of the `absent` fields.
pub struct FormFields {
    required: Vec<(&'static str, String)>,
    absent: Vec<&'static str>,
}

impl FormFields {
    pub fn new() -> Self {
        Self {
            required: Vec::new(),
            absent: Vec::new(),
        }
    }

    pub fn with(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.required.push((name, value.into()));
        self
    }

    pub fn without(mut self, name: &'static str) -> Self {
        self.absent.push(name);
        self
    }
}

impl Match for FormFields {
    fn matches(&self, request: &Request) -> bool {
        let is_form = request
            .headers
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.starts_with("application/x-www-form-urlencoded"));
        if !is_form {
            return false;
        }

        let fields: HashMap<String, String> = url::form_urlencoded::parse(&request.body)
            .into_owned()
            .collect();

        self.required
            .iter()
            .all(|(name, value)| fields.get(*name) == Some(value))
            && self.absent.iter().all(|name| !fields.contains_key(*name))
    }
}

/// Matches a multipart body carrying the given text fields, an `img` file
/// part with [`IMAGE_BYTES`], and none of the `absent` fields.
pub struct MultipartFields {
    required: Vec<(&'static str, String)>,
    absent: Vec<&'static str>,
    file_name: &'static str,
}

impl MultipartFields {
    pub fn new(file_name: &'static str) -> Self {
        Self {
            required: Vec::new(),
            absent: Vec::new(),
            file_name,
        }
    }

    pub fn with(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.required.push((name, value.into()));
        self
    }

    pub fn without(mut self, name: &'static str) -> Self {
        self.absent.push(name);
        self
    }
}

impl Match for MultipartFields {
    fn matches(&self, request: &Request) -> bool {
        let is_multipart = request
            .headers
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.starts_with("multipart/form-data; boundary="));
        if !is_multipart {
            return false;
        }

        let body = String::from_utf8_lossy(&request.body);
        let has_file = body.contains(&format!(
            "name=\"img\"; filename=\"{}\"",
            self.file_name
        )) && request
            .body
            .windows(IMAGE_BYTES.len())
            .any(|window| window == IMAGE_BYTES);

        has_file
            && self
                .required
                .iter()
                .all(|(name, value)| body.contains(&format!("name=\"{name}\"\r\n\r\n{value}\r\n")))
            && self
                .absent
                .iter()
                .all(|name| !body.contains(&format!("name=\"{name}\"")))
    }
}

pub fn bank_card_body() -> serde_json::Value {
    json!({
        "errcode": 0,
        "errmsg": "ok",
        "id": "622213XXXXXXXXX"
    })
}

pub fn id_card_body() -> serde_json::Value {
    json!({
        "errcode": 0,
        "errmsg": "ok",
        "type": "Front",
        "id": "44XXXXXXXXXXXXXXX1"
    })
}

pub fn driver_license_body() -> serde_json::Value {
    json!({
        "errcode": 0,
        "errmsg": "ok",
        "id_num": "660601xxxxxxxx1234",
        "name": "张三",
        "sex": "男",
        "nationality": "中国",
        "address": "广东省东莞市xxxxx号",
        "birth_date": "1990-12-21",
        "issue_date": "2012-12-21",
        "car_class": "C1",
        "valid_from": "2018-07-06",
        "valid_to": "2020-07-01",
        "official_seal": "xx市公安局公安交通管理局"
    })
}

/// Vehicle replies omit `errcode`/`errmsg` entirely on success.
pub fn vehicle_license_body() -> serde_json::Value {
    json!({
        "vhicle_type": "小型普通客车",
        "owner": "东莞市xxxxx机械厂",
        "addr": "广东省东莞市xxxxx号",
        "use_character": "非营运",
        "model": "江淮牌HFCxxxxxxx",
        "vin": "LJ166xxxxxxxx51",
        "engine_num": "J3xxxxx3",
        "register_date": "2018-07-06",
        "issue_date": "2018-07-01",
        "plate_num_b": "粤xxxxx",
        "record": "441xxxxxx3",
        "passengers_num": "7人",
        "total_quality": "2700kg",
        "prepare_quality": "1995kg"
    })
}
