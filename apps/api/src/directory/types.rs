use serde::Deserialize;
use serde_json::Value;

/// Envelope returned by the catalog `items` endpoint.
#[derive(Debug, Deserialize)]
pub struct CatalogResponse {
    #[serde(default)]
    pub meta: Value,
    #[serde(default)]
    pub result: Option<CatalogResult>,
}

impl CatalogResponse {
    pub fn status_code(&self) -> Option<i64> {
        self.meta.get("code").and_then(Value::as_i64)
    }
}

#[derive(Debug, Deserialize)]
pub struct CatalogResult {
    #[serde(default)]
    pub items: Vec<DirectoryItem>,
}

/// A single place as returned by the directory. Every field is optional
/// upstream, so normalization decides what blank means.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DirectoryItem {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub address_name: Option<String>,
    #[serde(default)]
    pub contact_groups: Option<Vec<ContactGroup>>,
    #[serde(default)]
    pub point: Option<Point>,
    #[serde(default)]
    pub rubrics: Option<Vec<Rubric>>,
    #[serde(default)]
    pub schedule: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactGroup {
    #[serde(default)]
    pub contacts: Vec<Contact>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Contact {
    #[serde(rename = "type", default)]
    pub contact_type: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Point {
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Rubric {
    #[serde(default)]
    pub name: Option<String>,
}
