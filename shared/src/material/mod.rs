pub mod handle;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of a study material. Wire name is `type`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MaterialKind {
    Note,
    Pyq,
    Project,
}

impl MaterialKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MaterialKind::Note => "NOTE",
            MaterialKind::Pyq => "PYQ",
            MaterialKind::Project => "PROJECT",
        }
    }
}

/// A study material as served by the backend. Clients never mutate one
/// except through the delete and save-toggle endpoints.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    /// The only id of this material.
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub subject: String,
    #[serde(default)]
    pub semester: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(rename = "type")]
    pub kind: MaterialKind,
    /// Display name of the uploading user.
    pub uploaded_by: String,
    pub upload_date: DateTime<Utc>,
    /// Where the stored file can be fetched from.
    pub file_url: String,
    #[serde(default)]
    pub download_count: Option<u64>,
}
