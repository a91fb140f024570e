use serde::{Deserialize, Serialize};

use super::MaterialKind;

/// Free-text and dropdown filters of the material search endpoint,
/// sent as query parameters.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SearchDescriptor {
    pub query: String,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<MaterialKind>,
}

impl SearchDescriptor {
    /// Whether any filter is set at all. An empty descriptor means the
    /// plain listing endpoint should be used instead of search.
    pub fn is_empty(&self) -> bool {
        self.query.is_empty() && self.subject.is_none() && self.kind.is_none()
    }
}

/// Text fields accompanying the file part of a multipart upload.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UploadDescriptor {
    pub title: String,
    pub description: String,
    pub subject: String,
    #[serde(default)]
    pub semester: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(rename = "type")]
    pub kind: MaterialKind,
}

/// A star rating with a comment. Ratings run from 1 to 5.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDescriptor {
    pub rating: u8,
    pub comment: String,
}
