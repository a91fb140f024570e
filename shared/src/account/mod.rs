pub mod handle;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role of a portal account. Everything that is not an admin is a student.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    #[default]
    Student,
    Admin,
}

/// A registered user as listed in the admin users table.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    /// The only id of this user.
    pub id: u64,
    pub name: String,
    pub email: String,
    pub role: Role,
    /// Whether an admin has blocked this account.
    pub blocked: bool,
}

/// Profile of the logged-in user.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub profile_pic_url: Option<String>,
}

/// One entry of a user's download history.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DownloadRecord {
    pub id: u64,
    pub material_id: u64,
    pub title: String,
    pub downloaded_at: DateTime<Utc>,
}
