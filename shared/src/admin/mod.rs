pub mod handle;

use serde::{Deserialize, Serialize};

/// Counters shown on the admin overview tab.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct PortalStats {
    pub total_users: u64,
    pub total_materials: u64,
    pub pending_materials: u64,
    pub total_posts: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TopContributor {
    pub name: String,
    pub upload_count: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TrendingMaterial {
    pub title: String,
    pub subject: String,
    pub download_count: u64,
}
