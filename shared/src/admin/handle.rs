use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateAdminDescriptor {
    pub name: String,
    pub email: String,
    pub password: String,
}
