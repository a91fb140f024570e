use serde::{Deserialize, Serialize};

use super::Role;

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginDescriptor {
    pub email: String,
    pub password: String,
}

/// Completes the second signup step. `otp` is the code mailed to the
/// address by the send-otp endpoint.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterDescriptor {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub otp: String,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendOtpDescriptor {
    pub email: String,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordDescriptor {
    pub old_password: String,
    pub new_password: String,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForgotPasswordDescriptor {
    pub email: String,
}

/// Completes the forgot-password sub-flow with the mailed code.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordDescriptor {
    pub email: String,
    pub otp: String,
    pub new_password: String,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditProfileDescriptor {
    pub name: String,
    #[serde(default)]
    pub bio: Option<String>,
}
