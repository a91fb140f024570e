use std::sync::Mutex;

use edubridge_shared::account::handle::{
    ChangePasswordDescriptor, EditProfileDescriptor, ForgotPasswordDescriptor,
    ResetPasswordDescriptor,
};
use edubridge_shared::account::{DownloadRecord, UserProfile};
use edubridge_shared::forum::{Comment, Post};
use edubridge_shared::material::Material;
use reqwest::multipart::{Form, Part};
use reqwest::{Method, RequestBuilder, Response};

use crate::Error;

pub struct Profile;

#[async_trait::async_trait]
impl super::Request for Profile {
    type Output = UserProfile;

    fn url_suffix(&self) -> String {
        "/users/profile".to_string()
    }

    fn make_req(&self, req: RequestBuilder) -> crate::Result<RequestBuilder> {
        Ok(req)
    }

    async fn parse_res(&mut self, response: Response) -> crate::Result<Self::Output> {
        Ok(response.json().await?)
    }
}

pub struct EditProfile {
    pub descriptor: EditProfileDescriptor,
}

#[async_trait::async_trait]
impl super::Request for EditProfile {
    type Output = ();
    const METHOD: Method = Method::PUT;

    fn url_suffix(&self) -> String {
        "/users/profile".to_string()
    }

    fn make_req(&self, req: RequestBuilder) -> crate::Result<RequestBuilder> {
        Ok(req.json(&self.descriptor))
    }

    async fn parse_res(&mut self, _response: Response) -> crate::Result<Self::Output> {
        Ok(())
    }
}

pub struct ProfilePic {
    pub file: Mutex<Option<(String, bytes::Bytes)>>,
}

impl ProfilePic {
    pub fn new(file_name: String, data: bytes::Bytes) -> Self {
        Self {
            file: Mutex::new(Some((file_name, data))),
        }
    }
}

#[async_trait::async_trait]
impl super::Request for ProfilePic {
    type Output = ();
    const METHOD: Method = Method::POST;

    fn url_suffix(&self) -> String {
        "/users/profile-pic".to_string()
    }

    fn make_req(&self, req: RequestBuilder) -> crate::Result<RequestBuilder> {
        let (file_name, data) = self
            .file
            .lock()
            .unwrap()
            .take()
            .ok_or(Error::UploadFileMissing)?;
        let form = Form::new().part("file", Part::bytes(data.to_vec()).file_name(file_name));
        Ok(req.multipart(form))
    }

    async fn parse_res(&mut self, _response: Response) -> crate::Result<Self::Output> {
        Ok(())
    }
}

/// Materials the logged-in user uploaded.
pub struct Uploads;

#[async_trait::async_trait]
impl super::Request for Uploads {
    type Output = Vec<Material>;

    fn url_suffix(&self) -> String {
        "/users/uploads".to_string()
    }

    fn make_req(&self, req: RequestBuilder) -> crate::Result<RequestBuilder> {
        Ok(req)
    }

    async fn parse_res(&mut self, response: Response) -> crate::Result<Self::Output> {
        Ok(response.json().await?)
    }
}

pub struct SavedMaterials;

#[async_trait::async_trait]
impl super::Request for SavedMaterials {
    type Output = Vec<Material>;

    fn url_suffix(&self) -> String {
        "/users/saved-materials".to_string()
    }

    fn make_req(&self, req: RequestBuilder) -> crate::Result<RequestBuilder> {
        Ok(req)
    }

    async fn parse_res(&mut self, response: Response) -> crate::Result<Self::Output> {
        Ok(response.json().await?)
    }
}

/// Toggles the saved flag of a material for the logged-in user.
pub struct SaveMaterial {
    pub material: u64,
}

#[async_trait::async_trait]
impl super::Request for SaveMaterial {
    type Output = ();
    const METHOD: Method = Method::POST;

    fn url_suffix(&self) -> String {
        format!("/users/materials/{}/save", self.material)
    }

    fn make_req(&self, req: RequestBuilder) -> crate::Result<RequestBuilder> {
        Ok(req.json(&serde_json::json!({})))
    }

    async fn parse_res(&mut self, _response: Response) -> crate::Result<Self::Output> {
        Ok(())
    }
}

pub struct ActivityDownloads;

#[async_trait::async_trait]
impl super::Request for ActivityDownloads {
    type Output = Vec<DownloadRecord>;

    fn url_suffix(&self) -> String {
        "/users/activity/downloads".to_string()
    }

    fn make_req(&self, req: RequestBuilder) -> crate::Result<RequestBuilder> {
        Ok(req)
    }

    async fn parse_res(&mut self, response: Response) -> crate::Result<Self::Output> {
        Ok(response.json().await?)
    }
}

pub struct ActivityPosts;

#[async_trait::async_trait]
impl super::Request for ActivityPosts {
    type Output = Vec<Post>;

    fn url_suffix(&self) -> String {
        "/users/activity/posts".to_string()
    }

    fn make_req(&self, req: RequestBuilder) -> crate::Result<RequestBuilder> {
        Ok(req)
    }

    async fn parse_res(&mut self, response: Response) -> crate::Result<Self::Output> {
        Ok(response.json().await?)
    }
}

pub struct ActivityComments;

#[async_trait::async_trait]
impl super::Request for ActivityComments {
    type Output = Vec<Comment>;

    fn url_suffix(&self) -> String {
        "/users/activity/comments".to_string()
    }

    fn make_req(&self, req: RequestBuilder) -> crate::Result<RequestBuilder> {
        Ok(req)
    }

    async fn parse_res(&mut self, response: Response) -> crate::Result<Self::Output> {
        Ok(response.json().await?)
    }
}

pub struct SavedPosts;

#[async_trait::async_trait]
impl super::Request for SavedPosts {
    type Output = Vec<Post>;

    fn url_suffix(&self) -> String {
        "/users/saved-posts".to_string()
    }

    fn make_req(&self, req: RequestBuilder) -> crate::Result<RequestBuilder> {
        Ok(req)
    }

    async fn parse_res(&mut self, response: Response) -> crate::Result<Self::Output> {
        Ok(response.json().await?)
    }
}

pub struct ChangePassword {
    pub descriptor: ChangePasswordDescriptor,
}

#[async_trait::async_trait]
impl super::Request for ChangePassword {
    type Output = ();
    const METHOD: Method = Method::POST;

    fn url_suffix(&self) -> String {
        "/users/change-password".to_string()
    }

    fn make_req(&self, req: RequestBuilder) -> crate::Result<RequestBuilder> {
        Ok(req.json(&self.descriptor))
    }

    async fn parse_res(&mut self, _response: Response) -> crate::Result<Self::Output> {
        Ok(())
    }
}

pub struct ForgotPassword {
    pub email: String,
}

#[async_trait::async_trait]
impl super::Request for ForgotPassword {
    type Output = ();
    const METHOD: Method = Method::POST;

    fn url_suffix(&self) -> String {
        "/users/forgot-password".to_string()
    }

    fn make_req(&self, req: RequestBuilder) -> crate::Result<RequestBuilder> {
        Ok(req.json(&ForgotPasswordDescriptor {
            email: self.email.clone(),
        }))
    }

    async fn parse_res(&mut self, _response: Response) -> crate::Result<Self::Output> {
        Ok(())
    }
}

pub struct ResetPassword {
    pub descriptor: ResetPasswordDescriptor,
}

#[async_trait::async_trait]
impl super::Request for ResetPassword {
    type Output = ();
    const METHOD: Method = Method::POST;

    fn url_suffix(&self) -> String {
        "/users/reset-password".to_string()
    }

    fn make_req(&self, req: RequestBuilder) -> crate::Result<RequestBuilder> {
        Ok(req.json(&self.descriptor))
    }

    async fn parse_res(&mut self, _response: Response) -> crate::Result<Self::Output> {
        Ok(())
    }
}
