use std::path::Path;
use std::sync::Mutex;

use edubridge_shared::material::handle::{ReviewDescriptor, SearchDescriptor, UploadDescriptor};
use edubridge_shared::material::Material;
use reqwest::multipart::{Form, Part};
use reqwest::{Method, RequestBuilder, Response};

use crate::Error;

pub struct All;

#[async_trait::async_trait]
impl super::Request for All {
    type Output = Vec<Material>;

    fn url_suffix(&self) -> String {
        "/materials".to_string()
    }

    fn make_req(&self, req: RequestBuilder) -> crate::Result<RequestBuilder> {
        Ok(req)
    }

    async fn parse_res(&mut self, response: Response) -> crate::Result<Self::Output> {
        Ok(response.json().await?)
    }
}

pub struct Search {
    pub filters: SearchDescriptor,
}

#[async_trait::async_trait]
impl super::Request for Search {
    type Output = Vec<Material>;

    fn url_suffix(&self) -> String {
        "/materials/search".to_string()
    }

    fn make_req(&self, req: RequestBuilder) -> crate::Result<RequestBuilder> {
        let mut params = vec![("query", self.filters.query.clone())];
        if let Some(subject) = &self.filters.subject {
            params.push(("subject", subject.clone()));
        }
        if let Some(kind) = self.filters.kind {
            params.push(("type", kind.as_str().to_string()));
        }
        Ok(req.query(&params))
    }

    async fn parse_res(&mut self, response: Response) -> crate::Result<Self::Output> {
        Ok(response.json().await?)
    }
}

pub struct Subjects;

#[async_trait::async_trait]
impl super::Request for Subjects {
    type Output = Vec<String>;

    fn url_suffix(&self) -> String {
        "/materials/subjects".to_string()
    }

    fn make_req(&self, req: RequestBuilder) -> crate::Result<RequestBuilder> {
        Ok(req)
    }

    async fn parse_res(&mut self, response: Response) -> crate::Result<Self::Output> {
        Ok(response.json().await?)
    }
}

/// Materials awaiting admin approval.
pub struct Pending;

#[async_trait::async_trait]
impl super::Request for Pending {
    type Output = Vec<Material>;

    fn url_suffix(&self) -> String {
        "/materials/pending".to_string()
    }

    fn make_req(&self, req: RequestBuilder) -> crate::Result<RequestBuilder> {
        Ok(req)
    }

    async fn parse_res(&mut self, response: Response) -> crate::Result<Self::Output> {
        Ok(response.json().await?)
    }
}

/// Multipart upload of a material file with its form fields. The file
/// body is taken out on first use; a second call on the same value fails.
pub struct Upload {
    pub descriptor: UploadDescriptor,
    pub file: Mutex<Option<(String, bytes::Bytes)>>,
}

impl Upload {
    pub fn new(descriptor: UploadDescriptor, file_name: String, data: bytes::Bytes) -> Self {
        Self {
            descriptor,
            file: Mutex::new(Some((file_name, data))),
        }
    }

    /// Builds an upload from a file on disk.
    pub async fn from_file(
        descriptor: UploadDescriptor,
        path: impl AsRef<Path>,
    ) -> crate::Result<Self> {
        let path = path.as_ref();
        let data = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        Ok(Self::new(descriptor, file_name, data.into()))
    }
}

#[async_trait::async_trait]
impl super::Request for Upload {
    type Output = ();
    const METHOD: Method = Method::POST;

    fn url_suffix(&self) -> String {
        "/materials/upload".to_string()
    }

    fn make_req(&self, req: RequestBuilder) -> crate::Result<RequestBuilder> {
        let (file_name, data) = self
            .file
            .lock()
            .unwrap()
            .take()
            .ok_or(Error::UploadFileMissing)?;

        let mut form = Form::new()
            .text("title", self.descriptor.title.clone())
            .text("description", self.descriptor.description.clone())
            .text("subject", self.descriptor.subject.clone())
            .text("type", self.descriptor.kind.as_str());
        if let Some(semester) = &self.descriptor.semester {
            form = form.text("semester", semester.clone());
        }
        if let Some(year) = &self.descriptor.year {
            form = form.text("year", year.clone());
        }
        form = form.part("file", Part::bytes(data.to_vec()).file_name(file_name));

        Ok(req.multipart(form))
    }

    async fn parse_res(&mut self, _response: Response) -> crate::Result<Self::Output> {
        Ok(())
    }
}

pub struct Approve {
    pub material: u64,
}

#[async_trait::async_trait]
impl super::Request for Approve {
    type Output = ();
    const METHOD: Method = Method::PUT;

    fn url_suffix(&self) -> String {
        format!("/materials/{}/approve", self.material)
    }

    fn make_req(&self, req: RequestBuilder) -> crate::Result<RequestBuilder> {
        Ok(req.json(&serde_json::json!({})))
    }

    async fn parse_res(&mut self, _response: Response) -> crate::Result<Self::Output> {
        Ok(())
    }
}

pub struct Delete {
    pub material: u64,
}

#[async_trait::async_trait]
impl super::Request for Delete {
    type Output = ();
    const METHOD: Method = Method::DELETE;

    fn url_suffix(&self) -> String {
        format!("/materials/{}", self.material)
    }

    fn make_req(&self, req: RequestBuilder) -> crate::Result<RequestBuilder> {
        Ok(req)
    }

    async fn parse_res(&mut self, _response: Response) -> crate::Result<Self::Output> {
        Ok(())
    }
}

pub struct Review {
    pub material: u64,
    pub descriptor: ReviewDescriptor,
}

#[async_trait::async_trait]
impl super::Request for Review {
    type Output = ();
    const METHOD: Method = Method::POST;

    fn url_suffix(&self) -> String {
        format!("/materials/{}/reviews", self.material)
    }

    fn make_req(&self, req: RequestBuilder) -> crate::Result<RequestBuilder> {
        Ok(req.json(&self.descriptor))
    }

    async fn parse_res(&mut self, _response: Response) -> crate::Result<Self::Output> {
        Ok(())
    }
}
