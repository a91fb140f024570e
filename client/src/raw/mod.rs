pub mod admin;
pub mod auth;
pub mod forum;
pub mod material;
pub mod support;
pub mod user;

use crate::{Context, Error};

/// A single backend endpoint: its method and URL suffix, how the request
/// is built and how a successful response is parsed.
///
/// The suffix is a method rather than a constant because part of this
/// surface carries path parameters.
#[async_trait::async_trait]
pub trait Request {
    type Output;

    const METHOD: reqwest::Method = reqwest::Method::GET;

    fn url_suffix(&self) -> String;

    fn make_req(&self, req: reqwest::RequestBuilder) -> crate::Result<reqwest::RequestBuilder>;

    async fn parse_res(&mut self, response: reqwest::Response) -> crate::Result<Self::Output>;
}

/// Calls a [`Request`] and returns its output.
///
/// The bearer token is attached here whenever the store holds one, so
/// individual endpoints never deal with auth. Non-2xx responses become
/// [`Error::Status`], carrying the server's `message` body field when it
/// sent one.
pub async fn call<T: Request>(mut req: T, cx: &Context) -> crate::Result<T::Output> {
    let mut builder = cx
        .http
        .request(T::METHOD, format!("{}{}", cx.base_url, req.url_suffix()));

    if let Some(token) = cx.store.token() {
        builder = builder.bearer_auth(token);
    }

    let response = req.make_req(builder)?.send().await?;
    let status = response.status();

    if !status.is_success() {
        #[derive(serde::Deserialize)]
        struct ThrownError {
            message: String,
        }

        let message = response
            .json::<ThrownError>()
            .await
            .ok()
            .map(|thrown| thrown.message);

        return Err(Error::Status { status, message });
    }

    req.parse_res(response).await
}
