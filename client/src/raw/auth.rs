use edubridge_shared::account::handle::{LoginDescriptor, RegisterDescriptor, SendOtpDescriptor};
use reqwest::{Method, RequestBuilder, Response};

pub struct Login {
    pub email: String,
    pub password: String,
}

#[async_trait::async_trait]
impl super::Request for Login {
    /// Bearer token.
    type Output = String;
    const METHOD: Method = Method::POST;

    fn url_suffix(&self) -> String {
        "/auth/login".to_string()
    }

    fn make_req(&self, req: RequestBuilder) -> crate::Result<RequestBuilder> {
        Ok(req.json(&LoginDescriptor {
            email: self.email.clone(),
            password: self.password.clone(),
        }))
    }

    async fn parse_res(&mut self, response: Response) -> crate::Result<Self::Output> {
        // The backend has answered both `{ "token": ... }` and a bare
        // string over its revisions; accept either shape.
        let text = response.text().await?;
        if let Ok(value) = serde_json::from_str::<serde_json::Value>(&text) {
            if let Some(token) = value.get("token").and_then(|token| token.as_str()) {
                return Ok(token.to_string());
            }
            if let Some(token) = value.as_str() {
                return Ok(token.to_string());
            }
        }
        Ok(text)
    }
}

pub struct Register {
    pub descriptor: RegisterDescriptor,
}

#[async_trait::async_trait]
impl super::Request for Register {
    type Output = ();
    const METHOD: Method = Method::POST;

    fn url_suffix(&self) -> String {
        "/auth/register".to_string()
    }

    fn make_req(&self, req: RequestBuilder) -> crate::Result<RequestBuilder> {
        Ok(req.json(&self.descriptor))
    }

    async fn parse_res(&mut self, _response: Response) -> crate::Result<Self::Output> {
        Ok(())
    }
}

pub struct SendOtp {
    pub email: String,
}

#[async_trait::async_trait]
impl super::Request for SendOtp {
    type Output = ();
    const METHOD: Method = Method::POST;

    fn url_suffix(&self) -> String {
        "/auth/send-otp".to_string()
    }

    fn make_req(&self, req: RequestBuilder) -> crate::Result<RequestBuilder> {
        Ok(req.json(&SendOtpDescriptor {
            email: self.email.clone(),
        }))
    }

    async fn parse_res(&mut self, _response: Response) -> crate::Result<Self::Output> {
        Ok(())
    }
}
