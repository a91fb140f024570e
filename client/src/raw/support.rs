use edubridge_shared::support::handle::CreateTicketDescriptor;
use edubridge_shared::support::SupportTicket;
use reqwest::{Method, RequestBuilder, Response};

/// Tickets raised by the logged-in user.
pub struct MyTickets;

#[async_trait::async_trait]
impl super::Request for MyTickets {
    type Output = Vec<SupportTicket>;

    fn url_suffix(&self) -> String {
        "/support/my-tickets".to_string()
    }

    fn make_req(&self, req: RequestBuilder) -> crate::Result<RequestBuilder> {
        Ok(req)
    }

    async fn parse_res(&mut self, response: Response) -> crate::Result<Self::Output> {
        Ok(response.json().await?)
    }
}

pub struct Create {
    pub descriptor: CreateTicketDescriptor,
}

#[async_trait::async_trait]
impl super::Request for Create {
    type Output = ();
    const METHOD: Method = Method::POST;

    fn url_suffix(&self) -> String {
        "/support".to_string()
    }

    fn make_req(&self, req: RequestBuilder) -> crate::Result<RequestBuilder> {
        Ok(req.json(&self.descriptor))
    }

    async fn parse_res(&mut self, _response: Response) -> crate::Result<Self::Output> {
        Ok(())
    }
}
