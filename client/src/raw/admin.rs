use edubridge_shared::account::UserSummary;
use edubridge_shared::admin::handle::CreateAdminDescriptor;
use edubridge_shared::admin::{PortalStats, TopContributor, TrendingMaterial};
use edubridge_shared::support::handle::ReplyTicketDescriptor;
use edubridge_shared::support::SupportTicket;
use reqwest::{Method, RequestBuilder, Response};

pub struct Stats;

#[async_trait::async_trait]
impl super::Request for Stats {
    type Output = PortalStats;

    fn url_suffix(&self) -> String {
        "/admin/stats".to_string()
    }

    fn make_req(&self, req: RequestBuilder) -> crate::Result<RequestBuilder> {
        Ok(req)
    }

    async fn parse_res(&mut self, response: Response) -> crate::Result<Self::Output> {
        Ok(response.json().await?)
    }
}

pub struct TopContributors;

#[async_trait::async_trait]
impl super::Request for TopContributors {
    type Output = Vec<TopContributor>;

    fn url_suffix(&self) -> String {
        "/admin/stats/top-contributors".to_string()
    }

    fn make_req(&self, req: RequestBuilder) -> crate::Result<RequestBuilder> {
        Ok(req)
    }

    async fn parse_res(&mut self, response: Response) -> crate::Result<Self::Output> {
        Ok(response.json().await?)
    }
}

pub struct TrendingMaterials;

#[async_trait::async_trait]
impl super::Request for TrendingMaterials {
    type Output = Vec<TrendingMaterial>;

    fn url_suffix(&self) -> String {
        "/admin/stats/trending-materials".to_string()
    }

    fn make_req(&self, req: RequestBuilder) -> crate::Result<RequestBuilder> {
        Ok(req)
    }

    async fn parse_res(&mut self, response: Response) -> crate::Result<Self::Output> {
        Ok(response.json().await?)
    }
}

pub struct Users;

#[async_trait::async_trait]
impl super::Request for Users {
    type Output = Vec<UserSummary>;

    fn url_suffix(&self) -> String {
        "/admin/users".to_string()
    }

    fn make_req(&self, req: RequestBuilder) -> crate::Result<RequestBuilder> {
        Ok(req)
    }

    async fn parse_res(&mut self, response: Response) -> crate::Result<Self::Output> {
        Ok(response.json().await?)
    }
}

/// Flips a user between blocked and active.
pub struct ToggleBlock {
    pub user: u64,
}

#[async_trait::async_trait]
impl super::Request for ToggleBlock {
    type Output = ();
    const METHOD: Method = Method::PUT;

    fn url_suffix(&self) -> String {
        format!("/admin/users/{}/toggle-block", self.user)
    }

    fn make_req(&self, req: RequestBuilder) -> crate::Result<RequestBuilder> {
        Ok(req.json(&serde_json::json!({})))
    }

    async fn parse_res(&mut self, _response: Response) -> crate::Result<Self::Output> {
        Ok(())
    }
}

pub struct CreateAdmin {
    pub descriptor: CreateAdminDescriptor,
}

#[async_trait::async_trait]
impl super::Request for CreateAdmin {
    type Output = ();
    const METHOD: Method = Method::POST;

    fn url_suffix(&self) -> String {
        "/admin/create-admin".to_string()
    }

    fn make_req(&self, req: RequestBuilder) -> crate::Result<RequestBuilder> {
        Ok(req.json(&self.descriptor))
    }

    async fn parse_res(&mut self, _response: Response) -> crate::Result<Self::Output> {
        Ok(())
    }
}

/// All support tickets, admin side.
pub struct SupportTickets;

#[async_trait::async_trait]
impl super::Request for SupportTickets {
    type Output = Vec<SupportTicket>;

    fn url_suffix(&self) -> String {
        "/admin/support".to_string()
    }

    fn make_req(&self, req: RequestBuilder) -> crate::Result<RequestBuilder> {
        Ok(req)
    }

    async fn parse_res(&mut self, response: Response) -> crate::Result<Self::Output> {
        Ok(response.json().await?)
    }
}

/// Appends the admin reply to a ticket, resolving it.
pub struct Reply {
    pub ticket: u64,
    pub descriptor: ReplyTicketDescriptor,
}

#[async_trait::async_trait]
impl super::Request for Reply {
    type Output = ();
    const METHOD: Method = Method::PUT;

    fn url_suffix(&self) -> String {
        format!("/admin/support/{}/reply", self.ticket)
    }

    fn make_req(&self, req: RequestBuilder) -> crate::Result<RequestBuilder> {
        Ok(req.json(&self.descriptor))
    }

    async fn parse_res(&mut self, _response: Response) -> crate::Result<Self::Output> {
        Ok(())
    }
}
